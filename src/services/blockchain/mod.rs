//! Blockchain client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for querying the
//! Substrate and EVM sides of a Moonbeam-style network. Includes:
//!
//! - Balance query trait shared by both clients
//! - Chain specific clients
//! - Network transport implementations
//! - Error handling for blockchain operations
//! - Client pool for creating clients on first use

mod client;
mod clients;
mod error;
mod pool;
mod transports;

pub use client::BalanceClient;
pub use clients::{extract_free_balance, EvmClient, EvmClientTrait, SubstrateClient};
pub use error::BlockChainError;
pub use pool::{ClientPool, ClientPoolTrait, ClientType};
pub use transports::{
	AlloyTransportClient, BlockchainTransport, SubstrateStorageTransport, SubxtTransportClient,
};
