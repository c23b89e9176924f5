//! Blockchain client implementations.
//!
//! Contains specific implementations for the two protocols queried:
//! - EVM client for the Ethereum-compatible JSON-RPC
//! - Substrate client for runtime storage

mod evm {
	pub mod client;
}
mod substrate {
	pub mod client;
}

pub use evm::client::{EvmClient, EvmClientTrait};
pub use substrate::client::{extract_free_balance, SubstrateClient};
