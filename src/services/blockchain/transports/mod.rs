//! Network transport implementations for blockchain clients.
//!
//! Provides concrete implementations for the two protocols the reporter speaks:
//! - Alloy HTTP JSON-RPC transport for EVM endpoints
//! - Subxt websocket transport for Substrate storage queries

mod evm {
	pub mod alloy;
}
mod substrate {
	pub mod subxt;
}

use serde::Serialize;
use serde_json::Value;
use subxt::dynamic::Value as ScaleValue;

use crate::services::blockchain::BlockChainError;

pub use evm::alloy::AlloyTransportClient;
pub use substrate::subxt::SubxtTransportClient;

/// Base trait for JSON-RPC transport clients
#[async_trait::async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Send a raw JSON-RPC request and return the `result` member of the response
	///
	/// JSON-RPC error responses are returned as `BlockChainError::RequestError`,
	/// failures to reach the node as `BlockChainError::ConnectionError`.
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, BlockChainError>
	where
		P: Into<Value> + Send + Clone + Serialize;
}

/// Transport for typed Substrate storage lookups
#[async_trait::async_trait]
pub trait SubstrateStorageTransport: Send + Sync {
	/// Fetches a storage entry at the latest block and decodes it
	///
	/// # Arguments
	/// * `pallet` - Pallet name, e.g. `System`
	/// * `entry` - Storage entry name, e.g. `Account`
	/// * `keys` - Map keys of the entry
	///
	/// # Returns
	/// * `Result<Option<ScaleValue>, BlockChainError>` - The decoded value, or `None`
	///   if nothing is stored under the key
	async fn fetch_storage(
		&self,
		pallet: &str,
		entry: &str,
		keys: Vec<ScaleValue>,
	) -> Result<Option<ScaleValue>, BlockChainError>;
}
