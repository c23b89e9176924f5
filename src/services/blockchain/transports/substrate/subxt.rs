//! Subxt transport implementation for Substrate storage queries.
//!
//! Wraps a subxt `OnlineClient`, which downloads the runtime metadata on
//! connect and uses it to encode storage keys and decode stored values.

use subxt::{dynamic::Value as ScaleValue, OnlineClient, SubstrateConfig};
use tracing::instrument;

use crate::services::blockchain::{transports::SubstrateStorageTransport, BlockChainError};

/// A client for querying storage of Substrate-based nodes over websocket
#[derive(Clone)]
pub struct SubxtTransportClient {
	/// The underlying subxt client
	client: OnlineClient<SubstrateConfig>,
	/// Endpoint the client is connected to
	url: String,
}

impl SubxtTransportClient {
	/// Connects to a Substrate node
	///
	/// `wss://` endpoints are opened with TLS checks; plain `ws://` endpoints
	/// are allowed for local development nodes.
	///
	/// # Arguments
	/// * `rpc_url` - Websocket URL of the node
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - A connected client or connection error
	pub async fn new(rpc_url: &str) -> Result<Self, BlockChainError> {
		let client = if rpc_url.starts_with("wss://") {
			OnlineClient::<SubstrateConfig>::from_url(rpc_url).await
		} else {
			OnlineClient::<SubstrateConfig>::from_insecure_url(rpc_url).await
		}
		.map_err(|e| {
			BlockChainError::connection_error(format!("Failed to connect to {}: {}", rpc_url, e))
		})?;

		Ok(Self {
			client,
			url: rpc_url.to_string(),
		})
	}
}

#[async_trait::async_trait]
impl SubstrateStorageTransport for SubxtTransportClient {
	#[instrument(skip(self, keys), fields(url = %self.url))]
	async fn fetch_storage(
		&self,
		pallet: &str,
		entry: &str,
		keys: Vec<ScaleValue>,
	) -> Result<Option<ScaleValue>, BlockChainError> {
		let query = subxt::dynamic::storage(pallet, entry, keys);

		let storage = self.client.storage().at_latest().await.map_err(|e| {
			BlockChainError::request_error(format!("Failed to get latest block: {}", e))
		})?;

		let stored = storage.fetch(&query).await.map_err(|e| {
			BlockChainError::request_error(format!(
				"Failed to fetch {}::{}: {}",
				pallet, entry, e
			))
		})?;

		match stored {
			Some(thunk) => {
				let value = thunk.to_value().map_err(|e| {
					BlockChainError::decode_error(format!(
						"Failed to decode {}::{}: {}",
						pallet, entry, e
					))
				})?;
				Ok(Some(value.remove_context()))
			}
			None => Ok(None),
		}
	}
}
