//! Alloy transport implementation for EVM blockchain interactions.
//!
//! This module provides a client implementation for interacting with EVM-compatible nodes
//! via alloy, supporting connection checks and raw JSON-RPC request functionality.

use alloy::{
	rpc::client::{ClientBuilder, RpcClient},
	transports::{RpcError, TransportErrorKind},
};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::services::blockchain::{transports::BlockchainTransport, BlockChainError};

/// A client for interacting with EVM-compatible blockchain nodes via alloy
#[derive(Clone, Debug)]
pub struct AlloyTransportClient {
	/// The underlying alloy client for RPC requests
	client: RpcClient,
	/// Endpoint the client was built for
	url: String,
}

impl AlloyTransportClient {
	/// Creates a new alloy transport client and checks that the endpoint answers
	///
	/// The endpoint is probed with `net_version` before the client is returned.
	///
	/// # Arguments
	/// * `rpc_url` - HTTP(S) URL of the JSON-RPC endpoint
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - A new client instance or connection error
	pub async fn new(rpc_url: &str) -> Result<Self, BlockChainError> {
		let url = Url::parse(rpc_url).map_err(|e| {
			BlockChainError::connection_error(format!("Invalid URL {}: {}", rpc_url, e))
		})?;

		let client = ClientBuilder::default().http(url);
		client
			.request_noparams::<String>("net_version")
			.await
			.map_err(|e| {
				BlockChainError::connection_error(format!(
					"Failed to connect to {}: {}",
					rpc_url, e
				))
			})?;

		Ok(Self {
			client,
			url: rpc_url.to_string(),
		})
	}
}

/// Maps alloy RPC errors onto the blockchain error taxonomy
fn map_rpc_error(method: &str, err: RpcError<TransportErrorKind>) -> BlockChainError {
	match err.as_error_resp() {
		Some(payload) => BlockChainError::request_error(format!(
			"{} failed with code {}: {}",
			method, payload.code, payload.message
		)),
		None => BlockChainError::connection_error(format!("{} failed: {}", method, err)),
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for AlloyTransportClient {
	/// Sends a raw JSON-RPC request to the EVM node
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method to call
	/// * `params` - Parameters to pass to the method, sent as `[]` when absent
	///
	/// # Returns
	/// * `Result<Value, BlockChainError>` - The `result` member or error
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, BlockChainError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let params: Value = params
			.map(Into::into)
			.unwrap_or_else(|| Value::Array(Vec::new()));

		tracing::debug!(method, url = %self.url, "Sending JSON-RPC request");

		self.client
			.request::<Value, Value>(method.to_string(), params)
			.await
			.map_err(|e| map_rpc_error(method, e))
	}
}
