//! EVM-compatible blockchain client implementation.
//!
//! This module provides functionality to interact with the Ethereum JSON-RPC
//! interface of a node, supporting balance lookups and read-only contract calls.

use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::instrument;

use crate::services::blockchain::{
	client::BalanceClient,
	transports::{AlloyTransportClient, BlockchainTransport},
	BlockChainError,
};

/// Client implementation for Ethereum Virtual Machine (EVM) compatible blockchains
///
/// Provides high-level access to EVM account data through a JSON-RPC transport.
#[derive(Clone)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	transport: T,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl EvmClient<AlloyTransportClient> {
	/// Creates a new EVM client instance
	///
	/// # Arguments
	/// * `rpc_url` - HTTP(S) URL of the JSON-RPC endpoint
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or connection error
	pub async fn new(rpc_url: &str) -> Result<Self, BlockChainError> {
		let transport = AlloyTransportClient::new(rpc_url).await?;
		Ok(Self::new_with_transport(transport))
	}
}

/// Extended functionality specific to EVM-compatible blockchains
#[async_trait]
pub trait EvmClientTrait: BalanceClient {
	/// Executes a read-only contract call at the latest block
	///
	/// # Arguments
	/// * `to` - The contract to call
	/// * `data` - Call data passed to the contract
	///
	/// # Returns
	/// * `Result<Bytes, BlockChainError>` - The bytes returned by the contract or error
	async fn call(&self, to: &Address, data: Bytes) -> Result<Bytes, BlockChainError>;
}

/// Rejects a missing or `null` JSON-RPC result
fn non_null_result(method: &str, result: Value) -> Result<Value, BlockChainError> {
	if result.is_null() {
		return Err(BlockChainError::decode_error(format!(
			"{} returned null",
			method
		)));
	}
	Ok(result)
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> BalanceClient for EvmClient<T> {
	/// Retrieves the balance with `eth_getBalance` at the latest block
	///
	/// # Errors
	/// - Returns `BlockChainError::DecodeError` if the result is not a quantity
	#[instrument(skip(self), fields(address = %address))]
	async fn get_balance(&self, address: &Address) -> Result<U256, BlockChainError> {
		let params = json!([address.to_checksum(None), "latest"]);

		let result = self
			.transport
			.send_raw_request("eth_getBalance", Some(params))
			.await?;
		let result = non_null_result("eth_getBalance", result)?;

		serde_json::from_value::<U256>(result.clone()).map_err(|e| {
			BlockChainError::decode_error(format!("Failed to parse balance {}: {}", result, e))
		})
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> EvmClientTrait for EvmClient<T> {
	/// Calls a contract with `eth_call`
	///
	/// # Errors
	/// - Returns `BlockChainError::CallError` if the node rejects or reverts the call
	/// - Returns `BlockChainError::DecodeError` if the result is not hex data
	#[instrument(skip(self, data), fields(to = %to, input_len = data.len()))]
	async fn call(&self, to: &Address, data: Bytes) -> Result<Bytes, BlockChainError> {
		let params = json!([
			{
				"to": to.to_checksum(None),
				"data": format!("0x{}", hex::encode(&data))
			},
			"latest"
		]);

		let result = self
			.transport
			.send_raw_request("eth_call", Some(params))
			.await
			.map_err(|e| match e {
				BlockChainError::RequestError(msg) => BlockChainError::call_error(msg),
				other => other,
			})?;
		let result = non_null_result("eth_call", result)?;

		serde_json::from_value::<Bytes>(result.clone()).map_err(|e| {
			BlockChainError::decode_error(format!("Failed to parse call output {}: {}", result, e))
		})
	}
}
