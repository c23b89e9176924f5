//! Substrate blockchain client implementation.
//!
//! Reads account balances from the `System::Account` storage map. Moonbeam
//! networks key this map by the same 20-byte address used on the EVM side.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use subxt::{dynamic::Value as ScaleValue, ext::scale_value::At};
use tracing::instrument;

use crate::services::blockchain::{
	client::BalanceClient,
	transports::{SubstrateStorageTransport, SubxtTransportClient},
	BlockChainError,
};

/// Pallet holding account information
const SYSTEM_PALLET: &str = "System";

/// Storage map from account id to `AccountInfo`
const ACCOUNT_ENTRY: &str = "Account";

/// Client implementation for Substrate-based blockchains
#[derive(Clone)]
pub struct SubstrateClient<T: Send + Sync + Clone> {
	/// The underlying storage transport
	transport: T,
}

impl<T: Send + Sync + Clone> SubstrateClient<T> {
	/// Creates a new Substrate client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl SubstrateClient<SubxtTransportClient> {
	/// Creates a new Substrate client instance
	///
	/// # Arguments
	/// * `rpc_url` - Websocket URL of the node
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or connection error
	pub async fn new(rpc_url: &str) -> Result<Self, BlockChainError> {
		let transport = SubxtTransportClient::new(rpc_url).await?;
		Ok(Self::new_with_transport(transport))
	}
}

/// Reads the free balance out of a decoded `AccountInfo` value
///
/// # Errors
/// Returns `BlockChainError::DecodeError` if `data.free` is missing or not an
/// unsigned integer
pub fn extract_free_balance(account: &ScaleValue) -> Result<U256, BlockChainError> {
	let free = account
		.at("data")
		.and_then(|data| data.at("free"))
		.ok_or_else(|| {
			BlockChainError::decode_error(format!(
				"{}::{} value has no data.free field",
				SYSTEM_PALLET, ACCOUNT_ENTRY
			))
		})?;

	free.as_u128().map(U256::from).ok_or_else(|| {
		BlockChainError::decode_error(format!(
			"data.free is not an unsigned integer: {}",
			free
		))
	})
}

#[async_trait]
impl<T: Send + Sync + Clone + SubstrateStorageTransport> BalanceClient for SubstrateClient<T> {
	/// Retrieves the free balance stored in `System::Account`
	///
	/// An account without a storage entry has never been funded and is
	/// reported with a zero balance.
	#[instrument(skip(self), fields(address = %address))]
	async fn get_balance(&self, address: &Address) -> Result<U256, BlockChainError> {
		let key = ScaleValue::from_bytes(address.as_slice());

		let account = self
			.transport
			.fetch_storage(SYSTEM_PALLET, ACCOUNT_ENTRY, vec![key])
			.await?;

		match account {
			Some(account) => extract_free_balance(&account),
			None => {
				tracing::debug!("No account entry stored, reporting zero balance");
				Ok(U256::ZERO)
			}
		}
	}
}
