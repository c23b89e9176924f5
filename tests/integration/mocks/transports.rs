use mockall::mock;
use serde::Serialize;
use serde_json::Value;
use subxt::dynamic::Value as ScaleValue;

use moonbase_balance_reporter::services::blockchain::{
	BlockChainError, BlockchainTransport, SubstrateStorageTransport,
};

// Mock implementation of an EVM transport client.
// Simulates the `result` member returned for raw JSON-RPC requests.
mock! {
	pub EvmTransportClient {
		pub async fn send_raw_request(&self, method: &str, params: Option<Value>) -> Result<Value, BlockChainError>;
	}

	impl Clone for EvmTransportClient {
		fn clone(&self) -> Self;
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for MockEvmTransportClient {
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, BlockChainError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.send_raw_request(method, params.map(|p| p.into()))
			.await
	}
}

// Mock implementation of a Substrate storage transport.
// Simulates decoded storage values without a metadata download.
mock! {
	pub SubstrateStorageTransport {}

	#[async_trait::async_trait]
	impl SubstrateStorageTransport for SubstrateStorageTransport {
		async fn fetch_storage(
			&self,
			pallet: &str,
			entry: &str,
			keys: Vec<ScaleValue>,
		) -> Result<Option<ScaleValue>, BlockChainError>;
	}

	impl Clone for SubstrateStorageTransport {
		fn clone(&self) -> Self;
	}
}
