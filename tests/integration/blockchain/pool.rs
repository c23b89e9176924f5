use moonbase_balance_reporter::services::blockchain::{
	AlloyTransportClient, BlockChainError, ClientPool, ClientPoolTrait, ClientType, EvmClient,
	SubstrateClient, SubxtTransportClient,
};
use std::sync::Arc;

use crate::integration::mocks::mock_net_version;

#[tokio::test]
async fn test_new_pool_is_empty() {
	let pool = ClientPool::new();

	assert_eq!(pool.storages.len(), 2);
	assert!(pool.storages.contains_key(&ClientType::Substrate));
	assert!(pool.storages.contains_key(&ClientType::Evm));
	assert_eq!(
		pool.get_client_count::<EvmClient<AlloyTransportClient>>(ClientType::Evm)
			.await,
		0
	);
	assert_eq!(
		pool.get_client_count::<SubstrateClient<SubxtTransportClient>>(ClientType::Substrate)
			.await,
		0
	);
}

#[tokio::test]
async fn test_get_client_count_wrong_type() {
	let pool = ClientPool::new();
	assert_eq!(pool.get_client_count::<String>(ClientType::Evm).await, 0);
}

#[tokio::test]
async fn test_evm_client_is_cached_per_url() {
	let mut server = mockito::Server::new_async().await;
	let probe = mock_net_version(&mut server).await;

	let pool = ClientPool::new();
	let first = pool.get_evm_client(&server.url()).await.unwrap();
	let second = pool.get_evm_client(&server.url()).await.unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(
		pool.get_client_count::<EvmClient<AlloyTransportClient>>(ClientType::Evm)
			.await,
		1
	);
	probe.assert_async().await;
}

#[tokio::test]
async fn test_evm_client_unreachable_endpoint() {
	let mut server = mockito::Server::new_async().await;
	let _probe = server
		.mock("POST", "/")
		.with_status(503)
		.create_async()
		.await;

	let pool = ClientPool::new();
	let result = pool.get_evm_client(&server.url()).await;

	match result {
		Err(BlockChainError::ClientPoolError(msg)) => {
			assert!(msg.contains("Connection error"), "unexpected message: {}", msg)
		}
		other => panic!("Expected client pool error, got {:?}", other.map(|_| ())),
	}
	assert_eq!(
		pool.get_client_count::<EvmClient<AlloyTransportClient>>(ClientType::Evm)
			.await,
		0
	);
}

#[tokio::test]
async fn test_substrate_client_unreachable_endpoint() {
	let pool = ClientPool::new();
	let result = pool.get_substrate_client("ws://127.0.0.1:1").await;

	assert!(matches!(result, Err(BlockChainError::ClientPoolError(_))));
	assert_eq!(
		pool.get_client_count::<SubstrateClient<SubxtTransportClient>>(ClientType::Substrate)
			.await,
		0
	);
}
