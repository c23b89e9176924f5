use serde_json::{json, Value};

use crate::integration::mocks::{mock_json_rpc_error, mock_json_rpc_result, mock_net_version};
use moonbase_balance_reporter::services::blockchain::{
	AlloyTransportClient, BlockChainError, BlockchainTransport,
};

#[tokio::test]
async fn test_new_probes_endpoint() {
	let mut server = mockito::Server::new_async().await;
	let probe = mock_net_version(&mut server).await;

	AlloyTransportClient::new(&server.url()).await.unwrap();

	probe.assert_async().await;
}

#[tokio::test]
async fn test_new_fails_when_endpoint_errors() {
	let mut server = mockito::Server::new_async().await;
	let _probe = server
		.mock("POST", "/")
		.with_status(500)
		.with_body("internal error")
		.create_async()
		.await;

	let result = AlloyTransportClient::new(&server.url()).await;

	match result {
		Err(BlockChainError::ConnectionError(msg)) => {
			assert!(msg.starts_with(&format!("Failed to connect to {}", server.url())))
		}
		other => panic!("Expected connection error, got {:?}", other.map(|_| ())),
	}
}

#[tokio::test]
async fn test_new_rejects_invalid_url() {
	let result = AlloyTransportClient::new("not a url").await;
	assert!(matches!(result, Err(BlockChainError::ConnectionError(_))));
}

#[tokio::test]
async fn test_send_raw_request_returns_result_member() {
	let mut server = mockito::Server::new_async().await;
	let _probe = mock_net_version(&mut server).await;
	let chain_id = mock_json_rpc_result(&mut server, "eth_chainId", json!("0x507")).await;

	let transport = AlloyTransportClient::new(&server.url()).await.unwrap();
	let result = transport
		.send_raw_request::<Value>("eth_chainId", None)
		.await
		.unwrap();

	assert_eq!(result, json!("0x507"));
	chain_id.assert_async().await;
}

#[tokio::test]
async fn test_send_raw_request_maps_error_payload() {
	let mut server = mockito::Server::new_async().await;
	let _probe = mock_net_version(&mut server).await;
	let _balance =
		mock_json_rpc_error(&mut server, "eth_getBalance", -32602, "invalid argument 0").await;

	let transport = AlloyTransportClient::new(&server.url()).await.unwrap();
	let result = transport
		.send_raw_request("eth_getBalance", Some(json!(["0x00", "latest"])))
		.await;

	match result {
		Err(BlockChainError::RequestError(msg)) => assert_eq!(
			msg,
			"eth_getBalance failed with code -32602: invalid argument 0"
		),
		other => panic!("Expected request error, got {:?}", other),
	}
}
