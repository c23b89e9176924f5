use alloy::primitives::{address, Bytes, U256};
use mockall::predicate;
use serde_json::{json, Value};

use crate::integration::mocks::{
	mock_json_rpc_error, mock_json_rpc_result, mock_net_version, MockEvmTransportClient,
};
use moonbase_balance_reporter::services::blockchain::{
	BalanceClient, BlockChainError, EvmClient, EvmClientTrait,
};

#[tokio::test]
async fn test_get_balance_parses_hex_quantity() {
	let mut transport = MockEvmTransportClient::new();
	let account = address!("9Af058fd51F5afa6b7DF5410759cA204164242dc");

	transport
		.expect_send_raw_request()
		.with(
			predicate::eq("eth_getBalance"),
			predicate::eq(Some(json!([
				"0x9Af058fd51F5afa6b7DF5410759cA204164242dc",
				"latest"
			]))),
		)
		.times(1)
		.returning(|_, _| Ok(json!("0x6f05b59d3b20000")));

	let client = EvmClient::new_with_transport(transport);
	let balance = client.get_balance(&account).await.unwrap();

	assert_eq!(balance, U256::from(5 * 10u128.pow(17)));
}

#[tokio::test]
async fn test_get_balance_null_result() {
	let mut transport = MockEvmTransportClient::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Ok(Value::Null));

	let client = EvmClient::new_with_transport(transport);
	let result = client.get_balance(&address!("0000000000000000000000000000000000000001")).await;

	assert!(matches!(result, Err(BlockChainError::DecodeError(_))));
}

#[tokio::test]
async fn test_get_balance_malformed_result() {
	let mut transport = MockEvmTransportClient::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Ok(json!({ "balance": 1 })));

	let client = EvmClient::new_with_transport(transport);
	let result = client.get_balance(&address!("0000000000000000000000000000000000000001")).await;

	assert!(matches!(result, Err(BlockChainError::DecodeError(_))));
}

#[tokio::test]
async fn test_get_balance_propagates_connection_error() {
	let mut transport = MockEvmTransportClient::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Err(BlockChainError::connection_error("connection refused")));

	let client = EvmClient::new_with_transport(transport);
	let result = client.get_balance(&address!("0000000000000000000000000000000000000001")).await;

	assert!(matches!(result, Err(BlockChainError::ConnectionError(_))));
}

#[tokio::test]
async fn test_call_sends_input_and_decodes_output() {
	let mut transport = MockEvmTransportClient::new();
	let precompile = address!("0000000000000000000000000000000000000004");

	transport
		.expect_send_raw_request()
		.with(
			predicate::eq("eth_call"),
			predicate::eq(Some(json!([
				{
					"to": "0x0000000000000000000000000000000000000004",
					"data": "0xdeadbeef"
				},
				"latest"
			]))),
		)
		.times(1)
		.returning(|_, _| Ok(json!("0xdeadbeef")));

	let client = EvmClient::new_with_transport(transport);
	let output = client
		.call(&precompile, Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]))
		.await
		.unwrap();

	assert_eq!(output, Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]));
}

#[tokio::test]
async fn test_call_maps_rejected_request_to_call_error() {
	let mut transport = MockEvmTransportClient::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Err(BlockChainError::request_error("execution reverted")));

	let client = EvmClient::new_with_transport(transport);
	let result = client
		.call(
			&address!("0000000000000000000000000000000000000004"),
			Bytes::new(),
		)
		.await;

	match result {
		Err(BlockChainError::CallError(msg)) => assert_eq!(msg, "execution reverted"),
		other => panic!("Expected call error, got {:?}", other.map(|b| b.len())),
	}
}

#[tokio::test]
async fn test_new_client_against_json_rpc_server() {
	let mut server = mockito::Server::new_async().await;
	let probe = mock_net_version(&mut server).await;
	let balance = mock_json_rpc_result(&mut server, "eth_getBalance", json!("0xde0b6b3a7640000")).await;

	let client = EvmClient::new(&server.url()).await.unwrap();
	let result = client
		.get_balance(&address!("9Af058fd51F5afa6b7DF5410759cA204164242dc"))
		.await
		.unwrap();

	assert_eq!(result, U256::from(10u128.pow(18)));
	probe.assert_async().await;
	balance.assert_async().await;
}

#[tokio::test]
async fn test_call_against_json_rpc_server_revert() {
	let mut server = mockito::Server::new_async().await;
	let _probe = mock_net_version(&mut server).await;
	let _call = mock_json_rpc_error(&mut server, "eth_call", 3, "execution reverted").await;

	let client = EvmClient::new(&server.url()).await.unwrap();
	let result = client
		.call(
			&address!("0000000000000000000000000000000000000004"),
			Bytes::from_static(&[0x01]),
		)
		.await;

	match result {
		Err(BlockChainError::CallError(msg)) => assert!(msg.contains("execution reverted")),
		other => panic!("Expected call error, got {:?}", other.map(|b| b.len())),
	}
}
