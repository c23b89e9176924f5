//! Client pool for managing blockchain clients.
//!
//! This module provides a thread-safe client pool that:
//! - Caches blockchain clients by endpoint URL
//! - Creates clients lazily on first use
//! - Handles both Substrate and EVM clients
//! - Provides type-safe access to clients
//!
//! Creating a client is what opens the connection, so a failing endpoint
//! surfaces as an error from the pool at the moment the client is needed.

use crate::services::blockchain::{
	AlloyTransportClient, BalanceClient, BlockChainError, EvmClient, EvmClientTrait,
	SubstrateClient, SubxtTransportClient,
};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::{any::Any, collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Kinds of clients held by the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientType {
	Substrate,
	Evm,
}

/// Trait for the client pool.
#[async_trait]
pub trait ClientPoolTrait: Send + Sync {
	type SubstrateClient: BalanceClient;
	type EvmClient: EvmClientTrait;

	async fn get_substrate_client(
		&self,
		rpc_url: &str,
	) -> Result<Arc<Self::SubstrateClient>, BlockChainError>;
	async fn get_evm_client(&self, rpc_url: &str) -> Result<Arc<Self::EvmClient>, BlockChainError>;
}

/// Generic client storage that can hold any type of blockchain client
///
/// The HashMap is indexed by the endpoint URL and the value is an Arc of the client.
pub struct ClientStorage<T> {
	clients: Arc<RwLock<HashMap<String, Arc<T>>>>,
}

impl<T> ClientStorage<T> {
	pub fn new() -> Self {
		Self {
			clients: Arc::new(RwLock::new(HashMap::new())),
		}
	}
}

impl<T> Default for ClientStorage<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Main client pool manager that handles both protocols.
///
/// Clients are created on demand when first requested and then cached for
/// future use.
pub struct ClientPool {
	/// Map of client storages indexed by client type
	pub storages: HashMap<ClientType, Box<dyn Any + Send + Sync>>,
}

impl ClientPool {
	/// Creates a new empty client pool.
	pub fn new() -> Self {
		let mut pool = Self {
			storages: HashMap::new(),
		};

		// Register client types
		pool.register_client_type::<SubstrateClient<SubxtTransportClient>>(ClientType::Substrate);
		pool.register_client_type::<EvmClient<AlloyTransportClient>>(ClientType::Evm);

		pool
	}

	fn register_client_type<T: 'static + Send + Sync>(&mut self, client_type: ClientType) {
		self.storages
			.insert(client_type, Box::new(ClientStorage::<T>::new()));
	}

	/// Internal helper method to get or create a client of any type.
	///
	/// Uses a double-checked locking pattern:
	/// 1. Fast path with read lock to check for an existing client
	/// 2. Slow path with write lock to create a new client if needed
	async fn get_or_create_client<T: Send + Sync + 'static>(
		&self,
		client_type: ClientType,
		rpc_url: &str,
		create_fn: impl Fn(String) -> BoxFuture<'static, Result<T, BlockChainError>>,
	) -> Result<Arc<T>, BlockChainError> {
		let storage = self
			.storages
			.get(&client_type)
			.and_then(|s| s.downcast_ref::<ClientStorage<T>>())
			.ok_or_else(|| BlockChainError::client_pool_error("Invalid client type".to_string()))?;

		// Fast path: check if client exists
		if let Some(client) = storage.clients.read().await.get(rpc_url) {
			return Ok(client.clone());
		}

		// Slow path: create new client
		let mut clients = storage.clients.write().await;
		if let Some(client) = clients.get(rpc_url) {
			return Ok(client.clone());
		}
		let client = Arc::new(create_fn(rpc_url.to_string()).await?);
		clients.insert(rpc_url.to_string(), client.clone());
		Ok(client)
	}

	/// Get the number of clients for a given client type.
	pub async fn get_client_count<T: 'static>(&self, client_type: ClientType) -> usize {
		match self
			.storages
			.get(&client_type)
			.and_then(|s| s.downcast_ref::<ClientStorage<T>>())
		{
			Some(storage) => storage.clients.read().await.len(),
			None => 0,
		}
	}
}

#[async_trait]
impl ClientPoolTrait for ClientPool {
	type SubstrateClient = SubstrateClient<SubxtTransportClient>;
	type EvmClient = EvmClient<AlloyTransportClient>;

	/// Gets or creates a Substrate client for the given endpoint.
	async fn get_substrate_client(
		&self,
		rpc_url: &str,
	) -> Result<Arc<Self::SubstrateClient>, BlockChainError> {
		self.get_or_create_client(ClientType::Substrate, rpc_url, |url| {
			Box::pin(async move { Self::SubstrateClient::new(&url).await })
		})
		.await
		.map_err(|e| BlockChainError::client_pool_error(e.to_string()))
	}

	/// Gets or creates an EVM client for the given endpoint.
	async fn get_evm_client(&self, rpc_url: &str) -> Result<Arc<Self::EvmClient>, BlockChainError> {
		self.get_or_create_client(ClientType::Evm, rpc_url, |url| {
			Box::pin(async move { Self::EvmClient::new(&url).await })
		})
		.await
		.map_err(|e| BlockChainError::client_pool_error(e.to_string()))
	}
}

impl Default for ClientPool {
	fn default() -> Self {
		Self::new()
	}
}
