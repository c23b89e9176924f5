//! Core blockchain client interface.
//!
//! Both the Substrate and the EVM clients expose the same balance query so the
//! reporter can treat them alike and tests can substitute either one.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use crate::services::blockchain::BlockChainError;

/// Defines the balance query shared by all chain clients
#[async_trait]
pub trait BalanceClient: Send + Sync {
	/// Retrieves the balance of an account
	///
	/// # Arguments
	/// * `address` - The 20-byte account to look up
	///
	/// # Returns
	/// * `Result<U256, BlockChainError>` - The raw balance in the chain's smallest unit
	async fn get_balance(&self, address: &Address) -> Result<U256, BlockChainError>;
}
