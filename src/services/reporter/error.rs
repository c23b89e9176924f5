//! Reporter error types.
//!
//! Every step of a reporting run fails with its own variant, so callers of
//! `BalanceReporter::run` can tell which step went wrong.

use thiserror::Error;

use crate::{models::AddressError, services::blockchain::BlockChainError};

#[derive(Debug, Error)]
pub enum ReporterError {
	#[error("{0}")]
	Address(#[from] AddressError),

	#[error("Substrate balance query failed: {0}")]
	Substrate(#[source] BlockChainError),

	#[error("EVM balance query failed: {0}")]
	Evm(#[source] BlockChainError),

	#[error("Precompile call failed: {0}")]
	Precompile(#[source] BlockChainError),

	#[error("Precompile output 0x{actual} does not echo input 0x{expected}")]
	EchoMismatch { expected: String, actual: String },

	#[error("Failed to write report: {0}")]
	Output(#[from] std::io::Error),
}
