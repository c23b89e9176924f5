//! Blockchain error types and handling.
//!
//! This module provides the error type shared by the Substrate and EVM clients,
//! covering connectivity, request processing and response decoding failures.

use log::error;

/// Represents possible errors that can occur during blockchain operations
#[derive(Debug)]
pub enum BlockChainError {
	/// Errors related to network connectivity issues
	ConnectionError(String),

	/// Errors related to malformed requests or rejected queries
	RequestError(String),

	/// The node answered, but the response did not have the expected shape
	DecodeError(String),

	/// A contract call failed or reverted
	CallError(String),

	/// A client could not be created or retrieved from the pool
	ClientPoolError(String),
}

impl BlockChainError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::DecodeError(msg) => format!("Decode error: {}", msg),
			Self::CallError(msg) => format!("Call error: {}", msg),
			Self::ClientPoolError(msg) => format!("Client pool error: {}", msg),
		}
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new decode error with logging
	pub fn decode_error(msg: impl Into<String>) -> Self {
		let error = Self::DecodeError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new call error with logging
	pub fn call_error(msg: impl Into<String>) -> Self {
		let error = Self::CallError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new client pool error with logging
	pub fn client_pool_error(msg: impl Into<String>) -> Self {
		let error = Self::ClientPoolError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for BlockChainError {}
