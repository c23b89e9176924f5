//! Address normalization.
//!
//! Accounts are identified by 20-byte addresses written as hex text. Both the
//! Substrate and the EVM queries expect the EIP-55 checksummed form, so raw
//! input is always canonicalized before use.

use alloy::primitives::Address;
use log::error;
use std::{error::Error, fmt, str::FromStr};

/// Errors that can occur while parsing a raw address
#[derive(Debug)]
pub enum AddressError {
	/// The input is not 20 bytes of valid hex
	InvalidFormat(String),
}

impl AddressError {
	/// Format the error message for display
	fn format_message(&self) -> String {
		match self {
			Self::InvalidFormat(msg) => format!("Invalid address: {}", msg),
		}
	}

	/// Create a new invalid format error and log it
	pub fn invalid_format(msg: impl Into<String>) -> Self {
		let error = Self::InvalidFormat(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for AddressError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for AddressError {}

/// Parses a raw hex address and returns it with its EIP-55 checksummed text.
///
/// The input may be in any case and may omit the `0x` prefix. Mixed-case
/// input is not required to carry a valid checksum; it is re-canonicalized.
///
/// # Errors
/// Returns `AddressError::InvalidFormat` for wrong lengths or non-hex characters
pub fn normalize_address(raw: &str) -> Result<(Address, String), AddressError> {
	let address = Address::from_str(raw.trim())
		.map_err(|e| AddressError::invalid_format(format!("{:?}: {}", raw, e)))?;
	let checksummed = address.to_checksum(None);
	Ok((address, checksummed))
}
