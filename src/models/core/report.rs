use alloy::primitives::Bytes;

use crate::models::Balance;

/// Outcome of a reporting run that completed every step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
	/// EIP-55 checksummed address used for every query
	pub checksum_address: String,
	/// Free balance read from `System::Account`
	pub substrate_balance: Balance,
	/// Balance reported by `eth_getBalance`
	pub evm_balance: Balance,
	/// Raw bytes returned by the precompile call
	pub precompile_output: Bytes,
}
