use alloy::primitives::utils::Unit;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

use crate::{
	models::{normalize_address, ConfigError, ConfigLoader},
	utils::constants::{
		DEFAULT_ADDRESS, DEFAULT_DECIMALS, DEFAULT_EVM_RPC_URL, DEFAULT_SUBSTRATE_RPC_URL,
		DEFAULT_UNIT_SYMBOL, IDENTITY_PRECOMPILE_ADDRESS,
	},
};

/// Settings for a single reporting run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReporterConfig {
	/// Websocket endpoint of the Substrate RPC
	pub substrate_rpc_url: String,
	/// HTTP endpoint of the EVM JSON-RPC
	pub evm_rpc_url: String,
	/// Raw address whose balances are reported
	pub address: String,
	/// Contract called with the address as input
	pub precompile_address: String,
	/// Symbol printed after balances
	pub unit_symbol: String,
	/// Decimals of the native token
	pub decimals: u8,
	/// Fail the run if the precompile output differs from its input
	pub verify_echo: bool,
}

impl Default for ReporterConfig {
	fn default() -> Self {
		Self {
			substrate_rpc_url: DEFAULT_SUBSTRATE_RPC_URL.to_string(),
			evm_rpc_url: DEFAULT_EVM_RPC_URL.to_string(),
			address: DEFAULT_ADDRESS.to_string(),
			precompile_address: IDENTITY_PRECOMPILE_ADDRESS.to_string(),
			unit_symbol: DEFAULT_UNIT_SYMBOL.to_string(),
			decimals: DEFAULT_DECIMALS,
			verify_echo: false,
		}
	}
}

impl ReporterConfig {
	/// Unit used to scale raw balances for display
	///
	/// Falls back to 18 decimals if the configured value is out of range;
	/// `validate` rejects such values before a run starts.
	pub fn unit(&self) -> Unit {
		Unit::new(self.decimals).unwrap_or(Unit::ETHER)
	}
}

impl ConfigLoader for ReporterConfig {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		if !Self::is_json_file(path) {
			return Err(ConfigError::file(path, "expected a .json file"));
		}

		let file = std::fs::File::open(path).map_err(|e| ConfigError::file(path, e))?;
		let config: ReporterConfig =
			serde_json::from_reader(file).map_err(|e| ConfigError::parse(path, e))?;

		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		check_endpoint(
			"substrate_rpc_url",
			&self.substrate_rpc_url,
			&["ws", "wss"],
		)?;
		check_endpoint("evm_rpc_url", &self.evm_rpc_url, &["http", "https"])?;

		// The account address is checked at run time so that a malformed value
		// is reported inside the run, but the precompile target must be usable.
		normalize_address(&self.precompile_address)
			.map_err(|e| ConfigError::invalid_field("precompile_address", e.to_string()))?;

		if self.unit_symbol.trim().is_empty() {
			return Err(ConfigError::invalid_field("unit_symbol", "must not be empty"));
		}

		if Unit::new(self.decimals).is_none() {
			return Err(ConfigError::invalid_field(
				"decimals",
				format!("must be at most {}, got {}", Unit::MAX.get(), self.decimals),
			));
		}

		Ok(())
	}
}

/// Parses an endpoint URL and checks its scheme
fn check_endpoint(field: &'static str, value: &str, schemes: &[&str]) -> Result<(), ConfigError> {
	let url = Url::parse(value).map_err(|e| ConfigError::invalid_field(field, e.to_string()))?;
	if !schemes.contains(&url.scheme()) {
		return Err(ConfigError::invalid_field(
			field,
			format!("scheme must be one of {}, got {}", schemes.join("/"), url.scheme()),
		));
	}
	Ok(())
}
