//! Constants used across the application.

/// Moonbase Alpha Substrate websocket endpoint
pub const DEFAULT_SUBSTRATE_RPC_URL: &str = "wss://wss.api.moonbase.moonbeam.network";

/// Moonbase Alpha EVM JSON-RPC endpoint
pub const DEFAULT_EVM_RPC_URL: &str = "https://rpc.api.moonbase.moonbeam.network";

/// Account reported when no other address is configured
pub const DEFAULT_ADDRESS: &str = "0x9Af058fd51F5afa6b7DF5410759cA204164242dc";

/// Identity precompile, which returns its input unchanged
pub const IDENTITY_PRECOMPILE_ADDRESS: &str = "0x0000000000000000000000000000000000000004";

/// Native token symbol on Moonbase Alpha
pub const DEFAULT_UNIT_SYMBOL: &str = "DEV";

/// Native token decimals on Moonbase Alpha
pub const DEFAULT_DECIMALS: u8 = 18;

/// Prefix written before every report line
pub const REPORT_PREFIX: &str = ">>";

/// Divider printed around the balance lines
pub const REPORT_DIVIDER: &str = "------------------------------";
