//! Configuration loading and validation.
//!
//! The reporter reads a single JSON file. Every field is optional and falls
//! back to the Moonbase Alpha defaults.

use std::path::Path;

mod error;
mod reporter_config;

pub use error::ConfigError;
pub use reporter_config::ReporterConfig;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), ConfigError>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
