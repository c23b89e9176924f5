//! Errors raised while loading the reporter configuration.
//!
//! File and parse failures carry the path that was read. Validation
//! failures name the offending field.

use log::error;
use std::{
	error::Error,
	fmt,
	path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum ConfigError {
	/// A field holds a value the reporter cannot use
	InvalidField { field: &'static str, reason: String },

	/// The file is not a JSON document matching `ReporterConfig`
	Parse { path: PathBuf, reason: String },

	/// The file could not be opened or is not a `.json` file
	File { path: PathBuf, reason: String },
}

impl ConfigError {
	/// Rejects the value of `field`
	pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
		let error = Self::InvalidField {
			field,
			reason: reason.into(),
		};
		error!("{}", error);
		error
	}

	/// Wraps a JSON decoding failure for the file at `path`
	pub fn parse(path: &Path, err: serde_json::Error) -> Self {
		let error = Self::Parse {
			path: path.to_path_buf(),
			reason: err.to_string(),
		};
		error!("{}", error);
		error
	}

	/// Reports a file that cannot be used as configuration
	pub fn file(path: &Path, reason: impl fmt::Display) -> Self {
		let error = Self::File {
			path: path.to_path_buf(),
			reason: reason.to_string(),
		};
		error!("{}", error);
		error
	}

	/// Name of the rejected field, for validation failures
	pub fn field(&self) -> Option<&'static str> {
		match self {
			Self::InvalidField { field, .. } => Some(field),
			_ => None,
		}
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidField { field, reason } => write!(f, "Invalid {}: {}", field, reason),
			Self::Parse { path, reason } => {
				write!(f, "Failed to parse {}: {}", path.display(), reason)
			}
			Self::File { path, reason } => write!(f, "Cannot read {}: {}", path.display(), reason),
		}
	}
}

impl Error for ConfigError {}
