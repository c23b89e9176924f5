//! Bootstrap module for loading configuration and creating the reporter.
//!
//! This module provides functions that turn command-line options into a
//! validated `ReporterConfig` and wire it to the client pool and an output
//! sink.

use std::{error::Error, io::Write, path::Path, sync::Arc};

use crate::{
	models::{ConfigLoader, ReporterConfig},
	services::{
		blockchain::{ClientPool, ClientPoolTrait},
		reporter::BalanceReporter,
	},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Loads the reporter configuration.
///
/// Without a path the Moonbase Alpha defaults are used. Setting `verify_echo`
/// turns on echo verification regardless of the file contents.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if the resulting
/// configuration is invalid
pub fn load_config(path: Option<&Path>, verify_echo: bool) -> Result<ReporterConfig> {
	let mut config = match path {
		Some(path) => ReporterConfig::load_from_path(path)?,
		None => ReporterConfig::default(),
	};

	if verify_echo {
		config.verify_echo = true;
	}

	config.validate()?;

	Ok(config)
}

/// Creates a reporter backed by the given client pool.
pub fn create_reporter<P: ClientPoolTrait, W: Write>(
	config: ReporterConfig,
	client_pool: Arc<P>,
	out: W,
) -> BalanceReporter<P, W> {
	BalanceReporter::new(config, client_pool, out)
}

/// Creates a reporter with a fresh network-backed client pool.
pub fn initialize_reporter<W: Write>(
	config: ReporterConfig,
	out: W,
) -> BalanceReporter<ClientPool, W> {
	create_reporter(config, Arc::new(ClientPool::new()), out)
}
