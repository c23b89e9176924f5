//! Balance reporter entry point.
//!
//! Reports the balance of one account on Moonbase Alpha over both of its
//! interfaces and calls the Identity precompile with the account address.
//!
//! # Flow
//! 1. Loads `.env` and applies command-line options
//! 2. Sets up logging to stderr
//! 3. Loads the configuration (defaults, or a JSON file)
//! 4. Runs the reporter; its transcript goes to stdout
//!
//! A failed run is reported on stdout and the process still exits normally.

use clap::Parser;
use dotenvy::dotenv;
use std::{
	env::{set_var, var},
	path::PathBuf,
};
use tracing::error;

use moonbase_balance_reporter::{
	bootstrap::{initialize_reporter, load_config, Result},
	utils::logging::setup_logging,
};

/// Command-line options
#[derive(Debug, Parser)]
#[command(
	name = "moonbase-balance-reporter",
	version,
	about = "Reports an account balance over the Substrate and EVM interfaces of a Moonbeam-style \
	         network."
)]
struct Cli {
	/// Path to a JSON configuration file
	#[arg(long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Fail the run if the precompile does not echo its input
	#[arg(long)]
	verify_echo: bool,
}

/// Main entry point for the balance reporter.
///
/// # Errors
/// Returns an error only if the configuration cannot be loaded.
#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if let Some(level) = cli.log_level.as_ref() {
		if var("RUST_LOG").is_err() {
			set_var("RUST_LOG", level);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config = load_config(cli.config.as_deref(), cli.verify_echo).map_err(|e| {
		error!("Failed to load configuration: {}", e);
		e
	})?;

	let mut reporter = initialize_reporter(config, std::io::stdout());
	reporter.run_guarded().await;

	Ok(())
}
