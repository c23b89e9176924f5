//! Balance reporting service.
//!
//! Runs the reporting sequence: normalize the address, read the Substrate
//! and EVM balances, call the precompile, and write each outcome as a report
//! line. The steps run strictly one after another and the first failure ends
//! the run.

use alloy::primitives::{Address, Bytes};
use std::{io::Write, sync::Arc};
use tracing::instrument;

use crate::{
	models::{normalize_address, Balance, ReportSummary, ReporterConfig},
	services::{
		blockchain::{BalanceClient, ClientPoolTrait, EvmClientTrait},
		reporter::{ReportWriter, ReporterError},
	},
	utils::constants::REPORT_DIVIDER,
};

/// Banner printed after a run completes every step
pub const SUCCESS_BANNER: &str = "🔥🔥🔥🔥🔥 Lesson 2 complete! 🔥🔥🔥🔥🔥";

/// Reports balances of one account over the Substrate and EVM interfaces
pub struct BalanceReporter<P: ClientPoolTrait, W: Write> {
	config: ReporterConfig,
	client_pool: Arc<P>,
	writer: ReportWriter<W>,
}

impl<P: ClientPoolTrait, W: Write> BalanceReporter<P, W> {
	/// Creates a reporter writing its transcript to `out`
	///
	/// # Arguments
	/// * `config` - Endpoints, address and display settings
	/// * `client_pool` - Source of the Substrate and EVM clients
	/// * `out` - Sink for report lines, usually stdout
	pub fn new(config: ReporterConfig, client_pool: Arc<P>, out: W) -> Self {
		Self {
			config,
			client_pool,
			writer: ReportWriter::new(out),
		}
	}

	pub fn config(&self) -> &ReporterConfig {
		&self.config
	}

	/// Returns the output sink, consuming the reporter
	pub fn into_writer(self) -> W {
		self.writer.into_inner()
	}

	/// Writes one prefixed report line
	pub fn report(&mut self, message: impl AsRef<str>) -> Result<(), ReporterError> {
		self.writer.report(message)?;
		Ok(())
	}

	/// Parses the configured address and returns it with its checksummed text
	pub fn normalize_address(&self) -> Result<(Address, String), ReporterError> {
		Ok(normalize_address(&self.config.address)?)
	}

	/// Opens the Substrate connection, downloading the runtime metadata
	#[instrument(skip(self), fields(url = %self.config.substrate_rpc_url))]
	pub async fn connect_substrate(&self) -> Result<Arc<P::SubstrateClient>, ReporterError> {
		self.client_pool
			.get_substrate_client(&self.config.substrate_rpc_url)
			.await
			.map_err(ReporterError::Substrate)
	}

	/// Reads the free balance from Substrate storage
	#[instrument(skip(self, client))]
	pub async fn query_substrate_balance(
		&self,
		client: &P::SubstrateClient,
		address: &Address,
	) -> Result<Balance, ReporterError> {
		let raw = client
			.get_balance(address)
			.await
			.map_err(ReporterError::Substrate)?;

		Ok(Balance::new(raw, self.config.unit()))
	}

	/// Reads the balance from the EVM JSON-RPC
	#[instrument(skip(self), fields(url = %self.config.evm_rpc_url))]
	pub async fn query_evm_balance(&self, address: &Address) -> Result<Balance, ReporterError> {
		let client = self
			.client_pool
			.get_evm_client(&self.config.evm_rpc_url)
			.await
			.map_err(ReporterError::Evm)?;

		let raw = client
			.get_balance(address)
			.await
			.map_err(ReporterError::Evm)?;

		Ok(Balance::new(raw, self.config.unit()))
	}

	/// Calls the configured precompile with the address bytes as input
	///
	/// The output is only compared with the input when `verify_echo` is set.
	#[instrument(skip(self), fields(precompile = %self.config.precompile_address))]
	pub async fn call_precompile(&self, address: &Address) -> Result<Bytes, ReporterError> {
		let (precompile, _) = normalize_address(&self.config.precompile_address)?;

		let client = self
			.client_pool
			.get_evm_client(&self.config.evm_rpc_url)
			.await
			.map_err(ReporterError::Precompile)?;

		let input = Bytes::copy_from_slice(address.as_slice());
		let output = client
			.call(&precompile, input.clone())
			.await
			.map_err(ReporterError::Precompile)?;

		if output != input {
			if self.config.verify_echo {
				return Err(ReporterError::EchoMismatch {
					expected: hex::encode(&input),
					actual: hex::encode(&output),
				});
			}
			tracing::warn!(
				input = %hex::encode(&input),
				output = %hex::encode(&output),
				"Precompile output differs from its input"
			);
		}

		Ok(output)
	}

	/// Runs every step and returns the typed outcome
	///
	/// Lines for completed steps are written before the error is returned.
	#[instrument(skip_all)]
	pub async fn run(&mut self) -> Result<ReportSummary, ReporterError> {
		self.report("Starting lesson 2 balance verification...")?;

		let (address, checksum_address) = self.normalize_address()?;
		self.report(format!("Using checksum address: {}", checksum_address))?;

		let substrate = self.connect_substrate().await?;
		self.report("Querying Substrate balance...")?;
		let substrate_balance = self
			.query_substrate_balance(substrate.as_ref(), &address)
			.await?;

		self.report("Querying EVM balance...")?;
		let evm_balance = self.query_evm_balance(&address).await?;

		let unit_symbol = self.config.unit_symbol.clone();
		self.report(REPORT_DIVIDER)?;
		self.report(format!(
			"Substrate balance: {} {}",
			substrate_balance, unit_symbol
		))?;
		self.report(format!("EVM balance: {} {}", evm_balance, unit_symbol))?;
		self.report(REPORT_DIVIDER)?;

		self.report("Calling precompile (Identity)...")?;
		let precompile_output = self.call_precompile(&address).await?;
		self.report(format!(
			"✅ Precompile echoed data: {}",
			hex::encode(&precompile_output)
		))?;

		self.writer.plain(format!("\n{}", SUCCESS_BANNER))?;

		tracing::info!(address = %checksum_address, "Reporting run completed");

		Ok(ReportSummary {
			checksum_address,
			substrate_balance,
			evm_balance,
			precompile_output,
		})
	}

	/// Runs every step, reporting a failure as a single error line
	///
	/// Never returns an error: a failed run is logged, written to the
	/// transcript and yields `None`.
	pub async fn run_guarded(&mut self) -> Option<ReportSummary> {
		match self.run().await {
			Ok(summary) => Some(summary),
			Err(e) => {
				tracing::error!(error = %e, "Reporting run failed");
				if let Err(write_error) = self.writer.report(format!("❌ Run failed: {}", e)) {
					tracing::error!(error = %write_error, "Failed to write error line");
				}
				None
			}
		}
	}
}
