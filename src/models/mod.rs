//! Domain models for the balance reporter.
//!
//! This module contains the data structures used throughout the application:
//!
//! - `config`: Reporter configuration loading and validation
//! - `core`: Core domain models (addresses, balances, report summaries)

mod config;
mod core;

// Re-export core types
pub use core::{normalize_address, AddressError, Balance, ReportSummary};

// Re-export config types
pub use config::{ConfigError, ConfigLoader, ReporterConfig};
