//! Core domain models for the balance reporter.
//!
//! This module contains the fundamental data structures that represent:
//! - Addresses: Raw and checksummed 20-byte account identifiers
//! - Balances: Raw on-chain amounts and their display values
//! - Reports: The outcome of a completed reporting run

mod address;
mod balance;
mod report;

pub use address::{normalize_address, AddressError};
pub use balance::Balance;
pub use report::ReportSummary;
