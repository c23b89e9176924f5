//! Balance reporting.
//!
//! Ties the address model and the blockchain clients together into the
//! sequential reporting run, and writes the human-readable transcript.

mod error;
mod service;
mod writer;

pub use error::ReporterError;
pub use service::{BalanceReporter, SUCCESS_BANNER};
pub use writer::ReportWriter;
