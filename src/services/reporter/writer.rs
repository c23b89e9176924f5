//! Line-oriented report output.

use std::io::Write;

use crate::utils::constants::REPORT_PREFIX;

/// Writes prefixed report lines and flushes after each one
///
/// Flushing every line keeps the transcript complete even if the process is
/// terminated right after a failure.
pub struct ReportWriter<W: Write> {
	out: W,
}

impl<W: Write> ReportWriter<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	/// Writes `>> {message}` followed by a newline
	pub fn report(&mut self, message: impl AsRef<str>) -> std::io::Result<()> {
		writeln!(self.out, "{} {}", REPORT_PREFIX, message.as_ref())?;
		self.out.flush()
	}

	/// Writes a line without the report prefix
	pub fn plain(&mut self, line: impl AsRef<str>) -> std::io::Result<()> {
		writeln!(self.out, "{}", line.as_ref())?;
		self.out.flush()
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}
