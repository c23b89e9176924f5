use alloy::primitives::{
	utils::{ParseUnits, Unit},
	U256,
};
use std::fmt;

/// An on-chain balance in the chain's smallest unit
///
/// The display value divides the raw amount by `10^decimals`. It is only
/// meant for human-readable output and may lose precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
	raw: U256,
	unit: Unit,
}

impl Balance {
	pub fn new(raw: U256, unit: Unit) -> Self {
		Self { raw, unit }
	}

	/// Balance with 18 decimals, as used by Moonbeam networks
	pub fn ether(raw: U256) -> Self {
		Self::new(raw, Unit::ETHER)
	}

	pub fn raw(&self) -> U256 {
		self.raw
	}

	pub fn decimals(&self) -> u8 {
		self.unit.get()
	}

	/// Returns the balance scaled to display units
	pub fn to_display(&self) -> f64 {
		let text = ParseUnits::from(self.raw).format_units(self.unit);
		// Formatted units are always plain decimal text
		text.parse::<f64>().unwrap_or_default()
	}
}

impl fmt::Display for Balance {
	/// Writes the display value the way a float repr does (`1.0`, `0.5`, `1e-05`)
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&float_repr(self.to_display()))
	}
}

/// Shortest round-trip rendering of a float, with a signed exponent of at
/// least two digits (`1e-05`, `1e+16`)
fn float_repr(value: f64) -> String {
	let text = format!("{:?}", value);
	match text.split_once('e') {
		Some((mantissa, exponent)) => {
			let (sign, digits) = match exponent.strip_prefix('-') {
				Some(digits) => ('-', digits),
				None => ('+', exponent),
			};
			format!("{}e{}{:0>2}", mantissa, sign, digits)
		}
		None => text,
	}
}
