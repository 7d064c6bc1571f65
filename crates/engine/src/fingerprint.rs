use std::fmt;

use crate::ids::Serial;

/// Odd multiplier of the mixing step. Part of the output format: changing it
/// changes every fingerprint.
pub const MIX_MULTIPLIER: u64 = 0xb64d_532a_aaaa_aad5;

/// Right shift folded back into the state after each multiplication.
pub const MIX_SHIFT: u32 = 41;

/// Running fingerprint over the serials of successful lookups.
///
/// Folding is order sensitive; hits must be folded in input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
	pub const fn new() -> Self {
		Self(0)
	}

	/// Folds one resolved serial into the state.
	#[inline]
	pub fn fold(&mut self, found: Serial) {
		let mixed = (self.0 ^ found.get()).wrapping_mul(MIX_MULTIPLIER);
		self.0 = mixed ^ (mixed >> MIX_SHIFT);
	}

	#[inline]
	pub const fn value(self) -> u64 {
		self.0
	}
}

impl From<Fingerprint> for u64 {
	fn from(fp: Fingerprint) -> Self {
		fp.0
	}
}

/// Renders as bare lowercase hex, the format the CLI prints.
impl fmt::LowerHex for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(&self.0, f)
	}
}

impl fmt::Display for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:x}", self.0)
	}
}
