use std::fmt;
use std::num::NonZeroU64;

/// One-byte identifier selecting one of the 256 wordlists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordlistId(pub u8);

impl WordlistId {
	/// Index into the registry slot array.
	#[inline]
	pub const fn index(self) -> usize {
		self.0 as usize
	}
}

impl From<u8> for WordlistId {
	fn from(byte: u8) -> Self {
		Self(byte)
	}
}

impl fmt::Display for WordlistId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_ascii_graphic() {
			write!(f, "{}", self.0 as char)
		} else {
			write!(f, "{:#04x}", self.0)
		}
	}
}

/// Serial number assigned to a definition.
///
/// Serials start at 1 and grow by one per define across all wordlists, so a
/// resolved serial is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Serial(NonZeroU64);

impl Serial {
	/// Serial handed to the first definition of a run.
	pub const FIRST: Serial = Serial(NonZeroU64::MIN);

	/// Wraps a raw value; `None` for zero.
	pub const fn new(raw: u64) -> Option<Self> {
		match NonZeroU64::new(raw) {
			Some(n) => Some(Self(n)),
			None => None,
		}
	}

	#[inline]
	pub const fn get(self) -> u64 {
		self.0.get()
	}

	/// The serial following this one. Wraps back to [`Serial::FIRST`] after
	/// `u64::MAX` definitions, which no in-memory input can reach.
	#[inline]
	pub fn next(self) -> Self {
		Self(self.0.checked_add(1).unwrap_or(NonZeroU64::MIN))
	}
}

impl fmt::Display for Serial {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}
