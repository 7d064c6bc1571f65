use std::hash::Hasher;
use std::num::NonZeroUsize;

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Scheme used to spread names over a table's buckets.
///
/// The scheme only affects chain distribution. Lookups compare full names, so
/// every scheme resolves identically and yields the same fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum HashKind {
	/// Shift each byte into a 64-bit accumulator, most significant first.
	///
	/// Only the trailing eight bytes of a name survive the shifts.
	#[default]
	BigEndian,
	/// `rustc-hash` Fx hashing over the whole name.
	Fx,
}

impl HashKind {
	/// Hashes `name` to a raw 64-bit value.
	pub fn hash(self, name: &[u8]) -> u64 {
		match self {
			Self::BigEndian => name
				.iter()
				.fold(0u64, |acc, &byte| (acc << 8).wrapping_add(u64::from(byte))),
			Self::Fx => {
				let mut hasher = FxHasher::default();
				hasher.write(name);
				hasher.finish()
			}
		}
	}

	/// Maps `name` to a bucket index in `[0, buckets)`.
	#[inline]
	pub fn bucket(self, name: &[u8], buckets: NonZeroUsize) -> usize {
		(self.hash(name) % buckets.get() as u64) as usize
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::BigEndian => "big-endian",
			Self::Fx => "fx",
		}
	}
}

impl std::fmt::Display for HashKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
