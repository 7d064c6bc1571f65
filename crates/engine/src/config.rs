use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::hash::HashKind;

/// Bucket count of every symbol table unless configured otherwise.
pub const DEFAULT_BUCKETS: NonZeroUsize = NonZeroUsize::new(4000).unwrap();

/// Tuning knobs for an [`Engine`](crate::Engine).
///
/// Neither knob changes resolution results, so any configuration produces the
/// same fingerprint for a given input.
///
/// Deserializes from a table such as:
///
/// ```toml
/// buckets = 4000
/// hasher = "big-endian"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct EngineConfig {
	/// Buckets per symbol table, fixed for the table's lifetime.
	pub buckets: NonZeroUsize,
	/// Bucket hashing scheme.
	pub hasher: HashKind,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			buckets: DEFAULT_BUCKETS,
			hasher: HashKind::default(),
		}
	}
}
