//! Error types for command stream processing.

use thiserror::Error;

/// Fatal errors that abort a run. There is no recovery path: the first error
/// ends processing and no fingerprint is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProcessError {
	/// A command started with a byte other than `\n`, `\t`, space or the end marker.
	#[error("invalid input: unexpected byte {byte:#04x} at offset {offset}")]
	InvalidCommand {
		/// The offending byte.
		byte: u8,
		/// Offset of the byte in the input.
		offset: usize,
	},

	/// A define command ended before its wordlist identifier.
	#[error("invalid input: define at offset {offset} has no wordlist identifier")]
	TruncatedDefine {
		/// Offset of the `\n` that started the define.
		offset: usize,
	},
}

impl ProcessError {
	/// Input offset the error refers to.
	pub fn offset(&self) -> usize {
		match *self {
			Self::InvalidCommand { offset, .. } | Self::TruncatedDefine { offset } => offset,
		}
	}
}

/// Result type for stream processing.
pub type Result<T> = std::result::Result<T, ProcessError>;
