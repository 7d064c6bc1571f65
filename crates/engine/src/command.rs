//! Command stream tokenizer.
//!
//! The stream is a flat byte sequence. Each command starts with one marker
//! byte and runs up to, but not including, the next byte `<= 0x20`, which in
//! turn starts the following command:
//!
//! | Marker | Command |
//! |--------|---------|
//! | `\n`   | define: one wordlist identifier byte, then a name |
//! | `\t`   | set order: zero or more identifier bytes |
//! | ` `    | lookup: a name |
//! | `0x00` | end of stream |
//!
//! The physical end of the input is an implicit end marker. Any other marker
//! byte is fatal, and the iterator yields nothing after an error.

use std::iter::FusedIterator;

use crate::error::{ProcessError, Result};
use crate::ids::WordlistId;

/// Terminates the stream.
pub const END_MARKER: u8 = 0x00;
/// Starts a define command.
pub const DEFINE: u8 = b'\n';
/// Starts a set-order command.
pub const SET_ORDER: u8 = b'\t';
/// Starts a lookup command.
pub const LOOKUP: u8 = b' ';

/// Whether `byte` ends a name or identifier run.
#[inline]
pub const fn is_delimiter(byte: u8) -> bool {
	byte <= b' '
}

/// One decoded command, borrowing its operands from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'src> {
	/// Define `name` in `wordlist`.
	Define {
		wordlist: WordlistId,
		name: &'src [u8],
	},
	/// Replace the search order with these identifier bytes, bottom first.
	SetOrder(&'src [u8]),
	/// Resolve `name` through the search order.
	Lookup(&'src [u8]),
}

/// A value paired with the input offset of the byte that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located<T> {
	pub offset: usize,
	pub value: T,
}

/// Iterator decoding [`Command`]s from a byte stream.
#[derive(Debug, Clone)]
pub struct Commands<'src> {
	input: &'src [u8],
	pos: usize,
	done: bool,
}

impl<'src> Commands<'src> {
	pub fn new(input: &'src [u8]) -> Self {
		Self {
			input,
			pos: 0,
			done: false,
		}
	}

	/// Consumes bytes up to the next delimiter and returns them.
	fn take_run(&mut self) -> &'src [u8] {
		let rest = &self.input[self.pos..];
		let len = rest
			.iter()
			.position(|&byte| is_delimiter(byte))
			.unwrap_or(rest.len());
		self.pos += len;
		&rest[..len]
	}

	fn fail(&mut self, err: ProcessError) -> Option<Result<Located<Command<'src>>>> {
		self.done = true;
		Some(Err(err))
	}
}

impl<'src> Iterator for Commands<'src> {
	type Item = Result<Located<Command<'src>>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let offset = self.pos;
		let Some(&marker) = self.input.get(offset) else {
			self.done = true;
			return None;
		};
		self.pos += 1;

		let value = match marker {
			END_MARKER => {
				self.done = true;
				return None;
			}
			DEFINE => {
				let Some(&id) = self.input.get(self.pos).filter(|&&byte| byte != END_MARKER) else {
					return self.fail(ProcessError::TruncatedDefine { offset });
				};
				self.pos += 1;
				Command::Define {
					wordlist: WordlistId(id),
					name: self.take_run(),
				}
			}
			SET_ORDER => Command::SetOrder(self.take_run()),
			LOOKUP => Command::Lookup(self.take_run()),
			byte => return self.fail(ProcessError::InvalidCommand { byte, offset }),
		};

		Some(Ok(Located { offset, value }))
	}
}

impl FusedIterator for Commands<'_> {}
