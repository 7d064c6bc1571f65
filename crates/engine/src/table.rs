//! Chained hash table from names to serial numbers.
//!
//! # Invariants
//!
//! - The bucket count is fixed when the table is created; there is no resizing.
//! - Each bucket chain is ordered newest first. [`SymbolTable::insert`] always
//!   links the new entry in front of the current head, so redefining a name
//!   shadows every older entry with that name for good.
//! - Entries are never removed or mutated once linked.

use std::num::NonZeroUsize;

use crate::hash::HashKind;
use crate::ids::Serial;


/// Index of an entry in [`SymbolTable::entries`].
type EntryIdx = usize;

#[derive(Debug, Clone)]
struct Entry<'src> {
	name: &'src [u8],
	serial: Serial,
	/// Next (older) entry in the same bucket.
	next: Option<EntryIdx>,
}

/// Chained hash table mapping borrowed names to serial numbers.
///
/// Entries live in a single arena and chains link them by index, which keeps
/// insertion O(1) without per-entry boxing.
#[derive(Debug, Clone)]
pub struct SymbolTable<'src> {
	heads: Box<[Option<EntryIdx>]>,
	entries: Vec<Entry<'src>>,
	buckets: NonZeroUsize,
	hasher: HashKind,
}

impl<'src> SymbolTable<'src> {
	/// Creates a table with `buckets` empty chains.
	pub fn new(buckets: NonZeroUsize, hasher: HashKind) -> Self {
		Self {
			heads: vec![None; buckets.get()].into_boxed_slice(),
			entries: Vec::new(),
			buckets,
			hasher,
		}
	}

	#[inline]
	pub fn bucket_count(&self) -> usize {
		self.buckets.get()
	}

	/// Number of stored entries, shadowed ones included.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Bucket index `name` hashes to.
	#[inline]
	pub fn bucket_of(&self, name: &[u8]) -> usize {
		self.hasher.bucket(name, self.buckets)
	}

	/// Links `(name, serial)` as the new head of its bucket chain.
	pub fn insert(&mut self, name: &'src [u8], serial: Serial) {
		let bucket = self.bucket_of(name);
		self.entries.push(Entry {
			name,
			serial,
			next: self.heads[bucket],
		});
		self.heads[bucket] = Some(self.entries.len() - 1);
	}

	/// Returns the serial of the most recent definition of `name`.
	pub fn lookup(&self, name: &[u8]) -> Option<Serial> {
		self.chain(self.bucket_of(name))
			.find(|entry| entry.name == name)
			.map(|entry| entry.serial)
	}

	/// Length of the chain in `bucket`; zero for out-of-range buckets.
	pub fn chain_len(&self, bucket: usize) -> usize {
		if bucket >= self.heads.len() {
			return 0;
		}
		self.chain(bucket).count()
	}

	/// Length of the longest bucket chain.
	pub fn longest_chain(&self) -> usize {
		(0..self.heads.len())
			.map(|bucket| self.chain_len(bucket))
			.max()
			.unwrap_or(0)
	}

	fn chain(&self, bucket: usize) -> Chain<'_, 'src> {
		Chain {
			entries: &self.entries,
			cursor: self.heads[bucket],
		}
	}
}

struct Chain<'t, 'src> {
	entries: &'t [Entry<'src>],
	cursor: Option<EntryIdx>,
}

impl<'t, 'src> Iterator for Chain<'t, 'src> {
	type Item = &'t Entry<'src>;

	fn next(&mut self) -> Option<Self::Item> {
		let entry = &self.entries[self.cursor?];
		self.cursor = entry.next;
		Some(entry)
	}
}
