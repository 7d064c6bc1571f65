use std::num::NonZeroUsize;

use crate::config::EngineConfig;
use crate::hash::HashKind;
use crate::ids::{Serial, WordlistId};
use crate::table::SymbolTable;

/// Number of addressable wordlists, one per identifier byte.
pub const WORDLIST_SLOTS: usize = 256;

/// Registry of the 256 wordlists.
///
/// A slot stays empty until the first definition into it, at which point a
/// [`SymbolTable`] with the configured bucket count is created and kept for
/// the rest of the run.
#[derive(Debug)]
pub struct Wordlists<'src> {
	slots: Box<[Option<SymbolTable<'src>>; WORDLIST_SLOTS]>,
	buckets: NonZeroUsize,
	hasher: HashKind,
}

impl<'src> Wordlists<'src> {
	pub fn new(config: &EngineConfig) -> Self {
		Self {
			slots: Box::new(std::array::from_fn(|_| None)),
			buckets: config.buckets,
			hasher: config.hasher,
		}
	}

	/// Defines `name` in wordlist `id`, creating the table on first use.
	pub fn define(&mut self, id: WordlistId, name: &'src [u8], serial: Serial) {
		let (buckets, hasher) = (self.buckets, self.hasher);
		let table = self.slots[id.index()].get_or_insert_with(|| {
			tracing::debug!(wordlist = %id, buckets = buckets.get(), %hasher, "creating wordlist");
			SymbolTable::new(buckets, hasher)
		});
		table.insert(name, serial);
	}

	/// Table for `id`, if anything has been defined into it.
	#[inline]
	pub fn get_table(&self, id: WordlistId) -> Option<&SymbolTable<'src>> {
		self.slots[id.index()].as_ref()
	}

	/// Created tables in identifier order.
	///
	/// A slot is filled by its first definition and never emptied, so the
	/// count of this iterator is the number of tables created.
	pub fn tables(&self) -> impl Iterator<Item = (WordlistId, &SymbolTable<'src>)> {
		self.slots
			.iter()
			.enumerate()
			.filter_map(|(idx, slot)| Some((WordlistId(idx as u8), slot.as_ref()?)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn serial(raw: u64) -> Serial {
		Serial::new(raw).unwrap()
	}

	#[test]
	fn tables_are_created_lazily() {
		let mut lists = Wordlists::new(&EngineConfig::default());
		assert!(lists.get_table(WordlistId(b'A')).is_none());
		assert_eq!(lists.tables().count(), 0);

		lists.define(WordlistId(b'A'), b"foo", serial(1));
		lists.define(WordlistId(b'A'), b"bar", serial(2));

		let table = lists.get_table(WordlistId(b'A')).unwrap();
		assert_eq!(table.len(), 2);
		assert_eq!(table.bucket_count(), 4000);
		assert_eq!(lists.tables().count(), 1);
		assert!(lists.get_table(WordlistId(b'B')).is_none());
	}

	#[test]
	fn wordlists_are_independent() {
		let mut lists = Wordlists::new(&EngineConfig::default());
		lists.define(WordlistId(b'A'), b"x", serial(1));
		lists.define(WordlistId(b'B'), b"x", serial(2));
		assert_eq!(lists.get_table(WordlistId(b'A')).unwrap().lookup(b"x"), Some(serial(1)));
		assert_eq!(lists.get_table(WordlistId(b'B')).unwrap().lookup(b"x"), Some(serial(2)));
	}

	#[test]
	fn every_identifier_byte_is_addressable() {
		let mut lists = Wordlists::new(&EngineConfig {
			buckets: NonZeroUsize::new(2).unwrap(),
			..EngineConfig::default()
		});
		for byte in [0u8, b'\n', b'A', 0xff] {
			lists.define(WordlistId(byte), b"n", serial(u64::from(byte) + 1));
		}
		let ids: Vec<u8> = lists.tables().map(|(id, _)| id.0).collect();
		assert_eq!(ids, vec![0, b'\n', b'A', 0xff]);
	}
}
