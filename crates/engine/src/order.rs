use smallvec::SmallVec;

use crate::ids::WordlistId;

/// The wordlists consulted by lookups, bottom first and top last.
///
/// The order is only ever replaced as a whole. Identifiers without a table
/// and repeated identifiers are both allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOrder {
	ids: SmallVec<[WordlistId; 16]>,
}

impl SearchOrder {
	/// An empty order; lookups against it find nothing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the whole order with `ids`, bottom first.
	pub fn set<I>(&mut self, ids: I)
	where
		I: IntoIterator<Item = WordlistId>,
	{
		self.ids.clear();
		self.ids.extend(ids);
	}

	/// Replaces the whole order with raw identifier bytes.
	pub fn set_bytes(&mut self, bytes: &[u8]) {
		self.set(bytes.iter().copied().map(WordlistId));
	}

	/// Current order, bottom first and top last.
	#[inline]
	pub fn as_sequence(&self) -> &[WordlistId] {
		&self.ids
	}

	/// Current order, top first: the sequence lookups walk.
	pub fn top_down(&self) -> impl Iterator<Item = WordlistId> + '_ {
		self.ids.iter().rev().copied()
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

impl FromIterator<WordlistId> for SearchOrder {
	fn from_iter<T: IntoIterator<Item = WordlistId>>(iter: T) -> Self {
		Self {
			ids: iter.into_iter().collect(),
		}
	}
}
