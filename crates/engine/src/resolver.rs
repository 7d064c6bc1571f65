//! Search-order name resolution.
//!
//! # Resolution Order
//!
//! The order is walked from its last (top) identifier back to its first
//! (bottom) one. The first wordlist on that walk whose table holds the name
//! wins; identifiers that have no table yet are skipped. Within a wordlist the
//! newest definition wins (see [`crate::table`]).

use crate::ids::{Serial, WordlistId};
use crate::order::SearchOrder;
use crate::wordlists::Wordlists;

/// A name resolved through the search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
	/// Wordlist that satisfied the lookup.
	pub wordlist: WordlistId,
	pub serial: Serial,
}

/// Resolves names against a registry through a search order.
///
/// The resolver only borrows its inputs and never mutates them; it is created
/// per lookup.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a, 'src> {
	wordlists: &'a Wordlists<'src>,
	order: &'a SearchOrder,
}

impl<'a, 'src> Resolver<'a, 'src> {
	pub fn new(wordlists: &'a Wordlists<'src>, order: &'a SearchOrder) -> Self {
		Self { wordlists, order }
	}

	/// Finds the definition of `name` visible through the search order.
	pub fn find(&self, name: &[u8]) -> Option<Hit> {
		self.order.top_down().find_map(|wordlist| {
			let serial = self.wordlists.get_table(wordlist)?.lookup(name)?;
			Some(Hit { wordlist, serial })
		})
	}
}
