//! Stream processor.
//!
//! [`Engine`] owns all mutable run state: the wordlist registry, the search
//! order, the serial counter, the fingerprint and run statistics. Commands are
//! applied strictly in input order, which fixes serial assignment, search
//! order visibility and fingerprint folding order.

use crate::command::{Command, Commands, Located};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::ids::{Serial, WordlistId};
use crate::order::SearchOrder;
use crate::resolver::{Hit, Resolver};
use crate::wordlists::Wordlists;


/// Command counters kept while a run is in progress.
#[derive(Debug, Clone, Copy, Default)]
struct Counters {
	defines: u64,
	order_changes: u64,
	lookups: u64,
	hits: u64,
}

/// Shape of one created wordlist's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
	pub wordlist: WordlistId,
	/// Stored definitions, shadowed ones included.
	pub entries: usize,
	pub buckets: usize,
	pub longest_chain: usize,
}

/// Snapshot of a run: command counters plus one [`TableStats`] per created
/// wordlist, in identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineStats {
	pub defines: u64,
	pub order_changes: u64,
	pub lookups: u64,
	/// Lookups that resolved and were folded into the fingerprint.
	pub hits: u64,
	pub tables: Vec<TableStats>,
}

impl EngineStats {
	/// Lookups that found nothing.
	pub fn misses(&self) -> u64 {
		self.lookups - self.hits
	}

	pub fn tables_created(&self) -> usize {
		self.tables.len()
	}

	/// Definitions stored across all wordlists.
	pub fn total_entries(&self) -> usize {
		self.tables.iter().map(|table| table.entries).sum()
	}
}

/// Replays define / set-order / lookup commands and fingerprints the lookups.
///
/// Names are borrowed from the input buffer for `'src`; nothing is copied.
#[derive(Debug)]
pub struct Engine<'src> {
	wordlists: Wordlists<'src>,
	order: SearchOrder,
	next_serial: Serial,
	fingerprint: Fingerprint,
	counters: Counters,
}

impl<'src> Engine<'src> {
	pub fn new(config: &EngineConfig) -> Self {
		Self {
			wordlists: Wordlists::new(config),
			order: SearchOrder::new(),
			next_serial: Serial::FIRST,
			fingerprint: Fingerprint::new(),
			counters: Counters::default(),
		}
	}

	/// Defines `name` in `wordlist` and returns the serial it was given.
	pub fn define(&mut self, wordlist: WordlistId, name: &'src [u8]) -> Serial {
		let serial = self.next_serial;
		self.next_serial = serial.next();
		self.wordlists.define(wordlist, name, serial);
		self.counters.defines += 1;
		serial
	}

	/// Replaces the search order with `ids`, bottom first.
	pub fn set_order(&mut self, ids: &[u8]) {
		self.order.set_bytes(ids);
		self.counters.order_changes += 1;
	}

	/// Resolves `name` and folds a hit into the fingerprint.
	pub fn lookup(&mut self, name: &[u8]) -> Option<Hit> {
		self.counters.lookups += 1;
		let hit = self.resolver().find(name)?;
		self.fingerprint.fold(hit.serial);
		self.counters.hits += 1;
		Some(hit)
	}

	/// Applies one decoded command.
	pub fn apply(&mut self, command: Command<'src>) {
		match command {
			Command::Define { wordlist, name } => {
				let serial = self.define(wordlist, name);
				tracing::trace!(%wordlist, name = %String::from_utf8_lossy(name), %serial, "define");
			}
			Command::SetOrder(ids) => {
				self.set_order(ids);
				tracing::trace!(order = %String::from_utf8_lossy(ids), depth = self.order.len(), "set order");
			}
			Command::Lookup(name) => {
				let hit = self.lookup(name);
				tracing::trace!(name = %String::from_utf8_lossy(name), ?hit, "lookup");
			}
		}
	}

	/// Processes `input` up to its end marker and returns the fingerprint.
	///
	/// The first malformed command aborts the run; commands before it have
	/// already been applied.
	pub fn run(&mut self, input: &'src [u8]) -> Result<Fingerprint> {
		for item in Commands::new(input) {
			let Located { offset, value } = item.inspect_err(|err| {
				tracing::debug!(offset = err.offset(), %err, "aborting run");
			})?;
			let _command_span = tracing::trace_span!("command", offset).entered();
			self.apply(value);
		}

		let Counters {
			defines,
			order_changes,
			lookups,
			hits,
		} = self.counters;
		tracing::debug!(
			defines,
			order_changes,
			lookups,
			hits,
			tables = self.wordlists.tables().count(),
			fingerprint = %self.fingerprint,
			"run complete"
		);
		Ok(self.fingerprint)
	}

	/// Resolver over the current registry and search order.
	pub fn resolver(&self) -> Resolver<'_, 'src> {
		Resolver::new(&self.wordlists, &self.order)
	}

	pub fn fingerprint(&self) -> Fingerprint {
		self.fingerprint
	}

	/// Counters so far and the shape of every table created so far.
	pub fn stats(&self) -> EngineStats {
		let Counters {
			defines,
			order_changes,
			lookups,
			hits,
		} = self.counters;
		let tables = self
			.wordlists
			.tables()
			.map(|(wordlist, table)| TableStats {
				wordlist,
				entries: table.len(),
				buckets: table.bucket_count(),
				longest_chain: table.longest_chain(),
			})
			.collect();
		EngineStats {
			defines,
			order_changes,
			lookups,
			hits,
			tables,
		}
	}

	pub fn order(&self) -> &SearchOrder {
		&self.order
	}
}

/// Runs a fresh engine over `input`.
pub fn fingerprint(input: &[u8], config: &EngineConfig) -> Result<Fingerprint> {
	Engine::new(config).run(input)
}
