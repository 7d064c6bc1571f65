//! Wordlist symbol tables and search-order lookup fingerprinting.
//!
//! The engine replays a byte stream of three commands over 256 lazily created
//! wordlists:
//!
//! - `\n` `<id>` `<name>`: define `name` in wordlist `id` with the next serial number
//! - `\t` `<ids>...`: replace the search order (bottom first, top last)
//! - ` ` `<name>`: look `name` up through the search order, top first
//!
//! Every successful lookup folds the serial number it found into a 64-bit
//! [`Fingerprint`]. The final value is a bit-exact regression check, so the
//! shadowing and traversal policies of each component are load-bearing.
//!
//! ```
//! use wlfp_engine::{EngineConfig, fingerprint};
//!
//! let value = fingerprint(b"\nAfoo\tA bar\tA foo", &EngineConfig::default()).unwrap();
//! assert_eq!(value.value(), 0xb64d_532a_aaf1_8c7c);
//! ```

/// Command stream tokenizer.
pub mod command;
/// Engine configuration.
pub mod config;
/// Stream processor tying the components together.
pub mod engine;
/// Error types for stream processing.
pub mod error;
/// Lookup fingerprint accumulator.
pub mod fingerprint;
/// Bucket hashing schemes.
pub mod hash;
/// Identifier newtypes.
pub mod ids;
/// Search order state.
pub mod order;
/// Search-order name resolution.
pub mod resolver;
/// Chained symbol table.
pub mod table;
/// Registry of the 256 wordlists.
pub mod wordlists;

pub use command::{Command, Commands, Located};
pub use config::{DEFAULT_BUCKETS, EngineConfig};
pub use engine::{Engine, EngineStats, TableStats, fingerprint};
pub use error::{ProcessError, Result};
pub use fingerprint::Fingerprint;
pub use hash::HashKind;
pub use ids::{Serial, WordlistId};
pub use order::SearchOrder;
pub use resolver::{Hit, Resolver};
pub use table::SymbolTable;
pub use wordlists::Wordlists;

