use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use wlfp_engine::HashKind;

#[derive(Parser, Debug)]
#[command(name = "wlfp")]
#[command(about = "Replay wordlist define/order/lookup commands and print the lookup fingerprint")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Command file to process (`-` reads standard input)
	#[arg(value_name = "FILE")]
	pub file: PathBuf,

	/// TOML file with engine settings
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Buckets per wordlist table (overrides the config file)
	#[arg(long, value_name = "N")]
	pub buckets: Option<NonZeroUsize>,

	/// Bucket hashing scheme (overrides the config file)
	#[arg(long, value_enum)]
	pub hasher: Option<HashKind>,

	/// Print run statistics to stderr
	#[arg(long)]
	pub stats: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	/// Whether the input comes from standard input.
	pub fn reads_stdin(&self) -> bool {
		self.file.as_os_str() == "-"
	}
}
