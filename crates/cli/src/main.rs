//! `wlfp` binary.
//!
//! Reads a command file, replays it through the engine and prints the
//! fingerprint as bare lowercase hex. Every failure is reported on stderr
//! with exit code 1.

mod cli;
mod config;
mod input;

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use wlfp_engine::{Engine, EngineStats};

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) => {
			let _ = err.print();
			return if err.use_stderr() {
				ExitCode::FAILURE
			} else {
				ExitCode::SUCCESS
			};
		}
	};

	setup_tracing(cli.verbose);

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("wlfp: {err:#}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let config = config::resolve(cli)?;
	let input = input::read(&cli.file, cli.reads_stdin())?;

	let mut engine = Engine::new(&config);
	let fingerprint = engine
		.run(&input)
		.with_context(|| format!("processing {}", cli.file.display()))?;

	let mut stdout = std::io::stdout().lock();
	writeln!(stdout, "{fingerprint:x}")?;
	stdout.flush()?;

	if cli.stats {
		print_stats(&engine.stats());
	}
	Ok(())
}

fn print_stats(stats: &EngineStats) {
	eprintln!("defines:        {}", stats.defines);
	eprintln!("order changes:  {}", stats.order_changes);
	eprintln!("lookups:        {}", stats.lookups);
	eprintln!("hits:           {}", stats.hits);
	eprintln!("misses:         {}", stats.misses());
	eprintln!("wordlists:      {}", stats.tables_created());
	eprintln!("entries:        {}", stats.total_entries());
	for table in &stats.tables {
		let label = format!("wordlist {}:", table.wordlist);
		eprintln!(
			"{label:<16}entries {}, longest chain {}, buckets {}",
			table.entries, table.longest_chain, table.buckets
		);
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("WLFP_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("wlfp_engine=debug,wlfp=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(true)
		.init();
}
