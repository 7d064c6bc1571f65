use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const REFERENCE_INPUT: &[u8] = b"\nAfoo\tA bar\tA foo";
const REFERENCE_OUTPUT: &str = "b64d532aaaf18c7c\n";

fn wlfp() -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_wlfp"));
	cmd.env_remove("WLFP_LOG");
	cmd
}

fn input_file(bytes: &[u8]) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(bytes).unwrap();
	file
}

fn run_on(bytes: &[u8], extra: &[&str]) -> Output {
	let file = input_file(bytes);
	wlfp().args(extra).arg(file.path()).output().unwrap()
}

fn stdout(output: &Output) -> &str {
	std::str::from_utf8(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> &str {
	std::str::from_utf8(&output.stderr).unwrap()
}

#[test]
fn prints_reference_fingerprint() {
	let output = run_on(REFERENCE_INPUT, &[]);
	assert!(output.status.success(), "stderr: {}", stderr(&output));
	assert_eq!(stdout(&output), REFERENCE_OUTPUT);
}

#[test]
fn empty_file_prints_zero() {
	let output = run_on(b"", &[]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), "0\n");
}

#[test]
fn reads_standard_input() {
	let mut child = wlfp()
		.arg("-")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();
	child.stdin.take().unwrap().write_all(REFERENCE_INPUT).unwrap();
	let output = child.wait_with_output().unwrap();
	assert!(output.status.success());
	assert_eq!(stdout(&output), REFERENCE_OUTPUT);
}

#[test]
fn table_settings_do_not_change_output() {
	for args in [
		&["--buckets", "1"][..],
		&["--hasher", "fx"][..],
		&["--buckets", "7", "--hasher", "big-endian"][..],
	] {
		let output = run_on(REFERENCE_INPUT, args);
		assert!(output.status.success());
		assert_eq!(stdout(&output), REFERENCE_OUTPUT, "args: {args:?}");
	}
}

#[test]
fn config_file_is_applied() {
	let config = input_file(b"buckets = 2\nhasher = \"fx\"\n");
	let input = input_file(REFERENCE_INPUT);
	let output = wlfp()
		.arg("--config")
		.arg(config.path())
		.arg(input.path())
		.output()
		.unwrap();
	assert!(output.status.success(), "stderr: {}", stderr(&output));
	assert_eq!(stdout(&output), REFERENCE_OUTPUT);
}

#[test]
fn invalid_config_fails() {
	let config = input_file(b"buckets = \"many\"\n");
	let input = input_file(REFERENCE_INPUT);
	let output = wlfp()
		.arg("--config")
		.arg(config.path())
		.arg(input.path())
		.output()
		.unwrap();
	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("invalid config"));
	assert!(output.stdout.is_empty());
}

#[test]
fn invalid_command_byte_fails() {
	let output = run_on(b"\nAfoo\r", &[]);
	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("invalid input"));
	assert!(output.stdout.is_empty());
}

#[test]
fn missing_argument_fails_with_usage() {
	let output = wlfp().output().unwrap();
	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("Usage"));
}

#[test]
fn unreadable_file_fails() {
	let output = wlfp().arg("/nonexistent/wlfp-input").output().unwrap();
	assert_eq!(output.status.code(), Some(1));
	assert!(stderr(&output).contains("/nonexistent/wlfp-input"));
}

#[test]
fn help_succeeds() {
	let output = wlfp().arg("--help").output().unwrap();
	assert!(output.status.success());
	assert!(stdout(&output).contains("--hasher"));
}

#[test]
fn stats_go_to_stderr() {
	let output = run_on(REFERENCE_INPUT, &["--stats"]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), REFERENCE_OUTPUT);
	let stats = stderr(&output);
	assert!(stats.contains("lookups:        2"), "stats: {stats}");
	assert!(stats.contains("hits:           1"), "stats: {stats}");
	assert!(stats.contains("wordlists:      1"), "stats: {stats}");
	assert!(stats.contains("entries:        1"), "stats: {stats}");
	assert!(
		stats.contains("wordlist A:     entries 1, longest chain 1, buckets 4000"),
		"stats: {stats}"
	);
}

#[test]
fn stats_list_each_wordlist_in_identifier_order() {
	let output = run_on(b"\nBx\nAx\nAx\nAy", &["--stats", "--buckets", "1"]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), "0\n");
	let wordlists: Vec<&str> = stderr(&output)
		.lines()
		.filter(|line| line.starts_with("wordlist "))
		.collect();
	assert_eq!(
		wordlists,
		[
			"wordlist A:     entries 3, longest chain 3, buckets 1",
			"wordlist B:     entries 1, longest chain 1, buckets 1",
		]
	);
	assert!(stderr(&output).contains("entries:        4"));
}

#[test]
fn verbose_logs_run_summary_to_stderr() {
	let output = run_on(REFERENCE_INPUT, &["-v"]);
	assert!(output.status.success());
	assert_eq!(stdout(&output), REFERENCE_OUTPUT);
	let log = stderr(&output);
	assert!(log.contains("run complete"), "log: {log}");
	assert!(log.contains("creating wordlist"), "log: {log}");
	assert!(!log.contains("TRACE"), "log: {log}");
}

#[test]
fn quiet_by_default() {
	let output = run_on(REFERENCE_INPUT, &[]);
	assert!(output.status.success());
	assert_eq!(stderr(&output), "");
}

#[test]
fn log_filter_from_environment_traces_each_command_once() {
	let file = input_file(REFERENCE_INPUT);
	let output = wlfp()
		.env("WLFP_LOG", "wlfp_engine=trace")
		.arg(file.path())
		.output()
		.unwrap();
	assert!(output.status.success());
	assert_eq!(stdout(&output), REFERENCE_OUTPUT);

	let log = stderr(&output);
	let commands: Vec<&str> = log
		.lines()
		.filter(|line| line.contains("TRACE command{offset="))
		.collect();
	assert_eq!(commands.len(), 5, "log: {log}");
	assert!(
		commands
			.iter()
			.any(|line| line.contains("command{offset=13}") && line.contains("lookup name=foo")),
		"log: {log}"
	);
	assert!(log.contains("run complete"), "log: {log}");
}
