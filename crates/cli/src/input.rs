use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Reads the whole command stream from `path`, or from stdin for `-`.
///
/// The buffer is returned as read; the engine treats its physical end as the
/// end marker.
pub fn read(path: &Path, stdin: bool) -> anyhow::Result<Vec<u8>> {
	let bytes = if stdin {
		let mut buf = Vec::new();
		std::io::stdin()
			.lock()
			.read_to_end(&mut buf)
			.context("reading standard input")?;
		buf
	} else {
		std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
	};
	tracing::debug!(path = %path.display(), len = bytes.len(), "input loaded");
	Ok(bytes)
}
