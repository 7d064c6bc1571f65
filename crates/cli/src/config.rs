//! Engine configuration loading.
//!
//! Settings are layered: defaults, then the optional `--config` TOML file,
//! then individual command-line overrides.

use std::path::{Path, PathBuf};

use thiserror::Error;
use wlfp_engine::EngineConfig;

use crate::cli::Cli;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML or an invalid setting.
	#[error("invalid config {path}: {error}")]
	Toml {
		/// Path to the offending file.
		path: PathBuf,
		/// The underlying parse error.
		error: toml::de::Error,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Parses an engine configuration file.
pub fn load(path: &Path) -> Result<EngineConfig> {
	let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	toml::from_str(&text).map_err(|error| ConfigError::Toml {
		path: path.to_path_buf(),
		error,
	})
}

/// Builds the effective configuration for `cli`.
pub fn resolve(cli: &Cli) -> Result<EngineConfig> {
	let mut config = match &cli.config {
		Some(path) => {
			let config = load(path)?;
			tracing::debug!(path = %path.display(), ?config, "loaded config file");
			config
		}
		None => EngineConfig::default(),
	};
	if let Some(buckets) = cli.buckets {
		config.buckets = buckets;
	}
	if let Some(hasher) = cli.hasher {
		config.hasher = hasher;
	}
	Ok(config)
}
