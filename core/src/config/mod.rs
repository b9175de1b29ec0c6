//! Application configuration management

use std::{io, path::PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

mod app_config;

pub use app_config::{AppConfig, CONFIG_FILE_NAME};

/// Overrides the platform data directory
pub const DATA_DIR_ENV: &str = "WHGG_DATA_DIR";

/// Overrides the configured profile service url
pub const API_URL_ENV: &str = "WHGG_API_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("could not determine a data directory, set $WHGG_DATA_DIR")]
	NoDataDir,
	#[error("config file I/O error: {source}; path: '{}'", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("malformed config file: {0}")]
	Json(#[from] serde_json::Error),
	#[error("unknown config version: {0}")]
	UnknownVersion(u32),
}

/// Platform-specific data directory resolution, `$WHGG_DATA_DIR` wins when set
pub fn default_data_dir() -> Result<PathBuf, ConfigError> {
	if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
		return Ok(PathBuf::from(dir));
	}

	ProjectDirs::from("gg", "whgg", "whgg")
		.map(|dirs| dirs.data_local_dir().to_path_buf())
		.ok_or(ConfigError::NoDataDir)
}
