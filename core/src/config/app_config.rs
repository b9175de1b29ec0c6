//! Application configuration

use whgg_api::{Server, DEFAULT_API_URL};

use std::{
	fs,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{ConfigError, API_URL_ENV};

pub const CONFIG_FILE_NAME: &str = "whgg.json";

const CURRENT_VERSION: u32 = 1;

/// Main application configuration, stored as JSON in the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
	/// Config schema version
	pub version: u32,

	/// Base url of the profile data service
	pub api_url: String,

	/// Server preselected on an empty search form
	#[serde(default)]
	pub default_server: Server,

	/// Logging level, used when `RUST_LOG` is not set
	pub log_level: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			version: CURRENT_VERSION,
			api_url: DEFAULT_API_URL.to_string(),
			default_server: Server::default(),
			log_level: "info".to_string(),
		}
	}
}

impl AppConfig {
	pub fn config_path(data_dir: &Path) -> PathBuf {
		data_dir.join(CONFIG_FILE_NAME)
	}

	/// Load configuration from `data_dir`, creating a default one if absent.
	///
	/// `$WHGG_API_URL` overrides the stored api url without being written back.
	pub fn load_or_create(data_dir: &Path) -> Result<Self, ConfigError> {
		let mut config = Self::load_from(data_dir)?;

		if let Some(api_url) = std::env::var(API_URL_ENV).ok().filter(|url| !url.is_empty()) {
			config.api_url = api_url;
		}

		Ok(config)
	}

	/// Load configuration from a specific data directory without environment overrides
	pub fn load_from(data_dir: &Path) -> Result<Self, ConfigError> {
		let config_path = Self::config_path(data_dir);

		if !config_path.exists() {
			warn!("No config found, creating default at {}", config_path.display());
			let config = Self::default();
			config.save(data_dir)?;
			return Ok(config);
		}

		info!("Loading config from {}", config_path.display());
		let json = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
			path: config_path.clone(),
			source,
		})?;
		let mut config: AppConfig = serde_json::from_str(&json)?;

		if config.version < CURRENT_VERSION {
			info!(
				"Migrating config from v{} to v{CURRENT_VERSION}",
				config.version
			);
			config.migrate()?;
			config.save(data_dir)?;
		}

		Ok(config)
	}

	pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
		fs::create_dir_all(data_dir).map_err(|source| ConfigError::Io {
			path: data_dir.to_path_buf(),
			source,
		})?;

		let config_path = Self::config_path(data_dir);
		fs::write(&config_path, serde_json::to_string_pretty(self)?).map_err(|source| {
			ConfigError::Io {
				path: config_path.clone(),
				source,
			}
		})?;

		info!("Saved config to {}", config_path.display());
		Ok(())
	}

	fn migrate(&mut self) -> Result<(), ConfigError> {
		match self.version {
			0 => {
				self.version = 1;
				Ok(())
			}
			CURRENT_VERSION => Ok(()),
			v => Err(ConfigError::UnknownVersion(v)),
		}
	}
}
