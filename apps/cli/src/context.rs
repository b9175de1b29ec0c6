use whgg_core::{
	api::{ApiClient, ProfileDataService},
	AppConfig, JsonFileStorage, KeyValueStorage, RecentSearchStore, SearchSession,
};

use std::{path::PathBuf, sync::Arc};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
	Human,
	Json,
}

/// Everything a command needs, built once from the global flags
pub struct Context {
	pub config: AppConfig,
	pub data_dir: PathBuf,
	pub format: OutputFormat,
	pub service: Arc<dyn ProfileDataService>,
	pub storage: Arc<dyn KeyValueStorage>,
}

impl Context {
	pub fn new(
		data_dir: PathBuf,
		mut config: AppConfig,
		api_url: Option<String>,
		format: OutputFormat,
	) -> Self {
		if let Some(api_url) = api_url {
			config.api_url = api_url;
		}

		Self {
			service: Arc::new(ApiClient::new(config.api_url.clone())),
			storage: Arc::new(JsonFileStorage::in_dir(&data_dir)),
			config,
			data_dir,
			format,
		}
	}

	pub fn search_session(&self) -> SearchSession {
		SearchSession::new(Arc::clone(&self.service), Arc::clone(&self.storage))
	}

	pub fn recent_searches(&self) -> RecentSearchStore {
		RecentSearchStore::load(Arc::clone(&self.storage))
	}
}
