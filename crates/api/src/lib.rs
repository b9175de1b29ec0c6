//! Client for the WHGG profile data service.
//!
//! Every lookup is a single `GET` keyed by server, game name and tag line (champion stats
//! are keyed by game name and tag line only). The [`ProfileDataService`] trait is the seam
//! the rest of the workspace depends on; [`ApiClient`] is the HTTP implementation.

pub mod server;
pub mod types;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

pub use server::Server;
pub use types::*;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Clone)]
pub struct RequestConfig {
	pub client: reqwest::Client,
	pub api_url: String,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("request failed: {0}")]
	Request(#[source] reqwest::Error),
	#[error("Error {status}: {reason}")]
	Status { status: u16, reason: String },
	#[error("failed to decode response body: {0}")]
	Decode(#[source] reqwest::Error),
	#[error("invalid api url: <url='{0}'>")]
	InvalidUrl(String),
}

impl Error {
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND.as_u16())
	}

	pub fn is_connection(&self) -> bool {
		matches!(self, Self::Request(e) if e.is_connect() || e.is_timeout())
	}
}

/// Operations offered by the profile data service
#[async_trait]
pub trait ProfileDataService: Send + Sync {
	async fn fetch_account(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<AccountData, Error>;

	async fn fetch_league_entries(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<LeagueEntryData>, Error>;

	async fn fetch_champion_stats(
		&self,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<ChampionStatsData>, Error>;

	async fn fetch_matches(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<MatchData>, Error>;
}

/// The path segment identifying a player, `{gameName}-{tagLine}` lower-cased
pub fn player_slug(game_name: &str, tag_line: &str) -> String {
	format!("{}-{}", game_name.to_lowercase(), tag_line.to_lowercase())
}

/// Appends `segments` to the API base url, percent-encoding each one
pub fn endpoint<I>(api_url: &str, segments: I) -> Result<Url, Error>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let mut url = Url::parse(api_url).map_err(|_| Error::InvalidUrl(api_url.to_string()))?;

	url.path_segments_mut()
		.map_err(|()| Error::InvalidUrl(api_url.to_string()))?
		.pop_if_empty()
		.extend(segments);

	Ok(url)
}

async fn get_json<T: DeserializeOwned>(config: &RequestConfig, url: Url) -> Result<T, Error> {
	debug!(%url, "Requesting profile data");

	let response = config
		.client
		.get(url)
		.send()
		.await
		.map_err(Error::Request)?;

	let status = response.status();
	if !status.is_success() {
		return Err(Error::Status {
			status: status.as_u16(),
			reason: status.canonical_reason().unwrap_or_default().to_string(),
		});
	}

	response.json().await.map_err(Error::Decode)
}

pub mod account {
	use super::*;

	pub use get::exec as get;
	pub mod get {
		use super::*;

		pub type Response = AccountData;

		pub async fn exec(
			config: &RequestConfig,
			server: &str,
			game_name: &str,
			tag_line: &str,
		) -> Result<Response, Error> {
			let url = endpoint(
				&config.api_url,
				[
					"v1",
					"account",
					server.to_lowercase().as_str(),
					player_slug(game_name, tag_line).as_str(),
				],
			)?;

			get_json(config, url).await
		}
	}
}

pub mod ranked {
	use super::*;

	pub use list::exec as list;
	pub mod list {
		use super::*;

		pub type Response = Vec<LeagueEntryData>;

		pub async fn exec(
			config: &RequestConfig,
			server: &str,
			game_name: &str,
			tag_line: &str,
		) -> Result<Response, Error> {
			let url = endpoint(
				&config.api_url,
				[
					"v1",
					"ranked",
					server.to_lowercase().as_str(),
					player_slug(game_name, tag_line).as_str(),
				],
			)?;

			get_json(config, url).await
		}
	}
}

pub mod champion_stats {
	use super::*;

	pub use list::exec as list;
	pub mod list {
		use super::*;

		pub type Response = Vec<ChampionStatsData>;

		pub async fn exec(
			config: &RequestConfig,
			game_name: &str,
			tag_line: &str,
		) -> Result<Response, Error> {
			let url = endpoint(
				&config.api_url,
				[
					"v1",
					"champion",
					"stats",
					player_slug(game_name, tag_line).as_str(),
					"ranked",
				],
			)?;

			get_json(config, url).await
		}
	}
}

pub mod matches {
	use super::*;

	pub use list::exec as list;
	pub mod list {
		use super::*;

		pub type Response = Vec<MatchData>;

		pub async fn exec(
			config: &RequestConfig,
			server: &str,
			game_name: &str,
			tag_line: &str,
		) -> Result<Response, Error> {
			let url = endpoint(
				&config.api_url,
				[
					"v1",
					"matches",
					server.to_lowercase().as_str(),
					player_slug(game_name, tag_line).as_str(),
				],
			)?;

			get_json(config, url).await
		}
	}
}

/// HTTP implementation of [`ProfileDataService`]
#[derive(Clone)]
pub struct ApiClient {
	config: RequestConfig,
}

impl ApiClient {
	pub fn new(api_url: impl Into<String>) -> Self {
		Self::with_client(reqwest::Client::new(), api_url)
	}

	pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
		Self {
			config: RequestConfig {
				client,
				api_url: api_url.into(),
			},
		}
	}

	pub fn api_url(&self) -> &str {
		&self.config.api_url
	}
}

#[async_trait]
impl ProfileDataService for ApiClient {
	async fn fetch_account(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<AccountData, Error> {
		account::get(&self.config, server, game_name, tag_line).await
	}

	async fn fetch_league_entries(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<LeagueEntryData>, Error> {
		ranked::list(&self.config, server, game_name, tag_line).await
	}

	async fn fetch_champion_stats(
		&self,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<ChampionStatsData>, Error> {
		champion_stats::list(&self.config, game_name, tag_line).await
	}

	async fn fetch_matches(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<MatchData>, Error> {
		matches::list(&self.config, server, game_name, tag_line).await
	}
}
