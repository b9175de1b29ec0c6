//! Search submission: form validation, account lookup and search history.

use whgg_api::{ProfileDataService, Server};

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::{
	identity::{SearchFormData, ValidationError},
	recent_searches::RecentSearchStore,
	route::ProfileNavigation,
	storage::{read_or_default, write_value, KeyValueStorage, LAST_SEARCH_KEY},
};

/// Why a search did not lead to a profile; `Display` is the message shown to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
	#[error(transparent)]
	Invalid(#[from] ValidationError),
	#[error("Player \"{game_name}#{tag_line}\" not found on {server}")]
	NotFound {
		game_name: String,
		tag_line: String,
		server: String,
	},
	#[error("Connection error. Please try again.")]
	Connection,
	#[error("Search failed")]
	Failed,
}

pub struct SearchSession {
	service: Arc<dyn ProfileDataService>,
	storage: Arc<dyn KeyValueStorage>,
	recent: RecentSearchStore,
}

impl SearchSession {
	pub fn new(service: Arc<dyn ProfileDataService>, storage: Arc<dyn KeyValueStorage>) -> Self {
		Self {
			recent: RecentSearchStore::load(Arc::clone(&storage)),
			service,
			storage,
		}
	}

	pub fn with_recent(
		service: Arc<dyn ProfileDataService>,
		storage: Arc<dyn KeyValueStorage>,
		recent: RecentSearchStore,
	) -> Self {
		Self {
			service,
			storage,
			recent,
		}
	}

	pub fn recent(&self) -> &RecentSearchStore {
		&self.recent
	}

	pub fn recent_mut(&mut self) -> &mut RecentSearchStore {
		&mut self.recent
	}

	/// The form as it was last submitted, if anything was ever submitted
	pub fn stored_form(&self) -> Option<SearchFormData> {
		read_or_default(&*self.storage, LAST_SEARCH_KEY)
	}

	/// The form as it was last submitted, or an empty one on the default server
	pub fn last_form(&self) -> SearchFormData {
		self.stored_form().unwrap_or_else(|| SearchFormData {
			server: Server::default().to_string(),
			..Default::default()
		})
	}

	/// Validates the form, looks the account up and on success remembers the search.
	///
	/// The returned navigation carries the fetched account so the profile view does not have
	/// to fetch it again.
	pub async fn submit(&mut self, form: &SearchFormData) -> Result<ProfileNavigation, SearchError> {
		let identity = form.validate()?;

		let remembered = SearchFormData::from(identity.clone());
		if let Err(e) = write_value(&*self.storage, LAST_SEARCH_KEY, &remembered) {
			error!("Failed to persist last search form: {e:#}");
		}

		info!(%identity, server = %identity.server, "Searching account");

		match self
			.service
			.fetch_account(&identity.server, &identity.game_name, &identity.tag_line)
			.await
		{
			Ok(account) => {
				self.recent.add(&remembered);

				Ok(ProfileNavigation {
					identity,
					account: Some(account),
				})
			}
			Err(e) => {
				error!(%identity, "Search failed: {e:#}");

				Err(if e.is_not_found() {
					SearchError::NotFound {
						game_name: identity.game_name,
						tag_line: identity.tag_line,
						server: identity.server.to_uppercase(),
					}
				} else if e.is_connection() {
					SearchError::Connection
				} else {
					SearchError::Failed
				})
			}
		}
	}
}
