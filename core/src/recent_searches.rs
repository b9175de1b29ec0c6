use std::{collections::HashSet, fmt, sync::Arc};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{
	identity::{SearchFormData, SearchIdentity},
	storage::{read_or_default, write_value, KeyValueStorage, RECENT_SEARCHES_KEY},
};

pub const MAX_RECENT_SEARCHES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSearchEntry {
	#[serde(flatten)]
	pub identity: SearchIdentity,
	/// `server-gameName-tagLine`, unique within the store
	pub id: String,
	/// Milliseconds since the unix epoch at which the search was made
	pub timestamp: i64,
}

type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

/// Bounded, deduplicated, most-recent-first history of searches.
///
/// The list lives in memory and every mutation replaces the persisted copy with a single
/// write. Persistence failures are logged; the in-memory list stays authoritative for the
/// rest of the process.
pub struct RecentSearchStore {
	storage: Arc<dyn KeyValueStorage>,
	entries: Vec<RecentSearchEntry>,
	clock: Clock,
}

impl fmt::Debug for RecentSearchStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RecentSearchStore")
			.field("entries", &self.entries)
			.finish_non_exhaustive()
	}
}

impl RecentSearchStore {
	pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
		Self::with_clock(storage, || Utc::now().timestamp_millis())
	}

	pub fn with_clock(
		storage: Arc<dyn KeyValueStorage>,
		clock: impl Fn() -> i64 + Send + Sync + 'static,
	) -> Self {
		let mut store = Self {
			storage,
			entries: Vec::new(),
			clock: Box::new(clock),
		};
		store.reload();

		store
	}

	/// Re-reads the persisted list, dropping duplicate ids and anything past the cap
	pub fn reload(&mut self) {
		let mut seen = HashSet::new();

		self.entries = read_or_default::<Vec<RecentSearchEntry>>(&*self.storage, RECENT_SEARCHES_KEY)
			.into_iter()
			.filter(|entry| seen.insert(entry.id.clone()))
			.take(MAX_RECENT_SEARCHES)
			.collect();
	}

	pub fn list(&self) -> &[RecentSearchEntry] {
		&self.entries
	}

	/// Records a search at the front of the list.
	///
	/// Incomplete forms are ignored. Searching an identity again moves it to the front with
	/// a fresh timestamp instead of duplicating it.
	pub fn add(&mut self, search: &SearchFormData) {
		if !search.is_complete() {
			return;
		}

		let identity = SearchIdentity::new(
			search.server.clone(),
			search.game_name.clone(),
			search.tag_line.clone(),
		);
		let entry = RecentSearchEntry {
			id: identity.recent_id(),
			identity,
			timestamp: (self.clock)(),
		};

		debug!(id = %entry.id, "Recording recent search");

		self.entries.retain(|existing| existing.id != entry.id);
		self.entries.insert(0, entry);
		self.entries.truncate(MAX_RECENT_SEARCHES);

		self.persist();
	}

	pub fn remove(&mut self, id: &str) {
		let before = self.entries.len();
		self.entries.retain(|entry| entry.id != id);

		if self.entries.len() != before {
			self.persist();
		}
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		self.persist();
	}

	fn persist(&self) {
		if let Err(e) = write_value(&*self.storage, RECENT_SEARCHES_KEY, &self.entries) {
			error!("Failed to persist recent searches: {e:#}");
		}
	}
}
