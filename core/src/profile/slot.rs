use std::fmt;

use serde::Serialize;

/// One of the independently tracked sections of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
	Account,
	LeagueEntries,
	ChampionStats,
	Matches,
}

impl SlotKind {
	pub const ALL: [SlotKind; 4] = [
		Self::Account,
		Self::LeagueEntries,
		Self::ChampionStats,
		Self::Matches,
	];

	/// Message shown in place of the section when its fetch fails
	pub fn error_message(&self) -> &'static str {
		match self {
			Self::Account => "Failed to load account",
			Self::LeagueEntries => "Failed to load league entries",
			Self::ChampionStats => "Failed to load champion stats",
			Self::Matches => "Failed to load matches",
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Account => "account",
			Self::LeagueEntries => "league_entries",
			Self::ChampionStats => "champion_stats",
			Self::Matches => "matches",
		}
	}
}

impl fmt::Display for SlotKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
	Idle,
	Loading,
	Success,
	Error,
}

/// Data, loading flag and error of a single section.
///
/// `error` is only ever set once the fetch has terminated, so it never coexists with
/// `loading`. `data` is never cleared once set, a failing or in-flight refetch keeps it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotState<T> {
	pub data: Option<T>,
	pub loading: bool,
	pub error: Option<String>,
}

impl<T> Default for SlotState<T> {
	fn default() -> Self {
		Self::idle()
	}
}

impl<T> SlotState<T> {
	pub fn idle() -> Self {
		Self {
			data: None,
			loading: false,
			error: None,
		}
	}

	pub fn loading() -> Self {
		Self {
			loading: true,
			..Self::idle()
		}
	}

	pub fn loaded(data: T) -> Self {
		Self {
			data: Some(data),
			..Self::idle()
		}
	}

	pub fn status(&self) -> SlotStatus {
		if self.loading {
			SlotStatus::Loading
		} else if self.error.is_some() {
			SlotStatus::Error
		} else if self.data.is_some() {
			SlotStatus::Success
		} else {
			SlotStatus::Idle
		}
	}

	/// Whether the last fetch of this slot has terminated, successfully or not
	pub fn is_settled(&self) -> bool {
		matches!(self.status(), SlotStatus::Success | SlotStatus::Error)
	}

	pub(crate) fn begin(&mut self) {
		self.loading = true;
		self.error = None;
	}

	pub(crate) fn succeed(&mut self, data: T) {
		self.data = Some(data);
		self.loading = false;
		self.error = None;
	}

	pub(crate) fn fail(&mut self, message: impl Into<String>) {
		self.loading = false;
		self.error = Some(message.into());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn walks_idle_loading_success() {
		let mut slot = SlotState::<u32>::default();
		assert_eq!(slot.status(), SlotStatus::Idle);
		assert!(!slot.is_settled());

		slot.begin();
		assert_eq!(slot.status(), SlotStatus::Loading);

		slot.succeed(7);
		assert_eq!(slot.status(), SlotStatus::Success);
		assert_eq!(slot.data, Some(7));
		assert!(slot.is_settled());
	}

	#[test]
	fn failure_keeps_previous_data() {
		let mut slot = SlotState::loaded(vec![1, 2]);

		slot.begin();
		assert_eq!(slot.status(), SlotStatus::Loading);
		assert_eq!(slot.data, Some(vec![1, 2]));

		slot.fail(SlotKind::Matches.error_message());
		assert_eq!(slot.status(), SlotStatus::Error);
		assert!(!slot.loading);
		assert_eq!(slot.data, Some(vec![1, 2]));
		assert_eq!(slot.error.as_deref(), Some("Failed to load matches"));
	}

	#[test]
	fn restarting_clears_error() {
		let mut slot = SlotState::<()>::loading();
		slot.fail("boom");

		slot.begin();

		assert_eq!(slot.error, None);
		assert!(slot.loading);
	}
}
