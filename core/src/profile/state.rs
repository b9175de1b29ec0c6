use whgg_api::{AccountData, ChampionStatsData, LeagueEntryData, MatchData};

use serde::Serialize;

use super::slot::{SlotKind, SlotState, SlotStatus};

/// Everything the profile view renders, one slot per section
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewState {
	pub account: SlotState<AccountData>,
	pub league_entries: SlotState<Vec<LeagueEntryData>>,
	pub champion_stats: SlotState<Vec<ChampionStatsData>>,
	pub matches: SlotState<Vec<MatchData>>,
}

/// A single transition of one slot
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
	Started(SlotKind),
	AccountLoaded(AccountData),
	LeagueEntriesLoaded(Vec<LeagueEntryData>),
	ChampionStatsLoaded(Vec<ChampionStatsData>),
	MatchesLoaded(Vec<MatchData>),
	Failed(SlotKind),
}

impl ProfileViewState {
	/// The account came with the navigation; the other three sections load right away
	pub fn with_account(account: AccountData) -> Self {
		Self {
			account: SlotState::loaded(account),
			league_entries: SlotState::loading(),
			champion_stats: SlotState::loading(),
			matches: SlotState::loading(),
		}
	}

	/// Nothing is known yet; every section shows as loading while the account is fetched
	pub fn awaiting_account() -> Self {
		Self {
			account: SlotState::loading(),
			league_entries: SlotState::loading(),
			champion_stats: SlotState::loading(),
			matches: SlotState::loading(),
		}
	}

	pub fn apply(&mut self, action: ProfileAction) {
		match action {
			ProfileAction::Started(kind) => match kind {
				SlotKind::Account => self.account.begin(),
				SlotKind::LeagueEntries => self.league_entries.begin(),
				SlotKind::ChampionStats => self.champion_stats.begin(),
				SlotKind::Matches => self.matches.begin(),
			},
			ProfileAction::AccountLoaded(account) => self.account.succeed(account),
			ProfileAction::LeagueEntriesLoaded(entries) => self.league_entries.succeed(entries),
			ProfileAction::ChampionStatsLoaded(stats) => self.champion_stats.succeed(stats),
			ProfileAction::MatchesLoaded(matches) => self.matches.succeed(matches),
			ProfileAction::Failed(kind) => {
				let message = kind.error_message();
				match kind {
					SlotKind::Account => self.account.fail(message),
					SlotKind::LeagueEntries => self.league_entries.fail(message),
					SlotKind::ChampionStats => self.champion_stats.fail(message),
					SlotKind::Matches => self.matches.fail(message),
				}
			}
		}
	}

	pub fn status(&self, kind: SlotKind) -> SlotStatus {
		match kind {
			SlotKind::Account => self.account.status(),
			SlotKind::LeagueEntries => self.league_entries.status(),
			SlotKind::ChampionStats => self.champion_stats.status(),
			SlotKind::Matches => self.matches.status(),
		}
	}

	pub fn is_loading(&self, kind: SlotKind) -> bool {
		match kind {
			SlotKind::Account => self.account.loading,
			SlotKind::LeagueEntries => self.league_entries.loading,
			SlotKind::ChampionStats => self.champion_stats.loading,
			SlotKind::Matches => self.matches.loading,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn account() -> AccountData {
		AccountData {
			puuid: "puuid".to_string(),
			game_name: "Faker".to_string(),
			tag_line: "KR1".to_string(),
			summoner_level: 700,
			profile_icon_id: 1,
		}
	}

	#[test]
	fn known_account_starts_dependents_loading() {
		let state = ProfileViewState::with_account(account());

		assert_eq!(state.account.status(), SlotStatus::Success);
		for kind in [SlotKind::LeagueEntries, SlotKind::ChampionStats, SlotKind::Matches] {
			assert!(state.is_loading(kind));
		}
		assert_eq!(state.matches.data, None);
	}

	#[test]
	fn actions_touch_only_their_slot() {
		let mut state = ProfileViewState::with_account(account());

		state.apply(ProfileAction::MatchesLoaded(Vec::new()));
		state.apply(ProfileAction::Failed(SlotKind::ChampionStats));

		assert_eq!(state.matches.status(), SlotStatus::Success);
		assert_eq!(state.champion_stats.status(), SlotStatus::Error);
		assert_eq!(
			state.champion_stats.error.as_deref(),
			Some("Failed to load champion stats")
		);
		assert_eq!(state.league_entries.status(), SlotStatus::Loading);
		assert_eq!(state.account.status(), SlotStatus::Success);
	}

	#[test]
	fn failed_account_leaves_dependents_untouched() {
		let mut state = ProfileViewState::awaiting_account();

		state.apply(ProfileAction::Failed(SlotKind::Account));

		assert_eq!(state.account.error.as_deref(), Some("Failed to load account"));
		assert_eq!(state.league_entries, SlotState::loading());
		assert_eq!(state.champion_stats, SlotState::loading());
		assert_eq!(state.matches, SlotState::loading());
	}
}
