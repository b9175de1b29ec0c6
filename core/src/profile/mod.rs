//! Loading orchestration for the profile view.
//!
//! Four sections are fetched independently: account, league entries, champion stats and
//! matches. The account gates the other three; once it is known they are requested
//! together and each slot is updated the moment its own response arrives, in whatever
//! order that happens. Failures are confined to their slot. Nothing is retried, timed out
//! or cancelled here.

mod slot;
mod state;

pub use slot::{SlotKind, SlotState, SlotStatus};
pub use state::{ProfileAction, ProfileViewState};

use whgg_api::ProfileDataService;

use std::sync::Arc;

use futures_concurrency::future::Join;
use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::{identity::SearchIdentity, route::ProfileNavigation};

pub struct ProfileLoadOrchestrator {
	service: Arc<dyn ProfileDataService>,
	identity: SearchIdentity,
	state: watch::Sender<ProfileViewState>,
}

impl ProfileLoadOrchestrator {
	pub fn new(service: Arc<dyn ProfileDataService>, navigation: ProfileNavigation) -> Self {
		let ProfileNavigation { identity, account } = navigation;

		let initial = match account {
			Some(account) => ProfileViewState::with_account(account),
			None => ProfileViewState::awaiting_account(),
		};

		Self {
			service,
			identity,
			state: watch::channel(initial).0,
		}
	}

	pub fn identity(&self) -> &SearchIdentity {
		&self.identity
	}

	/// Observe every slot transition as it is applied
	pub fn subscribe(&self) -> watch::Receiver<ProfileViewState> {
		self.state.subscribe()
	}

	pub fn snapshot(&self) -> ProfileViewState {
		self.state.borrow().clone()
	}

	/// Runs the loading protocol to completion.
	///
	/// Without account data the account is fetched first; if that fails the other three
	/// sections are never requested and keep their initial state.
	pub async fn load(&self) {
		let has_account = self.state.borrow().account.data.is_some();

		if !has_account && !self.fetch_account().await {
			warn!(
				identity = %self.identity,
				"Account lookup failed, dependent sections will not be requested"
			);
			return;
		}

		(
			self.fetch_league_entries(),
			self.fetch_champion_stats(),
			self.fetch_matches(),
		)
			.join()
			.await;
	}

	/// Explicitly fetches one section again, keeping whatever data it already had
	pub async fn reload(&self, kind: SlotKind) {
		match kind {
			SlotKind::Account => {
				self.fetch_account().await;
			}
			SlotKind::LeagueEntries => self.fetch_league_entries().await,
			SlotKind::ChampionStats => self.fetch_champion_stats().await,
			SlotKind::Matches => self.fetch_matches().await,
		}
	}

	fn dispatch(&self, action: ProfileAction) {
		self.state.send_modify(|state| state.apply(action));
	}

	fn fail(&self, kind: SlotKind, e: whgg_api::Error) {
		error!(identity = %self.identity, slot = %kind, "Failed to fetch profile section: {e:#}");
		self.dispatch(ProfileAction::Failed(kind));
	}

	async fn fetch_account(&self) -> bool {
		let SearchIdentity {
			server,
			game_name,
			tag_line,
		} = &self.identity;

		self.dispatch(ProfileAction::Started(SlotKind::Account));

		match self.service.fetch_account(server, game_name, tag_line).await {
			Ok(account) => {
				debug!(identity = %self.identity, "Account loaded");
				self.dispatch(ProfileAction::AccountLoaded(account));
				true
			}
			Err(e) => {
				self.fail(SlotKind::Account, e);
				false
			}
		}
	}

	async fn fetch_league_entries(&self) {
		let SearchIdentity {
			server,
			game_name,
			tag_line,
		} = &self.identity;

		self.dispatch(ProfileAction::Started(SlotKind::LeagueEntries));

		match self
			.service
			.fetch_league_entries(server, game_name, tag_line)
			.await
		{
			Ok(entries) => self.dispatch(ProfileAction::LeagueEntriesLoaded(entries)),
			Err(e) => self.fail(SlotKind::LeagueEntries, e),
		}
	}

	async fn fetch_champion_stats(&self) {
		let SearchIdentity {
			game_name,
			tag_line,
			..
		} = &self.identity;

		self.dispatch(ProfileAction::Started(SlotKind::ChampionStats));

		match self.service.fetch_champion_stats(game_name, tag_line).await {
			Ok(stats) => self.dispatch(ProfileAction::ChampionStatsLoaded(stats)),
			Err(e) => self.fail(SlotKind::ChampionStats, e),
		}
	}

	async fn fetch_matches(&self) {
		let SearchIdentity {
			server,
			game_name,
			tag_line,
		} = &self.identity;

		self.dispatch(ProfileAction::Started(SlotKind::Matches));

		match self.service.fetch_matches(server, game_name, tag_line).await {
			Ok(matches) => self.dispatch(ProfileAction::MatchesLoaded(matches)),
			Err(e) => self.fail(SlotKind::Matches, e),
		}
	}
}
