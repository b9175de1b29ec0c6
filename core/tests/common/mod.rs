#![allow(dead_code)]

use whgg_core::api::{
	AccountData, ChampionStatsData, Error, LeagueEntryData, MatchData, ProfileDataService,
};

use std::{
	future,
	sync::{Mutex, PoisonError},
};

use async_trait::async_trait;
use tokio::sync::oneshot;

/// What a test sends to settle a pending fetch: the payload or an HTTP status
pub type Reply<T> = Result<T, u16>;

/// A fetch that only completes when the test says so
pub struct Pending<T> {
	rx: Mutex<Option<oneshot::Receiver<Reply<T>>>>,
}

impl<T> Default for Pending<T> {
	fn default() -> Self {
		Self {
			rx: Mutex::new(None),
		}
	}
}

impl<T> Pending<T> {
	fn arm(&self) -> oneshot::Sender<Reply<T>> {
		let (tx, rx) = oneshot::channel();
		*self.rx.lock().unwrap_or_else(PoisonError::into_inner) = Some(rx);
		tx
	}

	/// Unarmed fetches, or fetches whose sender was dropped, never complete
	async fn wait(&self) -> Result<T, Error> {
		let rx = self.rx.lock().unwrap_or_else(PoisonError::into_inner).take();

		let Some(rx) = rx else {
			return future::pending().await;
		};

		match rx.await {
			Ok(Ok(value)) => Ok(value),
			Ok(Err(status)) => Err(Error::Status {
				status,
				reason: "Test Failure".to_string(),
			}),
			Err(_) => future::pending().await,
		}
	}
}

#[derive(Default)]
pub struct FakeService {
	account: Pending<AccountData>,
	league_entries: Pending<Vec<LeagueEntryData>>,
	champion_stats: Pending<Vec<ChampionStatsData>>,
	matches: Pending<Vec<MatchData>>,
	calls: Mutex<Vec<String>>,
}

impl FakeService {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn arm_account(&self) -> oneshot::Sender<Reply<AccountData>> {
		self.account.arm()
	}

	pub fn arm_league_entries(&self) -> oneshot::Sender<Reply<Vec<LeagueEntryData>>> {
		self.league_entries.arm()
	}

	pub fn arm_champion_stats(&self) -> oneshot::Sender<Reply<Vec<ChampionStatsData>>> {
		self.champion_stats.arm()
	}

	pub fn arm_matches(&self) -> oneshot::Sender<Reply<Vec<MatchData>>> {
		self.matches.arm()
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	fn record(&self, call: String) {
		self.calls
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(call);
	}
}

#[async_trait]
impl ProfileDataService for FakeService {
	async fn fetch_account(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<AccountData, Error> {
		self.record(format!("account {server} {game_name} {tag_line}"));
		self.account.wait().await
	}

	async fn fetch_league_entries(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<LeagueEntryData>, Error> {
		self.record(format!("league_entries {server} {game_name} {tag_line}"));
		self.league_entries.wait().await
	}

	async fn fetch_champion_stats(
		&self,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<ChampionStatsData>, Error> {
		self.record(format!("champion_stats {game_name} {tag_line}"));
		self.champion_stats.wait().await
	}

	async fn fetch_matches(
		&self,
		server: &str,
		game_name: &str,
		tag_line: &str,
	) -> Result<Vec<MatchData>, Error> {
		self.record(format!("matches {server} {game_name} {tag_line}"));
		self.matches.wait().await
	}
}

pub fn account(game_name: &str, tag_line: &str) -> AccountData {
	AccountData {
		puuid: format!("puuid-{game_name}"),
		game_name: game_name.to_string(),
		tag_line: tag_line.to_string(),
		summoner_level: 512,
		profile_icon_id: 29,
	}
}

pub fn league_entry(queue_type: &str) -> LeagueEntryData {
	LeagueEntryData {
		queue_type: queue_type.to_string(),
		tier: "CHALLENGER".to_string(),
		rank: "I".to_string(),
		league_points: 1_204,
		wins: 210,
		losses: 150,
		win_ratio: 58.3,
	}
}

pub fn champion(champion_id: i64, name: &str) -> ChampionStatsData {
	ChampionStatsData {
		champion_id,
		champion_name: Some(name.to_string()),
		kda: Some(4.2),
		kill_avg: 6.1,
		death_avg: 2.3,
		assist_avg: 3.6,
		winrate: Some(0.61),
		total_games: 48,
	}
}

pub fn game(champion_id: i64, participant_won: bool) -> MatchData {
	MatchData {
		champion_id,
		kills: 7,
		deaths: 2,
		assists: 11,
		participant_won,
	}
}
