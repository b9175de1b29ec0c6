use serde::{Deserialize, Serialize};

const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";
const FLEX_QUEUE: &str = "RANKED_FLEX_SR";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
	pub puuid: String,
	pub game_name: String,
	pub tag_line: String,
	pub summoner_level: u32,
	pub profile_icon_id: u32,
}

/// A ranked-queue standing record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryData {
	pub queue_type: String,
	pub tier: String,
	pub rank: String,
	pub league_points: i32,
	pub wins: u32,
	pub losses: u32,
	/// Percentage in `0..=100`
	#[serde(default)]
	pub win_ratio: f64,
}

impl LeagueEntryData {
	pub fn is_solo_queue(&self) -> bool {
		self.queue_type == SOLO_QUEUE || self.queue_type.to_lowercase().contains("solo")
	}

	pub fn is_flex_queue(&self) -> bool {
		self.queue_type == FLEX_QUEUE || self.queue_type.to_lowercase().contains("flex")
	}
}

pub fn find_solo_queue(entries: &[LeagueEntryData]) -> Option<&LeagueEntryData> {
	entries.iter().find(|entry| entry.is_solo_queue())
}

pub fn find_flex_queue(entries: &[LeagueEntryData]) -> Option<&LeagueEntryData> {
	entries.iter().find(|entry| entry.is_flex_queue())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStatsData {
	pub champion_id: i64,
	#[serde(default)]
	pub champion_name: Option<String>,
	#[serde(default)]
	pub kda: Option<f64>,
	#[serde(default)]
	pub kill_avg: f64,
	#[serde(default)]
	pub death_avg: f64,
	#[serde(default)]
	pub assist_avg: f64,
	/// Fraction in `0.0..=1.0`
	#[serde(default)]
	pub winrate: Option<f64>,
	#[serde(default)]
	pub total_games: u32,
}

impl ChampionStatsData {
	pub fn display_name(&self) -> String {
		match self.champion_name.as_deref() {
			Some(name) if !name.is_empty() => name.to_string(),
			_ => format!("Champion ID: {}", self.champion_id),
		}
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
	pub champion_id: i64,
	pub kills: u32,
	pub deaths: u32,
	pub assists: u32,
	pub participant_won: bool,
}
