use whgg_core::{
	api::{
		find_flex_queue, find_solo_queue, AccountData, ChampionStatsData, LeagueEntryData,
		MatchData, Server,
	},
	ProfileViewState, SearchIdentity, SlotState,
};

use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};

const LOADING: &str = "Loading…";

/// Number of champions listed, the most played first as the service orders them
const TOP_CHAMPIONS: usize = 5;

/// Renders every section of a profile, each in whatever state its slot is in
pub fn render_profile(identity: &SearchIdentity, state: &ProfileViewState) -> String {
	let sections = [
		("", render_slot(&state.account, |account| header(identity, account))),
		("Ranked Stats", render_slot(&state.league_entries, ranked)),
		(
			"Champion Statistics",
			render_slot(&state.champion_stats, champions),
		),
		("Match History", render_slot(&state.matches, matches)),
	];

	sections
		.into_iter()
		.map(|(title, body)| match title {
			"" => format!("{body}\n"),
			title => format!("\n{title}\n{body}\n"),
		})
		.collect()
}

/// Loading wins over an error, an error wins over data
fn render_slot<T>(slot: &SlotState<T>, render: impl FnOnce(Option<&T>) -> String) -> String {
	if slot.loading {
		LOADING.to_string()
	} else if let Some(error) = &slot.error {
		error.clone()
	} else {
		render(slot.data.as_ref())
	}
}

fn header(identity: &SearchIdentity, account: Option<&AccountData>) -> String {
	let server = identity
		.server
		.parse::<Server>()
		.map(|server| server.label().to_string())
		.unwrap_or_else(|_| identity.server.to_uppercase());

	match account {
		Some(account) => format!(
			"{}#{} [{server}]  Level {}",
			account.game_name, account.tag_line, account.summoner_level
		),
		None => format!("{identity} [{server}]"),
	}
}

fn ranked(entries: Option<&Vec<LeagueEntryData>>) -> String {
	let entries = entries.map(Vec::as_slice).unwrap_or_default();

	let mut table = Table::new();
	table.load_preset(UTF8_BORDERS_ONLY);

	for (queue, entry) in [
		("Ranked Solo", find_solo_queue(entries)),
		("Ranked Flex", find_flex_queue(entries)),
	] {
		match entry {
			Some(entry) => table.add_row(vec![
				queue.to_string(),
				format!("{} {}", entry.tier, entry.rank),
				format!("{} LP", entry.league_points),
				format!(
					"{}W / {}L ({}%)",
					entry.wins,
					entry.losses,
					entry.win_ratio.round()
				),
			]),
			None => table.add_row(vec![queue, "Unranked", "0 LP", ""]),
		};
	}

	table.to_string()
}

fn champions(stats: Option<&Vec<ChampionStatsData>>) -> String {
	let Some(stats) = stats.filter(|stats| !stats.is_empty()) else {
		return "No champion data yet".to_string();
	};

	let mut table = Table::new();
	table.load_preset(UTF8_BORDERS_ONLY);
	table.set_header(vec!["Champion", "KDA", "Winrate", "Games"]);

	for champion in stats.iter().take(TOP_CHAMPIONS) {
		table.add_row(vec![
			champion.display_name(),
			champion
				.kda
				.map(|kda| format!("{kda:.2}"))
				.unwrap_or_else(|| "N/A".to_string()),
			champion
				.winrate
				.filter(|winrate| *winrate != 0.0)
				.map(|winrate| format!("{}%", (winrate * 100.0).round()))
				.unwrap_or_else(|| "N/A".to_string()),
			format!("{} games", champion.total_games),
		]);
	}

	table.to_string()
}

fn matches(matches: Option<&Vec<MatchData>>) -> String {
	let Some(matches) = matches.filter(|matches| !matches.is_empty()) else {
		return "No matches yet".to_string();
	};

	let mut table = Table::new();
	table.load_preset(UTF8_BORDERS_ONLY);
	table.set_header(vec!["Result", "Champion", "K/D/A"]);

	for game in matches {
		table.add_row(vec![
			if game.participant_won {
				"Victory".to_string()
			} else {
				"Defeat".to_string()
			},
			format!("Champion {}", game.champion_id),
			format!("{}/{}/{}", game.kills, game.deaths, game.assists),
		]);
	}

	table.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	use whgg_core::{ProfileAction, SlotKind};

	fn identity() -> SearchIdentity {
		SearchIdentity::new("kr", "Hide on bush", "KR1")
	}

	fn account() -> AccountData {
		AccountData {
			puuid: "puuid".to_string(),
			game_name: "Hide on bush".to_string(),
			tag_line: "KR1".to_string(),
			summoner_level: 512,
			profile_icon_id: 6,
		}
	}

	fn champion(champion_id: i64) -> ChampionStatsData {
		ChampionStatsData {
			champion_id,
			champion_name: None,
			kda: Some(3.456),
			kill_avg: 5.0,
			death_avg: 2.0,
			assist_avg: 4.0,
			winrate: Some(0.6),
			total_games: 12,
		}
	}

	#[test]
	fn pending_sections_show_loading() {
		let rendered = render_profile(&identity(), &ProfileViewState::awaiting_account());

		assert_eq!(rendered.matches(LOADING).count(), 4);
	}

	#[test]
	fn settled_sections_render_data_errors_and_placeholders() {
		let mut state = ProfileViewState::with_account(account());
		state.apply(ProfileAction::LeagueEntriesLoaded(vec![]));
		state.apply(ProfileAction::ChampionStatsLoaded(
			(1..=7).map(champion).collect(),
		));
		state.apply(ProfileAction::Failed(SlotKind::Matches));

		let rendered = render_profile(&identity(), &state);

		assert!(rendered.contains("Hide on bush#KR1 [KR]  Level 512"));
		assert_eq!(rendered.matches("Unranked").count(), 2);
		assert!(rendered.contains("Champion ID: 5"));
		assert!(!rendered.contains("Champion ID: 6"));
		assert!(rendered.contains("3.46"));
		assert!(rendered.contains("60%"));
		assert!(rendered.contains("Failed to load matches"));
		assert!(!rendered.contains(LOADING));
	}

	#[test]
	fn percentages_round_half_up() {
		let rendered = ranked(Some(&vec![LeagueEntryData {
			queue_type: "RANKED_SOLO_5x5".to_string(),
			tier: "GOLD".to_string(),
			rank: "II".to_string(),
			league_points: 42,
			wins: 5,
			losses: 3,
			win_ratio: 62.5,
		}]));
		assert!(rendered.contains("5W / 3L (63%)"));

		let rendered = champions(Some(&vec![ChampionStatsData {
			winrate: Some(0.625),
			..champion(157)
		}]));
		assert!(rendered.contains("63%"));
		assert!(!rendered.contains("62%"));
	}

	#[test]
	fn matches_show_outcome_and_score() {
		let rendered = matches(Some(&vec![
			MatchData {
				champion_id: 238,
				kills: 10,
				deaths: 1,
				assists: 7,
				participant_won: true,
			},
			MatchData {
				champion_id: 7,
				kills: 2,
				deaths: 5,
				assists: 3,
				participant_won: false,
			},
		]));

		assert!(rendered.contains("Victory"));
		assert!(rendered.contains("Defeat"));
		assert!(rendered.contains("Champion 238"));
		assert!(rendered.contains("10/1/7"));
		assert_eq!(matches(Some(&vec![])), "No matches yet");
		assert_eq!(champions(None), "No champion data yet");
	}
}
