use whgg_core::RecentSearchEntry;

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Subcommand;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};

use crate::{context::Context, print_output};

#[derive(Subcommand, Debug)]
pub enum RecentCmd {
	/// List recent searches, most recent first
	List,
	/// Forget one recent search
	Remove {
		/// Entry id as shown by `recent list`, e.g. `kr-Hide on bush-KR1`
		id: String,
	},
	/// Forget all recent searches
	Clear,
}

pub async fn run(ctx: &Context, cmd: RecentCmd) -> Result<()> {
	let mut recent = ctx.recent_searches();

	match cmd {
		RecentCmd::List => {
			print_output!(ctx, recent.list(), |entries: &[RecentSearchEntry]| {
				if entries.is_empty() {
					println!("No recent searches");
					return;
				}

				let mut table = Table::new();
				table.load_preset(UTF8_BORDERS_ONLY);
				table.set_header(vec!["Player", "Server", "Searched", "Id"]);

				for entry in entries {
					table.add_row(vec![
						entry.identity.to_string(),
						entry.identity.server.to_uppercase(),
						searched_at(entry.timestamp),
						entry.id.clone(),
					]);
				}

				println!("{table}");
			});
		}
		RecentCmd::Remove { id } => {
			let before = recent.list().len();
			recent.remove(&id);

			if recent.list().len() < before {
				println!("Removed {id}");
			} else {
				println!("No recent search with id '{id}'");
			}
		}
		RecentCmd::Clear => {
			recent.clear();
			println!("Cleared recent searches");
		}
	}

	Ok(())
}

fn searched_at(timestamp: i64) -> String {
	DateTime::from_timestamp_millis(timestamp)
		.map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
		.unwrap_or_else(|| timestamp.to_string())
}
