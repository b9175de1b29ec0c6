use whgg_core::{api::Server, ProfileNavigation, ProfileViewState, SearchFormData};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::{context::Context, domains::profile, print_output, ui::render_profile};

#[derive(Args, Debug)]
pub struct SearchArgs {
	/// Game name, prefilled from the last search when omitted
	pub game_name: Option<String>,
	/// Tag line without the leading `#`, prefilled from the last search when omitted
	pub tag_line: Option<String>,
	/// Server to search on
	#[arg(long, short)]
	pub server: Option<Server>,
}

/// What a search resolved to, and the profile loaded for it
#[derive(Serialize)]
struct SearchOutput {
	navigation: ProfileNavigation,
	profile: ProfileViewState,
}

impl SearchArgs {
	/// Fills whatever was not given from the last submitted form
	fn into_form(self, stored: Option<SearchFormData>, default_server: Server) -> SearchFormData {
		let game_name = self
			.game_name
			.or_else(|| stored.as_ref().map(|form| form.game_name.clone()))
			.unwrap_or_default();
		let tag_line = self
			.tag_line
			.or_else(|| stored.as_ref().map(|form| form.tag_line.clone()))
			.unwrap_or_default();
		let server = self
			.server
			.map(|server| server.to_string())
			.or_else(|| stored.map(|form| form.server))
			.unwrap_or_else(|| default_server.to_string());

		SearchFormData {
			game_name,
			tag_line,
			server,
		}
	}
}

pub async fn run(ctx: &Context, args: SearchArgs) -> Result<()> {
	let mut session = ctx.search_session();
	let form = args.into_form(session.stored_form(), ctx.config.default_server);

	let navigation = session.submit(&form).await?;
	eprintln!("Found {}", navigation.identity.profile_route());

	let output = SearchOutput {
		profile: profile::load(ctx, navigation.clone()).await?,
		navigation,
	};

	print_output!(ctx, &output, |output: &SearchOutput| {
		println!(
			"{}",
			render_profile(&output.navigation.identity, &output.profile)
		);
	});

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	use whgg_core::SearchIdentity;

	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn missing_arguments_come_from_the_last_search() {
		let args = SearchArgs {
			game_name: None,
			tag_line: Some("KR2".to_string()),
			server: None,
		};

		let form = args.into_form(
			Some(SearchFormData::new("Faker", "KR1", "kr")),
			Server::Euw1,
		);

		assert_eq!(form, SearchFormData::new("Faker", "KR2", "kr"));
	}

	#[test]
	fn configured_server_is_used_without_history() {
		let args = SearchArgs {
			game_name: Some("Caps".to_string()),
			tag_line: Some("G2".to_string()),
			server: None,
		};

		assert_eq!(
			args.into_form(None, Server::Na1),
			SearchFormData::new("Caps", "G2", "na1")
		);
	}

	#[test]
	fn json_output_carries_the_navigation() {
		let output = SearchOutput {
			navigation: ProfileNavigation {
				identity: SearchIdentity::new("kr", "Hide on bush", "KR1"),
				account: None,
			},
			profile: ProfileViewState::awaiting_account(),
		};

		let value = serde_json::to_value(&output).unwrap();

		assert_eq!(
			value["navigation"],
			json!({
				"identity": {
					"server": "kr",
					"gameName": "Hide on bush",
					"tagLine": "KR1",
				},
				"account": null,
			})
		);
		assert_eq!(value["profile"]["account"]["loading"], json!(true));
	}
}
