//! Profile view addressing.
//!
//! A profile is reachable either with navigation state handed over by the search screen
//! (identity plus the account it already fetched) or through a route of the form
//! `/profile/{server}/{gameName}-{tagLine}`.

use whgg_api::AccountData;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::identity::SearchIdentity;

pub const PROFILE_ROUTE_PREFIX: &str = "/profile";

/// Joins game name and tag line inside a route token
pub const TOKEN_SEPARATOR: char = '-';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
	#[error("No profile data found")]
	MissingIdentity,
	#[error("not a profile route: <route='{0}'>")]
	NotAProfileRoute(String),
	#[error("malformed player token: <token='{0}'>")]
	MalformedToken(String),
}

/// What the search screen hands over when it navigates to a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileNavigation {
	pub identity: SearchIdentity,
	pub account: Option<AccountData>,
}

/// Splits a `{gameName}-{tagLine}` token.
///
/// The tag line is the last separated segment; everything before it, separators included,
/// is the game name. Game names may therefore contain the separator, tag lines may not.
pub fn split_player_token(token: &str) -> Result<(&str, &str), RouteError> {
	match token.rsplit_once(TOKEN_SEPARATOR) {
		Some((game_name, tag_line)) if !game_name.is_empty() && !tag_line.is_empty() => {
			Ok((game_name, tag_line))
		}
		_ => Err(RouteError::MalformedToken(token.to_string())),
	}
}

impl SearchIdentity {
	pub fn from_player_token(server: impl Into<String>, token: &str) -> Result<Self, RouteError> {
		let (game_name, tag_line) = split_player_token(token)?;

		Ok(Self::new(server, game_name, tag_line))
	}

	pub fn player_token(&self) -> String {
		format!("{}{TOKEN_SEPARATOR}{}", self.game_name, self.tag_line)
	}

	pub fn profile_route(&self) -> String {
		format!(
			"{PROFILE_ROUTE_PREFIX}/{}/{}",
			self.server,
			self.player_token()
		)
	}
}

/// Parses `/profile/{server}/{token}`; a trailing slash is accepted.
pub fn parse_profile_route(route: &str) -> Result<SearchIdentity, RouteError> {
	let rest = route
		.trim_end_matches('/')
		.strip_prefix(PROFILE_ROUTE_PREFIX)
		.and_then(|rest| rest.strip_prefix('/'))
		.ok_or_else(|| RouteError::NotAProfileRoute(route.to_string()))?;

	match rest.split_once('/') {
		Some((server, token)) if !server.is_empty() && !token.contains('/') => {
			SearchIdentity::from_player_token(server, token)
		}
		_ => Err(RouteError::NotAProfileRoute(route.to_string())),
	}
}

/// Resolves which profile to show: navigation state first, then the route.
///
/// Having neither, or a route no identity can be recovered from, is terminal for the view
/// and always reported as [`RouteError::MissingIdentity`]; the user has to go back to search.
pub fn resolve_profile(
	navigation: Option<ProfileNavigation>,
	route: Option<&str>,
) -> Result<ProfileNavigation, RouteError> {
	if let Some(navigation) = navigation {
		return Ok(navigation);
	}

	let route = route.ok_or(RouteError::MissingIdentity)?;

	match parse_profile_route(route) {
		Ok(identity) => Ok(ProfileNavigation {
			identity,
			account: None,
		}),
		Err(e) => {
			warn!("No identity in profile route: {e}");
			Err(RouteError::MissingIdentity)
		}
	}
}
