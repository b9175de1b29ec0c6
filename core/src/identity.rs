//! Player identities and the search form they are entered through

use whgg_api::Server;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Character players type between game name and tag line; never part of a tag line
pub const TAG_SEPARATOR: char = '#';

pub const MIN_TAG_LINE_LEN: usize = 2;
pub const MAX_TAG_LINE_LEN: usize = 5;

/// Raw search form input, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFormData {
	#[serde(default)]
	pub game_name: String,
	#[serde(default)]
	pub tag_line: String,
	#[serde(default)]
	pub server: String,
}

/// A player as the profile service knows them.
///
/// Equality is field-wise and case-sensitive, no normalization is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIdentity {
	pub server: String,
	pub game_name: String,
	pub tag_line: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Game name is required")]
	GameNameRequired,
	#[error("Tag Line is required")]
	TagLineRequired,
	#[error("TagLine shouldn't include #")]
	TagLineHasSeparator,
	#[error("Tag line must be between 2 and 5 characters")]
	TagLineLength,
	#[error("Please select a server")]
	ServerRequired,
	#[error("Unknown server: {0}")]
	UnknownServer(String),
}

impl SearchFormData {
	pub fn new(
		game_name: impl Into<String>,
		tag_line: impl Into<String>,
		server: impl Into<String>,
	) -> Self {
		Self {
			game_name: game_name.into(),
			tag_line: tag_line.into(),
			server: server.into(),
		}
	}

	/// True when every field is present, the minimum for remembering a search
	pub fn is_complete(&self) -> bool {
		!self.game_name.is_empty() && !self.tag_line.is_empty() && !self.server.is_empty()
	}

	/// Checks the form the way it is checked before any request is made.
	///
	/// Game name and tag line are trimmed; the first failing rule wins. The server must be
	/// one of [`Server`] and is normalized to its routing value.
	pub fn validate(&self) -> Result<SearchIdentity, ValidationError> {
		let game_name = self.game_name.trim();
		let tag_line = self.tag_line.trim();

		if game_name.is_empty() {
			return Err(ValidationError::GameNameRequired);
		}

		if tag_line.is_empty() {
			return Err(ValidationError::TagLineRequired);
		}

		if tag_line.contains(TAG_SEPARATOR) {
			return Err(ValidationError::TagLineHasSeparator);
		}

		if !(MIN_TAG_LINE_LEN..=MAX_TAG_LINE_LEN).contains(&tag_line.chars().count()) {
			return Err(ValidationError::TagLineLength);
		}

		let server = self.server.trim();
		if server.is_empty() {
			return Err(ValidationError::ServerRequired);
		}

		let server = server
			.parse::<Server>()
			.map_err(|_| ValidationError::UnknownServer(server.to_string()))?;

		Ok(SearchIdentity {
			server: server.to_string(),
			game_name: game_name.to_string(),
			tag_line: tag_line.to_string(),
		})
	}
}

impl SearchIdentity {
	pub fn new(
		server: impl Into<String>,
		game_name: impl Into<String>,
		tag_line: impl Into<String>,
	) -> Self {
		Self {
			server: server.into(),
			game_name: game_name.into(),
			tag_line: tag_line.into(),
		}
	}

	/// Key under which this identity is remembered, `server-gameName-tagLine`
	pub fn recent_id(&self) -> String {
		format!("{}-{}-{}", self.server, self.game_name, self.tag_line)
	}
}

impl fmt::Display for SearchIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{TAG_SEPARATOR}{}", self.game_name, self.tag_line)
	}
}

impl From<SearchIdentity> for SearchFormData {
	fn from(
		SearchIdentity {
			server,
			game_name,
			tag_line,
		}: SearchIdentity,
	) -> Self {
		Self {
			game_name,
			tag_line,
			server,
		}
	}
}
