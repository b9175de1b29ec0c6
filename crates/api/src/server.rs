use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Regional shard an account is registered on.
///
/// The string form is the routing value the profile service expects (`euw1`, `kr`, ...),
/// while [`Server::label`] is the short name shown to users.
#[derive(
	Debug,
	Default,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
	Display,
	EnumString,
	EnumIter,
	AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Server {
	#[default]
	Euw1,
	Eun1,
	Na1,
	Br1,
	Ru,
	Kr,
	Jp1,
	Tw2,
	Tr1,
	Ph2,
	Vn2,
	La1,
	La2,
	Oc1,
	Sg2,
	Th2,
}

impl Server {
	pub fn label(&self) -> &'static str {
		match self {
			Self::Euw1 => "EUW",
			Self::Eun1 => "EUNE",
			Self::Na1 => "NA",
			Self::Br1 => "BR",
			Self::Ru => "RU",
			Self::Kr => "KR",
			Self::Jp1 => "JP",
			Self::Tw2 => "TW",
			Self::Tr1 => "TR",
			Self::Ph2 => "PH",
			Self::Vn2 => "VN",
			Self::La1 => "LAN",
			Self::La2 => "LAS",
			Self::Oc1 => "OC",
			Self::Sg2 => "SG",
			Self::Th2 => "TH",
		}
	}

	/// All servers in the order they are offered to users
	pub fn all() -> impl Iterator<Item = Self> {
		Self::iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::str::FromStr;

	#[test]
	fn routing_values_round_trip_through_strings() {
		for server in Server::all() {
			assert_eq!(Server::from_str(server.as_ref()).unwrap(), server);
		}

		assert_eq!(Server::Euw1.to_string(), "euw1");
		assert_eq!(Server::Ru.as_ref(), "ru");
		assert_eq!(Server::from_str("EUW1").unwrap(), Server::Euw1);
	}

	#[test]
	fn offers_sixteen_servers_starting_with_euw() {
		let servers = Server::all().collect::<Vec<_>>();

		assert_eq!(servers.len(), 16);
		assert_eq!(servers[0], Server::default());
		assert_eq!(Server::La1.label(), "LAN");
		assert_eq!(Server::La2.label(), "LAS");
	}

	#[test]
	fn unknown_server_is_rejected() {
		assert!(Server::from_str("euw2").is_err());
	}
}
