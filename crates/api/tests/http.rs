use whgg_api::{ApiClient, Error, ProfileDataService};

use std::net::TcpListener;

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing_test::traced_test;

async fn account(Path((server, player)): Path<(String, String)>) -> Result<Json<Value>, StatusCode> {
	match (server.as_str(), player.as_str()) {
		("euw1", "hide on bush-kr1") => Ok(Json(json!({
			"puuid": "puuid-1",
			"gameName": "Hide on bush",
			"tagLine": "KR1",
			"summonerLevel": 731,
			"profileIconId": 6
		}))),
		_ => Err(StatusCode::NOT_FOUND),
	}
}

async fn champion_stats(Path(player): Path<String>) -> Json<Value> {
	Json(json!([{ "championId": 7, "championName": player, "kda": 3.5, "totalGames": 4 }]))
}

async fn broken() -> StatusCode {
	StatusCode::INTERNAL_SERVER_ERROR
}

async fn garbage() -> &'static str {
	"definitely not json"
}

fn spawn_server() -> String {
	let app = Router::new()
		.route("/api/v1/account/:server/:player", get(account))
		.route("/api/v1/champion/stats/:player/ranked", get(champion_stats))
		.route("/api/v1/ranked/:server/:player", get(broken))
		.route("/api/v1/matches/:server/:player", get(garbage));

	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();

	tokio::spawn(async move {
		axum::Server::from_tcp(listener)
			.unwrap()
			.serve(app.into_make_service())
			.await
			.unwrap();
	});

	format!("http://{addr}/api")
}

#[tokio::test]
#[traced_test]
async fn fetches_account_with_lowercased_encoded_path() {
	let client = ApiClient::new(spawn_server());

	let account = client
		.fetch_account("EUW1", "Hide on bush", "KR1")
		.await
		.unwrap();

	assert_eq!(account.puuid, "puuid-1");
	assert_eq!(account.summoner_level, 731);
}

#[tokio::test]
async fn unknown_account_is_not_found() {
	let client = ApiClient::new(spawn_server());

	let err = client
		.fetch_account("na1", "Nobody", "0000")
		.await
		.unwrap_err();

	assert!(err.is_not_found(), "unexpected error: {err}");
}

#[tokio::test]
async fn champion_stats_are_keyed_without_server() {
	let client = ApiClient::new(spawn_server());

	let stats = client.fetch_champion_stats("Faker", "KR1").await.unwrap();

	assert_eq!(stats.len(), 1);
	assert_eq!(stats[0].champion_name.as_deref(), Some("faker-kr1"));
}

#[tokio::test]
async fn non_success_status_is_reported() {
	let client = ApiClient::new(spawn_server());

	let err = client
		.fetch_league_entries("euw1", "Faker", "KR1")
		.await
		.unwrap_err();

	assert!(matches!(err, Error::Status { status: 500, .. }));
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
	let client = ApiClient::new(spawn_server());

	let err = client.fetch_matches("euw1", "Faker", "KR1").await.unwrap_err();

	assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
	let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
	let client = ApiClient::new(format!("http://{addr}/api"));

	let err = client
		.fetch_account("euw1", "Faker", "KR1")
		.await
		.unwrap_err();

	assert!(err.is_connection(), "unexpected error: {err}");
}
