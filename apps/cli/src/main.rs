mod context;
mod domains;
mod ui;
mod util;

use whgg_core::{default_data_dir, AppConfig};

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
	context::{Context, OutputFormat},
	domains::{
		config::ConfigCmd,
		profile::ProfileArgs,
		recent::RecentCmd,
		search::SearchArgs,
	},
};

#[derive(Parser, Debug)]
#[command(name = "whgg", about = "League of Legends player lookup")]
struct Cli {
	/// Path to the whgg data directory
	#[arg(long)]
	data_dir: Option<PathBuf>,

	/// Base url of the profile data service, overrides the configured one
	#[arg(long)]
	api_url: Option<String>,

	/// Output format
	#[arg(long, value_enum, default_value = "human")]
	format: OutputFormat,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Search a player and show their profile
	Search(SearchArgs),
	/// Show the profile behind a profile route
	Profile(ProfileArgs),
	/// Recent search history
	#[command(subcommand)]
	Recent(RecentCmd),
	/// List the servers players can be searched on
	Servers,
	/// Configuration
	#[command(subcommand)]
	Config(ConfigCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	let data_dir = match cli.data_dir {
		Some(data_dir) => data_dir,
		None => default_data_dir()?,
	};
	let config = AppConfig::load_or_create(&data_dir)?;

	// RUST_LOG wins over the configured level; logs go to stderr to keep stdout for output
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(format!(
			"warn,whgg={0},whgg_core={0},whgg_api={0}",
			config.log_level
		))
	});

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).with_target(false))
		.init();

	debug!(data_dir = %data_dir.display(), "Using data directory");

	let ctx = Context::new(data_dir, config, cli.api_url, cli.format);

	match cli.command {
		Commands::Search(args) => domains::search::run(&ctx, args).await,
		Commands::Profile(args) => domains::profile::run(&ctx, args).await,
		Commands::Recent(cmd) => domains::recent::run(&ctx, cmd).await,
		Commands::Servers => domains::servers::run(&ctx).await,
		Commands::Config(cmd) => domains::config::run(&ctx, cmd).await,
	}
}
