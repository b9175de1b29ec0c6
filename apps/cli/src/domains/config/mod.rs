use whgg_core::{
	api::{endpoint, Server},
	AppConfig,
};

use anyhow::{bail, Result};
use clap::Subcommand;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};

use crate::{context::Context, print_output};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
	/// Show all configuration
	Show,
	/// Set a configuration value
	Set {
		/// Configuration key: `api_url`, `default_server` or `log_level`
		key: String,
		/// Configuration value
		value: String,
	},
}

pub async fn run(ctx: &Context, cmd: ConfigCmd) -> Result<()> {
	match cmd {
		ConfigCmd::Show => {
			print_output!(ctx, &ctx.config, |config: &AppConfig| {
				let mut table = Table::new();
				table.load_preset(UTF8_BORDERS_ONLY);
				table.set_header(vec!["Key", "Value"]);

				table.add_row(vec!["api_url", config.api_url.as_str()]);
				table.add_row(vec!["default_server", config.default_server.as_ref()]);
				table.add_row(vec!["log_level", config.log_level.as_str()]);

				println!("{table}");
				println!();
				println!(
					"Config file: {}",
					AppConfig::config_path(&ctx.data_dir).display()
				);
			});
		}
		ConfigCmd::Set { key, value } => {
			// Reload so a `--api-url` override is not written back
			let mut config = AppConfig::load_from(&ctx.data_dir)?;
			set(&mut config, &key, &value)?;
			config.save(&ctx.data_dir)?;

			println!("Set {key} = {value}");
		}
	}

	Ok(())
}

fn set(config: &mut AppConfig, key: &str, value: &str) -> Result<()> {
	match key {
		"api_url" => {
			endpoint(value, std::iter::empty::<&str>())?;
			config.api_url = value.to_string();
		}
		"default_server" => {
			config.default_server = value
				.parse::<Server>()
				.map_err(|_| anyhow::anyhow!("Unknown server: {value}"))?;
		}
		"log_level" => {
			if !LOG_LEVELS.contains(&value) {
				bail!("Unknown log level: {value}, expected one of {LOG_LEVELS:?}");
			}
			config.log_level = value.to_string();
		}
		_ => bail!("Cannot set key: {key}"),
	}

	Ok(())
}
