use whgg_core::api::Server;

use anyhow::Result;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
use serde::Serialize;

use crate::{context::Context, print_output};

#[derive(Serialize)]
struct ServerInfo {
	id: Server,
	label: &'static str,
	default: bool,
}

pub async fn run(ctx: &Context) -> Result<()> {
	let servers = Server::all()
		.map(|id| ServerInfo {
			id,
			label: id.label(),
			default: id == ctx.config.default_server,
		})
		.collect::<Vec<_>>();

	print_output!(ctx, &servers, |servers: &Vec<ServerInfo>| {
		let mut table = Table::new();
		table.load_preset(UTF8_BORDERS_ONLY);
		table.set_header(vec!["Server", "Name", ""]);

		for server in servers {
			table.add_row(vec![
				server.id.as_ref(),
				server.label,
				if server.default { "default" } else { "" },
			]);
		}

		println!("{table}");
	});

	Ok(())
}
