use whgg_core::{
	resolve_profile, ProfileLoadOrchestrator, ProfileNavigation, ProfileViewState, SlotKind,
	SlotStatus,
};

use std::{collections::HashMap, sync::Arc};

use anyhow::Result;
use clap::Args;

use crate::{context::Context, print_output, ui::render_profile};

#[derive(Args, Debug)]
pub struct ProfileArgs {
	/// Profile route, e.g. `/profile/euw1/Faker-KR1`
	pub route: String,
}

pub async fn run(ctx: &Context, args: ProfileArgs) -> Result<()> {
	let navigation = resolve_profile(None, Some(&args.route))?;

	show(ctx, navigation).await
}

/// Loads a profile, then renders it
pub async fn show(ctx: &Context, navigation: ProfileNavigation) -> Result<()> {
	let identity = navigation.identity.clone();
	let state = load(ctx, navigation).await?;

	print_output!(ctx, &state, |state: &ProfileViewState| {
		println!("{}", render_profile(&identity, state));
	});

	Ok(())
}

/// Runs every slot request, reporting sections on stderr as they settle
pub async fn load(ctx: &Context, navigation: ProfileNavigation) -> Result<ProfileViewState> {
	let orchestrator = Arc::new(ProfileLoadOrchestrator::new(
		Arc::clone(&ctx.service),
		navigation,
	));
	let mut rx = orchestrator.subscribe();
	let mut progress = Progress::default();
	progress.report(&rx.borrow_and_update());

	let mut load = tokio::spawn({
		let orchestrator = Arc::clone(&orchestrator);
		async move { orchestrator.load().await }
	});

	loop {
		tokio::select! {
			res = &mut load => {
				res?;
				break;
			}
			Ok(()) = rx.changed() => {
				progress.report(&rx.borrow_and_update());
			}
		}
	}

	let state = orchestrator.snapshot();
	progress.report(&state);

	Ok(state)
}

/// Last seen status per section, so each settle is reported once
#[derive(Default)]
struct Progress(HashMap<SlotKind, SlotStatus>);

impl Progress {
	fn report(&mut self, state: &ProfileViewState) {
		for kind in SlotKind::ALL {
			let status = state.status(kind);

			if self.0.insert(kind, status) == Some(status) {
				continue;
			}

			match status {
				SlotStatus::Success => eprintln!("{kind}: loaded"),
				SlotStatus::Error => eprintln!("{kind}: {}", kind.error_message()),
				SlotStatus::Idle | SlotStatus::Loading => {}
			}
		}
	}
}
