//! Subcommands.

pub mod hydrate;
pub mod placeholders;
pub mod resolve;
pub mod show_config;

use induction_conf::{HydrationSettings, settings_builder};
use serde_json::Value;
use std::path::Path;

/// Settings from the standard sources, with command-line overrides on top.
pub(crate) fn load_settings(
	config: Option<&Path>,
	overrides: impl IntoIterator<Item = (&'static str, Value)>,
) -> anyhow::Result<HydrationSettings> {
	let builder = overrides
		.into_iter()
		.fold(settings_builder(config), |builder, (key, value)| {
			builder.set_override(key, value)
		});
	Ok(builder.build()?)
}
