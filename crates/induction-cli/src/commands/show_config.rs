//! Show-config command

use crate::output::{self, OutputFormat};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ShowConfigArgs {
	/// Settings file (defaults to ./induction.toml)
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Output format (text, json, toml)
	#[arg(short = 'f', long, value_enum, default_value = "text")]
	pub format: OutputFormat,
}

/// Show the effective settings
pub fn execute(args: ShowConfigArgs) -> anyhow::Result<()> {
	let settings = super::load_settings(args.config.as_deref(), Vec::<(&str, serde_json::Value)>::new())?;
	output::info("Effective settings:");
	output::print_value(&settings, args.format)
}
