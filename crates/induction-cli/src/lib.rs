//! Commands behind the `induction` binary.

pub mod commands;
pub mod logging;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{hydrate, placeholders, resolve, show_config};

#[derive(Parser)]
#[command(name = "induction")]
#[command(about = "Hydrate static onboarding pages from a JSON content document", long_about = None)]
#[command(version)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Hydrate a template and write the resulting HTML
	Hydrate(hydrate::HydrateArgs),

	/// Resolve a dotted path in a content document
	Resolve(resolve::ResolveArgs),

	/// List the placeholders of a template
	Placeholders(placeholders::PlaceholdersArgs),

	/// Show the effective settings
	ShowConfig(show_config::ShowConfigArgs),
}

/// Runs a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
	match cli.command {
		Commands::Hydrate(args) => hydrate::execute(args).await,
		Commands::Resolve(args) => resolve::execute(args).await,
		Commands::Placeholders(args) => placeholders::execute(args).await,
		Commands::ShowConfig(args) => show_config::execute(args),
	}
}
