//! `induction` command-line tool.
//!
//! ```bash
//! induction hydrate site/index.html -o dist/index.html
//! induction resolve site/induccion.json equipo.areas
//! induction placeholders site/index.html --json-url site/induccion.json
//! induction show-config --format toml
//! ```

use clap::Parser;
use induction_cli::{Cli, logging, output, run};
use std::process;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbosity);

	if let Err(e) = run(cli).await {
		output::error(&format!("{:#}", e));
		process::exit(1);
	}
}
