//! Hydrate command

use crate::output;
use clap::Args;
use induction_pages::{DocumentLoader, hydrate_template};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args)]
pub struct HydrateArgs {
	/// HTML template to hydrate
	#[arg(value_name = "TEMPLATE")]
	pub template: PathBuf,

	/// Write the result here instead of stdout
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Settings file (defaults to ./induction.toml)
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Content document URL or path, relative to the template
	#[arg(long, value_name = "URL")]
	pub json_url: Option<String>,

	/// Brand color for --color-primary and the theme-color meta
	#[arg(long, value_name = "COLOR")]
	pub theme_color: Option<String>,

	/// Tab to activate, with or without the panel prefix
	#[arg(long, value_name = "ID")]
	pub tab: Option<String>,

	/// Maintain the tab rail's prev/next buttons
	#[arg(long)]
	pub scroll_affordance: bool,

	/// Insert every string from the document as escaped text
	#[arg(long)]
	pub escape_markup: bool,
}

impl HydrateArgs {
	fn overrides(&self) -> Vec<(&'static str, Value)> {
		let mut overrides = Vec::new();
		if let Some(url) = &self.json_url {
			overrides.push(("json_url", Value::String(url.clone())));
		}
		if let Some(color) = &self.theme_color {
			overrides.push(("theme_color", Value::String(color.clone())));
		}
		if let Some(tab) = &self.tab {
			overrides.push(("initial_tab", Value::String(tab.clone())));
		}
		if self.scroll_affordance {
			overrides.push(("scroll_affordance", Value::Bool(true)));
		}
		if self.escape_markup {
			overrides.push(("trust_markup", Value::Bool(false)));
		}
		overrides
	}
}

/// Hydrate a template and write the resulting HTML
pub async fn execute(args: HydrateArgs) -> anyhow::Result<()> {
	let settings = super::load_settings(args.config.as_deref(), args.overrides())?;
	debug!(template = %args.template.display(), json_url = %settings.json_url, "hydrating template");

	let template = tokio::fs::read_to_string(&args.template)
		.await
		.map_err(|e| anyhow::anyhow!("Cannot read template {:?}: {}", args.template, e))?;

	let base_dir = args.template.parent();
	let page = hydrate_template(&DocumentLoader::new(), &template, &settings, base_dir).await;

	match &page.report {
		Some(report) => {
			output::success(&format!(
				"{} placeholders rendered, {} filled",
				report.rendered, report.filled
			));
			for path in &report.unresolved {
				output::warning(&format!("No value for `{}`", path));
			}
		}
		None => output::warning(&format!(
			"Content document {} not loaded; page left unhydrated",
			settings.json_url
		)),
	}

	match &args.output {
		Some(path) => {
			tokio::fs::write(path, &page.html)
				.await
				.map_err(|e| anyhow::anyhow!("Cannot write {:?}: {}", path, e))?;
			output::info(&format!("Wrote {}", path.display()));
		}
		None => println!("{}", page.html),
	}

	Ok(())
}
