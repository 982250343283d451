//! Placeholders command

use crate::output;
use clap::Args;
use colored::Colorize;
use induction_core::page::parse_document;
use induction_pages::{Hydrator, PlaceholderKind, load_document, resolve};
use std::path::PathBuf;

#[derive(Args)]
pub struct PlaceholdersArgs {
	/// HTML template to inspect
	#[arg(value_name = "TEMPLATE")]
	pub template: PathBuf,

	/// Check each path against this content document (URL or path)
	#[arg(long, value_name = "URL")]
	pub json_url: Option<String>,
}

/// List the placeholders of a template
pub async fn execute(args: PlaceholdersArgs) -> anyhow::Result<()> {
	let template = tokio::fs::read_to_string(&args.template)
		.await
		.map_err(|e| anyhow::anyhow!("Cannot read template {:?}: {}", args.template, e))?;
	let page = parse_document(&template);
	let placeholders = Hydrator::placeholders(&page);

	let document = match &args.json_url {
		Some(location) => Some(load_document(location, args.template.parent()).await?),
		None => None,
	};

	let mut missing = 0;
	for placeholder in &placeholders {
		let kind = match placeholder.kind {
			PlaceholderKind::Key => "key ",
			PlaceholderKind::Fill => "fill",
		};
		let status = match &document {
			None => String::new(),
			Some(document) => match resolve(document, &placeholder.path) {
				Some(value) => format!("  {}", super::resolve::shape_name(value).green()),
				None => {
					missing += 1;
					format!("  {}", "missing".red())
				}
			},
		};
		println!("{} {}{}", kind.dimmed(), placeholder.path, status);
	}

	output::info(&format!("{} placeholders", placeholders.len()));
	if missing > 0 {
		output::warning(&format!("{} paths do not resolve", missing));
	}
	Ok(())
}
