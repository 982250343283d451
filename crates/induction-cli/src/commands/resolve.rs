//! Resolve command

use crate::output::{self, OutputFormat};
use clap::Args;
use induction_pages::{RenderableValue, load_document, resolve};

#[derive(Args)]
pub struct ResolveArgs {
	/// Content document URL or path
	#[arg(value_name = "SOURCE")]
	pub source: String,

	/// Dotted path, e.g. `equipo.areas`
	#[arg(value_name = "PATH")]
	pub path: String,

	/// Output format (text, json, toml)
	#[arg(short = 'f', long, value_enum, default_value = "json")]
	pub format: OutputFormat,
}

/// Resolve a dotted path in a content document
pub async fn execute(args: ResolveArgs) -> anyhow::Result<()> {
	let document = load_document(&args.source, None).await?;

	let value = resolve(&document, &args.path)
		.ok_or_else(|| anyhow::anyhow!("Path not found: {}", args.path))?;

	output::info(&format!("`{}` renders as {}", args.path, shape_name(value)));
	output::print_value(value, args.format)
}

/// How the renderer will treat a value.
pub(crate) fn shape_name(value: &serde_json::Value) -> &'static str {
	match RenderableValue::classify(value) {
		None => "nothing (null)",
		Some(RenderableValue::Markup(_)) => "markup",
		Some(RenderableValue::Scalar(_)) => "text",
		Some(RenderableValue::StringList(_)) => "a bullet list",
		Some(RenderableValue::ObjectList(_)) => "subcards",
		Some(RenderableValue::Structured(_)) => "a structured block",
		Some(RenderableValue::Opaque(_)) => "JSON text",
	}
}
