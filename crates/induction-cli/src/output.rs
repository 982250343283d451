//! Output formatting utilities
//!
//! Status lines go to stderr so that stdout carries only command output
//! (hydrated HTML, resolved values, settings).

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

/// Output format for displaying values
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	Text,
	Json,
	Toml,
}

/// Print a success message
pub fn success(msg: &str) {
	eprintln!("{} {}", "✓".green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
	eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
	eprintln!("{} {}", "ℹ".blue().bold(), msg);
}

/// Format and print a value based on the output format
pub fn print_value<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
	println!("{}", format_value(value, format)?);
	Ok(())
}

/// Renders a value in the requested format.
pub fn format_value<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
	let rendered = match format {
		OutputFormat::Json => serde_json::to_string_pretty(value)?,
		OutputFormat::Toml => toml::to_string_pretty(value)?,
		OutputFormat::Text => {
			let json = serde_json::to_value(value)?;
			let mut out = String::new();
			format_value_text(&json, 0, &mut out);
			out.trim_end().to_string()
		}
	};
	Ok(rendered)
}

fn format_value_text(value: &Value, indent: usize, out: &mut String) {
	let indent_str = "  ".repeat(indent);
	match value {
		Value::Object(map) => {
			for (key, val) in map {
				match val {
					Value::Object(_) | Value::Array(_) => {
						out.push_str(&format!("{}{}:\n", indent_str, key.cyan()));
						format_value_text(val, indent + 1, out);
					}
					_ => out.push_str(&format!("{}{}: {}\n", indent_str, key.cyan(), scalar(val))),
				}
			}
		}
		Value::Array(items) => {
			for item in items {
				match item {
					Value::Object(_) | Value::Array(_) => {
						out.push_str(&format!("{}-\n", indent_str));
						format_value_text(item, indent + 1, out);
					}
					_ => out.push_str(&format!("{}- {}\n", indent_str, scalar(item))),
				}
			}
		}
		other => out.push_str(&format!("{}{}\n", indent_str, scalar(other))),
	}
}

fn scalar(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => "(none)".dimmed().to_string(),
		other => other.to_string(),
	}
}
