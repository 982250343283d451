//! # induction-conf
//!
//! Layered settings for the hydration pass.
//!
//! Values are merged from, in increasing priority:
//!
//! 1. built-in defaults ([`HydrationSettings::default`])
//! 2. a TOML file (`induction.toml` unless another path is given)
//! 3. `INDUCTION_*` environment variables
//!
//! ## Example
//!
//! ```no_run
//! use induction_conf::load_settings;
//!
//! let settings = load_settings(None).unwrap();
//! println!("content document: {}", settings.json_url);
//! ```

pub mod settings;
pub mod sources;

pub use settings::{HydrationSettings, SettingsBuilder, SettingsError};
pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};

use std::path::Path;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "induction.toml";

/// Returns a builder with the standard source stack.
pub fn settings_builder(config_path: Option<&Path>) -> SettingsBuilder {
	let file = config_path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));
	SettingsBuilder::new()
		.add_source(HydrationSettings::defaults_source())
		.add_source(TomlFileSource::new(file))
		.add_source(EnvSource::new())
}

/// Loads settings from defaults, the TOML file and the environment.
pub fn load_settings(config_path: Option<&Path>) -> Result<HydrationSettings, SettingsError> {
	settings_builder(config_path).build()
}
