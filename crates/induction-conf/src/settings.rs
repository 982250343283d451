//! Hydration settings and the builder that layers sources into them.

use crate::sources::{ConfigSource, DefaultSource, SourceError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default location of the JSON content document.
pub const DEFAULT_JSON_URL: &str = "induccion.json";
/// Default brand color injected into the page.
pub const DEFAULT_THEME_COLOR: &str = "#0C41C4";
/// Prefix shared by tab panel ids and stripped from the navigation fragment.
pub const DEFAULT_TAB_PREFIX: &str = "tab-";
/// Class of the nested element that receives rendered content.
pub const DEFAULT_SLOT_CLASS: &str = "js-slot";

/// Settings read once at startup and passed to the hydrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrationSettings {
	/// URL or file path of the JSON content document.
	pub json_url: String,
	/// CSS color for `--color-primary` and `<meta name="theme-color">`.
	/// Empty disables theming.
	pub theme_color: String,
	/// Inject prose fields (string values, `title`, `lead`, `text`) as markup.
	/// When false they are escaped like every other field.
	pub trust_markup: bool,
	/// Maintain the prev/next scroll buttons of the tab rail.
	pub scroll_affordance: bool,
	/// Prefix of tab panel ids.
	pub tab_prefix: String,
	/// Class of the rendering slot inside a `data-key` placeholder.
	pub slot_class: String,
	/// Fragment of the tab to activate initially.
	pub initial_tab: Option<String>,
}

impl Default for HydrationSettings {
	fn default() -> Self {
		Self {
			json_url: DEFAULT_JSON_URL.to_string(),
			theme_color: DEFAULT_THEME_COLOR.to_string(),
			trust_markup: true,
			scroll_affordance: false,
			tab_prefix: DEFAULT_TAB_PREFIX.to_string(),
			slot_class: DEFAULT_SLOT_CLASS.to_string(),
			initial_tab: None,
		}
	}
}

impl HydrationSettings {
	/// Checks values that would make the hydration pass meaningless.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.json_url.trim().is_empty() {
			return Err(SettingsError::Invalid {
				key: "json_url",
				reason: "must not be empty".to_string(),
			});
		}
		if self.slot_class.split_ascii_whitespace().count() != 1 {
			return Err(SettingsError::Invalid {
				key: "slot_class",
				reason: format!("expected a single class name, got {:?}", self.slot_class),
			});
		}
		Ok(())
	}

	/// A default source carrying every built-in value.
	pub fn defaults_source() -> DefaultSource {
		let defaults = Self::default();
		DefaultSource::new()
			.with_value("json_url", Value::String(defaults.json_url))
			.with_value("theme_color", Value::String(defaults.theme_color))
			.with_value("trust_markup", Value::Bool(defaults.trust_markup))
			.with_value("scroll_affordance", Value::Bool(defaults.scroll_affordance))
			.with_value("tab_prefix", Value::String(defaults.tab_prefix))
			.with_value("slot_class", Value::String(defaults.slot_class))
	}
}

/// Error raised while building settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to load {source_description}: {error}")]
	Source {
		source_description: String,
		#[source]
		error: SourceError,
	},

	#[error("Invalid settings: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error("Invalid value for `{key}`: {reason}")]
	Invalid { key: &'static str, reason: String },
}

/// Merges configuration sources by priority into [`HydrationSettings`].
///
/// # Examples
///
/// ```
/// use induction_conf::settings::SettingsBuilder;
/// use induction_conf::sources::DefaultSource;
/// use serde_json::Value;
///
/// let settings = SettingsBuilder::new()
///     .add_source(DefaultSource::new().with_value("json_url", Value::String("data.json".into())))
///     .build()
///     .unwrap();
/// assert_eq!(settings.json_url, "data.json");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
	overrides: IndexMap<String, Value>,
}

impl SettingsBuilder {
	/// Creates a builder with no sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a configuration source.
	pub fn add_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Sets a value that wins over every source (command-line flags).
	pub fn set_override(mut self, key: impl Into<String>, value: Value) -> Self {
		self.overrides.insert(key.into(), value);
		self
	}

	/// Loads every source and returns the merged map.
	pub fn merged(&self) -> Result<IndexMap<String, Value>, SettingsError> {
		let mut ordered: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
		// Stable sort keeps insertion order among equal priorities
		ordered.sort_by_key(|s| s.priority());

		let mut merged = IndexMap::new();
		for source in ordered {
			let values = source.load().map_err(|error| SettingsError::Source {
				source_description: source.description(),
				error,
			})?;
			tracing::debug!(
				source = %source.description(),
				keys = values.len(),
				"loaded configuration source"
			);
			merged.extend(values);
		}
		merged.extend(self.overrides.clone());
		Ok(merged)
	}

	/// Builds and validates the settings.
	pub fn build(self) -> Result<HydrationSettings, SettingsError> {
		let merged = self.merged()?;
		let object: serde_json::Map<String, Value> = merged.into_iter().collect();
		let settings: HydrationSettings = serde_json::from_value(Value::Object(object))?;
		settings.validate()?;
		Ok(settings)
	}
}
