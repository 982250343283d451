//! # induction-pages
//!
//! Hydration of static onboarding pages from a JSON content document.
//!
//! ## Architecture
//!
//! - [`resolve`]: dotted-path lookup into the content document
//! - [`value`]: classification of JSON values into [`RenderableValue`] shapes
//! - [`render`]: shape-based rendering, badges and timelines
//! - [`hydration`]: the single pass over `data-key` / `data-fill` placeholders
//! - [`tabs`]: tab widget state machine and scroll rail
//! - [`theme`]: theme color and year stamping
//! - [`loader`]: loading the content document over HTTP or from disk
//! - [`pipeline`]: template in, hydrated HTML out
//!
//! ## Example
//!
//! ```
//! use induction_conf::HydrationSettings;
//! use induction_pages::render_page;
//! use serde_json::json;
//!
//! let template = r#"<html><head></head><body><p data-key="bienvenida"></p></body></html>"#;
//! let document = json!({"bienvenida": "Hola"});
//!
//! let page = render_page(template, Some(&document), &HydrationSettings::default(), 2026);
//! assert!(page.html.contains(r#"<p data-key="bienvenida">Hola</p>"#));
//! ```

pub mod hydration;
pub mod loader;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod tabs;
pub mod theme;
pub mod value;

pub use hydration::{DATA_FILL, DATA_KEY, HydrationReport, Hydrator, Placeholder, PlaceholderKind};
pub use loader::{DocumentLoader, DocumentSource, LoadError, load_document};
pub use pipeline::{HydratedPage, hydrate_template, render_page};
pub use render::{MarkupPolicy, ValueRenderer, render_badges, render_timeline};
pub use resolve::resolve;
pub use tabs::{
	Activation, ActivationSource, RailAffordance, ScrollDirection, ScrollRail, TabController, TabKey,
	TabPair,
};
pub use theme::{apply_theme, current_year, stamp_year};
pub use value::RenderableValue;
