//! # induction
//!
//! Server-side hydration of static onboarding pages.
//!
//! A static HTML page marks its content slots with `data-key` and `data-fill`
//! attributes. This crate loads a JSON content document, resolves each slot's
//! dotted path against it and renders the value by shape (markup, bullet
//! list, subcards, structured block with badges, timeline and link), then
//! applies the brand color, the footer year and the initial tab state.
//!
//! ## Feature Flags
//!
//! - `minimal` - page tree, renderers and hydrator
//! - `full` (default) - adds layered settings
//!
//! Fine-grained flags: `core`, `pages`, `conf`.
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "full")]
//! # {
//! use induction::{HydrationSettings, render_page};
//! use serde_json::json;
//!
//! let template = r#"<html><head></head><body><div data-key="equipo"></div></body></html>"#;
//! let document = json!({"equipo": ["Ana", "Luis"]});
//!
//! let page = render_page(template, Some(&document), &HydrationSettings::default(), 2026);
//! assert!(page.html.contains(r#"<ul class="bullets"><li>Ana</li><li>Luis</li></ul>"#));
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "conf")]
pub use induction_conf::{HydrationSettings, SettingsError, load_settings};

#[cfg(feature = "core")]
pub use induction_core::page::{NodePath, Page, PageElement, parse_document, parse_fragment};

#[cfg(feature = "pages")]
pub use induction_pages::{
	DocumentLoader, HydratedPage, HydrationReport, Hydrator, LoadError, TabController,
	hydrate_template, render_page, resolve,
};
