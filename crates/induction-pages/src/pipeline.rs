//! End-to-end processing of a template.

use crate::hydration::{HydrationReport, Hydrator};
use crate::loader::{DocumentLoader, DocumentSource};
use crate::tabs::{Activation, TabController};
use crate::theme::{apply_theme, current_year, stamp_year};
use induction_conf::HydrationSettings;
use induction_core::page::parse_document;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// A processed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydratedPage {
	/// Serialized HTML.
	pub html: String,
	/// `None` when no content document was available.
	pub report: Option<HydrationReport>,
	/// Initial tab activation, if the page has tabs.
	pub activation: Option<Activation>,
}

/// Processes `template` with an already loaded content document.
///
/// Applies the theme color, the year stamp and the initial tab state, then
/// hydrates placeholders (skipped when `document` is `None`).
pub fn render_page(
	template: &str,
	document: Option<&Value>,
	settings: &HydrationSettings,
	year: i32,
) -> HydratedPage {
	let mut page = parse_document(template);

	apply_theme(&mut page, &settings.theme_color);
	stamp_year(&mut page, year);

	let mut tabs = TabController::discover(&page, settings.tab_prefix.clone())
		.with_scroll_affordance(settings.scroll_affordance);
	let activation = tabs.initialize(settings.initial_tab.as_deref());
	tabs.apply(&mut page);

	// Tabs are bound to the static markup; hydration runs last and may
	// overwrite the year through `data-fill`.
	let report = document.map(|document| Hydrator::new(settings).hydrate(&mut page, document));

	HydratedPage {
		html: page.render_to_string(),
		report,
		activation,
	}
}

/// Loads the content document named by `settings.json_url` and processes
/// `template`.
///
/// A failed load is logged and the page is served without hydration.
pub async fn hydrate_template(
	loader: &DocumentLoader,
	template: &str,
	settings: &HydrationSettings,
	base_dir: Option<&Path>,
) -> HydratedPage {
	let source = DocumentSource::parse(&settings.json_url, base_dir);
	let document = match loader.load(&source).await {
		Ok(document) => Some(document),
		Err(error) => {
			warn!(source = %source, %error, "content document unavailable; serving static markup");
			None
		}
	};

	let page = render_page(template, document.as_ref(), settings, current_year());
	if let Some(report) = &page.report {
		info!(
			rendered = report.rendered,
			filled = report.filled,
			unresolved = report.unresolved.len(),
			"page hydrated"
		);
	}
	page
}
