//! The hydration pass over a page's placeholders.
//!
//! Placeholders are elements annotated with a dotted lookup path:
//!
//! - `data-key="a.b"`: the resolved value is rendered by shape into the first
//!   descendant carrying the slot class (`js-slot` by default), or into the
//!   element itself when it has no slot.
//! - `data-fill="a.b"`: the element's text is replaced, only when the resolved
//!   value is a plain string.
//!
//! The pass runs once. Rendering always replaces children, so running it
//! again over the same page yields the same markup.

use crate::render::{MarkupPolicy, ValueRenderer};
use crate::resolve::resolve;
use induction_conf::HydrationSettings;
use induction_core::page::{NodePath, Page, PageElement};
use serde_json::Value;
use tracing::{debug, trace};

/// Attribute carrying the lookup path of a shape-rendered placeholder.
pub const DATA_KEY: &str = "data-key";

/// Attribute carrying the lookup path of a text placeholder.
pub const DATA_FILL: &str = "data-fill";

/// Kind of placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
	/// `data-key`
	Key,
	/// `data-fill`
	Fill,
}

impl PlaceholderKind {
	/// Attribute name for this kind.
	pub fn attribute(self) -> &'static str {
		match self {
			Self::Key => DATA_KEY,
			Self::Fill => DATA_FILL,
		}
	}
}

/// A placeholder found in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
	pub kind: PlaceholderKind,
	/// Dotted lookup path.
	pub path: String,
	/// Location of the annotated element.
	pub node: NodePath,
}

/// Outcome of one hydration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
	/// `data-key` placeholders rendered.
	pub rendered: usize,
	/// `data-key` placeholders whose value resolved to null.
	pub skipped_null: usize,
	/// `data-key` placeholders inside a subtree replaced earlier in the pass.
	pub detached: usize,
	/// Paths that did not resolve, in document order.
	pub unresolved: Vec<String>,
	/// `data-fill` placeholders whose text was replaced.
	pub filled: usize,
}

/// Hydrates placeholders from a content document.
#[derive(Debug, Clone)]
pub struct Hydrator {
	renderer: ValueRenderer,
	slot_class: String,
}

impl Hydrator {
	pub fn new(settings: &HydrationSettings) -> Self {
		Self {
			renderer: ValueRenderer::new(MarkupPolicy::from_trust(settings.trust_markup)),
			slot_class: settings.slot_class.clone(),
		}
	}

	/// Lists every placeholder of `page` in document order, `data-key` first.
	pub fn placeholders(page: &Page) -> Vec<Placeholder> {
		[PlaceholderKind::Key, PlaceholderKind::Fill]
			.into_iter()
			.flat_map(|kind| {
				page.find_elements(|el| el.has_attr(kind.attribute()))
					.into_iter()
					.filter_map(move |node| {
						let path = page.element_at(&node)?.get_attr(kind.attribute())?;
						Some(Placeholder {
							kind,
							path: path.to_owned(),
							node,
						})
					})
			})
			.collect()
	}

	/// Runs the hydration pass over `page`.
	pub fn hydrate(&self, page: &mut Page, document: &Value) -> HydrationReport {
		let mut report = HydrationReport::default();

		let keyed = page.find_elements(|el| el.has_attr(DATA_KEY));
		let mut replaced: Vec<NodePath> = Vec::new();
		for node in keyed {
			if replaced.iter().any(|target| target.is_ancestor_of(&node)) {
				report.detached += 1;
				continue;
			}
			let Some(path) = page
				.element_at(&node)
				.and_then(|el| el.get_attr(DATA_KEY))
				.map(str::to_owned)
			else {
				continue;
			};
			let Some(value) = resolve(document, &path) else {
				trace!(path = %path, "placeholder path not found");
				report.unresolved.push(path);
				continue;
			};

			let target = page
				.find_descendant(&node, |el| el.has_class(&self.slot_class))
				.unwrap_or_else(|| node.clone());
			let Some(element) = page.element_at_mut(&target) else {
				continue;
			};
			if self.renderer.render_into(element, value) {
				report.rendered += 1;
				replaced.push(target);
			} else {
				report.skipped_null += 1;
			}
		}

		for node in page.find_elements(|el| el.has_attr(DATA_FILL)) {
			let Some(element) = page.element_at_mut(&node) else {
				continue;
			};
			if fill(element, document) {
				report.filled += 1;
			}
		}

		debug!(
			rendered = report.rendered,
			unresolved = report.unresolved.len(),
			filled = report.filled,
			"hydration pass finished"
		);
		report
	}
}

fn fill(element: &mut PageElement, document: &Value) -> bool {
	let text = element
		.get_attr(DATA_FILL)
		.and_then(|path| resolve(document, path))
		.and_then(Value::as_str)
		.map(str::to_owned);
	match text {
		Some(text) => {
			element.set_text(text);
			true
		}
		None => false,
	}
}
