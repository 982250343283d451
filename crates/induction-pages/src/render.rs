//! Shape-based rendering of resolved values into page fragments.
//!
//! A resolved JSON value is classified into a [`RenderableValue`] and turned
//! into a [`Page`] fragment that replaces the placeholder's children:
//!
//! | Shape | Output |
//! |-------|--------|
//! | string | markup (or escaped text when markup is not trusted) |
//! | array of strings | `<ul class="bullets">` |
//! | array of objects | one `<div class="subcard">` per element |
//! | object with known fields | title, lead, text, badges, items, timeline, link |
//! | anything else | JSON serialization as text |

mod badges;
mod timeline;

pub use badges::render_badges;
pub use timeline::render_timeline;

use crate::value::{ItemsBlock, Link, RenderableValue, StructuredObject, Subcard, string_form};
use induction_core::page::{Page, PageElement, parse_fragment};
use serde_json::Value;
use std::borrow::Cow;

/// How prose fields (string values, `title`, `lead`, `text`) are inserted.
///
/// List items, badges, link text and list-item targets are always escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupPolicy {
	/// Prose is parsed as HTML.
	#[default]
	Trusted,
	/// Prose is inserted as escaped text.
	Escaped,
}

impl MarkupPolicy {
	/// Policy matching the `trust_markup` setting.
	pub fn from_trust(trust_markup: bool) -> Self {
		if trust_markup {
			Self::Trusted
		} else {
			Self::Escaped
		}
	}

	/// Converts a prose field into page content.
	pub fn prose(self, text: &str) -> Page {
		match self {
			Self::Trusted => parse_fragment(text),
			Self::Escaped => Page::text(text.to_owned()),
		}
	}
}

/// Renders resolved values into placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueRenderer {
	policy: MarkupPolicy,
}

impl ValueRenderer {
	pub fn new(policy: MarkupPolicy) -> Self {
		Self { policy }
	}

	pub fn policy(&self) -> MarkupPolicy {
		self.policy
	}

	/// Renders `value` into `target`, replacing its children.
	///
	/// Returns `false` and leaves `target` untouched when `value` is null.
	/// An `li` target always receives the value's string form as text.
	pub fn render_into(&self, target: &mut PageElement, value: &Value) -> bool {
		if target.tag_name().eq_ignore_ascii_case("li") {
			if value.is_null() {
				return false;
			}
			target.set_text(string_form(value).into_owned());
			return true;
		}

		let Some(classified) = RenderableValue::classify(value) else {
			return false;
		};
		target.replace_children(self.render(&classified));
		true
	}

	/// Builds the fragment for a classified value.
	pub fn render(&self, value: &RenderableValue<'_>) -> Page {
		match value {
			RenderableValue::Markup(text) => self.policy.prose(text),
			RenderableValue::Scalar(value) | RenderableValue::Opaque(value) => {
				Page::text(value.to_string())
			}
			RenderableValue::StringList(items) => {
				bullet_list(items.iter().map(|item| Cow::Borrowed(*item)))
			}
			RenderableValue::ObjectList(cards) => {
				Page::fragment(cards.iter().map(|card| self.subcard(card)))
			}
			RenderableValue::Structured(object) => self.structured(object),
		}
	}

	fn structured(&self, object: &StructuredObject<'_>) -> Page {
		let mut nodes: Vec<Page> = Vec::new();

		if let Some(title) = &object.title {
			nodes.push(PageElement::new("h3").child(self.policy.prose(title)).into());
		}
		if let Some(lead) = &object.lead {
			nodes.push(
				PageElement::new("p")
					.attr("class", "lead")
					.child(self.policy.prose(lead))
					.into(),
			);
		}
		if let Some(text) = &object.text {
			nodes.push(PageElement::new("div").child(self.policy.prose(text)).into());
		}
		if !object.badges.is_empty() {
			nodes.push(render_badges(&object.badges));
		}
		match &object.items {
			Some(ItemsBlock::Subcards(cards)) => {
				nodes.extend(cards.iter().map(|card| self.subcard(card)));
			}
			Some(ItemsBlock::Bullets(items)) => nodes.push(bullet_list(items.iter().cloned())),
			None => {}
		}
		if !object.timeline.is_empty() {
			nodes.push(render_timeline(&object.timeline, self.policy));
		}
		if let Some(link) = &object.link {
			nodes.push(external_link(link));
		}

		Page::Fragment(nodes)
	}

	fn subcard(&self, card: &Subcard<'_>) -> Page {
		let mut element = PageElement::new("div").attr("class", "subcard");
		if let Some(title) = &card.title {
			element = element.child(PageElement::new("h3").child(self.policy.prose(title)));
		}
		if let Some(text) = &card.text {
			element = element.child(PageElement::new("p").child(self.policy.prose(text)));
		}
		if !card.items.is_empty() {
			element = element.child(bullet_list(card.items.iter().cloned()));
		}
		element.into()
	}
}

/// `<ul class="bullets">` with one escaped `<li>` per item.
fn bullet_list<'a>(items: impl IntoIterator<Item = Cow<'a, str>>) -> Page {
	PageElement::new("ul")
		.attr("class", "bullets")
		.children(
			items
				.into_iter()
				.map(|item| PageElement::new("li").child(item.into_owned())),
		)
		.into()
}

fn external_link(link: &Link<'_>) -> Page {
	PageElement::new("a")
		.attr("class", "ext-link")
		.attr("href", link.href.clone().into_owned())
		.attr("target", "_blank")
		.attr("rel", "noopener noreferrer")
		.child(link.text.clone().into_owned())
		.into()
}
