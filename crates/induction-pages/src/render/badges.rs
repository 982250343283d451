//! Badge chips.

use crate::value::Badge;
use induction_core::page::{Page, PageElement};

/// Renders `<div class="badges">` with one `<span class="badge">` per entry.
///
/// Labels are always escaped. A truthy `base` adds the `base` modifier.
pub fn render_badges(badges: &[Badge<'_>]) -> Page {
	PageElement::new("div")
		.attr("class", "badges")
		.children(badges.iter().map(|badge| {
			let class = if badge.base { "badge base" } else { "badge" };
			PageElement::new("span")
				.attr("class", class)
				.child(badge.label.clone().into_owned())
		}))
		.into()
}
