//! Proportional timeline segments.

use super::MarkupPolicy;
use crate::value::TimelineEntry;
use induction_core::page::{Page, PageElement};

/// Renders `<div class="timeline">` with one segment per entry, in input order.
///
/// Each segment is as wide as its share of the summed minutes. When the sum
/// is zero or negative every segment gets width 0.
pub fn render_timeline(entries: &[TimelineEntry<'_>], policy: MarkupPolicy) -> Page {
	let total: f64 = entries.iter().map(|entry| entry.minutes).sum();

	PageElement::new("div")
		.attr("class", "timeline")
		.children(entries.iter().map(|entry| {
			let width = segment_width(entry.minutes, total);
			PageElement::new("div")
				.attr("class", "t-seg")
				.attr("style", format!("width: {width}%"))
				.child(
					PageElement::new("div")
						.attr("class", "t-title")
						.child(policy.prose(&entry.title)),
				)
				.child(
					PageElement::new("div")
						.attr("class", "t-min")
						.child(format!("{} min", entry.minutes_label)),
				)
		}))
		.into()
}

fn segment_width(minutes: f64, total: f64) -> f64 {
	if total > 0.0 {
		minutes / total * 100.0
	} else {
		0.0
	}
}
