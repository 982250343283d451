//! Scroll geometry of the tab strip.

use super::{NEXT_BUTTON_CLASS, PREV_BUTTON_CLASS};
use induction_core::page::Page;

/// Slack in pixels absorbing sub-pixel scroll positions.
const EDGE_TOLERANCE: f64 = 1.0;

/// Geometry of a horizontally scrollable tab strip, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollRail {
	pub scroll_left: f64,
	pub client_width: f64,
	pub scroll_width: f64,
}

/// Direction of an arrow press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
	Back,
	Forward,
}

/// Enabled state of the previous/next arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailAffordance {
	pub prev: bool,
	pub next: bool,
}

impl RailAffordance {
	/// State written into a served page: scrolled to the start, with more
	/// tabs assumed past the right edge until the client measures the strip.
	pub const INITIAL: Self = Self {
		prev: false,
		next: true,
	};

	/// Sets or clears `disabled` on the `.tab-prev` and `.tab-next` buttons.
	pub fn apply(self, page: &mut Page) {
		for (class, enabled) in [(PREV_BUTTON_CLASS, self.prev), (NEXT_BUTTON_CLASS, self.next)] {
			for path in page.find_elements(|el| el.has_class(class)) {
				let Some(button) = page.element_at_mut(&path) else {
					continue;
				};
				if enabled {
					button.remove_attr("disabled");
				} else {
					button.set_attr("disabled", "");
				}
			}
		}
	}
}

impl ScrollRail {
	pub fn new(scroll_left: f64, client_width: f64, scroll_width: f64) -> Self {
		Self {
			scroll_left,
			client_width,
			scroll_width,
		}
	}

	pub fn prev_enabled(&self) -> bool {
		self.scroll_left > EDGE_TOLERANCE
	}

	pub fn next_enabled(&self) -> bool {
		self.scroll_left + self.client_width < self.scroll_width - EDGE_TOLERANCE
	}

	pub fn affordance(&self) -> RailAffordance {
		RailAffordance {
			prev: self.prev_enabled(),
			next: self.next_enabled(),
		}
	}

	/// Largest reachable scroll position.
	pub fn max_scroll(&self) -> f64 {
		(self.scroll_width - self.client_width).max(0.0)
	}

	/// Scroll position that brings the tab at `offset` with `width` fully into
	/// view, moving as little as possible.
	pub fn scroll_into_view(&self, offset: f64, width: f64) -> f64 {
		let visible_end = self.scroll_left + self.client_width;
		let target = if offset < self.scroll_left {
			offset
		} else if offset + width > visible_end {
			offset + width - self.client_width
		} else {
			self.scroll_left
		};
		self.clamp(target)
	}

	/// Scroll position after an arrow press: one visible width in `direction`.
	pub fn scroll_by_page(&self, direction: ScrollDirection) -> f64 {
		let step = match direction {
			ScrollDirection::Back => -self.client_width,
			ScrollDirection::Forward => self.client_width,
		};
		self.clamp(self.scroll_left + step)
	}

	/// Moves the rail to `scroll_left`, clamped to the reachable range.
	pub fn scroll_to(&mut self, scroll_left: f64) {
		self.scroll_left = self.clamp(scroll_left);
	}

	fn clamp(&self, position: f64) -> f64 {
		position.clamp(0.0, self.max_scroll())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::at_start(0.0, false, true)]
	#[case::sub_pixel(0.5, false, true)]
	#[case::middle(100.0, true, true)]
	#[case::at_end(200.0, true, false)]
	#[case::sub_pixel_from_end(199.5, true, false)]
	fn test_affordance(#[case] scroll_left: f64, #[case] prev: bool, #[case] next: bool) {
		let rail = ScrollRail::new(scroll_left, 300.0, 500.0);
		assert_eq!(rail.affordance(), RailAffordance { prev, next });
	}

	#[rstest]
	fn test_strip_that_fits_has_no_arrows() {
		let rail = ScrollRail::new(0.0, 500.0, 480.0);
		assert_eq!(rail.affordance(), RailAffordance { prev: false, next: false });
		assert_eq!(rail.max_scroll(), 0.0);
	}

	#[rstest]
	#[case::already_visible(150.0, 50.0, 100.0)]
	#[case::left_of_view(40.0, 50.0, 40.0)]
	#[case::right_of_view(420.0, 60.0, 180.0)]
	#[case::past_the_end(480.0, 100.0, 200.0)]
	fn test_scroll_into_view(#[case] offset: f64, #[case] width: f64, #[case] expected: f64) {
		let rail = ScrollRail::new(100.0, 300.0, 500.0);
		assert_eq!(rail.scroll_into_view(offset, width), expected);
	}

	#[rstest]
	#[case(ScrollDirection::Forward, 200.0)]
	#[case(ScrollDirection::Back, 0.0)]
	fn test_scroll_by_page_clamps(#[case] direction: ScrollDirection, #[case] expected: f64) {
		let rail = ScrollRail::new(100.0, 300.0, 500.0);
		assert_eq!(rail.scroll_by_page(direction), expected);
	}

	#[rstest]
	fn test_scroll_to_updates_affordance() {
		let mut rail = ScrollRail::new(0.0, 300.0, 500.0);
		rail.scroll_to(1_000.0);
		assert_eq!(rail.scroll_left, 200.0);
		assert!(!rail.next_enabled());
		assert!(rail.prev_enabled());
	}
}
