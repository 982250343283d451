//! Accessible tab widget state.
//!
//! [`TabController`] pairs each `[role="tab"]` button with the panel named by
//! its `aria-controls`, keeps exactly one pair active and reports every
//! transition as an [`Activation`]. The host performs the side effects the
//! activation asks for (moving focus, publishing the navigation fragment);
//! [`TabController::apply`] writes the state into a page tree.
//!
//! [`ScrollRail`] holds the geometry of a horizontally scrollable tab strip and
//! derives the enabled state of its previous/next arrows.

mod rail;

pub use rail::{RailAffordance, ScrollDirection, ScrollRail};

use induction_core::page::{NodePath, Page};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Class marking the active button and panel.
pub const ACTIVE_CLASS: &str = "is-active";

/// Class marking a button that may start out active.
pub const TAB_CLASS: &str = "tab";

/// Class of the "scroll back" arrow.
pub const PREV_BUTTON_CLASS: &str = "tab-prev";

/// Class of the "scroll forward" arrow.
pub const NEXT_BUTTON_CLASS: &str = "tab-next";

/// A tab button and the panel it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPair {
	pub button: NodePath,
	pub panel: NodePath,
	pub panel_id: String,
}

/// Keys that move between tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
	Next,
	Previous,
	First,
	Last,
}

/// A key name that does not move between tabs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key `{0}` does not move between tabs")]
pub struct UnhandledKey(pub String);

impl FromStr for TabKey {
	type Err = UnhandledKey;

	/// Parses a DOM `KeyboardEvent.key` name.
	fn from_str(key: &str) -> Result<Self, Self::Err> {
		match key {
			"ArrowRight" | "ArrowDown" => Ok(Self::Next),
			"ArrowLeft" | "ArrowUp" => Ok(Self::Previous),
			"Home" => Ok(Self::First),
			"End" => Ok(Self::Last),
			other => Err(UnhandledKey(other.to_owned())),
		}
	}
}

/// What caused an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
	Pointer,
	Keyboard,
	/// The navigation fragment changed.
	Fragment,
	/// Page load.
	Initial,
}

impl ActivationSource {
	/// User-driven activations move focus and publish the fragment.
	fn is_user(self) -> bool {
		matches!(self, Self::Pointer | Self::Keyboard)
	}
}

/// Result of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
	/// Index of the active pair.
	pub index: usize,
	pub panel_id: String,
	/// Whether focus moves to the active button.
	pub focus: bool,
	/// Fragment to publish in the address, without `#`.
	pub fragment: Option<String>,
}

/// Tab state machine over the pairs discovered in a page.
#[derive(Debug, Clone)]
pub struct TabController {
	tabs: Vec<TabPair>,
	panels: Vec<NodePath>,
	active: Option<usize>,
	prefix: String,
	scroll_affordance: bool,
}

impl TabController {
	/// Discovers tab pairs in `page`.
	///
	/// Buttons without `aria-controls`, or whose panel is missing, are skipped.
	/// The first `.tab.is-active` button becomes the active pair.
	pub fn discover(page: &Page, prefix: impl Into<String>) -> Self {
		let mut tabs = Vec::new();
		let mut active = None;
		for button in page.find_elements(|el| el.get_attr("role") == Some("tab")) {
			let Some(element) = page.element_at(&button) else {
				continue;
			};
			let Some(panel_id) = element.get_attr("aria-controls") else {
				debug!("tab button without aria-controls skipped");
				continue;
			};
			let Some(panel) = page.find_element(|el| el.get_attr("id") == Some(panel_id)) else {
				debug!(panel = panel_id, "tab button controls a missing panel");
				continue;
			};
			if active.is_none() && element.has_class(TAB_CLASS) && element.has_class(ACTIVE_CLASS) {
				active = Some(tabs.len());
			}
			tabs.push(TabPair {
				button,
				panel,
				panel_id: panel_id.to_owned(),
			});
		}

		Self {
			tabs,
			panels: page.find_elements(|el| el.get_attr("role") == Some("tabpanel")),
			active,
			prefix: prefix.into(),
			scroll_affordance: false,
		}
	}

	/// Also drives the `.tab-prev`/`.tab-next` arrows in [`apply`](Self::apply).
	pub fn with_scroll_affordance(mut self, enabled: bool) -> Self {
		self.scroll_affordance = enabled;
		self
	}

	pub fn tabs(&self) -> &[TabPair] {
		&self.tabs
	}

	pub fn active(&self) -> Option<usize> {
		self.active
	}

	pub fn active_pair(&self) -> Option<&TabPair> {
		self.active.and_then(|index| self.tabs.get(index))
	}

	/// Page-load activation.
	///
	/// Uses `fragment` when it names a pair, else the pre-marked active pair,
	/// else the first one.
	pub fn initialize(&mut self, fragment: Option<&str>) -> Option<Activation> {
		if let Some(activation) = fragment.and_then(|fragment| self.activate_by_fragment(fragment)) {
			return Some(activation);
		}
		let index = self.active.unwrap_or(0);
		self.activate(index, ActivationSource::Initial)
	}

	/// Activates the pair at `index`. Out-of-range indices are ignored.
	pub fn activate(&mut self, index: usize, source: ActivationSource) -> Option<Activation> {
		let pair = self.tabs.get(index)?;
		let user = source.is_user();
		let activation = Activation {
			index,
			panel_id: pair.panel_id.clone(),
			focus: user,
			fragment: user.then(|| self.fragment_for(&pair.panel_id)),
		};
		self.active = Some(index);
		debug!(panel = %activation.panel_id, ?source, "tab activated");
		Some(activation)
	}

	/// Moves relative to the active pair, wrapping at both ends.
	pub fn handle_key(&mut self, key: TabKey) -> Option<Activation> {
		let count = self.tabs.len();
		if count == 0 {
			return None;
		}
		let current = self.active.unwrap_or(0);
		let next = match key {
			TabKey::Next => (current + 1) % count,
			TabKey::Previous => (current + count - 1) % count,
			TabKey::First => 0,
			TabKey::Last => count - 1,
		};
		self.activate(next, ActivationSource::Keyboard)
	}

	/// Activates the pair whose panel matches a navigation fragment.
	///
	/// Accepts the id with or without the prefix (`intro` and `tab-intro`)
	/// and an optional leading `#`. Unknown fragments change nothing.
	pub fn activate_by_fragment(&mut self, fragment: &str) -> Option<Activation> {
		let fragment = fragment.trim_start_matches('#');
		if fragment.is_empty() {
			return None;
		}
		let panel_id = if fragment.starts_with(&self.prefix) {
			fragment.to_owned()
		} else {
			format!("{}{}", self.prefix, fragment)
		};
		let index = self.tabs.iter().position(|pair| pair.panel_id == panel_id)?;
		self.activate(index, ActivationSource::Fragment)
	}

	/// Navigation fragment for a panel id: the id without the prefix.
	pub fn fragment_for(&self, panel_id: &str) -> String {
		panel_id
			.strip_prefix(self.prefix.as_str())
			.unwrap_or(panel_id)
			.to_owned()
	}

	/// Writes the active state into `page`.
	///
	/// Every button gets `aria-selected` and a roving `tabindex`; only the
	/// active button and panel keep `is-active`.
	pub fn apply(&self, page: &mut Page) {
		for panel in &self.panels {
			if let Some(element) = page.element_at_mut(panel) {
				element.toggle_class(ACTIVE_CLASS, false);
			}
		}
		for (index, pair) in self.tabs.iter().enumerate() {
			let is_active = self.active == Some(index);
			if let Some(button) = page.element_at_mut(&pair.button) {
				button.toggle_class(ACTIVE_CLASS, is_active);
				button.set_attr("aria-selected", if is_active { "true" } else { "false" });
				button.set_attr("tabindex", if is_active { "0" } else { "-1" });
			}
			if is_active && let Some(panel) = page.element_at_mut(&pair.panel) {
				panel.toggle_class(ACTIVE_CLASS, true);
			}
		}

		if self.scroll_affordance {
			RailAffordance::INITIAL.apply(page);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use induction_core::page::parse_fragment;
	use rstest::{fixture, rstest};

	const TABS: &str = r#"<nav class="tabs" role="tablist">
<button class="tab" role="tab" aria-controls="tab-intro">Intro</button>
<button class="tab is-active" role="tab" aria-controls="tab-equipo">Equipo</button>
<button class="tab" role="tab" aria-controls="tab-fantasma">Fantasma</button>
<button class="tab" role="tab" aria-controls="tab-agenda">Agenda</button>
</nav>
<section id="tab-intro" role="tabpanel"></section>
<section id="tab-equipo" role="tabpanel" class="is-active"></section>
<section id="tab-agenda" role="tabpanel"></section>"#;

	#[fixture]
	fn page() -> Page {
		parse_fragment(TABS)
	}

	#[fixture]
	fn controller(page: Page) -> TabController {
		TabController::discover(&page, "tab-")
	}

	#[rstest]
	fn test_discovery_skips_missing_panels(controller: TabController) {
		let ids: Vec<_> = controller.tabs().iter().map(|p| p.panel_id.as_str()).collect();
		assert_eq!(ids, ["tab-intro", "tab-equipo", "tab-agenda"]);
		assert_eq!(controller.active(), Some(1));
	}

	#[rstest]
	#[case("ArrowRight", TabKey::Next)]
	#[case("ArrowDown", TabKey::Next)]
	#[case("ArrowLeft", TabKey::Previous)]
	#[case("ArrowUp", TabKey::Previous)]
	#[case("Home", TabKey::First)]
	#[case("End", TabKey::Last)]
	fn test_key_names(#[case] name: &str, #[case] expected: TabKey) {
		assert_eq!(name.parse::<TabKey>(), Ok(expected));
	}

	#[rstest]
	fn test_other_keys_are_unhandled() {
		assert_eq!("Enter".parse::<TabKey>(), Err(UnhandledKey("Enter".to_owned())));
	}

	#[rstest]
	#[case(0, TabKey::Previous, 2)]
	#[case(2, TabKey::Next, 0)]
	#[case(1, TabKey::Next, 2)]
	#[case(1, TabKey::First, 0)]
	#[case(0, TabKey::Last, 2)]
	fn test_keys_wrap(
		mut controller: TabController,
		#[case] start: usize,
		#[case] key: TabKey,
		#[case] expected: usize,
	) {
		controller.activate(start, ActivationSource::Pointer);
		let activation = controller.handle_key(key).unwrap();
		assert_eq!(activation.index, expected);
		assert!(activation.focus);
	}

	#[rstest]
	fn test_pointer_activation_publishes_stripped_fragment(mut controller: TabController) {
		let activation = controller.activate(2, ActivationSource::Pointer).unwrap();
		assert_eq!(activation.panel_id, "tab-agenda");
		assert_eq!(activation.fragment.as_deref(), Some("agenda"));
		assert!(activation.focus);
	}

	#[rstest]
	#[case("intro")]
	#[case("tab-intro")]
	#[case("#intro")]
	fn test_fragment_activation_accepts_both_forms(mut controller: TabController, #[case] fragment: &str) {
		let activation = controller.activate_by_fragment(fragment).unwrap();
		assert_eq!(activation.index, 0);
		assert!(!activation.focus);
		assert_eq!(activation.fragment, None);
	}

	#[rstest]
	fn test_unknown_fragment_is_ignored(mut controller: TabController) {
		assert_eq!(controller.activate_by_fragment("fantasma"), None);
		assert_eq!(controller.activate_by_fragment(""), None);
		assert_eq!(controller.active(), Some(1));
	}

	#[rstest]
	fn test_initialize_prefers_fragment_then_marked_tab(mut controller: TabController) {
		assert_eq!(controller.initialize(Some("agenda")).unwrap().index, 2);
		let mut fresh = TabController::discover(&parse_fragment(TABS), "tab-");
		let activation = fresh.initialize(Some("nada")).unwrap();
		assert_eq!(activation.index, 1);
		assert_eq!(activation.fragment, None);
	}

	#[rstest]
	fn test_initialize_defaults_to_first() {
		let page = parse_fragment(
			r#"<button role="tab" aria-controls="tab-a"></button><div id="tab-a" role="tabpanel"></div>"#,
		);
		let mut controller = TabController::discover(&page, "tab-");
		assert_eq!(controller.initialize(None).unwrap().index, 0);
	}

	#[rstest]
	fn test_marked_button_needs_tab_class() {
		let page = parse_fragment(
			r#"<button role="tab" aria-controls="tab-a"></button><button class="is-active" role="tab" aria-controls="tab-b"></button>
<div id="tab-a" role="tabpanel"></div><div id="tab-b" role="tabpanel"></div>"#,
		);
		let mut controller = TabController::discover(&page, "tab-");
		assert_eq!(controller.initialize(None).unwrap().index, 0);
	}

	#[rstest]
	fn test_no_tabs_is_a_no_op() {
		let mut page = parse_fragment("<p>sin pestañas</p>");
		let mut controller = TabController::discover(&page, "tab-");
		assert_eq!(controller.initialize(None), None);
		assert_eq!(controller.handle_key(TabKey::Next), None);
		controller.apply(&mut page);
		assert_eq!(page.render_to_string(), "<p>sin pestañas</p>");
	}

	#[rstest]
	fn test_apply_writes_exactly_one_active_pair(mut page: Page) {
		let mut controller = TabController::discover(&page, "tab-");
		controller.activate(2, ActivationSource::Pointer);
		controller.apply(&mut page);

		let active = page.find_elements(|el| el.has_class(ACTIVE_CLASS));
		let ids: Vec<_> = active
			.iter()
			.filter_map(|path| page.element_at(path))
			.map(|el| el.get_attr("aria-controls").or(el.get_attr("id")).unwrap_or_default())
			.collect();
		assert_eq!(ids, ["tab-agenda", "tab-agenda"]);

		let button = page.element_at(&controller.tabs()[2].button).unwrap();
		assert_eq!(button.get_attr("aria-selected"), Some("true"));
		assert_eq!(button.get_attr("tabindex"), Some("0"));
		let other = page.element_at(&controller.tabs()[1].button).unwrap();
		assert_eq!(other.get_attr("aria-selected"), Some("false"));
		assert_eq!(other.get_attr("tabindex"), Some("-1"));
	}

	#[rstest]
	fn test_apply_with_scroll_affordance_marks_arrows() {
		let mut page = parse_fragment(
			r#"<button class="tab-prev"></button><button class="tab-next" disabled></button>
<button role="tab" aria-controls="tab-a"></button><div id="tab-a" role="tabpanel"></div>"#,
		);
		let mut controller = TabController::discover(&page, "tab-").with_scroll_affordance(true);
		controller.initialize(None);
		controller.apply(&mut page);

		let prev = page.find_element(|el| el.has_class(PREV_BUTTON_CLASS)).unwrap();
		let next = page.find_element(|el| el.has_class(NEXT_BUTTON_CLASS)).unwrap();
		assert!(page.element_at(&prev).unwrap().has_attr("disabled"));
		assert!(!page.element_at(&next).unwrap().has_attr("disabled"));
	}
}
