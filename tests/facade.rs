//! The facade re-exports the member crates.

use induction::{HydrationSettings, Hydrator, parse_document, render_page, resolve};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_facade_hydrates_through_reexports() {
	let document = json!({"bienvenida": {"title": "Hola", "link": {"href": "https://musicala.co"}}});
	let mut page = parse_document(r#"<html><head></head><body><div data-key="bienvenida"></div></body></html>"#);

	let report = Hydrator::new(&HydrationSettings::default()).hydrate(&mut page, &document);
	assert_eq!(report.rendered, 1);
	assert!(page.render_to_string().contains(r#"rel="noopener noreferrer""#));
	assert_eq!(resolve(&document, "bienvenida.title"), Some(&json!("Hola")));
}

#[rstest]
fn test_modules_are_reachable() {
	let page = induction::core::page::parse_fragment("<span id=\"year\"></span>");
	let settings = induction::conf::HydrationSettings::default();
	let rendered = render_page("<html><head></head><body><span id=\"year\"></span></body></html>", None, &settings, 2031);
	assert!(rendered.html.contains("2031"));
	assert_eq!(page.child_nodes().len(), 1);
	assert_eq!(induction::pages::hydration::DATA_KEY, "data-key");
}
