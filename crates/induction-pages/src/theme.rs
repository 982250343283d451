//! Theme color and footer year.

use chrono::Datelike;
use induction_core::page::{Page, PageElement};
use tracing::debug;

/// Custom property carrying the brand color.
pub const PRIMARY_COLOR_PROPERTY: &str = "--color-primary";

/// Id of the element receiving the current year.
pub const YEAR_ELEMENT_ID: &str = "year";

/// Applies the brand color to the page.
///
/// Sets `--color-primary` in the `<html>` element's inline style, replacing a
/// previous declaration, and upserts `<meta name="theme-color">` in `<head>`.
/// An empty color changes nothing.
pub fn apply_theme(page: &mut Page, color: &str) {
	if color.is_empty() {
		return;
	}

	if let Some(path) = page.find_element(|el| el.tag_name() == "html")
		&& let Some(html) = page.element_at_mut(&path)
	{
		let style = with_declaration(html.get_attr("style").unwrap_or_default(), color);
		html.set_attr("style", style);
	}

	if let Some(path) = page.find_element(is_theme_meta) {
		if let Some(meta) = page.element_at_mut(&path) {
			meta.set_attr("content", color.to_owned());
		}
	} else if let Some(path) = page.find_element(|el| el.tag_name() == "head")
		&& let Some(head) = page.element_at_mut(&path)
	{
		head.add_child(
			PageElement::new("meta")
				.attr("name", "theme-color")
				.attr("content", color.to_owned()),
		);
	} else {
		debug!("page has no <head>; theme-color meta not added");
	}
}

fn is_theme_meta(element: &PageElement) -> bool {
	element.tag_name() == "meta" && element.get_attr("name") == Some("theme-color")
}

/// Rewrites an inline style so it declares the primary color exactly once.
fn with_declaration(style: &str, color: &str) -> String {
	let mut declarations: Vec<String> = style
		.split(';')
		.map(str::trim)
		.filter(|decl| !decl.is_empty())
		.filter(|decl| {
			decl.split(':')
				.next()
				.is_none_or(|name| name.trim() != PRIMARY_COLOR_PROPERTY)
		})
		.map(str::to_owned)
		.collect();
	declarations.push(format!("{PRIMARY_COLOR_PROPERTY}: {color}"));
	declarations.join("; ")
}

/// Writes `year` as the text of the `#year` element, if present.
pub fn stamp_year(page: &mut Page, year: i32) -> bool {
	let Some(path) = page.find_element(|el| el.get_attr("id") == Some(YEAR_ELEMENT_ID)) else {
		return false;
	};
	match page.element_at_mut(&path) {
		Some(element) => {
			element.set_text(year.to_string());
			true
		}
		None => false,
	}
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
	chrono::Local::now().year()
}
