//! HTML parsing into the page tree.
//!
//! Parsing goes through `scraper` (html5ever), so malformed templates and
//! markup recover the way a browser would. Recovered errors are logged at
//! `debug` and never fail the parse.

use super::{Page, PageElement, RAW_TEXT_ELEMENTS};
use scraper::{ElementRef, Html, Node};

/// Parses a complete HTML document.
///
/// The result is a [`Page::Fragment`] holding the doctype (as raw HTML),
/// top-level comments and the `<html>` element.
pub fn parse_document(source: &str) -> Page {
	let html = Html::parse_document(source);
	log_recovered_errors(&html);

	let mut nodes = Vec::new();
	for child in html.tree.root().children() {
		match child.value() {
			Node::Doctype(doctype) => {
				nodes.push(Page::raw(format!("<!DOCTYPE {}>", doctype.name())));
			}
			Node::Comment(comment) => {
				let comment: &str = comment;
				nodes.push(Page::raw(format!("<!--{}-->", comment)));
			}
			Node::Element(_) => {
				if let Some(element) = ElementRef::wrap(child) {
					nodes.push(convert_element(element));
				}
			}
			_ => {}
		}
	}
	Page::Fragment(nodes)
}

/// Parses an HTML fragment in `<body>` context.
///
/// Used for trusted markup values: the result holds the parsed nodes without
/// any wrapper element.
pub fn parse_fragment(markup: &str) -> Page {
	let html = Html::parse_fragment(markup);
	log_recovered_errors(&html);

	let root = html.root_element();
	let mut nodes = Vec::new();
	convert_children(root, &mut nodes);
	Page::Fragment(nodes)
}

fn convert_element(element: ElementRef<'_>) -> Page {
	let value = element.value();
	let mut page_element = PageElement::new(value.name().to_owned());
	for (name, attr_value) in value.attrs() {
		page_element.add_attr(name.to_owned(), attr_value.to_owned());
	}
	convert_children(element, page_element.child_views_mut());
	Page::Element(page_element)
}

fn convert_children(element: ElementRef<'_>, out: &mut Vec<Page>) {
	let raw_text = RAW_TEXT_ELEMENTS.contains(&element.value().name());
	for child in element.children() {
		match child.value() {
			Node::Text(text) => {
				let text: &str = text;
				if raw_text {
					out.push(Page::raw(text.to_owned()));
				} else {
					out.push(Page::text(text.to_owned()));
				}
			}
			Node::Comment(comment) => {
				let comment: &str = comment;
				out.push(Page::raw(format!("<!--{}-->", comment)));
			}
			Node::Element(_) => {
				if let Some(child) = ElementRef::wrap(child) {
					out.push(convert_element(child));
				}
			}
			_ => {}
		}
	}
}

fn log_recovered_errors(html: &Html) {
	for error in &html.errors {
		tracing::debug!(%error, "recovered from malformed HTML");
	}
}
