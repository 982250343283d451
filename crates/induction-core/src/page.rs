//! Page tree for templates and rendered fragments.
//!
//! ## Overview
//!
//! The `Page` enum is the single representation used for both the static
//! onboarding template (after parsing) and the fragments produced while
//! hydrating it. A template is parsed once into a `Page`, mutated in place,
//! and rendered back to HTML with [`Page::render_to_string`].
//!
//! ## Example
//!
//! ```
//! use induction_core::page::{IntoPage, Page, PageElement};
//!
//! let view = PageElement::new("div")
//!     .attr("class", "subcard")
//!     .child(PageElement::new("h3").child("Welcome"))
//!     .into_page();
//!
//! assert_eq!(
//!     view.render_to_string(),
//!     "<div class=\"subcard\"><h3>Welcome</h3></div>"
//! );
//! ```

pub mod parse;
mod path;
mod util;

pub use parse::{parse_document, parse_fragment};
pub use path::NodePath;
pub use util::{BOOLEAN_ATTRS, RAW_TEXT_ELEMENTS, html_escape};

use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node. Always escaped when rendered.
	Text(Cow<'static, str>),
	/// Verbatim HTML (doctype, comments, script and style bodies).
	Raw(Cow<'static, str>),
	/// A fragment containing multiple nodes (no wrapper element).
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// Represents a DOM element in the page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes, in source order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child nodes.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute, replacing any previous value for the same name.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.set_attr(name, value);
		self
	}

	/// Adds a boolean attribute.
	///
	/// When true the attribute is rendered as a bare name (`disabled`).
	/// When false it is not added.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value { self.attr(name, "") } else { self }
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the named attribute.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_ref())
	}

	/// Returns whether the named attribute is present.
	pub fn has_attr(&self, name: &str) -> bool {
		self.get_attr(name).is_some()
	}

	/// Sets an attribute in place, keeping its position if it already exists.
	pub fn set_attr(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		let name = name.into();
		let value = value.into();
		match self
			.attrs
			.iter_mut()
			.find(|(n, _)| n.eq_ignore_ascii_case(&name))
		{
			Some((_, slot)) => *slot = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Removes an attribute, returning its previous value.
	pub fn remove_attr(&mut self, name: &str) -> Option<Cow<'static, str>> {
		let index = self
			.attrs
			.iter()
			.position(|(n, _)| n.eq_ignore_ascii_case(name))?;
		Some(self.attrs.remove(index).1)
	}

	/// Adds an attribute without checking for duplicates (for parser use).
	pub fn add_attr(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) {
		self.attrs.push((name.into(), value.into()));
	}

	/// Iterates over the whitespace-separated entries of the `class` attribute.
	pub fn classes(&self) -> impl Iterator<Item = &str> {
		self.get_attr("class")
			.unwrap_or_default()
			.split_ascii_whitespace()
	}

	/// Returns whether the element carries the given class.
	pub fn has_class(&self, class: &str) -> bool {
		self.classes().any(|c| c == class)
	}

	/// Adds or removes a class, leaving other classes in place.
	pub fn toggle_class(&mut self, class: &str, on: bool) {
		let mut classes: Vec<String> = self
			.classes()
			.filter(|c| *c != class)
			.map(str::to_owned)
			.collect();
		if on {
			classes.push(class.to_owned());
		}
		if classes.is_empty() {
			self.remove_attr("class");
		} else {
			self.set_attr("class", classes.join(" "));
		}
	}

	/// Returns the child nodes.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns the child nodes mutably.
	pub fn child_views_mut(&mut self) -> &mut Vec<Page> {
		&mut self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Adds a child mutably (for parser use).
	pub fn add_child(&mut self, child: impl IntoPage) {
		self.children.push(child.into_page());
	}

	/// Replaces every child with `content`.
	///
	/// A fragment is spliced so its nodes become direct children.
	pub fn replace_children(&mut self, content: impl IntoPage) {
		self.children.clear();
		match content.into_page() {
			Page::Fragment(nodes) => self.children.extend(nodes),
			Page::Empty => {}
			node => self.children.push(node),
		}
	}

	/// Replaces every child with a single escaped text node.
	pub fn set_text(&mut self, text: impl Into<Cow<'static, str>>) {
		self.replace_children(Page::Text(text.into()));
	}

	/// Concatenated text of all descendant text nodes.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.collect_text(&mut out);
		}
		out
	}

	/// Consumes the element and returns the children.
	pub fn into_children(self) -> Vec<Page> {
		self.children
	}
}

impl Page {
	/// Creates an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a verbatim HTML node.
	pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&PageElement> {
		match self {
			Page::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the element mutably if this node is one.
	pub fn as_element_mut(&mut self) -> Option<&mut PageElement> {
		match self {
			Page::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Child nodes of an element or fragment; empty for leaves.
	pub fn child_nodes(&self) -> &[Page] {
		match self {
			Page::Element(el) => &el.children,
			Page::Fragment(children) => children,
			_ => &[],
		}
	}

	pub(crate) fn child_nodes_mut(&mut self) -> Option<&mut Vec<Page>> {
		match self {
			Page::Element(el) => Some(&mut el.children),
			Page::Fragment(children) => Some(children),
			_ => None,
		}
	}

	/// Returns whether this node renders to nothing.
	pub fn is_empty(&self) -> bool {
		match self {
			Page::Empty => true,
			Page::Fragment(children) => children.iter().all(Page::is_empty),
			_ => false,
		}
	}

	/// Concatenated text of this node and its descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Page::Text(text) => out.push_str(text),
			Page::Element(el) => {
				for child in &el.children {
					child.collect_text(out);
				}
			}
			Page::Fragment(children) => {
				for child in children {
					child.collect_text(out);
				}
			}
			Page::Raw(_) | Page::Empty => {}
		}
	}

	/// Renders the tree to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					// Boolean attributes without a value keep their bare form
					let name_str: &str = name.as_ref();
					if value.is_empty() && BOOLEAN_ATTRS.contains(&name_str) {
						continue;
					}
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Raw(html) => output.push_str(html),
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a Page.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl From<PageElement> for Page {
	fn from(element: PageElement) -> Self {
		Page::Element(element)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_void_element_detection() {
		assert!(PageElement::new("br").is_void());
		assert!(PageElement::new("meta").is_void());
		assert!(!PageElement::new("div").is_void());
	}

	#[rstest]
	fn test_render_element_with_children() {
		let view = PageElement::new("div")
			.child("Hello, ")
			.child(PageElement::new("strong").child("World"))
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[rstest]
	fn test_render_void_element() {
		let view = PageElement::new("br").into_page();
		assert_eq!(view.render_to_string(), "<br />");
	}

	#[rstest]
	fn test_render_text_with_escaping() {
		let view = Page::text("<script>alert('xss')</script>");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
		);
	}

	#[rstest]
	fn test_render_raw_is_verbatim() {
		let view = Page::fragment([Page::raw("<!--note-->"), Page::text("a<b")]);
		assert_eq!(view.render_to_string(), "<!--note-->a&lt;b");
	}

	#[rstest]
	fn test_attr_replaces_existing_value() {
		let el = PageElement::new("a")
			.attr("rel", "opener")
			.attr("rel", "noopener");
		assert_eq!(el.attrs().len(), 1);
		assert_eq!(el.get_attr("rel"), Some("noopener"));
	}

	#[rstest]
	fn test_bool_attr_renders_bare_name() {
		let view = PageElement::new("button")
			.bool_attr("disabled", true)
			.into_page();
		assert_eq!(view.render_to_string(), "<button disabled></button>");

		let view = PageElement::new("button")
			.bool_attr("disabled", false)
			.into_page();
		assert_eq!(view.render_to_string(), "<button></button>");
	}

	#[rstest]
	fn test_non_boolean_empty_attr_keeps_value() {
		let view = PageElement::new("input").attr("placeholder", "").into_page();
		assert_eq!(view.render_to_string(), "<input placeholder=\"\" />");
	}

	#[rstest]
	#[case("tab", true, "tab is-active")]
	#[case("tab is-active", true, "tab is-active")]
	#[case("tab is-active", false, "tab")]
	fn test_toggle_class(#[case] initial: &'static str, #[case] on: bool, #[case] expected: &str) {
		let mut el = PageElement::new("button").attr("class", initial);
		el.toggle_class("is-active", on);
		assert_eq!(el.get_attr("class"), Some(expected));
	}

	#[rstest]
	fn test_toggle_class_removes_empty_attribute() {
		let mut el = PageElement::new("div").attr("class", "is-active");
		el.toggle_class("is-active", false);
		assert!(!el.has_attr("class"));
	}

	#[rstest]
	fn test_replace_children_splices_fragment() {
		let mut el = PageElement::new("div").child("old");
		el.replace_children(Page::fragment(["a", "b"]));
		assert_eq!(el.child_views().len(), 2);
		assert_eq!(el.text_content(), "ab");
	}

	#[rstest]
	fn test_replace_children_is_not_append() {
		let mut el = PageElement::new("div");
		el.set_text("x");
		el.set_text("x");
		assert_eq!(el.into_page().render_to_string(), "<div>x</div>");
	}

	#[rstest]
	fn test_into_page_option_none() {
		let view: Page = None::<String>.into_page();
		assert!(view.is_empty());
		assert_eq!(view.render_to_string(), "");
	}
}
