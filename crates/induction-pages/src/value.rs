//! Classification of raw JSON into renderable shapes.
//!
//! The content document has no schema. Every resolved value is classified
//! once into a [`RenderableValue`] and the renderer matches on the variant,
//! instead of re-inspecting the JSON shape at each step.

use serde_json::Value;
use std::borrow::Cow;

/// A resolved value, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderableValue<'a> {
	/// A plain string, rendered as prose (markup when trusted).
	Markup(&'a str),
	/// A number or boolean.
	Scalar(&'a Value),
	/// An array whose elements are all strings.
	StringList(Vec<&'a str>),
	/// A non-empty array whose elements are all objects.
	ObjectList(Vec<Subcard<'a>>),
	/// An object carrying at least one recognised field.
	Structured(StructuredObject<'a>),
	/// Anything else (mixed arrays, objects without recognised fields),
	/// rendered as its JSON serialization.
	Opaque(&'a Value),
}

/// One element of a list of structured items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subcard<'a> {
	/// Heading.
	pub title: Option<Cow<'a, str>>,
	/// Paragraph.
	pub text: Option<Cow<'a, str>>,
	/// Nested bullet list.
	pub items: Vec<Cow<'a, str>>,
}

/// An object with recognised fields, rendered in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredObject<'a> {
	pub title: Option<Cow<'a, str>>,
	pub lead: Option<Cow<'a, str>>,
	pub text: Option<Cow<'a, str>>,
	pub badges: Vec<Badge<'a>>,
	pub items: Option<ItemsBlock<'a>>,
	pub timeline: Vec<TimelineEntry<'a>>,
	pub link: Option<Link<'a>>,
}

impl StructuredObject<'_> {
	/// Whether no recognised field produced content.
	pub fn is_empty(&self) -> bool {
		self.title.is_none()
			&& self.lead.is_none()
			&& self.text.is_none()
			&& self.badges.is_empty()
			&& self.items.is_none()
			&& self.timeline.is_empty()
			&& self.link.is_none()
	}
}

/// The `items` field of a structured object.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsBlock<'a> {
	/// Every item is an object with `title`, `text` or `items`.
	Subcards(Vec<Subcard<'a>>),
	/// Plain bullets; non-string items are JSON-stringified.
	Bullets(Vec<Cow<'a, str>>),
}

/// A badge chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge<'a> {
	pub label: Cow<'a, str>,
	/// Marks the chip with the `base` modifier.
	pub base: bool,
}

/// A timeline segment.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry<'a> {
	pub title: Cow<'a, str>,
	/// Duration in minutes; missing or non-numeric values count as 0.
	pub minutes: f64,
	/// Minutes as written in the document, for the caption.
	pub minutes_label: Cow<'a, str>,
}

/// An external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
	pub href: Cow<'a, str>,
	pub text: Cow<'a, str>,
}

impl<'a> RenderableValue<'a> {
	/// Classifies a resolved value. `null` yields `None` (render nothing).
	pub fn classify(value: &'a Value) -> Option<Self> {
		let classified = match value {
			Value::Null => return None,
			Value::String(s) => Self::Markup(s),
			Value::Bool(_) | Value::Number(_) => Self::Scalar(value),
			Value::Array(elements) => classify_array(value, elements),
			Value::Object(_) => {
				let structured = StructuredObject::from_object(value);
				if structured.is_empty() {
					Self::Opaque(value)
				} else {
					Self::Structured(structured)
				}
			}
		};
		Some(classified)
	}
}

fn classify_array<'a>(value: &'a Value, elements: &'a [Value]) -> RenderableValue<'a> {
	if let Some(strings) = elements.iter().map(Value::as_str).collect::<Option<Vec<_>>>() {
		return RenderableValue::StringList(strings);
	}
	if elements.iter().all(Value::is_object) {
		return RenderableValue::ObjectList(elements.iter().map(Subcard::from_object).collect());
	}
	RenderableValue::Opaque(value)
}

impl<'a> Subcard<'a> {
	fn from_object(value: &'a Value) -> Self {
		Self {
			title: prose(value.get("title")),
			text: prose(value.get("text")),
			items: value
				.get("items")
				.and_then(Value::as_array)
				.map(|items| items.iter().map(string_form).collect())
				.unwrap_or_default(),
		}
	}

	/// Whether an object carries any subcard field.
	fn has_fields(value: &Value) -> bool {
		["title", "text", "items"]
			.iter()
			.any(|field| value.get(field).is_some_and(|v| !v.is_null()))
	}
}

impl<'a> StructuredObject<'a> {
	fn from_object(value: &'a Value) -> Self {
		Self {
			title: prose(value.get("title")),
			lead: prose(value.get("lead")),
			text: prose(value.get("text")),
			badges: non_empty_array(value.get("badges"))
				.map(|list| list.iter().map(Badge::from_value).collect())
				.unwrap_or_default(),
			items: non_empty_array(value.get("items")).map(ItemsBlock::from_items),
			timeline: non_empty_array(value.get("timeline"))
				.map(|list| list.iter().map(TimelineEntry::from_value).collect())
				.unwrap_or_default(),
			link: value.get("link").and_then(Link::from_value),
		}
	}
}

impl<'a> ItemsBlock<'a> {
	fn from_items(items: &'a [Value]) -> Self {
		if items.iter().all(Subcard::has_fields) {
			Self::Subcards(items.iter().map(Subcard::from_object).collect())
		} else {
			Self::Bullets(items.iter().map(string_form).collect())
		}
	}
}

impl<'a> Badge<'a> {
	fn from_value(value: &'a Value) -> Self {
		let label = value
			.get("label")
			.filter(|label| is_truthy(label))
			.unwrap_or(value);
		Self {
			label: string_form(label),
			base: value.get("base").is_some_and(is_truthy),
		}
	}
}

impl<'a> TimelineEntry<'a> {
	fn from_value(value: &'a Value) -> Self {
		let minutes_value = value.get("min").filter(|v| is_truthy(v));
		Self {
			title: prose(value.get("title")).unwrap_or_default(),
			minutes: minutes_value.map(numeric).unwrap_or(0.0),
			minutes_label: minutes_value
				.map(string_form)
				.unwrap_or(Cow::Borrowed("0")),
		}
	}
}

impl<'a> Link<'a> {
	fn from_value(value: &'a Value) -> Option<Self> {
		let href = value.get("href").filter(|v| is_truthy(v))?;
		let href = string_form(href);
		let text = prose(value.get("text")).unwrap_or_else(|| href.clone());
		Some(Self { href, text })
	}
}

fn non_empty_array(value: Option<&Value>) -> Option<&[Value]> {
	value
		.and_then(Value::as_array)
		.map(Vec::as_slice)
		.filter(|list| !list.is_empty())
}

/// A prose field: present when truthy, rendered through its string form.
fn prose(value: Option<&Value>) -> Option<Cow<'_, str>> {
	value.filter(|v| is_truthy(v)).map(string_form)
}

/// String form of a value: strings as-is, scalars and containers as JSON.
pub fn string_form(value: &Value) -> Cow<'_, str> {
	match value {
		Value::String(s) => Cow::Borrowed(s),
		other => Cow::Owned(other.to_string()),
	}
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Numeric value of a number or numeric string; 0 otherwise.
fn numeric(value: &Value) -> f64 {
	let parsed = match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok(),
		Value::Bool(true) => Some(1.0),
		_ => None,
	};
	parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_null_renders_nothing() {
		assert_eq!(RenderableValue::classify(&Value::Null), None);
	}

	#[rstest]
	#[case(json!("<b>hola</b>"), "markup")]
	#[case(json!(5), "scalar")]
	#[case(json!(true), "scalar")]
	#[case(json!(["a", "b"]), "strings")]
	#[case(json!([]), "strings")]
	#[case(json!([{"title": "T"}]), "objects")]
	#[case(json!([{"title": "T"}, null]), "opaque")]
	#[case(json!(["a", 1]), "opaque")]
	#[case(json!({"title": "T"}), "structured")]
	#[case(json!({"otro": "x"}), "opaque")]
	#[case(json!({"title": ""}), "opaque")]
	fn test_classify_shape(#[case] value: Value, #[case] expected: &str) {
		let shape = match RenderableValue::classify(&value).expect("non-null") {
			RenderableValue::Markup(_) => "markup",
			RenderableValue::Scalar(_) => "scalar",
			RenderableValue::StringList(_) => "strings",
			RenderableValue::ObjectList(_) => "objects",
			RenderableValue::Structured(_) => "structured",
			RenderableValue::Opaque(_) => "opaque",
		};
		assert_eq!(shape, expected);
	}

	#[rstest]
	fn test_items_with_subcard_fields_become_subcards() {
		let value = json!({"items": [{"title": "A"}, {"text": "b", "extra": 1}]});
		let Some(RenderableValue::Structured(obj)) = RenderableValue::classify(&value) else {
			panic!("expected structured object");
		};
		assert!(matches!(obj.items, Some(ItemsBlock::Subcards(ref cards)) if cards.len() == 2));
	}

	#[rstest]
	fn test_mixed_items_become_bullets() {
		let value = json!({"items": ["uno", {"label": "dos"}, 3]});
		let Some(RenderableValue::Structured(obj)) = RenderableValue::classify(&value) else {
			panic!("expected structured object");
		};
		assert_eq!(
			obj.items,
			Some(ItemsBlock::Bullets(vec![
				Cow::Borrowed("uno"),
				Cow::Owned(r#"{"label":"dos"}"#.to_string()),
				Cow::Owned("3".to_string()),
			]))
		);
	}

	#[rstest]
	#[case(json!("Intro"), "Intro", false)]
	#[case(json!({"label": "Base", "base": true}), "Base", true)]
	#[case(json!({"label": "Extra", "base": 0}), "Extra", false)]
	#[case(json!({"base": 1}), r#"{"base":1}"#, true)]
	fn test_badge_from_value(#[case] value: Value, #[case] label: &str, #[case] base: bool) {
		let badge = Badge::from_value(&value);
		assert_eq!(badge.label, label);
		assert_eq!(badge.base, base);
	}

	#[rstest]
	#[case(json!({"title": "A", "min": 10}), 10.0, "10")]
	#[case(json!({"title": "A", "min": "15"}), 15.0, "15")]
	#[case(json!({"title": "A", "min": "pronto"}), 0.0, "pronto")]
	#[case(json!({"title": "A"}), 0.0, "0")]
	#[case(json!({"title": "A", "min": 0}), 0.0, "0")]
	fn test_timeline_minutes(#[case] value: Value, #[case] minutes: f64, #[case] label: &str) {
		let entry = TimelineEntry::from_value(&value);
		assert_eq!(entry.minutes, minutes);
		assert_eq!(entry.minutes_label, label);
	}

	#[rstest]
	fn test_link_requires_href() {
		assert_eq!(Link::from_value(&json!({"text": "sin destino"})), None);
		assert_eq!(Link::from_value(&json!({"href": ""})), None);
		let value = json!({"href": "https://musicala.co"});
		let link = Link::from_value(&value).unwrap();
		assert_eq!(link.text, "https://musicala.co");
	}

	#[rstest]
	#[case(json!(0), false)]
	#[case(json!(0.5), true)]
	#[case(json!(""), false)]
	#[case(json!("0"), true)]
	#[case(json!([]), true)]
	#[case(json!({}), true)]
	#[case(Value::Null, false)]
	fn test_is_truthy(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(is_truthy(&value), expected);
	}
}
