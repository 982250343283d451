//! Dotted-path lookup into the content document.

use serde_json::Value;

/// Resolves a dotted path (`"a.b.c"`) against `document`.
///
/// Each key descends into a JSON object. Resolution yields `None` as soon as a
/// key is missing or the current value is not an object; it never fails for
/// malformed paths. An explicit `null` at the end of the path resolves to
/// `Some(&Value::Null)`.
///
/// # Examples
///
/// ```
/// use induction_pages::resolve::resolve;
/// use serde_json::json;
///
/// let doc = json!({"equipo": {"lider": "Ana"}});
/// assert_eq!(resolve(&doc, "equipo.lider"), Some(&json!("Ana")));
/// assert_eq!(resolve(&doc, "equipo.lider.nombre"), None);
/// ```
pub fn resolve<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
	path.split('.')
		.try_fold(document, |current, key| current.as_object()?.get(key))
}
