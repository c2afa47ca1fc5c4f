//! Free-form attribute bag attached to a module node.
//!
//! Reads follow the page builder's truthiness rules: `null`, `false`, `""` and
//! `0` count as unset, so every rule can fall back to its default with a plain
//! `unwrap_or`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs(Map<String, Value>);

/// A navigation entry normalized from either a bare string or an object.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkItem {
    pub label: String,
    pub url: String,
}

/// A gallery image normalized from either a bare URL or `{src, alt}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a scalar the way it would appear when interpolated into markup.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and synthesized nodes.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw value, only when truthy.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| is_truthy(v))
    }

    pub fn str(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.str(key).unwrap_or_else(|| default.to_string())
    }

    /// First truthy scalar among `keys`, in order.
    pub fn first_str(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|k| self.str(k))
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Non-negative count, falling back to `default` when unset or unparsable.
    pub fn count_or(&self, key: &str, default: usize) -> usize {
        self.number(key)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n as usize)
            .unwrap_or(default)
    }

    /// Nested read such as `border_radius.top_left`.
    pub fn path(&self, keys: &[&str]) -> Option<String> {
        let (first, rest) = keys.split_first()?;
        let mut current = self.get(first)?;
        for key in rest {
            current = current.get(key).filter(|v| is_truthy(v))?;
        }
        scalar_to_string(current)
    }

    /// Array of scalars or labelled objects, as plain strings.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            Value::Array(items) => Some(items.iter().filter_map(item_label).collect()),
            _ => None,
        }
    }

    /// Navigation items: strings become slug URLs, objects keep their own link.
    pub fn link_items(&self, key: &str) -> Option<Vec<LinkItem>> {
        let Value::Array(items) = self.get(key)? else {
            return None;
        };
        let links = items
            .iter()
            .filter_map(|item| match item {
                Value::Object(obj) => {
                    let label = item_label(item).unwrap_or_else(|| "Link".to_string());
                    let url = ["url", "link", "href"]
                        .iter()
                        .find_map(|k| obj.get(*k).filter(|v| is_truthy(v)).and_then(scalar_to_string))
                        .unwrap_or_else(|| "#".to_string());
                    Some(LinkItem { label, url })
                }
                other => scalar_to_string(other).map(|label| LinkItem {
                    url: slug_url(&label),
                    label,
                }),
            })
            .collect();
        Some(links)
    }

    pub fn images(&self, key: &str) -> Vec<ImageRef> {
        let Some(Value::Array(items)) = self.get(key) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                Value::Object(obj) => {
                    let src = obj.get("src").and_then(scalar_to_string)?;
                    let alt = obj.get("alt").and_then(scalar_to_string).unwrap_or_default();
                    Some(ImageRef { src, alt })
                }
                other => scalar_to_string(other).map(|src| ImageRef {
                    src,
                    alt: String::new(),
                }),
            })
            .collect()
    }

    /// Array of objects, each exposed as its own attribute bag.
    pub fn object_list(&self, key: &str) -> Vec<Attrs> {
        let Some(Value::Array(items)) = self.get(key) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                Value::Object(obj) => Some(Attrs(obj.clone())),
                _ => None,
            })
            .collect()
    }
}

impl From<Map<String, Value>> for Attrs {
    fn from(map: Map<String, Value>) -> Self {
        Attrs(map)
    }
}

fn item_label(item: &Value) -> Option<String> {
    match item {
        Value::Object(obj) => ["label", "name", "title", "text"]
            .iter()
            .find_map(|k| obj.get(*k).filter(|v| is_truthy(v)).and_then(scalar_to_string)),
        other => scalar_to_string(other),
    }
}

fn slug_url(label: &str) -> String {
    format!("/{}", label.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attrs {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_falsy_values_are_unset() {
        let a = attrs(json!({"a": "", "b": 0, "c": false, "d": null, "e": "x"}));
        assert_eq!(a.str("a"), None);
        assert_eq!(a.str("b"), None);
        assert_eq!(a.str("c"), None);
        assert_eq!(a.str("d"), None);
        assert_eq!(a.str("e"), Some("x".to_string()));
    }

    #[test]
    fn test_numbers_render_without_trailing_zero() {
        let a = attrs(json!({"int": 48, "float": 1.5, "whole": 36.0}));
        assert_eq!(a.str("int").as_deref(), Some("48"));
        assert_eq!(a.str("float").as_deref(), Some("1.5"));
        assert_eq!(a.str("whole").as_deref(), Some("36"));
    }

    #[test]
    fn test_nested_path() {
        let a = attrs(json!({"border_radius": {"top_left": 4}}));
        assert_eq!(a.path(&["border_radius", "top_left"]).as_deref(), Some("4"));
        assert_eq!(a.path(&["border_radius", "top_right"]), None);
    }

    #[test]
    fn test_link_items_normalize_strings_and_objects() {
        let a = attrs(json!({"items": ["About Us", {"label": "Docs", "url": "/docs"}, {"title": "X"}]}));
        let items = a.link_items("items").unwrap();
        assert_eq!(items[0], LinkItem { label: "About Us".into(), url: "/about-us".into() });
        assert_eq!(items[1], LinkItem { label: "Docs".into(), url: "/docs".into() });
        assert_eq!(items[2], LinkItem { label: "X".into(), url: "#".into() });
    }

    #[test]
    fn test_images_accept_strings_and_objects() {
        let a = attrs(json!({"images": ["a.jpg", {"src": "b.jpg", "alt": "B"}, {"alt": "no src"}]}));
        let images = a.images("images");
        assert_eq!(images.len(), 2);
        assert_eq!(images[1].alt, "B");
    }

    #[test]
    fn test_count_or() {
        let a = attrs(json!({"n": "5", "bad": "x", "neg": -2}));
        assert_eq!(a.count_or("n", 3), 5);
        assert_eq!(a.count_or("bad", 3), 3);
        assert_eq!(a.count_or("neg", 3), 3);
        assert_eq!(a.count_or("missing", 3), 3);
    }
}
