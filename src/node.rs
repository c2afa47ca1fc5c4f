use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::attrs::{is_truthy, scalar_to_string, Attrs};
use crate::error::{RenderError, RenderResult};

/// One entry in the builder's content tree.
///
/// Deserialization never rejects a well-formed JSON object: fields of the
/// wrong shape (`"attrs": []`, `"type": 5`, `"children": {}`) degrade to
/// defaults instead of failing the whole tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleNode {
    #[serde(rename = "type", default = "unknown_type", deserialize_with = "lenient_type")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_attrs")]
    pub attrs: Attrs,
    #[serde(default, deserialize_with = "lenient_children")]
    pub children: Vec<ModuleNode>,
}

fn unknown_type() -> String {
    "unknown".to_string()
}

// Falsy or structured values have no usable type name.
fn lenient_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(&value)
        .filter(|v| is_truthy(v))
        .and_then(scalar_to_string)
        .unwrap_or_else(unknown_type))
}

fn lenient_attrs<'de, D>(deserializer: D) -> Result<Attrs, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(Attrs::from(map)),
        _ => Ok(Attrs::default()),
    }
}

fn lenient_children<'de, D>(deserializer: D) -> Result<Vec<ModuleNode>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(node_from_value).collect()),
        _ => Ok(Vec::new()),
    }
}

fn node_from_value(value: Value) -> ModuleNode {
    match value {
        Value::Object(_) => {
            serde_json::from_value(value).unwrap_or_else(|_| ModuleNode::new(unknown_type()))
        }
        _ => ModuleNode::new(unknown_type()),
    }
}

impl ModuleNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: Attrs::default(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_children(mut self, children: Vec<ModuleNode>) -> Self {
        self.children = children;
        self
    }
}

/// A full page: sections, each holding rows, each holding columns of modules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, deserialize_with = "lenient_children")]
    pub sections: Vec<ModuleNode>,
}

/// Parse a single module tree from JSON.
pub fn parse_module(json: &str) -> RenderResult<ModuleNode> {
    module_from_value(serde_json::from_str(json)?)
}

/// Build a module tree from an already-parsed JSON value.
pub fn module_from_value(value: Value) -> RenderResult<ModuleNode> {
    Ok(serde_json::from_value(value)?)
}

/// Parse a page layout (`{"sections": [...]}`) from JSON.
pub fn parse_layout(json: &str) -> RenderResult<Layout> {
    layout_from_value(serde_json::from_str(json)?)
}

/// Build a layout from an already-parsed JSON value.
pub fn layout_from_value(value: Value) -> RenderResult<Layout> {
    if !value.is_object() {
        return Err(RenderError::InvalidLayout(
            "layout root must be an object with a 'sections' array".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let node = parse_module("{}").unwrap();
        assert_eq!(node.kind, "unknown");
        assert!(node.attrs.is_empty());
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_null_fields_default() {
        let node = parse_module(r#"{"type":null,"attrs":null,"children":null}"#).unwrap();
        assert_eq!(node.kind, "unknown");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_nested_children_keep_order() {
        let node = parse_module(
            r#"{"type":"row","children":[{"type":"text"},{"type":"heading"}]}"#,
        )
        .unwrap();
        let kinds: Vec<_> = node.children.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(kinds, vec!["text", "heading"]);
    }

    #[test]
    fn test_empty_array_attrs_default() {
        let node = parse_module(
            r#"{"type":"row","children":[{"type":"heading","attrs":{"text":"Hi"}},{"type":"text","attrs":[]}]}"#,
        )
        .unwrap();
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].attrs.str("text").as_deref(), Some("Hi"));
        assert_eq!(node.children[1].kind, "text");
        assert!(node.children[1].attrs.is_empty());
    }

    #[test]
    fn test_scalar_type_is_stringified() {
        assert_eq!(parse_module(r#"{"type":5}"#).unwrap().kind, "5");
        assert_eq!(parse_module(r#"{"type":0}"#).unwrap().kind, "unknown");
        assert_eq!(parse_module(r#"{"type":false}"#).unwrap().kind, "unknown");
        assert_eq!(parse_module(r#"{"type":{"name":"heading"}}"#).unwrap().kind, "unknown");
        assert_eq!(parse_module(r#"{"type":["heading"]}"#).unwrap().kind, "unknown");
    }

    #[test]
    fn test_malformed_children() {
        let node = parse_module(r#"{"type":"row","children":{"type":"text"}}"#).unwrap();
        assert!(node.children.is_empty());

        let node = parse_module(r#"{"type":"row","children":[1,"text",null,{"type":"text"}]}"#).unwrap();
        let kinds: Vec<_> = node.children.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(kinds, vec!["unknown", "unknown", "unknown", "text"]);
    }

    #[test]
    fn test_layout_sections_are_lenient() {
        let layout = parse_layout(r#"{"sections":[{"type":"section","attrs":[]},7]}"#).unwrap();
        assert_eq!(layout.sections.len(), 2);
        assert_eq!(layout.sections[1].kind, "unknown");
        assert!(parse_layout(r#"{"sections":"none"}"#).unwrap().sections.is_empty());
    }

    #[test]
    fn test_layout_rejects_non_object() {
        assert!(matches!(parse_layout("[1,2]"), Err(RenderError::InvalidLayout(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_module("{"), Err(RenderError::Json(_))));
    }
}
