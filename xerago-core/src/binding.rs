//! Schema-driven binding of content node properties onto typed models.
//!
//! A component declares its fields as a static table of [`FieldSpec`]s.
//! [`bind_fields`] reads each field from the node's property map, coercing
//! strings and numbers into the declared kind, and falls back to the
//! field's default when the property is absent, null or unparseable.

use serde_json::{Map, Value};
use std::collections::HashMap;
use xerago_shared::ContentNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    None,
    Text(&'static str),
    Integer(i64),
    Decimal(f64),
}

/// One entry of a component's field table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Text, default: FieldDefault::None }
    }

    pub const fn text_or(name: &'static str, default: &'static str) -> Self {
        Self { name, kind: FieldKind::Text, default: FieldDefault::Text(default) }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Integer, default: FieldDefault::None }
    }

    pub const fn integer_or(name: &'static str, default: i64) -> Self {
        Self { name, kind: FieldKind::Integer, default: FieldDefault::Integer(default) }
    }

    pub const fn decimal(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Decimal, default: FieldDefault::None }
    }

    pub const fn decimal_or(name: &'static str, default: f64) -> Self {
        Self { name, kind: FieldKind::Decimal, default: FieldDefault::Decimal(default) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

/// Result of binding a field table: every declared field that had either an
/// authored value or a default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundRecord {
    values: HashMap<&'static str, FieldValue>,
}

impl BoundRecord {
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Owned copy of a text field.
    pub fn string(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(FieldValue::Integer(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn decimal(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(FieldValue::Decimal(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Bind `schema` against a property map.
pub fn bind_fields(properties: &Map<String, Value>, schema: &[FieldSpec]) -> BoundRecord {
    let mut values = HashMap::with_capacity(schema.len());

    for spec in schema {
        let authored = properties
            .get(spec.name)
            .and_then(|raw| coerce(raw, spec.kind));

        if let Some(value) = authored.or_else(|| default_value(spec.default)) {
            values.insert(spec.name, value);
        }
    }

    BoundRecord { values }
}

/// Models constructed from a single content node.
pub trait FromContent: Sized {
    fn from_content(node: &ContentNode) -> Self;
}

/// Bind every child under the `relation` child node, in authoring order.
/// A missing relation yields an empty list.
pub fn bind_collection<T: FromContent>(node: &ContentNode, relation: &str) -> Vec<T> {
    node.child(relation)
        .map(|container| container.children.iter().map(T::from_content).collect())
        .unwrap_or_default()
}

fn default_value(default: FieldDefault) -> Option<FieldValue> {
    match default {
        FieldDefault::None => None,
        FieldDefault::Text(s) => Some(FieldValue::Text(s.to_string())),
        FieldDefault::Integer(v) => Some(FieldValue::Integer(v)),
        FieldDefault::Decimal(v) => Some(FieldValue::Decimal(v)),
    }
}

fn coerce(raw: &Value, kind: FieldKind) -> Option<FieldValue> {
    // Multi-valued properties bind their first value
    let raw = match raw {
        Value::Array(items) => items.first()?,
        other => other,
    };

    match kind {
        FieldKind::Text => match raw {
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Number(n) => Some(FieldValue::Text(n.to_string())),
            Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
            _ => None,
        },
        FieldKind::Integer => match raw {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                .map(FieldValue::Integer),
            Value::String(s) => s.trim().parse::<i64>().ok().map(FieldValue::Integer),
            _ => None,
        },
        FieldKind::Decimal => match raw {
            Value::Number(n) => n.as_f64().map(FieldValue::Decimal),
            Value::String(s) => s.trim().parse::<f64>().ok().map(FieldValue::Decimal),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: &[FieldSpec] = &[
        FieldSpec::text_or("title", "Spin to Win!"),
        FieldSpec::text("subtitle"),
        FieldSpec::integer_or("wheelSize", 400),
        FieldSpec::integer("maxRevolutions"),
        FieldSpec::decimal_or("probability", 0.125),
    ];

    fn props(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults_when_absent() {
        let record = bind_fields(&Map::new(), SCHEMA);
        assert_eq!(record.text("title"), Some("Spin to Win!"));
        assert_eq!(record.text("subtitle"), None);
        assert_eq!(record.integer("wheelSize"), Some(400));
        assert_eq!(record.integer("maxRevolutions"), None);
        assert_eq!(record.decimal("probability"), Some(0.125));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_authored_values_win() {
        let record = bind_fields(
            &props(json!({ "title": "", "subtitle": "Go", "wheelSize": 500, "probability": 0.5 })),
            SCHEMA,
        );
        // Empty strings are authored values, not absent ones
        assert_eq!(record.text("title"), Some(""));
        assert_eq!(record.text("subtitle"), Some("Go"));
        assert_eq!(record.integer("wheelSize"), Some(500));
        assert_eq!(record.decimal("probability"), Some(0.5));
    }

    #[test]
    fn test_string_and_number_coercion() {
        let record = bind_fields(
            &props(json!({ "title": 42, "wheelSize": " 320 ", "maxRevolutions": 6.9, "probability": "0.25" })),
            SCHEMA,
        );
        assert_eq!(record.text("title"), Some("42"));
        assert_eq!(record.integer("wheelSize"), Some(320));
        assert_eq!(record.integer("maxRevolutions"), Some(6));
        assert_eq!(record.decimal("probability"), Some(0.25));
    }

    #[test]
    fn test_null_and_garbage_fall_back() {
        let record = bind_fields(
            &props(json!({ "title": null, "wheelSize": "large", "probability": { "nested": true } })),
            SCHEMA,
        );
        assert_eq!(record.text("title"), Some("Spin to Win!"));
        assert_eq!(record.integer("wheelSize"), Some(400));
        assert_eq!(record.decimal("probability"), Some(0.125));
    }

    #[test]
    fn test_multi_value_binds_first() {
        let record = bind_fields(&props(json!({ "subtitle": ["a", "b"], "wheelSize": [] })), SCHEMA);
        assert_eq!(record.text("subtitle"), Some("a"));
        assert_eq!(record.integer("wheelSize"), Some(400));
    }

    struct Item {
        label: Option<String>,
    }

    impl FromContent for Item {
        fn from_content(node: &ContentNode) -> Self {
            let record = bind_fields(&node.properties, &[FieldSpec::text("label")]);
            Self { label: record.string("label") }
        }
    }

    #[test]
    fn test_collection_preserves_order() {
        let node = ContentNode::from_json(
            "/c",
            &json!({
                "items": {
                    "item2": { "label": "b" },
                    "item10": { "label": "c" },
                    "item1": { "label": "a" },
                    "empty": {}
                }
            }),
        );
        let items: Vec<Item> = bind_collection(&node, "items");
        let labels: Vec<_> = items.iter().map(|i| i.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("b"), Some("c"), Some("a"), None]);
    }

    #[test]
    fn test_collection_missing_relation_is_empty() {
        let node = ContentNode::from_json("/c", &json!({ "title": "x" }));
        let items: Vec<Item> = bind_collection(&node, "items");
        assert!(items.is_empty());
    }
}
