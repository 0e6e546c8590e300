use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::path;

/// Property carrying the component type that renders a node.
pub const RESOURCE_TYPE_PROPERTY: &str = "sling:resourceType";

/// An authored content node with its subtree materialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub path: String,
    pub name: String,
    pub resource_type: Option<String>,
    pub properties: Map<String, Value>,
    pub children: Vec<ContentNode>,
}

/// Storage form of a node: properties only, ordered by creation ordinal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlatNode {
    pub path: String,
    pub properties: Map<String, Value>,
    pub ordinal: i64,
}

impl ContentNode {
    pub fn new(path: &str, properties: Map<String, Value>) -> Self {
        let resource_type = properties
            .get(RESOURCE_TYPE_PROPERTY)
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            path: path.to_string(),
            name: path::name(path).to_string(),
            resource_type,
            properties,
            children: Vec::new(),
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn child(&self, name: &str) -> Option<&ContentNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Build a node from the JSON content format: nested objects become
    /// child nodes (in document order), everything else becomes a property.
    pub fn from_json(node_path: &str, value: &Value) -> Self {
        let mut properties = Map::new();
        let mut children = Vec::new();

        if let Some(obj) = value.as_object() {
            for (key, v) in obj {
                if v.is_object() {
                    children.push(ContentNode::from_json(&path::join(node_path, key), v));
                } else {
                    properties.insert(key.clone(), v.clone());
                }
            }
        }

        let mut node = ContentNode::new(node_path, properties);
        node.children = children;
        node
    }

    /// Flatten the subtree depth-first, parents before children, assigning
    /// ordinals from `first_ordinal` upwards.
    pub fn flatten(&self, first_ordinal: i64) -> Vec<FlatNode> {
        let mut out = Vec::new();
        self.flatten_into(&mut out, first_ordinal);
        out
    }

    fn flatten_into(&self, out: &mut Vec<FlatNode>, first_ordinal: i64) {
        out.push(FlatNode {
            path: self.path.clone(),
            properties: self.properties.clone(),
            ordinal: first_ordinal + out.len() as i64,
        });
        for child in &self.children {
            child.flatten_into(out, first_ordinal);
        }
    }

    /// Rebuild the subtree rooted at `root` from flat rows. Siblings are
    /// ordered by ordinal; rows outside the subtree are ignored.
    pub fn assemble(root: &str, mut rows: Vec<FlatNode>) -> Option<ContentNode> {
        rows.sort_by_key(|r| r.ordinal);

        let mut root_row = None;
        let mut by_parent: HashMap<String, Vec<FlatNode>> = HashMap::new();
        let prefix = path::descendant_prefix(root);

        for row in rows {
            if row.path == root {
                root_row = Some(row);
            } else if row.path.starts_with(&prefix) {
                if let Some(parent) = path::parent(&row.path) {
                    by_parent.entry(parent.to_string()).or_default().push(row);
                }
            }
        }

        let root_row = root_row?;
        Some(Self::build(root_row, &mut by_parent))
    }

    fn build(row: FlatNode, by_parent: &mut HashMap<String, Vec<FlatNode>>) -> ContentNode {
        let mut node = ContentNode::new(&row.path, row.properties);
        if let Some(kids) = by_parent.remove(&row.path) {
            node.children = kids
                .into_iter()
                .map(|kid| Self::build(kid, by_parent))
                .collect();
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ContentNode {
        ContentNode::from_json(
            "/content/page/wheel",
            &json!({
                "sling:resourceType": "citi/components/wheel-spin-game",
                "title": "Spin!",
                "wheelSize": 400,
                "segments": {
                    "item0": { "text": "First" },
                    "item1": { "text": "Second" },
                    "item2": { "text": "Third" }
                }
            }),
        )
    }

    #[test]
    fn test_from_json_splits_children_and_properties() {
        let node = sample();
        assert_eq!(node.name, "wheel");
        assert_eq!(node.resource_type.as_deref(), Some("citi/components/wheel-spin-game"));
        assert_eq!(node.property("wheelSize"), Some(&json!(400)));

        let segments = node.child("segments").unwrap();
        let names: Vec<_> = segments.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["item0", "item1", "item2"]);
        assert_eq!(segments.children[1].path, "/content/page/wheel/segments/item1");
    }

    #[test]
    fn test_flatten_then_assemble_preserves_order() {
        let node = sample();
        let mut rows = node.flatten(10);
        assert_eq!(rows[0].path, "/content/page/wheel");
        assert_eq!(rows[0].ordinal, 10);

        // Storage order must not matter
        rows.reverse();
        let rebuilt = ContentNode::assemble("/content/page/wheel", rows).unwrap();
        assert_eq!(rebuilt, node);
    }

    #[test]
    fn test_assemble_subtree_only() {
        let rows = sample().flatten(0);
        let segments = ContentNode::assemble("/content/page/wheel/segments", rows.clone()).unwrap();
        assert_eq!(segments.children.len(), 3);
        assert!(segments.properties.is_empty());

        assert!(ContentNode::assemble("/content/missing", rows).is_none());
    }
}
