//! Nested shortcut links
//!
//! The document is a JSON object whose keys are labels. A string value is a
//! link, an object value is a group rendered the same way one level down.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutKind {
    Link(String),
    Group(Vec<ShortcutNode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutNode {
    pub label: String,
    pub kind: ShortcutKind,
}

impl ShortcutNode {
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ShortcutKind::Link(url.into()),
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<ShortcutNode>) -> Self {
        Self {
            label: label.into(),
            kind: ShortcutKind::Group(children),
        }
    }

    pub fn children(&self) -> Option<&[ShortcutNode]> {
        match &self.kind {
            ShortcutKind::Group(children) => Some(children),
            ShortcutKind::Link(_) => None,
        }
    }
}

/// Top-level shortcuts in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutTree {
    pub roots: Vec<ShortcutNode>,
}

impl ShortcutTree {
    /// Build the tree from a parsed JSON document
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                roots: build_nodes(map),
            }),
            other => Err(Error::Shortcuts(format!(
                "expected a JSON object at the top level, got {}",
                json_kind(other)
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Entries of the group reached by following `path` (indices) from the roots
    pub fn entries_at(&self, path: &[usize]) -> Option<&[ShortcutNode]> {
        let mut entries: &[ShortcutNode] = &self.roots;
        for &index in path {
            entries = entries.get(index)?.children()?;
        }
        Some(entries)
    }

    /// Total number of links at any depth
    pub fn link_count(&self) -> usize {
        fn count(nodes: &[ShortcutNode]) -> usize {
            nodes
                .iter()
                .map(|node| match &node.kind {
                    ShortcutKind::Link(_) => 1,
                    ShortcutKind::Group(children) => count(children),
                })
                .sum()
        }
        count(&self.roots)
    }
}

/// Parse a shortcuts document
pub fn parse_shortcuts(json: &str) -> Result<ShortcutTree> {
    let value = read_document(json.as_bytes())?;
    ShortcutTree::from_value(&value)
}

/// Decode a JSON document of any nesting depth.
///
/// serde_json stops at 128 levels by default; deep documents are decoded on
/// a growing stack instead.
pub(crate) fn read_document(bytes: &[u8]) -> Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

fn build_nodes(map: &Map<String, Value>) -> Vec<ShortcutNode> {
    map.iter()
        .filter_map(|(label, value)| match value {
            Value::String(url) => Some(ShortcutNode::link(label.as_str(), url.as_str())),
            Value::Object(children) => Some(ShortcutNode::group(label.as_str(), build_nodes(children))),
            other => {
                tracing::debug!(label = %label, kind = json_kind(other), "Skipping shortcut entry");
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
