//! Domain types for custom elements manifests.
//!
//! The manifest stays untyped (`serde_json::Value`); declarations are borrowed
//! views into it and are never copied or mutated.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

/// One concrete assignment of a value to each attribute, in product order.
pub type Combination = IndexMap<String, String>;

/// Attribute name → candidate values, in collection order.
pub type AttributeDomains = IndexMap<String, Vec<String>>;

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// A parsed `custom-elements.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(pub Value);

impl Manifest {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Manifest {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

impl FromStr for Manifest {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(Self)
    }
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

/// A manifest node identified by its `tagName` field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentDeclaration<'m> {
    tag_name: &'m str,
    node: &'m Value,
}

impl<'m> ComponentDeclaration<'m> {
    /// Wrap `node` if it carries a string `tagName`.
    pub fn from_node(node: &'m Value) -> Option<Self> {
        let tag_name = node.get("tagName")?.as_str()?;
        Some(Self { tag_name, node })
    }

    pub fn tag_name(&self) -> &'m str {
        self.tag_name
    }

    /// The raw declaration node, for transforms that need extra metadata.
    pub fn node(&self) -> &'m Value {
        self.node
    }

    fn raw_attributes(&self) -> Result<&'m Vec<Value>, CoreError> {
        self.node
            .get("attributes")
            .and_then(Value::as_array)
            .ok_or_else(|| CoreError::MissingAttributes {
                tag: self.tag_name.to_owned(),
            })
    }

    /// Attribute names in declared order.
    pub fn attribute_names(&self) -> Result<Vec<&'m str>, CoreError> {
        self.raw_attributes()?
            .iter()
            .enumerate()
            .map(|(index, attr)| {
                attr.get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| self.malformed(index, "missing string `name`"))
            })
            .collect()
    }

    /// Full attribute declarations (name and type text) in declared order.
    pub fn attributes(&self) -> Result<Vec<AttributeDeclaration<'m>>, CoreError> {
        self.raw_attributes()?
            .iter()
            .enumerate()
            .map(|(index, attr)| {
                let name = attr
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| self.malformed(index, "missing string `name`"))?;
                let type_text = attr
                    .get("type")
                    .and_then(|t| t.get("text"))
                    .and_then(Value::as_str)
                    .ok_or_else(|| self.malformed(index, "missing string `type.text`"))?;
                Ok(AttributeDeclaration { name, type_text })
            })
            .collect()
    }

    fn malformed(&self, index: usize, reason: &'static str) -> CoreError {
        CoreError::MalformedAttribute {
            tag: self.tag_name.to_owned(),
            index,
            reason,
        }
    }
}

/// `{ name, type: { text } }` entry of a component's `attributes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDeclaration<'m> {
    pub name: &'m str,
    pub type_text: &'m str,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
