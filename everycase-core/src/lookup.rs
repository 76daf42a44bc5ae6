//! Manifest-level queries: tag enumeration and attribute listing.

use serde_json::Value;

use crate::error::CoreError;
use crate::search::find_tag;
use crate::types::Manifest;

/// Tag names of every declaration flagged `customElement: true`, in
/// `modules[].declarations[]` order.
pub fn tag_names(manifest: &Manifest) -> Vec<&str> {
    let modules = manifest
        .as_value()
        .get("modules")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    modules
        .iter()
        .filter_map(|module| module.get("declarations").and_then(Value::as_array))
        .flatten()
        .filter(|decl| decl.get("customElement").and_then(Value::as_bool) == Some(true))
        .filter_map(|decl| decl.get("tagName").and_then(Value::as_str))
        .collect()
}

/// Attribute names declared by `tag`, in declared order.
pub fn attributes<'m>(manifest: &'m Manifest, tag: &str) -> Result<Vec<&'m str>, CoreError> {
    find_tag(manifest.as_value(), tag)
        .ok_or_else(|| CoreError::TagNotFound { tag: tag.to_owned() })?
        .attribute_names()
}
