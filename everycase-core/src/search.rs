//! Depth-first search over an untyped JSON document.

use serde_json::Value;

use crate::types::ComponentDeclaration;

/// Child values of `node` that can hold further structure.
///
/// Objects yield their values in document key order, arrays in index order.
/// Scalars are skipped.
fn container_children(node: &Value) -> Vec<&Value> {
    let children: Vec<&Value> = match node {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        _ => return Vec::new(),
    };
    children
        .into_iter()
        .filter(|child| child.is_object() || child.is_array())
        .collect()
}

/// Return the first node below `tree` matching `predicate`.
///
/// Each child is tested before its own children are visited. The root itself
/// is never tested.
pub fn find_node<'a, P>(tree: &'a Value, predicate: P) -> Option<&'a Value>
where
    P: Fn(&Value) -> bool,
{
    find_node_with(tree, &predicate)
}

fn find_node_with<'a>(tree: &'a Value, predicate: &dyn Fn(&Value) -> bool) -> Option<&'a Value> {
    for child in container_children(tree) {
        if predicate(child) {
            return Some(child);
        }
        if let Some(found) = find_node_with(child, predicate) {
            return Some(found);
        }
    }
    None
}

/// Locate the declaration whose `tagName` equals `tag`.
pub fn find_tag<'a>(tree: &'a Value, tag: &str) -> Option<ComponentDeclaration<'a>> {
    find_node(tree, |node| {
        node.get("tagName").and_then(Value::as_str) == Some(tag)
    })
    .and_then(ComponentDeclaration::from_node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_deeply_nested_node() {
        let doc = json!({
            "schemaVersion": "1.0.0",
            "modules": [
                {"path": "a.js", "declarations": [{"name": "A"}]},
                {"path": "b.js", "declarations": [{"name": "B", "tagName": "x-b"}]}
            ]
        });
        let found = find_tag(&doc, "x-b").expect("found");
        assert_eq!(found.node()["name"], "B");
    }

    #[test]
    fn returns_first_match_in_traversal_order() {
        let doc = json!({
            "first": {"inner": {"kind": "hit", "id": 1}},
            "second": {"kind": "hit", "id": 2}
        });
        let found = find_node(&doc, |n| n.get("kind") == Some(&json!("hit"))).unwrap();
        assert_eq!(found["id"], 1);
    }

    #[test]
    fn parent_is_tested_before_children() {
        let doc = json!([{"kind": "hit", "id": "outer", "child": {"kind": "hit", "id": "inner"}}]);
        let found = find_node(&doc, |n| n.get("kind").is_some()).unwrap();
        assert_eq!(found["id"], "outer");
    }

    #[test]
    fn root_is_not_tested() {
        let doc = json!({"tagName": "x-root"});
        assert!(find_tag(&doc, "x-root").is_none());
    }

    #[test]
    fn scalars_are_ignored_and_missing_is_none() {
        let doc = json!({"a": 1, "b": "tagName", "c": [true, null, 2.5]});
        assert!(find_tag(&doc, "x-none").is_none());
        assert!(find_node(&json!(42), |_| true).is_none());
    }
}
