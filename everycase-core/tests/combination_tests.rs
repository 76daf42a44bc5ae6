//! Combination engine tests against a Shoelace-shaped manifest.
//!
//! Each `#[case]` builds its own manifest, no shared state.

use std::collections::HashSet;

use everycase_core::{
    attributes, combinations, extract_domain, tag_names, CombinationOptions, Combination,
    ComponentDeclaration, CoreError, Manifest,
};
use rstest::rstest;
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn shoelace_manifest() -> Manifest {
    Manifest(json!({
        "schemaVersion": "1.0.0",
        "modules": [
            {
                "kind": "javascript-module",
                "path": "components/button/button.js",
                "declarations": [{
                    "kind": "class",
                    "name": "SlButton",
                    "customElement": true,
                    "tagName": "sl-button",
                    "attributes": [
                        {"name": "caret", "type": {"text": "boolean"}}
                    ]
                }]
            },
            {
                "kind": "javascript-module",
                "path": "components/tag/tag.js",
                "declarations": [{
                    "kind": "class",
                    "name": "SlTag",
                    "customElement": true,
                    "tagName": "sl-tag",
                    "attributes": [
                        {"name": "variant", "type": {"text": "'primary' | 'success' | 'neutral'"}},
                        {"name": "size", "type": {"text": "'small' | 'medium' | 'large'"}},
                        {"name": "pill", "type": {"text": "boolean"}},
                        {"name": "removable", "type": {"text": "boolean"}}
                    ]
                }]
            }
        ]
    }))
}

fn pairs(c: &Combination) -> Vec<(&str, &str)> {
    c.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn sl_tag_picked_attributes_yield_eighteen() {
    let manifest = shoelace_manifest();
    let options = CombinationOptions::default().pick(["variant", "removable", "size"]);
    let all = combinations(&manifest, "sl-tag", &options).expect("combinations");

    assert_eq!(all.len(), 18);
    assert_eq!(
        pairs(&all[0]),
        vec![("removable", "true"), ("size", "large"), ("variant", "neutral")]
    );
    assert_eq!(
        pairs(&all[1]),
        vec![("removable", "true"), ("size", "large"), ("variant", "primary")]
    );
    assert_eq!(
        pairs(&all[9]),
        vec![("removable", "false"), ("size", "large"), ("variant", "neutral")]
    );
    assert_eq!(
        pairs(&all[17]),
        vec![("removable", "false"), ("size", "small"), ("variant", "success")]
    );
}

#[test]
fn every_combination_is_distinct() {
    let manifest = shoelace_manifest();
    let all = combinations(&manifest, "sl-tag", &CombinationOptions::default()).expect("combinations");
    assert_eq!(all.len(), 3 * 3 * 2 * 2);
    let distinct: HashSet<Vec<(&str, &str)>> = all.iter().map(pairs).collect();
    assert_eq!(distinct.len(), all.len());
}

#[test]
fn generation_is_deterministic() {
    let manifest = shoelace_manifest();
    let options = CombinationOptions::default();
    let a = combinations(&manifest, "sl-tag", &options).unwrap();
    let b = combinations(&manifest, "sl-tag", &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn manifest_is_not_mutated() {
    let manifest = shoelace_manifest();
    let before = manifest.clone();
    combinations(&manifest, "sl-tag", &CombinationOptions::default()).unwrap();
    assert_eq!(manifest, before);
}

#[rstest]
#[case(&["variant", "size"], &[], 9, &["size", "variant"])]
#[case(&["variant", "size"], &["size"], 3, &["variant"])]
#[case(&[], &["variant", "size"], 4, &["pill", "removable"])]
#[case(&["pill"], &["removable"], 2, &["pill"])]
#[case(&["unknown"], &[], 1, &[])]
fn pick_then_omit(
    #[case] pick: &[&str],
    #[case] omit: &[&str],
    #[case] expected_len: usize,
    #[case] expected_keys: &[&str],
) {
    let manifest = shoelace_manifest();
    let options = CombinationOptions::default()
        .pick(pick.iter().copied())
        .omit(omit.iter().copied());
    let all = combinations(&manifest, "sl-tag", &options).expect("combinations");
    assert_eq!(all.len(), expected_len);
    for combination in &all {
        let keys: Vec<&str> = combination.keys().map(String::as_str).collect();
        assert_eq!(keys, expected_keys);
    }
}

#[test]
fn transform_substitutes_values_with_component_context() {
    let manifest = shoelace_manifest();
    let options = CombinationOptions::default().pick(["caret"]).transform(
        |name: &str, value: &str, component: &ComponentDeclaration<'_>| {
            (value == "true").then(|| (name.to_owned(), component.tag_name().to_owned()))
        },
    );
    let all = combinations(&manifest, "sl-button", &options).unwrap();
    assert_eq!(pairs(&all[0]), vec![("caret", "sl-button")]);
    assert_eq!(pairs(&all[1]), vec![("caret", "false")]);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[test]
fn tag_names_in_module_order() {
    assert_eq!(tag_names(&shoelace_manifest()), vec!["sl-button", "sl-tag"]);
}

#[test]
fn attributes_of_known_and_unknown_tags() {
    let manifest = shoelace_manifest();
    assert_eq!(
        attributes(&manifest, "sl-tag").unwrap(),
        vec!["variant", "size", "pill", "removable"]
    );
    match attributes(&manifest, "unknown-tag") {
        Err(CoreError::TagNotFound { tag }) => assert_eq!(tag, "unknown-tag"),
        other => panic!("expected TagNotFound, got {other:?}"),
    }
}

#[test]
fn combinations_for_unknown_tag_is_checked() {
    let manifest = shoelace_manifest();
    let err = combinations(&manifest, "unknown-tag", &CombinationOptions::default()).unwrap_err();
    assert!(err.is_not_found());
}

#[rstest]
#[case("boolean")]
#[case("'b' | 'a' | 'c'")]
#[case("\"x\"|\"y\"")]
fn extraction_is_idempotent(#[case] text: &str) {
    assert_eq!(extract_domain(text), extract_domain(text));
}
