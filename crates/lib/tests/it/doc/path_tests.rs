//! Path resolution through documents
//!
//! Covers direct and nested lookups, the absent cases (missing keys and
//! descent through non-map values), custom separators and determinism.

use anyobject::doc::{AnyObject, Document, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_direct_and_nested_lookup() {
    let doc = sample_document();

    assert!(matches!(doc.get("a"), Some(Value::Map(_))));
    assert_eq!(doc.get("a.b"), Some(&Value::Integer(5)));
    assert!(matches!(doc.get("a.c"), Some(Value::List(_))));
}

#[test]
fn test_missing_segments_are_absent() {
    let doc = sample_document();

    assert_eq!(doc.get("z"), None);
    assert_eq!(doc.get("a.z"), None);
    assert_eq!(doc.get("z.b"), None);
    assert!(!doc.contains_path("a.b.c"));
}

#[test]
fn test_descent_through_non_map_is_absent() {
    let doc = sample_document();

    // Scalar in the middle of the path
    assert_eq!(doc.get("a.b.x"), None);
    // Lists are not indexed by path segments
    assert_eq!(doc.get("a.c.0"), None);
    assert_eq!(doc.get("a.c.1.d"), None);

    // None of the typed or structural getters raise on these
    assert_eq!(doc.get_integer("a.b.x").unwrap(), None);
    assert_eq!(doc.get_string("a.c.1.d").unwrap(), None);
    assert!(doc.get_any_object("a.b.x").unwrap().is_none());
    assert!(doc.get_iterable("a.b.x").unwrap().is_none());
}

#[test]
fn test_null_leaf_is_returned_raw() {
    let doc = Document::try_from(json!({"a": {"n": null}})).unwrap();

    assert_eq!(doc.get("a.n"), Some(&Value::Null));
    assert!(doc.contains_path("a.n"));
    // Descending through a null is absent
    assert_eq!(doc.get("a.n.x"), None);
}

#[test]
fn test_empty_segments_are_ignored() {
    let doc = sample_document();

    assert_eq!(doc.get(".a..b."), Some(&Value::Integer(5)));
    assert_eq!(doc.get(""), None);
    assert_eq!(doc.get("..."), None);
}

#[test]
fn test_empty_key_is_unreachable() {
    let map = map_of([("", Value::Integer(1)), ("x", Value::Integer(2))]);
    let doc = Document::new(&map);

    assert_eq!(doc.get(".x"), Some(&Value::Integer(2)));
    assert_eq!(doc.get(""), None);
    assert_eq!(doc.get("."), None);
    assert!(!doc.contains_path(""));
    // The key is still part of the raw projection
    assert_eq!(doc.to_json().unwrap(), r#"{"":1,"x":2}"#);
}

#[test]
fn test_custom_separator() {
    let map = map_of([(
        "a.b",
        Value::Map(map_of([("c", Value::Integer(1))])),
    )]);
    let doc = Document::with_separator(&map, "/").unwrap();

    // The dot is now an ordinary key character
    assert_eq!(doc.get("a.b/c"), Some(&Value::Integer(1)));
    assert_eq!(doc.get("a.b.c"), None);
}

#[test]
fn test_separator_is_a_pattern() {
    let doc = sample_document();
    let regex_doc = Document::with_separator(doc.entries(), r"[./]").unwrap();

    assert_eq!(regex_doc.get("a/b"), Some(&Value::Integer(5)));
    assert_eq!(regex_doc.get("a.b"), Some(&Value::Integer(5)));
}

#[test]
fn test_key_containing_separator_is_only_reachable_directly() {
    let map = map_of([("a.b", Value::Integer(1))]);
    let doc = Document::new(&map);

    // No escaping: "a.b" is split into two segments
    assert_eq!(doc.get("a.b"), None);
    assert_eq!(doc.entries().get("a.b"), Some(&Value::Integer(1)));
}

#[test]
fn test_resolution_is_deterministic() {
    let doc = sample_document();

    for path in ["a", "a.b", "a.c", "a.z", "missing.path"] {
        assert_eq!(doc.get(path), doc.get(path), "path {path}");
    }
}

#[test]
fn test_views_inherit_separator() {
    let map = map_of([(
        "outer",
        Value::Map(map_of([(
            "inner",
            Value::Map(map_of([("leaf", Value::from("v"))])),
        )])),
    )]);
    let doc = Document::with_separator(&map, ":").unwrap();

    let outer = doc.get_any_object("outer").unwrap().unwrap();
    assert_eq!(outer.separator().as_str(), ":");
    assert_eq!(outer.get_string("inner:leaf").unwrap(), Some("v"));
    assert_eq!(outer.get_string("inner.leaf").unwrap(), None);
}
