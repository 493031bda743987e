//! JSON projection integration tests
//!
//! The projection writes the raw backing map, independent of any views
//! handed out, and rejects values JSON cannot represent.

use anyobject::doc::{AnyObject, Document, Value};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_to_json_natural_shape() {
    let doc = sample_document();

    assert_eq!(doc.to_json().unwrap(), r#"{"a":{"b":5,"c":[1,{"d":"x"}]}}"#);
    assert_eq!(
        doc.to_json_bytes().unwrap(),
        br#"{"a":{"b":5,"c":[1,{"d":"x"}]}}"#.to_vec()
    );
}

#[test]
fn test_to_json_is_idempotent() {
    let doc = scalar_document();

    let first = doc.to_json_bytes().unwrap();
    let second = doc.to_json_bytes().unwrap();
    assert_eq!(first, second);
    assert_eq!(doc.to_json().unwrap(), doc.to_json().unwrap());
}

#[test]
fn test_views_do_not_change_projection() {
    let doc = sample_document();
    let before = doc.to_json().unwrap();

    let a = doc.get_any_object("a").unwrap().unwrap();
    let c = doc.get_iterable("a.c").unwrap().unwrap();
    let _walked: Vec<_> = c.iter().unwrap().collect();

    assert_eq!(doc.to_json().unwrap(), before);
    // A view projects its own raw backing map
    assert_eq!(a.to_json().unwrap(), r#"{"b":5,"c":[1,{"d":"x"}]}"#);
}

#[test]
fn test_scalar_types_encode_naturally() {
    let doc = scalar_document();
    let value: serde_json::Value = serde_json::from_slice(&doc.to_json_bytes().unwrap()).unwrap();

    assert_eq!(value["long"], json!(9_000_000_000i64));
    assert_eq!(value["int"], json!(42));
    assert_eq!(value["text"], json!("hello"));
    assert_eq!(value["double"], json!(2.5));
    assert_eq!(value["float"], json!(0.25));
    assert_eq!(value["flag"], json!(true));
    assert_eq!(value["nothing"], json!(null));
    assert_eq!(value["nested"]["inner"]["int"], json!(42));
}

#[test]
fn test_non_finite_floats_fail_to_encode() {
    let map = map_of([(
        "outer",
        Value::Map(map_of([("bad", Value::Double(f64::NAN))])),
    )]);
    let doc = Document::new(&map);

    let err = doc.to_json().unwrap_err();
    assert!(err.is_serialization_error());
    assert!(doc.to_json_bytes().is_err());
    assert!(doc.to_json_value().is_err());

    // Reads are unaffected
    assert!(doc.get_double("outer.bad").unwrap().unwrap().is_nan());
}

#[test]
fn test_from_json_round_trip() {
    let text = r#"{"a":{"b":5,"c":[1,{"d":"x"}]},"big":3000000000,"pi":3.5}"#;
    let doc = Document::from_json(text).unwrap();

    assert_eq!(doc.get_integer("a.b").unwrap(), Some(5));
    assert_eq!(doc.get_long("big").unwrap(), Some(3_000_000_000));
    assert_eq!(doc.get_double("pi").unwrap(), Some(3.5));
    assert_eq!(doc.to_json().unwrap(), text);
}

#[test]
fn test_from_json_rejects_non_objects() {
    for text in ["[1,2]", "5", "\"text\"", "null", "{broken"] {
        let err = Document::from_json(text).unwrap_err();
        assert!(err.is_serialization_error(), "input {text}");
    }
}

#[test]
fn test_from_json_rejects_integers_beyond_long() {
    let err = Document::from_json(r#"{"n":18446744073709551615}"#).unwrap_err();
    assert!(err.is_serialization_error());
    assert!(err.to_string().contains("18446744073709551615"));

    // The largest long still decodes exactly
    let text = r#"{"n":9223372036854775807}"#;
    let doc = Document::from_json(text).unwrap();
    assert_eq!(doc.get_long("n").unwrap(), Some(i64::MAX));
    assert_eq!(doc.to_json().unwrap(), text);
}

#[test]
fn test_display_is_debug_form() {
    let doc = sample_document();
    assert_eq!(doc.to_string(), "{a={b=5, c=[1, {d=x}]}}");
}
