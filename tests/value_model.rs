//! Tests for the dynamic value model: equality, truthiness, display, and
//! JSON interop.

use std::collections::HashMap;

use kollect::types::Value;
use serde_json::json;

#[test]
fn clones_of_an_array_share_storage() {
    let original = Value::array(vec![Value::Integer(1)]);
    let alias = original.clone();
    assert!(original.strict_eq(&alias));

    if let Value::Array(items) = &alias {
        items.lock().unwrap().push(Value::Integer(2));
    }
    assert_eq!(original.items().map(|items| items.len()), Some(2));
}

#[test]
fn structural_equality_compares_array_contents() {
    let left = Value::from(json!([1, [2, 3], { "k": "v" }]));
    let right = Value::from(json!([1, [2, 3], { "k": "v" }]));
    assert_eq!(left, right);
    assert!(!left.strict_eq(&right));
}

#[test]
fn structural_equality_spans_integer_and_float() {
    assert_eq!(Value::Integer(2), Value::Float(2.0));
    assert_eq!(Value::from(json!([1, 2])), Value::from(json!([1.0, 2.0])));
}

#[test]
fn object_property_lookup() {
    let record = Value::from(json!({ "name": "moe", "age": 30 }));
    assert_eq!(record.get("name"), Value::from("moe"));
    assert_eq!(record.get("height"), Value::Undefined);
    assert_eq!(Value::Integer(1).get("name"), Value::Undefined);
}

#[test]
fn truthiness_matches_script_semantics() {
    assert!(Value::Integer(1).is_truthy());
    assert!(Value::from("text").is_truthy());
    assert!(Value::array(vec![]).is_truthy());
    assert!(Value::object(HashMap::new()).is_truthy());

    assert!(!Value::Boolean(false).is_truthy());
    assert!(!Value::Integer(0).is_truthy());
    assert!(!Value::Float(0.0).is_truthy());
    assert!(!Value::from("").is_truthy());
    assert!(!Value::Null.is_truthy());
    assert!(!Value::Undefined.is_truthy());
}

#[test]
fn display_formats_like_the_runtime() {
    assert_eq!(Value::Integer(3).to_string(), "3");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(3.25).to_string(), "3.25");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(
        Value::array(vec![Value::Integer(1), Value::from("a")]).to_string(),
        "[1, a]"
    );
}

#[test]
fn json_round_trip_preserves_structure() {
    let source = json!({
        "name": "moe",
        "age": 30,
        "tags": ["a", "b"],
        "ratio": 0.5,
        "missing": null
    });
    let value = Value::from_json(&source);
    assert_eq!(value.to_json(), source);
}

#[test]
fn json_integers_become_integer_values() {
    let value = Value::from(json!(7));
    assert_eq!(value.as_integer(), Some(7));

    let fractional = Value::from(json!(7.5));
    assert_eq!(fractional.as_integer(), None);
    assert_eq!(fractional.as_float(), Some(7.5));
}

#[test]
fn undefined_degrades_to_json_null() {
    assert_eq!(Value::Undefined.to_json(), serde_json::Value::Null);
}
