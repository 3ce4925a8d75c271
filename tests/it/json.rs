//! JSON encoding.

use rstest::rstest;
use serde_json::json;
use value_collection::prelude::*;

#[rstest]
fn test_list_encodes_as_json_array() {
    let collection = JsonCollection::from_values(1..=5);
    assert_eq!(collection.to_json().unwrap(), "[1,2,3,4,5]");
}

#[rstest]
fn test_empty_collection_encodes_as_empty_array() {
    assert_eq!(JsonCollection::new().to_json().unwrap(), "[]");
}

#[rstest]
fn test_removed_head_encodes_as_object() {
    let mut collection = JsonCollection::from_values(["a", "b"]);
    let mut entries = collection.to_array();
    entries.remove(&Key::from(0));
    collection = JsonCollection::from(entries);

    assert_eq!(collection.json_serialize(), json!({ "1": "b" }));
}

#[rstest]
fn test_named_keys_keep_insertion_order() {
    let entries = Array::from_pairs([
        (Key::from("zeta"), Value::from(1)),
        (Key::from("alpha"), Value::from(2)),
    ]);
    let collection = JsonCollection::from(entries);

    assert_eq!(collection.to_json().unwrap(), r#"{"zeta":1,"alpha":2}"#);
}

#[rstest]
fn test_nested_values() {
    let object = Object::new("TypeA").with_field("value", "same");
    let collection = JsonCollection::from_values([
        Value::Null,
        Value::from(true),
        Value::from(1.5),
        Value::array(["x"]),
        Value::object(object),
    ]);

    assert_eq!(
        collection.json_serialize(),
        json!([null, true, 1.5, ["x"], { "value": "same" }])
    );
}
