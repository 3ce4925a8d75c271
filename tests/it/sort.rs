//! In-place and copying sorts.

use std::cmp::Ordering;

use rstest::rstest;
use value_collection::prelude::*;

use crate::helpers::{bare_type_a, values, values_of};

#[rstest]
fn test_sort_naturally() {
    let mut collection = Collection::from_values(["a", "z", "f", "y", "o"]);
    collection.sort();

    for expected in ["a", "f", "o", "y", "z"] {
        assert_eq!(collection.shift(), Ok(Value::from(expected)));
    }
}

#[rstest]
fn test_sort_with_reversed_comparator() {
    let mut collection = Collection::from_values(["a", "z", "f", "y", "o"]);
    collection.sort_by(|a, b| compare_by_value(b, a));

    for expected in ["z", "y", "o", "f", "a"] {
        assert_eq!(collection.shift(), Ok(Value::from(expected)));
    }
}

#[rstest]
fn test_sorted_leaves_source_untouched() {
    let collection = Collection::from_values(["a", "z", "f", "y", "o"]);
    let sorted = collection.sorted();

    assert_eq!(values_of(&sorted), values(["a", "f", "o", "y", "z"]));
    assert_eq!(values_of(&collection), values(["a", "z", "f", "y", "o"]));
}

#[rstest]
fn test_sorted_by_returns_new_instance() {
    let collection = Collection::from_values([1, 3, 2]);
    let sorted = collection.sorted_by(|a, b| compare_by_value(b, a));

    assert_eq!(values_of(&sorted), values([3, 2, 1]));
    assert_eq!(values_of(&collection), values([1, 3, 2]));
}

#[rstest]
fn test_sequence_sort_renumbers_keys() {
    let mut collection = Collection::from_values([3, 1, 2]);
    collection.sort();

    assert!(collection.to_array().is_list());
    assert_eq!(collection.to_array().get(&Key::from(0)), Some(&Value::from(1)));
}

#[rstest]
fn test_keyed_sort_keeps_keys_attached() {
    let mut collection = IndexedCollection::new();
    collection.set("c", 3).set("a", 1).set("b", 2);
    collection.sort();

    assert_eq!(
        collection.keys().cloned().collect::<Vec<_>>(),
        vec![Key::from("a"), Key::from("b"), Key::from("c")]
    );
    assert_eq!(collection.get("c"), Some(&Value::from(3)));
}

#[rstest]
fn test_keyed_sort_keeps_integer_keys() {
    let mut collection = IndexedCollection::from_values([30, 10, 20]);
    collection.sort();

    assert_eq!(
        collection.keys().cloned().collect::<Vec<_>>(),
        vec![Key::from(1), Key::from(2), Key::from(0)]
    );
}

#[rstest]
fn test_sort_is_stable() {
    let mut collection = IndexedCollection::new();
    collection
        .set("first", 1)
        .set("second", 0)
        .set("third", 1)
        .set("fourth", 0);

    collection.sort_by(|a, b| {
        let parity = |value: &Value| value.as_int().unwrap_or(0);
        parity(a).cmp(&parity(b))
    });

    assert_eq!(
        collection.keys().cloned().collect::<Vec<_>>(),
        vec![
            Key::from("second"),
            Key::from("fourth"),
            Key::from("first"),
            Key::from("third"),
        ]
    );
}

#[rstest]
fn test_sort_places_objects_after_primitives() {
    let object = bare_type_a();
    let mut collection = Collection::from_values([Value::from(&object), Value::from(2), Value::from(1)]);
    collection.sort();

    assert_eq!(collection.first(), Some(&Value::from(1)));
    assert_eq!(collection.last(), Some(&Value::from(&object)));
}

#[rstest]
fn test_sort_by_instance_orders_objects_by_creation() {
    let older = bare_type_a();
    let newer = bare_type_a();
    let mut collection = Collection::from_values([Value::from(&newer), Value::from(&older)]);

    collection.sort_by(compare_by_instance);

    assert_eq!(values_of(&collection), vec![Value::from(&older), Value::from(&newer)]);
}

#[rstest]
fn test_sort_empty_collection() {
    let mut collection = Collection::new();
    collection.sort_by(|_, _| Ordering::Equal);
    assert!(collection.is_empty());
}
