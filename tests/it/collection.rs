//! Base container operations and the `Sequence` capability.

use rstest::rstest;
use value_collection::prelude::*;

use crate::helpers::{values, values_of};

#[rstest]
fn test_can_populate_from_values() {
    let collection = Collection::from_values([1, 2, 3, 4]);
    assert_eq!(collection.to_array(), Array::from_values(values([1, 2, 3, 4])));

    let collected: Collection = (1..=4).collect();
    assert_eq!(collected, collection);
}

#[rstest]
fn test_new_is_empty() {
    let collection = Collection::new();
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
    assert!(collection.validator().is_none());
}

#[rstest]
fn test_apply_modifies_in_place_and_returns_same_instance() {
    let mut collection = Collection::from_values([1, 2, 3, 4]);
    let pointer: *const Collection = &collection;

    let returned = collection.apply(|value| Value::from(value.as_int().unwrap_or(0) + 1));
    assert!(std::ptr::eq(returned, pointer));
    assert_eq!(values_of(&collection), values([2, 3, 4, 5]));
}

#[rstest]
fn test_map_creates_new_collection() {
    let collection = Collection::from_values([1, 2, 3, 4]);
    let mapped = collection.map(|value| Value::from(value.as_int().unwrap_or(0) + 1));

    assert_eq!(values_of(&collection), values([1, 2, 3, 4]));
    assert_eq!(values_of(&mapped), values([2, 3, 4, 5]));
}

#[rstest]
fn test_map_preserves_keys() {
    let mut collection = IndexedCollection::new();
    collection.set("a", 1).set("b", 2);
    let mapped = collection.map(|value| Value::from(value.as_int().unwrap_or(0) * 10));

    assert_eq!(mapped.get("a"), Some(&Value::from(10)));
    assert_eq!(mapped.get("b"), Some(&Value::from(20)));
}

#[rstest]
fn test_filter_is_immutable() {
    let collection = Collection::from_values(1..=10);
    let even = collection.filter(|value| value.as_int().is_some_and(|number| number % 2 == 0));

    assert_eq!(collection.len(), 10);
    assert_eq!(even.len(), 5);
    assert_eq!(values_of(&even), values([2, 4, 6, 8, 10]));
}

#[rstest]
fn test_filter_preserves_keys() {
    let collection = Collection::from_values([1, 2, 3]);
    let odd = collection.filter(|value| value.as_int().is_some_and(|number| number % 2 == 1));
    assert_eq!(odd.keys().cloned().collect::<Vec<_>>(), vec![Key::from(0), Key::from(2)]);
}

#[rstest]
fn test_each_visits_values_and_keys_without_modifying() {
    let collection = Collection::from_values([1, 2, 3, 4]);
    let mut output = String::new();
    let mut keys = Vec::new();

    collection.each(|value, key| {
        output.push_str(&value.to_string());
        keys.push(key.clone());
    });

    assert_eq!(output, "1234");
    assert_eq!(keys, vec![Key::from(0), Key::from(1), Key::from(2), Key::from(3)]);
    assert_eq!(values_of(&collection), values([1, 2, 3, 4]));
}

#[rstest]
fn test_reduce_folds_in_order() {
    let collection = Collection::from_values([1, 2, 3, 4]);
    let result = collection.reduce(
        |mut carry: String, value| {
            carry.push_str(&(value.as_int().unwrap_or(0) * 2).to_string());
            carry
        },
        String::new(),
    );
    assert_eq!(result, "2468");
}

#[rstest]
fn test_reduce_on_empty_returns_initial() {
    let collection = Collection::new();
    assert_eq!(collection.reduce(|sum, _| sum + 1, 42), 42);
}

#[rstest]
fn test_can_merge_with_vec() {
    let collection = Collection::from_values([1, 2, 3, 4]);
    let merged = collection.merge(vec![5, 6, 7, 8, 9, 10]).unwrap();

    assert_eq!(values_of(&merged), values(1..=10));
    assert!(!collection.to_array().contains_key(&Key::from(5)));
}

#[rstest]
fn test_can_merge_with_collection() {
    let collection = Collection::from_values([1, 2, 3, 4]);
    let other = Collection::from_values([5, 6, 7, 8, 9, 10]);
    let merged = collection.merge(&other).unwrap();

    assert_eq!(values_of(&merged), values(1..=10));
    assert_eq!(merged.keys().last(), Some(&Key::from(9)));
    assert_eq!(collection.len(), 4);
}

#[rstest]
fn test_merge_overwrites_named_keys_and_renumbers_indices() {
    let mut collection = IndexedCollection::new();
    collection.set("name", "first").set(5, "five");
    let other = Array::from_pairs([
        (Key::from("name"), Value::from("second")),
        (Key::from(9), Value::from("nine")),
    ]);

    let merged = collection.merge(other).unwrap();

    assert_eq!(merged.len(), 3);
    assert_eq!(merged.get("name"), Some(&Value::from("second")));
    assert_eq!(merged.get(0), Some(&Value::from("five")));
    assert_eq!(merged.get(1), Some(&Value::from("nine")));
}

#[rstest]
fn test_merge_rejects_non_array_value() {
    let collection = Collection::from_values([1, 2, 3, 4]);
    let object = Value::object(Object::new("stdClass").with_field("A1", 2));

    assert_eq!(
        collection.merge(object).unwrap_err(),
        CollectionError::TypeMismatch {
            operation: "merge",
            expected: "array or collection",
            found: "object",
        }
    );
}

#[rstest]
fn test_merge_accepts_array_value() {
    let collection = Collection::from_values([1]);
    let merged = collection.merge(Value::array([2, 3])).unwrap();
    assert_eq!(values_of(&merged), values([1, 2, 3]));
}

#[rstest]
fn test_can_push() {
    let mut collection = Collection::from_values([1, 2, 3, 4]);

    collection.push(5);
    assert_eq!(collection.to_array().get(&Key::from(4)), Some(&Value::from(5)));

    collection.push(10);
    assert_eq!(collection.to_array().get(&Key::from(5)), Some(&Value::from(10)));

    collection.push_all([11, 12, 13]);
    assert_eq!(collection.to_array().get(&Key::from(6)), Some(&Value::from(11)));
    assert_eq!(collection.to_array().get(&Key::from(7)), Some(&Value::from(12)));
    assert_eq!(collection.to_array().get(&Key::from(8)), Some(&Value::from(13)));
}

#[rstest]
fn test_can_pop_from_tail() {
    let mut collection = Collection::from_values([1, 2, 3, 4]);

    assert_eq!(collection.pop(), Ok(Value::from(4)));
    assert!(!collection.to_array().contains_key(&Key::from(3)));

    assert_eq!(collection.pop(), Ok(Value::from(3)));
    assert!(!collection.to_array().contains_key(&Key::from(2)));
}

#[rstest]
fn test_push_after_pop_reuses_index() {
    let mut collection = Collection::from_values([1, 2, 3]);
    collection.pop().unwrap();
    collection.push(4);
    assert_eq!(collection.to_array().get(&Key::from(2)), Some(&Value::from(4)));
}

#[rstest]
fn test_pop_after_largest_index_does_not_overflow() {
    let mut collection = IndexedCollection::new();
    collection.set(i64::MAX, 1).set("x", 2);

    assert_eq!(collection.pop(), Ok(Value::from(2)));
    assert_eq!(collection.get(i64::MAX), Some(&Value::from(1)));
}

#[rstest]
fn test_push_after_largest_index_is_dropped() {
    let mut collection = IndexedCollection::new();
    collection.set(i64::MAX, 1);
    collection.push(2);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(i64::MAX), Some(&Value::from(1)));
    assert_eq!(collection.keys().cloned().collect::<Vec<_>>(), vec![Key::from(i64::MAX)]);
}

#[rstest]
#[case::pop("pop")]
#[case::shift("shift")]
fn test_removing_from_empty_underflows(#[case] operation: &'static str) {
    let mut collection = Collection::new();
    let result = if operation == "pop" {
        collection.pop()
    } else {
        collection.shift()
    };
    assert_eq!(result, Err(CollectionError::Underflow { operation }));
}

#[rstest]
fn test_can_add_to_head() {
    let mut collection = Collection::from_values([1, 2, 3, 4]);

    collection.unshift(0);
    assert_eq!(collection.first(), Some(&Value::from(0)));

    collection.unshift(0.5);
    assert_eq!(collection.first(), Some(&Value::from(0.5)));

    collection.unshift_all([0.4, 0.3, 0.2]);
    let array = collection.to_array();
    assert_eq!(array.get(&Key::from(0)), Some(&Value::from(0.2)));
    assert_eq!(array.get(&Key::from(1)), Some(&Value::from(0.3)));
    assert_eq!(array.get(&Key::from(2)), Some(&Value::from(0.4)));
    assert!(array.is_list());
}

#[rstest]
fn test_can_shift_from_head() {
    let mut collection = Collection::from_values([1, 2, 3, 4]);

    assert_eq!(collection.shift(), Ok(Value::from(1)));
    assert_eq!(collection.count(), 3);

    assert_eq!(collection.shift(), Ok(Value::from(2)));
    assert_eq!(collection.count(), 2);
    assert!(collection.to_array().is_list());
}

#[rstest]
fn test_is_empty_tracks_contents() {
    let mut collection = Collection::new();
    assert!(collection.is_empty());

    collection.push(1);
    assert!(!collection.is_empty());
}

#[rstest]
fn test_count_and_clear() {
    let mut collection = Collection::from_values([1, 2, 3, 4]);
    assert_eq!(collection.count(), 4);

    collection.clear();
    assert!(collection.is_empty());

    collection.push("again");
    assert_eq!(collection.to_array().get(&Key::from(0)), Some(&Value::from("again")));
}

#[rstest]
fn test_copy_is_independent() {
    let collection = Collection::from_values([1, 2, 3]);
    let mut copy = collection.copy();

    assert_eq!(copy.to_array(), collection.to_array());

    copy.push(4);
    assert_eq!(collection.len(), 3);
    assert_eq!(copy.len(), 4);
}

#[rstest]
fn test_can_slice() {
    let collection = Collection::from_values(1..=10);

    let last_three = collection.slice(-3, None);
    assert_eq!(values_of(&last_three), values([8, 9, 10]));
    assert!(last_three.to_array().is_list());

    let third_and_fourth = collection.slice(2, Some(2));
    assert_eq!(values_of(&third_and_fourth), values([3, 4]));

    assert_eq!(collection.len(), 10);
    assert_eq!(collection.to_array().get(&Key::from(9)), Some(&Value::from(10)));
}

#[rstest]
fn test_slice_keeps_named_keys() {
    let mut collection = IndexedCollection::new();
    collection.set(4, "four").set("name", "named").set(7, "seven");

    let sliced = collection.slice(0, Some(-1));

    assert_eq!(
        sliced.keys().cloned().collect::<Vec<_>>(),
        vec![Key::from(0), Key::from("name")]
    );
}

#[rstest]
fn test_iterates_by_reference() {
    let collection = Collection::from_values(["a", "b"]);
    let mut seen = Vec::new();
    for (key, value) in &collection {
        seen.push(format!("{key}={value}"));
    }
    assert_eq!(seen, vec![r#"0="a""#, r#"1="b""#]);
}

#[rstest]
fn test_sequence_collection_shares_behaviour() {
    let mut queue = SequenceCollection::from_values(["first", "second"]);
    queue.push("third");
    assert_eq!(queue.shift(), Ok(Value::from("first")));
    assert_eq!(queue.pop(), Ok(Value::from("third")));
    assert_eq!(values_of(&queue), values(["second"]));
}
