//! The by-value and by-instance comparators.

use std::cmp::Ordering;

use rstest::rstest;
use value_collection::prelude::*;

use crate::helpers::{bare_type_a, type_a};

#[rstest]
fn test_by_value_matches_field_equal_objects() {
    let first = Value::from(type_a("same"));
    let second = Value::from(type_a("same"));

    assert_eq!(compare_by_value(&first, &second), Ordering::Equal);
    assert_eq!(compare_by_value(&second, &first), Ordering::Equal);
}

#[rstest]
fn test_by_value_matches_loosely_equal_fields() {
    let first = Value::from(type_a(1));
    let second = Value::from(type_a("1"));
    assert_eq!(compare_by_value(&first, &second), Ordering::Equal);
}

#[rstest]
fn test_by_value_distinct_objects_are_less_both_ways() {
    let same = Value::from(type_a("same"));
    let other = Value::from(type_a("not same"));

    assert_eq!(compare_by_value(&same, &other), Ordering::Less);
    assert_eq!(compare_by_value(&other, &same), Ordering::Less);
}

#[rstest]
fn test_by_value_objects_of_other_classes_differ() {
    let first = Value::object(Object::new("TypeA"));
    let second = Value::object(Object::new("TypeB"));
    assert_eq!(compare_by_value(&first, &second), Ordering::Less);
}

#[rstest]
#[case(Value::from(1))]
#[case(Value::from("string"))]
#[case(Value::Null)]
#[case(Value::from(true))]
#[case(Value::array([1]))]
fn test_objects_sort_after_other_values(#[case] other: Value) {
    let object = Value::from(bare_type_a());

    assert_eq!(compare_by_value(&object, &other), Ordering::Greater);
    assert_eq!(compare_by_value(&other, &object), Ordering::Less);
    assert_eq!(compare_by_instance(&object, &other), Ordering::Greater);
    assert_eq!(compare_by_instance(&other, &object), Ordering::Less);
}

#[rstest]
#[case(Value::from(true), Value::from("!string"), Ordering::Equal)]
#[case(Value::from(true), Value::from(1), Ordering::Equal)]
#[case(Value::from(false), Value::Null, Ordering::Equal)]
#[case(Value::from(false), Value::array(Vec::<Value>::new()), Ordering::Equal)]
#[case(Value::from(false), Value::from("0"), Ordering::Equal)]
#[case(Value::from(false), Value::from(1), Ordering::Less)]
#[case(Value::from("x"), Value::from(false), Ordering::Greater)]
fn test_by_value_compares_booleans_by_truthiness(
    #[case] a: Value,
    #[case] b: Value,
    #[case] expected: Ordering,
) {
    assert_eq!(compare_by_value(&a, &b), expected);
}

#[rstest]
#[case(Value::from(1), Value::from(1), Ordering::Equal)]
#[case(Value::from("a"), Value::from("a"), Ordering::Equal)]
#[case(Value::Null, Value::Null, Ordering::Equal)]
#[case(Value::from(1), Value::from("1"), Ordering::Less)]
#[case(Value::from("1"), Value::from(1), Ordering::Less)]
#[case(Value::from(1), Value::from(1.0), Ordering::Less)]
#[case(Value::from(2), Value::from(1), Ordering::Greater)]
#[case(Value::from("b"), Value::from("a"), Ordering::Greater)]
#[case(Value::from("10"), Value::from("9"), Ordering::Greater)]
#[case(Value::from(f64::NAN), Value::from(f64::NAN), Ordering::Less)]
fn test_by_value_primitives(#[case] a: Value, #[case] b: Value, #[case] expected: Ordering) {
    assert_eq!(compare_by_value(&a, &b), expected);
}

#[rstest]
fn test_by_value_arrays_match_when_identical() {
    let first = Value::array([Value::from(1), Value::array(["nested"])]);
    let second = Value::array([Value::from(1), Value::array(["nested"])]);
    let different = Value::array([Value::from(1), Value::array(["other"])]);

    assert_eq!(compare_by_value(&first, &second), Ordering::Equal);
    assert_ne!(compare_by_value(&first, &different), Ordering::Equal);
}

#[rstest]
fn test_by_instance_matches_same_instance_only() {
    let instance = type_a("same");
    let twin = type_a("same");

    assert_eq!(
        compare_by_instance(&Value::from(&instance), &Value::from(&instance)),
        Ordering::Equal
    );
    assert_ne!(
        compare_by_instance(&Value::from(&instance), &Value::from(&twin)),
        Ordering::Equal
    );
}

#[rstest]
fn test_by_instance_orders_objects_by_creation() {
    let older = Value::from(bare_type_a());
    let newer = Value::from(bare_type_a());

    assert_eq!(compare_by_instance(&older, &newer), Ordering::Less);
    assert_eq!(compare_by_instance(&newer, &older), Ordering::Greater);
}

#[rstest]
#[case(Value::from(1), Value::from(true), Ordering::Less)]
#[case(Value::from(2), Value::from(1), Ordering::Greater)]
#[case(Value::from(2.3), Value::from(2.3), Ordering::Equal)]
#[case(Value::from("string"), Value::from("string"), Ordering::Equal)]
#[case(Value::Null, Value::from(false), Ordering::Less)]
fn test_by_instance_primitives(#[case] a: Value, #[case] b: Value, #[case] expected: Ordering) {
    assert_eq!(compare_by_instance(&a, &b), expected);
}

#[rstest]
fn test_strategies_delegate_to_functions() {
    let first = Value::from(type_a("same"));
    let second = Value::from(type_a("same"));

    assert!(ByValue.matches(&first, &second));
    assert!(!ByInstance.matches(&first, &second));
    assert_eq!(ByValue.name(), "by_value");
    assert_eq!(ByInstance.name(), "by_instance");
}

#[rstest]
fn test_closures_are_strategies() {
    let reversed = |a: &Value, b: &Value| compare_by_value(b, a);

    assert_eq!(reversed.compare(&Value::from(1), &Value::from(2)), Ordering::Greater);
    assert_eq!(reversed.name(), "custom");
}

#[rstest]
fn test_comparators_do_not_mutate_inputs() {
    let object = type_a("same");
    let value = Value::from(&object);
    let snapshot = format!("{value}");

    let _ = compare_by_value(&value, &Value::from(type_a("same")));
    let _ = compare_by_instance(&value, &Value::from(1));

    assert_eq!(format!("{value}"), snapshot);
    assert!(value.as_object().is_some_and(|held| held.same_instance(&object)));
}
