//! The internal cursor.

use rstest::rstest;
use value_collection::prelude::*;

#[rstest]
fn test_iterates_with_for_loop() {
    let collection = IterableCollection::from_values(0..10);
    let mut expected = 0;

    for (key, value) in &collection {
        assert_eq!(key, &Key::from(expected));
        assert_eq!(value, &Value::from(expected));
        expected += 1;
    }
    assert_eq!(expected, 10);
}

#[rstest]
fn test_cursor_walk() {
    let mut collection = IterableCollection::from_values(["a", "b", "c"]);

    assert!(collection.valid());
    assert_eq!(collection.current(), Some(&Value::from("a")));
    assert_eq!(collection.key(), Some(&Key::from(0)));

    assert_eq!(collection.next(), Some(&Value::from("b")));
    assert_eq!(collection.key(), Some(&Key::from(1)));

    assert_eq!(collection.next(), Some(&Value::from("c")));
    assert_eq!(collection.next(), None);
    assert!(!collection.valid());
    assert_eq!(collection.key(), None);

    collection.rewind();
    assert!(collection.valid());
    assert_eq!(collection.current(), Some(&Value::from("a")));
}

#[rstest]
fn test_cursor_reports_named_keys() {
    let mut collection = IterableCollection::new();
    collection.set("first", 1).set("second", 2);

    let mut walked = Vec::new();
    collection.rewind();
    while collection.valid() {
        walked.push((collection.key().cloned(), collection.current().cloned()));
        collection.next();
    }

    assert_eq!(
        walked,
        vec![
            (Some(Key::from("first")), Some(Value::from(1))),
            (Some(Key::from("second")), Some(Value::from(2))),
        ]
    );
}

#[rstest]
fn test_empty_collection_is_never_valid() {
    let mut collection = IterableCollection::new();
    assert!(!collection.valid());
    assert_eq!(collection.current(), None);
    assert_eq!(collection.next(), None);
}

#[rstest]
fn test_derived_collections_start_at_the_beginning() {
    let mut collection = IterableCollection::from_values([1, 2, 3]);
    collection.next();
    collection.next();

    let copy = collection.copy();
    assert_eq!(copy.current(), Some(&Value::from(1)));
    assert_eq!(collection.current(), Some(&Value::from(3)));
}
