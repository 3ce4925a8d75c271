//! Shared fixtures.

use value_collection::prelude::*;

/// A `TypeA` instance with a single `value` field.
pub fn type_a(value: impl Into<Value>) -> ObjectRef {
    ObjectRef::new(Object::new("TypeA").with_field("value", value))
}

/// A `TypeA` instance with no fields.
pub fn bare_type_a() -> ObjectRef {
    ObjectRef::new(Object::new("TypeA"))
}

/// The values of a collection, in order.
pub fn values_of<C: Container<Item = Value>>(collection: &C) -> Vec<Value> {
    collection.values().cloned().collect()
}

/// Converts anything convertible into a list of values.
pub fn values<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Vec<Value> {
    items.into_iter().map(Into::into).collect()
}

/// Returns `true` if `collection` holds the very instance `object`.
pub fn holds_instance<C: Container<Item = Value>>(collection: &C, object: &ObjectRef) -> bool {
    collection
        .values()
        .any(|value| value.as_object().is_some_and(|held| held.same_instance(object)))
}
