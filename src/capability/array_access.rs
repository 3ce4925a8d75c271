use crate::{Container, Key, Value};

/// Bracket-style access.
///
/// Types with this capability also implement `std::ops::Index` and
/// `IndexMut` for any key convertible into [`Key`]; those panic when the key
/// is missing, like `HashMap`.
///
/// # Examples
///
/// ```rust
/// use value_collection::prelude::*;
///
/// let mut collection = ArrayCollection::new();
/// collection.offset_set(None, "first");
/// collection.offset_set(Some(Key::from("empty")), Value::Null);
///
/// assert_eq!(collection[0], Value::from("first"));
/// assert!(collection.offset_exists(0));
/// assert!(!collection.offset_exists("empty"));
/// ```
pub trait ArrayAccess: Container<Item = Value> {
    /// Returns the value stored under `key`.
    fn offset_get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries().get(&key.into())
    }

    /// Stores `value` under `key`, or appends it when `key` is `None`.
    fn offset_set(&mut self, key: Option<Key>, value: impl Into<Value>) {
        let value = value.into();
        match key {
            Some(key) => {
                if self.admits(&value) {
                    self.entries_mut().set(key, value);
                }
            }
            None => {
                self.append_admitted(value);
            }
        }
    }

    /// Returns `true` if `key` holds a value other than `Null`.
    fn offset_exists(&self, key: impl Into<Key>) -> bool {
        self.entries()
            .get(&key.into())
            .is_some_and(|value| !value.is_null())
    }

    /// Removes the entry under `key`, if any.
    fn offset_unset(&mut self, key: impl Into<Key>) {
        self.entries_mut().remove(&key.into());
    }
}
