//! Stable sorting of collections of values.
//!
//! [`Sortable`] is implemented for every [`Container`] of [`Value`]s. The
//! natural order is [`compare_by_value`]; any comparator of shape
//! `FnMut(&Value, &Value) -> Ordering` can be supplied instead, including
//! [`compare_by_instance`](crate::comparison::compare_by_instance).
//!
//! Sorting is stable. What happens to keys depends on the collection's
//! [`KeyMode`]: sequence collections are renumbered `0..n`, keyed
//! collections keep every key attached to its value.
//!
//! # Examples
//!
//! ```rust
//! use value_collection::prelude::*;
//!
//! let collection = Collection::from_values([3, 1, 2]);
//! let sorted = collection.sorted();
//!
//! assert_eq!(sorted.values().cloned().collect::<Vec<_>>(), vec![
//!     Value::from(1), Value::from(2), Value::from(3)
//! ]);
//! assert_eq!(collection.first(), Some(&Value::from(3)));
//! ```

use std::cmp::Ordering;

use crate::comparison::compare_by_value;
use crate::{Container, KeyMode, Value};

/// In-place and copying sorts, implemented for every collection of values.
pub trait Sortable: Container<Item = Value> {
    /// Sorts the collection in place by [`compare_by_value`].
    fn sort(&mut self) -> &mut Self {
        self.sort_by(compare_by_value)
    }

    /// Sorts the collection in place with `compare`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let mut collection = IndexedCollection::new();
    /// collection.set("b", 2).set("a", 1);
    /// collection.sort_by(|a, b| compare_by_value(b, a));
    ///
    /// assert_eq!(collection.keys().cloned().collect::<Vec<_>>(), vec![Key::from("b"), Key::from("a")]);
    /// ```
    fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let entries = self.entries_mut();
        entries.sort_by(compare);
        if Self::KEY_MODE == KeyMode::Sequence {
            entries.renumber();
        }
        tracing::trace!(len = self.len(), key_mode = ?Self::KEY_MODE, "sort");
        self
    }

    /// Returns a sorted copy, leaving the collection untouched.
    #[must_use]
    fn sorted(&self) -> Self {
        self.sorted_by(compare_by_value)
    }

    /// Returns a copy sorted with `compare`, leaving the collection
    /// untouched.
    #[must_use]
    fn sorted_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let mut sorted = self.copy();
        sorted.sort_by(compare);
        sorted
    }
}

impl<C: Container<Item = Value>> Sortable for C {}
