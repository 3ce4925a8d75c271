//! The core collection trait and its base operations.
//!
//! [`Container`] is what every collection type implements: read and write
//! access to its ordered [`Entries`], and [`Container::derive`] to build a
//! new instance of the *same* concrete type (with the same [`Validator`])
//! from derived entries. Every other operation in the crate is written
//! against this trait, which is how set operations and sorting return the
//! caller's own collection type.
//!
//! # Examples
//!
//! ```rust
//! use value_collection::prelude::*;
//!
//! let collection = Collection::from_values([1, 2, 3, 4]);
//! let doubled = collection.map(|value| Value::from(value.as_int().unwrap_or(0) * 2));
//! let even = collection.filter(|value| value.as_int().is_some_and(|number| number % 2 == 0));
//!
//! assert_eq!(doubled.values().cloned().collect::<Vec<_>>(), vec![
//!     Value::from(2), Value::from(4), Value::from(6), Value::from(8)
//! ]);
//! assert_eq!(even.len(), 2);
//! assert_eq!(collection.len(), 4);
//! ```

use std::fmt;

use crate::value::ReferenceCounter;
use crate::{Entries, EntriesIter, Key, Value};

/// How a collection treats its keys when reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMode {
    /// Keys are positions; sorting renumbers them `0..n`.
    Sequence,
    /// Keys are labels; sorting keeps each key attached to its value.
    Keyed,
}

#[cfg(not(feature = "arc"))]
type Predicate = dyn Fn(&Value) -> bool;

#[cfg(feature = "arc")]
type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// An insertion filter for a collection.
///
/// A collection built with a validator silently drops every value the
/// predicate rejects, on every insertion path: construction, `push`,
/// `unshift`, bracket assignment, `map` and `merge`. Collections derived
/// from it (`diff`, `sorted`, `group_by`, ...) carry the same validator.
///
/// # Examples
///
/// ```rust
/// use value_collection::prelude::*;
///
/// let only_type_a = Validator::instance_of("TypeA");
/// assert!(only_type_a.admits(&Value::object(Object::new("TypeA"))));
/// assert!(!only_type_a.admits(&Value::object(Object::new("TypeB"))));
/// assert!(!only_type_a.admits(&Value::from("TypeA")));
/// ```
#[derive(Clone)]
pub struct Validator {
    predicate: ReferenceCounter<Predicate>,
    description: String,
}

impl Validator {
    /// Creates a validator from a predicate.
    #[cfg(not(feature = "arc"))]
    #[must_use]
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        Self {
            predicate: ReferenceCounter::new(predicate),
            description: String::from("custom predicate"),
        }
    }

    /// Creates a validator from a predicate.
    #[cfg(feature = "arc")]
    #[must_use]
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: ReferenceCounter::new(predicate),
            description: String::from("custom predicate"),
        }
    }

    /// Replaces the description used in log output.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Admits only objects of class `class`.
    #[must_use]
    pub fn instance_of(class: impl Into<String>) -> Self {
        let class = class.into();
        let description = format!("instance of {class}");
        Self::new(move |value| {
            value
                .as_object()
                .is_some_and(|object| object.is_instance_of(&class))
        })
        .with_description(description)
    }

    /// Returns `true` if `value` may be inserted.
    #[inline]
    #[must_use]
    pub fn admits(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// Like [`admits`](Self::admits), logging a rejection at `debug` level
    /// under the name of the rejecting collection type.
    #[must_use]
    pub fn check(&self, collection: &'static str, value: &Value) -> bool {
        let admitted = self.admits(value);
        if !admitted {
            tracing::debug!(
                collection,
                validator = %self.description,
                value = %value,
                "value rejected by validator"
            );
        }
        admitted
    }

    /// Returns the description used in log output.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Validator")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// An ordered keyed container.
///
/// Implementors provide entry access and [`derive`](Container::derive); all
/// other methods are provided. Operations that return `Self` never modify
/// the receiver; operations taking `&mut self` modify in place.
pub trait Container: Sized {
    /// The element type.
    type Item: Clone;

    /// How keys behave when the collection is reordered.
    const KEY_MODE: KeyMode;

    /// Returns the backing entries.
    fn entries(&self) -> &Entries<Self::Item>;

    /// Returns the backing entries mutably.
    ///
    /// Writing through this bypasses the insertion filter.
    fn entries_mut(&mut self) -> &mut Entries<Self::Item>;

    /// Builds a new collection of the same concrete type and insertion
    /// rules holding `entries`.
    fn derive(&self, entries: Entries<Self::Item>) -> Self;

    /// Returns `true` if `item` may be inserted. Defaults to always.
    ///
    /// Implementations log rejected items at `debug` level.
    #[inline]
    fn admits(&self, item: &Self::Item) -> bool {
        let _ = item;
        true
    }

    /// Returns the number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns the number of elements.
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the collection holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Removes every element.
    fn clear(&mut self) -> &mut Self {
        self.entries_mut().clear();
        self
    }

    /// Returns an independent collection with the same elements and rules.
    #[must_use]
    fn copy(&self) -> Self {
        self.derive(self.entries().clone())
    }

    /// Returns a copy of the entries.
    fn to_array(&self) -> Entries<Self::Item> {
        self.entries().clone()
    }

    /// Returns an iterator over `(key, value)` pairs in order.
    fn iter(&self) -> EntriesIter<'_, Self::Item> {
        self.entries().iter()
    }

    /// Returns an iterator over the values in order.
    fn values(&self) -> impl DoubleEndedIterator<Item = &Self::Item> + ExactSizeIterator {
        self.entries().values()
    }

    /// Returns an iterator over the keys in order.
    fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries().keys()
    }

    /// Returns the first value.
    fn first(&self) -> Option<&Self::Item> {
        self.entries().first().map(|(_, value)| value)
    }

    /// Returns the last value.
    fn last(&self) -> Option<&Self::Item> {
        self.entries().last().map(|(_, value)| value)
    }

    /// Appends `item` if the insertion filter admits it.
    ///
    /// Returns `true` if the item was inserted. An admitted item is still
    /// dropped when `i64::MAX` is already a key, since no next index exists.
    fn append_admitted(&mut self, item: Self::Item) -> bool {
        if !self.admits(&item) {
            return false;
        }
        let appended = self.entries_mut().push(item).is_some();
        if !appended {
            tracing::debug!(len = self.len(), "no free integer key, value dropped");
        }
        appended
    }

    /// Returns a new collection with `transform` applied to every value.
    ///
    /// Keys are preserved. Results rejected by the insertion filter are
    /// dropped.
    #[must_use]
    fn map<F>(&self, mut transform: F) -> Self
    where
        F: FnMut(&Self::Item) -> Self::Item,
    {
        let mut mapped = self.derive(Entries::new());
        for (key, value) in self.entries() {
            let value = transform(value);
            if mapped.admits(&value) {
                mapped.entries_mut().set(key.clone(), value);
            }
        }
        mapped
    }

    /// Replaces every value with `transform(value)` in place.
    fn apply<F>(&mut self, mut transform: F) -> &mut Self
    where
        F: FnMut(&Self::Item) -> Self::Item,
    {
        for value in self.entries_mut().values_mut() {
            *value = transform(value);
        }
        self
    }

    /// Returns a new collection with the values `predicate` accepts.
    ///
    /// Keys are preserved.
    #[must_use]
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut entries = self.entries().clone();
        entries.retain(|_, value| predicate(value));
        self.derive(entries)
    }

    /// Calls `action` with every value and its key, for side effects only.
    fn each<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&Self::Item, &Key),
    {
        for (key, value) in self.entries() {
            action(value, key);
        }
        self
    }

    /// Folds the values from first to last.
    fn reduce<A, F>(&self, mut fold: F, initial: A) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        self.values().fold(initial, |accumulator, value| fold(accumulator, value))
    }

    /// Returns a new collection holding a slice of this one.
    ///
    /// A negative `offset` counts from the end. A `length` of `None` runs to
    /// the end; a negative length stops that many elements before the end.
    /// Integer keys are renumbered; named keys are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let collection = Collection::from_values(1..=10);
    /// let last_three: Vec<Value> = collection.slice(-3, None).values().cloned().collect();
    /// assert_eq!(last_three, vec![Value::from(8), Value::from(9), Value::from(10)]);
    ///
    /// let middle: Vec<Value> = collection.slice(2, Some(2)).values().cloned().collect();
    /// assert_eq!(middle, vec![Value::from(3), Value::from(4)]);
    /// ```
    #[must_use]
    fn slice(&self, offset: isize, length: Option<isize>) -> Self {
        let (start, end) = slice_bounds(self.len(), offset, length);
        let mut entries = Entries::new();
        for (key, value) in self.entries().iter().skip(start).take(end - start) {
            match key {
                Key::Index(_) => {
                    entries.push(value.clone());
                }
                Key::Name(_) => {
                    entries.set(key.clone(), value.clone());
                }
            }
        }
        self.derive(entries)
    }
}

fn slice_bounds(len: usize, offset: isize, length: Option<isize>) -> (usize, usize) {
    let resolve = |position: isize| -> usize {
        if position < 0 {
            len.saturating_sub(position.unsigned_abs())
        } else {
            position.unsigned_abs().min(len)
        }
    };
    let start = resolve(offset);
    let end = match length {
        None => len,
        Some(length) if length < 0 => resolve(length),
        Some(length) => start.saturating_add(length.unsigned_abs()).min(len),
    };
    (start, end.max(start))
}
