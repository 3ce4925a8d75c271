//! Set-like operations over collections of values.
//!
//! [`SetAlgebra`] is implemented for every [`Container`] of [`Value`]s. Its
//! operations never modify the receiver and return a collection of the same
//! concrete type (with the same insertion filter) built through
//! [`Container::derive`].
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`contains`](SetAlgebra::contains) | every needle is present, by structural equality |
//! | [`diff_by`](SetAlgebra::diff_by) | elements with no `Equal` match in the operand |
//! | [`intersect_by`](SetAlgebra::intersect_by) | elements with an `Equal` match in the operand |
//! | [`merge`](SetAlgebra::merge) | elements followed by the operand's, integer keys renumbered |
//! | [`group_by`](SetAlgebra::group_by) | sub-collections keyed by a classifier |
//!
//! `diff` and `intersect` compare every element against every operand
//! element with the strategy (`strategy.compare(element, candidate)`), so
//! they run in `O(n * m)` and partition the receiver: each element lands in
//! exactly one of the two results. Keys and order come from the receiver.
//!
//! # Examples
//!
//! ```rust
//! use value_collection::prelude::*;
//!
//! let numbers = Collection::from_values(1..=10);
//! let low = numbers.intersect(vec![1, 2, 3, 4, 5]).unwrap();
//! let rest = numbers.diff(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
//!
//! assert_eq!(low.len(), 5);
//! assert_eq!(rest.values().collect::<Vec<_>>(), vec![&Value::from(10)]);
//! ```

use std::borrow::Cow;

use crate::comparison::{ByValue, ComparisonStrategy};
use crate::value::coercion::value_eq;
use crate::{Array, CollectionError, Container, Entries, GroupedCollection, Key, Result, Value};

// =============================================================================
// Operand
// =============================================================================

/// The right-hand side of `diff`, `intersect` and `merge`.
///
/// Built with `From` from raw sequences (`Vec<T>`, arrays, slices of
/// [`Value`]), an [`Array`], a reference to any collection type, or a
/// dynamic [`Value`]. A `Value` that is not an array becomes a mismatch that
/// the operation reports as [`CollectionError::TypeMismatch`].
#[derive(Debug, Clone)]
pub struct Operand<'a> {
    source: OperandSource<'a>,
}

#[derive(Debug, Clone)]
enum OperandSource<'a> {
    Entries(Cow<'a, Array>),
    Mismatch { found: &'static str },
}

impl<'a> Operand<'a> {
    /// Wraps borrowed entries.
    #[inline]
    #[must_use]
    pub const fn borrowed(entries: &'a Array) -> Self {
        Self {
            source: OperandSource::Entries(Cow::Borrowed(entries)),
        }
    }

    /// Wraps owned entries.
    #[inline]
    #[must_use]
    pub const fn owned(entries: Array) -> Self {
        Self {
            source: OperandSource::Entries(Cow::Owned(entries)),
        }
    }

    /// Returns the operand's entries.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] naming `operation` if the
    /// operand was built from a value that is not an array.
    pub fn resolve(&self, operation: &'static str) -> Result<&Array> {
        match &self.source {
            OperandSource::Entries(entries) => Ok(&**entries),
            OperandSource::Mismatch { found } => Err(CollectionError::TypeMismatch {
                operation,
                expected: "array or collection",
                found,
            }),
        }
    }
}

impl<'a> From<&'a Array> for Operand<'a> {
    fn from(entries: &'a Array) -> Self {
        Self::borrowed(entries)
    }
}

impl From<Array> for Operand<'_> {
    fn from(entries: Array) -> Self {
        Self::owned(entries)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Operand<'_> {
    fn from(values: Vec<T>) -> Self {
        Self::owned(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Operand<'_> {
    fn from(values: [T; N]) -> Self {
        Self::owned(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[Value]> for Operand<'_> {
    fn from(values: &[Value]) -> Self {
        Self::owned(values.iter().cloned().collect())
    }
}

impl<'a> From<&'a Value> for Operand<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Array(entries) => Self::borrowed(entries),
            other => Self {
                source: OperandSource::Mismatch {
                    found: other.type_name(),
                },
            },
        }
    }
}

impl From<Value> for Operand<'_> {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(entries) => Self::owned(entries),
            other => Self {
                source: OperandSource::Mismatch {
                    found: other.type_name(),
                },
            },
        }
    }
}

// =============================================================================
// SetAlgebra
// =============================================================================

/// Set-like operations, implemented for every collection of values.
pub trait SetAlgebra: Container<Item = Value> {
    /// Returns `true` if every needle is present in the collection.
    ///
    /// Primitives must match strictly (`1` does not match `"1"`); arrays and
    /// objects match structurally, so an object matches any object of the
    /// same class with equal fields. No needles is vacuously `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let collection = Collection::from_values([Value::from(1), Value::from("two")]);
    /// assert!(collection.contains([Value::from("two"), Value::from(1)]));
    /// assert!(!collection.contains(["1"]));
    /// ```
    fn contains<I>(&self, needles: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        needles.into_iter().all(|needle| {
            let needle = needle.into();
            self.values().any(|value| value_eq(value, &needle))
        })
    }

    /// Returns the elements with no by-value match in `other`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if `other` is not a
    /// sequence or collection.
    fn diff<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        self.diff_by(other, ByValue)
    }

    /// Returns the elements with no match in `other` under `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if `other` is not a
    /// sequence or collection.
    fn diff_by<'a, S>(&self, other: impl Into<Operand<'a>>, strategy: S) -> Result<Self>
    where
        S: ComparisonStrategy,
    {
        select(self, "diff", &other.into(), &strategy, false)
    }

    /// Returns the elements with a by-value match in `other`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if `other` is not a
    /// sequence or collection.
    fn intersect<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        self.intersect_by(other, ByValue)
    }

    /// Returns the elements with a match in `other` under `strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if `other` is not a
    /// sequence or collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let shared = ObjectRef::new(Object::new("TypeA").with_field("value", "same"));
    /// let twin = ObjectRef::new(Object::new("TypeA").with_field("value", "same"));
    /// let collection = Collection::from_values([Value::from(&shared)]);
    ///
    /// let by_value = collection.intersect_by(vec![Value::from(&twin)], ByValue).unwrap();
    /// let by_instance = collection.intersect_by(vec![Value::from(&twin)], ByInstance).unwrap();
    /// assert_eq!(by_value.len(), 1);
    /// assert!(by_instance.is_empty());
    /// ```
    fn intersect_by<'a, S>(&self, other: impl Into<Operand<'a>>, strategy: S) -> Result<Self>
    where
        S: ComparisonStrategy,
    {
        select(self, "intersect", &other.into(), &strategy, true)
    }

    /// Returns a new collection holding these elements followed by `other`'s.
    ///
    /// Integer keys are renumbered from zero; a named key in `other`
    /// overwrites the same name in place. Values rejected by the insertion
    /// filter are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if `other` is not a
    /// sequence or collection.
    fn merge<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Self> {
        let operand = other.into();
        let other = operand.resolve("merge")?;

        let mut entries = self.entries().clone();
        entries.reindex();
        let mut merged = self.derive(entries);
        for (key, value) in other {
            if !merged.admits(value) {
                continue;
            }
            match key {
                Key::Index(_) => {
                    merged.entries_mut().push(value.clone());
                }
                Key::Name(_) => {
                    merged.entries_mut().set(key.clone(), value.clone());
                }
            }
        }

        tracing::trace!(
            input = self.len(),
            operand = other.len(),
            output = merged.len(),
            "merge"
        );
        Ok(merged)
    }

    /// Splits the collection into groups keyed by `classifier`.
    ///
    /// Groups appear in the order their key is first produced. Each group is
    /// a collection of the receiver's type, keeps the elements' relative
    /// order, and numbers them from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let collection = Collection::from_values([Value::from(1), Value::from("a"), Value::from(2.5)]);
    /// let grouped = collection.group_by(|value| {
    ///     if value.is_numeric() { "numeric" } else { "other" }
    /// });
    ///
    /// assert_eq!(grouped.len(), 2);
    /// assert_eq!(grouped.get("numeric").map(Container::len), Some(2));
    /// ```
    fn group_by<K, F>(&self, mut classifier: F) -> GroupedCollection<Self>
    where
        F: FnMut(&Value) -> K,
        K: Into<Key>,
    {
        let mut groups: Entries<Self> = Entries::new();
        for value in self.values() {
            let key = classifier(value).into();
            if let Some(group) = groups.get_mut(&key) {
                group.entries_mut().push(value.clone());
            } else {
                groups.set(key, self.derive(Entries::from_values([value.clone()])));
            }
        }

        tracing::trace!(input = self.len(), groups = groups.len(), "group_by");
        GroupedCollection::from_groups(groups)
    }
}

impl<C: Container<Item = Value>> SetAlgebra for C {}

fn select<C, S>(
    collection: &C,
    operation: &'static str,
    operand: &Operand<'_>,
    strategy: &S,
    keep_matched: bool,
) -> Result<C>
where
    C: Container<Item = Value>,
    S: ComparisonStrategy,
{
    let other = operand.resolve(operation)?;

    let mut entries = collection.entries().clone();
    entries.retain(|_, value| {
        let matched = other
            .values()
            .any(|candidate| strategy.matches(value, candidate));
        matched == keep_matched
    });

    tracing::trace!(
        operation,
        strategy = strategy.name(),
        input = collection.len(),
        operand = other.len(),
        output = entries.len(),
        "set operation"
    );
    Ok(collection.derive(entries))
}
