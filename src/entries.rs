//! Insertion-ordered keyed storage.
//!
//! [`Entries`] is the backing store of every collection and of nested
//! [`Value::Array`](crate::Value::Array) values. It behaves like an ordered
//! hash table with automatic integer keys:
//!
//! - `push` appends under the next free integer index
//! - `set` replaces an existing key in place, or appends a new one
//! - `shift` and `unshift` renumber integer keys from zero
//! - `remove` leaves the remaining keys untouched
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push`             | O(1)*      |
//! | `pop`              | O(n)       |
//! | `get` / `set`      | O(n)       |
//! | `shift`/`unshift`  | O(n)       |
//! | `iter`             | O(n)       |
//!
//! Lookups are linear: values are expected to be small, mixed-type and not
//! hashable, so no index is maintained.
//!
//! # Examples
//!
//! ```rust
//! use value_collection::{Entries, Key};
//!
//! let mut entries: Entries<&str> = Entries::new();
//! entries.push("zero");
//! entries.set(Key::from("name"), "named");
//! entries.push("one");
//!
//! let keys: Vec<String> = entries.keys().map(ToString::to_string).collect();
//! assert_eq!(keys, vec!["0", "name", "1"]);
//! ```

use std::cmp::Ordering;

use crate::Key;

/// An insertion-ordered sequence of `(Key, T)` pairs.
#[derive(Clone)]
pub struct Entries<T> {
    pairs: Vec<(Key, T)>,
    // `None` once `i64::MAX` is taken: no integer key is left for `push`.
    next_index: Option<i64>,
}

impl<T> Entries<T> {
    /// Creates an empty store.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pairs: Vec::new(),
            next_index: Some(0),
        }
    }

    /// Creates a store with sequential keys `0..n` from the given values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::{Entries, Key};
    ///
    /// let entries = Entries::from_values(["a", "b"]);
    /// assert_eq!(entries.get(&Key::Index(1)), Some(&"b"));
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut entries = Self::new();
        for value in values {
            entries.push(value);
        }
        entries
    }

    /// Creates a store from explicit key/value pairs.
    ///
    /// Later duplicates of a key overwrite earlier ones in place.
    #[must_use]
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut entries = Self::new();
        for (key, value) in pairs {
            entries.set(key.into(), value);
        }
        entries
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns `true` if the keys are exactly `0, 1, ..., len - 1` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.pairs
            .iter()
            .enumerate()
            .all(|(position, (key, _))| *key == Key::from(position))
    }

    /// Appends a value under the next free integer index and returns its key.
    ///
    /// Returns `None`, dropping `value`, once `i64::MAX` has been used as a
    /// key: there is no next index to hand out.
    pub fn push(&mut self, value: T) -> Option<Key> {
        let index = self.next_index?;
        self.next_index = index.checked_add(1);
        let key = Key::Index(index);
        self.pairs.push((key.clone(), value));
        Some(key)
    }

    /// Inserts or replaces the value stored under `key`.
    ///
    /// Returns the previous value if the key already existed. A replaced
    /// entry keeps its position.
    pub fn set(&mut self, key: Key, value: T) -> Option<T> {
        if let Some(position) = self.position(&key) {
            return Some(std::mem::replace(&mut self.pairs[position].1, value));
        }
        if let Key::Index(index) = key
            && self.next_index.is_some_and(|next| index >= next)
        {
            self.next_index = index.checked_add(1);
        }
        self.pairs.push((key, value));
        None
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&T> {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut T> {
        self.pairs
            .iter_mut()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Removes the entry stored under `key`, leaving other keys untouched.
    pub fn remove(&mut self, key: &Key) -> Option<T> {
        self.position(key)
            .map(|position| self.pairs.remove(position).1)
    }

    /// Removes and returns the last entry.
    ///
    /// The next free index is reset to one past the largest remaining
    /// integer key.
    pub fn pop(&mut self) -> Option<(Key, T)> {
        let popped = self.pairs.pop();
        self.next_index = self.largest_index().map_or(Some(0), |index| index.checked_add(1));
        popped
    }

    /// Removes and returns the first entry, renumbering integer keys.
    pub fn shift(&mut self) -> Option<(Key, T)> {
        if self.pairs.is_empty() {
            return None;
        }
        let shifted = self.pairs.remove(0);
        self.reindex();
        Some(shifted)
    }

    /// Prepends a value, renumbering integer keys.
    pub fn unshift(&mut self, value: T) {
        self.pairs.insert(0, (Key::Index(0), value));
        self.reindex();
    }

    /// Renumbers integer keys `0, 1, ...` in order, keeping named keys.
    pub fn reindex(&mut self) {
        let mut next = 0;
        for (key, _) in &mut self.pairs {
            if key.is_index() {
                *key = Key::Index(next);
                next += 1;
            }
        }
        self.next_index = Some(next);
    }

    /// Replaces every key with its position, turning the store into a list.
    pub fn renumber(&mut self) {
        for (position, (key, _)) in self.pairs.iter_mut().enumerate() {
            *key = Key::from(position);
        }
        self.next_index = i64::try_from(self.pairs.len()).ok();
    }

    /// Removes every entry and resets the next index.
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.next_index = Some(0);
    }

    /// Stably sorts the entries by value, keeping each key with its value.
    ///
    /// `compare` need not be a total order: an inconsistent comparator
    /// yields some permutation of the entries, never a panic.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let pairs = std::mem::take(&mut self.pairs);
        self.pairs = merge_sort(pairs, &mut |(_, left): &(Key, T), (_, right): &(Key, T)| {
            compare(left, right)
        });
    }

    /// Keeps only the entries for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&Key, &T) -> bool,
    {
        self.pairs.retain(|(key, value)| predicate(key, value));
    }

    /// Returns the first entry.
    #[must_use]
    pub fn first(&self) -> Option<(&Key, &T)> {
        self.pairs.first().map(|(key, value)| (key, value))
    }

    /// Returns the last entry.
    #[must_use]
    pub fn last(&self) -> Option<(&Key, &T)> {
        self.pairs.last().map(|(key, value)| (key, value))
    }

    /// Returns the entry at `position` in insertion order.
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<(&Key, &T)> {
        self.pairs.get(position).map(|(key, value)| (key, value))
    }

    /// Returns an iterator over `(key, value)` pairs in order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> EntriesIter<'_, T> {
        EntriesIter {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.pairs.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.pairs.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable references to the values in order.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> + ExactSizeIterator {
        self.pairs.iter_mut().map(|(_, value)| value)
    }

    /// Consumes the store, returning its values in order.
    pub fn into_values(self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator {
        self.pairs.into_iter().map(|(_, value)| value)
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.pairs.iter().position(|(candidate, _)| candidate == key)
    }

    fn largest_index(&self) -> Option<i64> {
        self.pairs.iter().filter_map(|(key, _)| key.as_index()).max()
    }
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let mut left = merge_sort(items, compare).into_iter().peekable();
    let mut right = merge_sort(right, compare).into_iter().peekable();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    while let (Some(first), Some(second)) = (left.peek(), right.peek()) {
        let next = if compare(second, first) == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

impl<T> Default for Entries<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over `(key, value)` references of an [`Entries`] store.
pub struct EntriesIter<'a, T> {
    inner: std::slice::Iter<'a, (Key, T)>,
}

impl<'a, T> Iterator for EntriesIter<'a, T> {
    type Item = (&'a Key, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for EntriesIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<T> ExactSizeIterator for EntriesIter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the `(key, value)` pairs of an [`Entries`] store.
pub struct EntriesIntoIter<T> {
    inner: std::vec::IntoIter<(Key, T)>,
}

impl<T> Iterator for EntriesIntoIter<T> {
    type Item = (Key, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for EntriesIntoIter<T> {}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<'a, T> IntoIterator for &'a Entries<T> {
    type Item = (&'a Key, &'a T);
    type IntoIter = EntriesIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Entries<T> {
    type Item = (Key, T);
    type IntoIter = EntriesIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        EntriesIntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<T> FromIterator<T> for Entries<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

/// Two stores are equal when they hold the same pairs in the same order.
impl<T: PartialEq> PartialEq for Entries<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Entries<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_list() {
            formatter.debug_list().entries(self.values()).finish()
        } else {
            formatter.debug_map().entries(self.iter()).finish()
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Entries<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        if self.is_list() {
            let mut sequence = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                sequence.serialize_element(value)?;
            }
            sequence.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

#[cfg(feature = "serde")]
struct EntriesVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for EntriesVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Entries<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a sequence or a map")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut entries = Entries::new();
        while let Some(value) = access.next_element()? {
            entries.push(value);
        }
        Ok(entries)
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = Entries::new();
        while let Some((key, value)) = access.next_entry::<Key, T>()? {
            entries.set(key, value);
        }
        Ok(entries)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Entries<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(EntriesVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
