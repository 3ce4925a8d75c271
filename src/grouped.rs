//! The result of [`group_by`](crate::SetAlgebra::group_by).

use crate::{Container, Entries, EntriesIter, Indexed, Key, KeyMode};

/// A keyed container of sub-collections.
///
/// Every group is a collection of the grouped type `C`, holding at least
/// one element. Groups are ordered by the first appearance of their key.
///
/// # Examples
///
/// ```rust
/// use value_collection::prelude::*;
///
/// let collection = Collection::from_values(["apple", "avocado", "banana"]);
/// let grouped = collection.group_by(|value| {
///     value.as_str().and_then(|text| text.get(..1)).unwrap_or_default().to_string()
/// });
///
/// assert_eq!(grouped.keys().cloned().collect::<Vec<_>>(), vec![Key::from("a"), Key::from("b")]);
/// assert_eq!(grouped["a"].len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GroupedCollection<C> {
    groups: Entries<C>,
}

impl<C> GroupedCollection<C> {
    /// Wraps already grouped collections.
    #[inline]
    #[must_use]
    pub const fn from_groups(groups: Entries<C>) -> Self {
        Self { groups }
    }

    /// Consumes the container, returning the groups.
    #[inline]
    #[must_use]
    pub fn into_groups(self) -> Entries<C> {
        self.groups
    }
}

impl<C> Default for GroupedCollection<C> {
    fn default() -> Self {
        Self::from_groups(Entries::new())
    }
}

impl<C: Clone> Container for GroupedCollection<C> {
    type Item = C;

    const KEY_MODE: KeyMode = KeyMode::Keyed;

    #[inline]
    fn entries(&self) -> &Entries<C> {
        &self.groups
    }

    #[inline]
    fn entries_mut(&mut self) -> &mut Entries<C> {
        &mut self.groups
    }

    fn derive(&self, entries: Entries<C>) -> Self {
        Self::from_groups(entries)
    }
}

impl<C: Clone> Indexed for GroupedCollection<C> {}

impl<C, K: Into<Key>> std::ops::Index<K> for GroupedCollection<C> {
    type Output = C;

    fn index(&self, key: K) -> &C {
        let key = key.into();
        match self.groups.get(&key) {
            Some(group) => group,
            None => panic!("no group found for key {key}"),
        }
    }
}

impl<'a, C> IntoIterator for &'a GroupedCollection<C> {
    type Item = (&'a Key, &'a C);
    type IntoIter = EntriesIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl<C: PartialEq> PartialEq for GroupedCollection<C> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}
