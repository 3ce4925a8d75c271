use crate::{Container, Key};

/// An internal cursor over the entries.
///
/// The cursor is a position in insertion order. It starts at the first
/// entry and is not moved by mutation, so removing entries may skip values.
///
/// # Examples
///
/// ```rust
/// use value_collection::prelude::*;
///
/// let mut collection = IterableCollection::from_values(["a", "b"]);
/// let mut seen = Vec::new();
/// collection.rewind();
/// while collection.valid() {
///     seen.push(collection.current().cloned());
///     collection.next();
/// }
/// assert_eq!(seen, vec![Some(Value::from("a")), Some(Value::from("b"))]);
/// ```
pub trait Iterable: Container {
    /// Returns the cursor position.
    fn cursor(&self) -> usize;

    /// Returns the cursor position mutably.
    fn cursor_mut(&mut self) -> &mut usize;

    /// Moves the cursor back to the first entry.
    fn rewind(&mut self) {
        *self.cursor_mut() = 0;
    }

    /// Returns the value under the cursor.
    fn current(&self) -> Option<&Self::Item> {
        self.entries()
            .get_index(self.cursor())
            .map(|(_, value)| value)
    }

    /// Returns the key under the cursor.
    fn key(&self) -> Option<&Key> {
        self.entries().get_index(self.cursor()).map(|(key, _)| key)
    }

    /// Advances the cursor and returns the value it now points at.
    fn next(&mut self) -> Option<&Self::Item> {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_add(1);
        self.current()
    }

    /// Returns `true` while the cursor points at an entry.
    fn valid(&self) -> bool {
        self.cursor() < self.len()
    }
}
