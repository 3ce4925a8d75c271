use crate::{CollectionError, Container, Result};

/// Stack and queue operations.
///
/// Every insertion goes through the collection's insertion filter; values
/// it rejects are dropped without error.
///
/// # Examples
///
/// ```rust
/// use value_collection::prelude::*;
///
/// let mut collection = Collection::from_values([2, 3]);
/// collection.unshift(1).push(4);
///
/// assert_eq!(collection.shift(), Ok(Value::from(1)));
/// assert_eq!(collection.pop(), Ok(Value::from(4)));
/// assert_eq!(collection.len(), 2);
/// ```
pub trait Sequence: Container {
    /// Appends a value at the end.
    ///
    /// The value is dropped if `i64::MAX` is already a key.
    fn push(&mut self, value: impl Into<Self::Item>) -> &mut Self {
        self.append_admitted(value.into());
        self
    }

    /// Appends every value, in order.
    fn push_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Item>,
    {
        for value in values {
            self.append_admitted(value.into());
        }
        self
    }

    /// Removes and returns the last value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the collection is empty.
    fn pop(&mut self) -> Result<Self::Item> {
        self.entries_mut()
            .pop()
            .map(|(_, value)| value)
            .ok_or(CollectionError::Underflow { operation: "pop" })
    }

    /// Prepends a value, renumbering integer keys.
    fn unshift(&mut self, value: impl Into<Self::Item>) -> &mut Self {
        let value = value.into();
        if self.admits(&value) {
            self.entries_mut().unshift(value);
        }
        self
    }

    /// Prepends each value in turn, so the last one ends up first.
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let mut collection = Collection::from_values(["end"]);
    /// collection.unshift_all(["a", "b", "c"]);
    /// assert_eq!(collection.first(), Some(&Value::from("c")));
    /// ```
    fn unshift_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Item>,
    {
        for value in values {
            self.unshift(value);
        }
        self
    }

    /// Removes and returns the first value, renumbering integer keys.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Underflow`] if the collection is empty.
    fn shift(&mut self) -> Result<Self::Item> {
        self.entries_mut()
            .shift()
            .map(|(_, value)| value)
            .ok_or(CollectionError::Underflow { operation: "shift" })
    }
}
