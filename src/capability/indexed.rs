use crate::{Container, Key};

/// Keyed access.
///
/// Keys convert through [`Key::from`], so `"5"` and `5` address the same
/// entry.
pub trait Indexed: Container {
    /// Returns the value stored under `key`.
    fn get(&self, key: impl Into<Key>) -> Option<&Self::Item> {
        self.entries().get(&key.into())
    }

    /// Stores `value` under `key`, replacing any previous value in place.
    ///
    /// Values rejected by the insertion filter leave the collection
    /// unchanged.
    fn set(&mut self, key: impl Into<Key>, value: impl Into<Self::Item>) -> &mut Self {
        let value = value.into();
        if self.admits(&value) {
            self.entries_mut().set(key.into(), value);
        }
        self
    }

    /// Returns `true` if an entry exists under `key`.
    fn has(&self, key: impl Into<Key>) -> bool {
        self.entries().contains_key(&key.into())
    }

    /// Removes and returns the value stored under `key`.
    fn remove(&mut self, key: impl Into<Key>) -> Option<Self::Item> {
        self.entries_mut().remove(&key.into())
    }
}
