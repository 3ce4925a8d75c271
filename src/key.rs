//! Keys of collection entries.
//!
//! A [`Key`] is either a sequential integer index or a caller-chosen name.
//! Names that are the canonical decimal form of an integer normalise to
//! [`Key::Index`], so `"5"` and `5` address the same entry.

use std::fmt;

/// The key of a single entry in an [`Entries`](crate::Entries) store.
///
/// # Examples
///
/// ```rust
/// use value_collection::Key;
///
/// assert_eq!(Key::from("7"), Key::Index(7));
/// assert_eq!(Key::from("07"), Key::Name("07".to_string()));
/// assert_eq!(Key::from("EVEN"), Key::Name("EVEN".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// An integer position, assigned automatically by appends.
    Index(i64),
    /// A caller-defined label.
    Name(String),
}

impl Key {
    /// Returns the integer index, if this is an [`Key::Index`].
    #[inline]
    #[must_use]
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the label, if this is a [`Key::Name`].
    #[inline]
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }

    /// Returns `true` for integer keys.
    #[inline]
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

fn canonical_index(name: &str) -> Option<i64> {
    let index: i64 = name.parse().ok()?;
    (index.to_string() == name).then_some(index)
}

impl From<i64> for Key {
    #[inline]
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        canonical_index(name).map_or_else(|| Self::Name(name.to_string()), Self::Index)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        canonical_index(&name).map_or(Self::Name(name), Self::Index)
    }
}

impl From<&Self> for Key {
    #[inline]
    fn from(key: &Self) -> Self {
        key.clone()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Index(index) => serializer.serialize_i64(*index),
            Self::Name(name) => serializer.serialize_str(name),
        }
    }
}

#[cfg(feature = "serde")]
struct KeyVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for KeyVisitor {
    type Value = Key;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer or a string key")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Key, E> {
        Ok(Key::Index(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Key, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value)
            .map(Key::Index)
            .map_err(|_| E::custom("key index out of range"))
    }

    fn visit_str<E>(self, value: &str) -> Result<Key, E> {
        Ok(Key::from(value))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(KeyVisitor)
    }
}
