//! Error types for collection operations.
//!
//! Comparators never fail. The only failures are a wrong operand type for
//! the set operations and removing from an empty collection.

/// Represents errors that can occur when operating on a collection.
///
/// # Examples
///
/// ```rust
/// use value_collection::prelude::*;
///
/// let mut collection = Collection::new();
/// let error = collection.pop().unwrap_err();
/// assert_eq!(error, CollectionError::Underflow { operation: "pop" });
/// assert_eq!(format!("{error}"), "pop: cannot remove a value from an empty collection");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The operand passed to a set operation is neither a sequence nor a collection.
    TypeMismatch {
        /// The operation that rejected the operand.
        operation: &'static str,
        /// The type the operation accepts.
        expected: &'static str,
        /// The type name of the rejected operand.
        found: &'static str,
    },
    /// A value was removed from an empty collection.
    Underflow {
        /// The operation that found the collection empty.
        operation: &'static str,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch {
                operation,
                expected,
                found,
            } => write!(
                formatter,
                "{operation}: expected {expected}, found {found}"
            ),
            Self::Underflow { operation } => write!(
                formatter,
                "{operation}: cannot remove a value from an empty collection"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}

/// Result alias used by fallible collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
