//! Optional collection capabilities.
//!
//! Each capability is an independent trait with default methods over
//! [`Container`](crate::Container). A concrete collection type opts into a
//! capability by implementing the trait, which `define_collection!` does for
//! the capabilities listed in its declaration.
//!
//! - [`Sequence`]: stack and queue operations (`push`, `pop`, `unshift`,
//!   `shift`)
//! - [`Indexed`]: keyed access (`get`, `set`, `has`, `remove`)
//! - [`ArrayAccess`]: bracket-style access where `Null` counts as absent, plus
//!   `collection[key]` through `std::ops::Index`
//! - [`Iterable`]: an internal cursor (`rewind`, `current`, `key`, `next`,
//!   `valid`)
//! - [`JsonSerializable`]: JSON encoding (requires the `serde` feature)
//!
//! # Examples
//!
//! ```rust
//! use value_collection::prelude::*;
//!
//! let mut collection = IndexedCollection::new();
//! collection.push(1).push(2);
//! collection.set("name", "value");
//!
//! assert_eq!(collection.get(1), Some(&Value::from(2)));
//! assert_eq!(collection.get("name"), Some(&Value::from("value")));
//! assert_eq!(collection.pop(), Ok(Value::from("value")));
//! ```

mod array_access;
mod indexed;
mod iterable;
#[cfg(feature = "serde")]
mod json;
mod sequence;

pub use array_access::ArrayAccess;
pub use indexed::Indexed;
pub use iterable::Iterable;
#[cfg(feature = "serde")]
pub use json::JsonSerializable;
pub use sequence::Sequence;
