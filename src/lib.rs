//! # value-collection
//!
//! Ordered keyed collections of dynamic values, with composable
//! capabilities, value and instance comparators, and set algebra.
//!
//! ## Overview
//!
//! - **Value model**: [`Value`] (null, bool, int, float, text, nested
//!   [`Array`], shared [`Object`]), [`Key`] and the insertion-ordered
//!   [`Entries`] store, with an explicit loose/strict coercion table in
//!   [`value::coercion`].
//! - **Comparators**: [`compare_by_value`](comparison::compare_by_value) and
//!   [`compare_by_instance`](comparison::compare_by_instance), usable alone
//!   or as [`ComparisonStrategy`] values.
//! - **Collections**: the [`Container`] trait and its base operations,
//!   optional capabilities ([`Sequence`], [`Indexed`], [`ArrayAccess`],
//!   [`Iterable`], `JsonSerializable`) and concrete types declared with
//!   [`define_collection!`].
//! - **Set algebra and sorting**: [`SetAlgebra`] (contains, diff, intersect,
//!   merge, group by) and [`Sortable`], returning the caller's own
//!   collection type.
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for values and entries,
//!   and the `JsonSerializable` capability
//! - `arc`: share objects through `Arc` so values are `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use value_collection::prelude::*;
//!
//! let same = ObjectRef::new(Object::new("TypeA").with_field("value", "same"));
//! let twin = ObjectRef::new(Object::new("TypeA").with_field("value", "same"));
//! let other = ObjectRef::new(Object::new("TypeA").with_field("value", "other"));
//!
//! let collection = Collection::from_values([Value::from(&same), Value::from(&other)]);
//!
//! let by_value = collection.intersect(vec![Value::from(&twin)]).unwrap();
//! let by_instance = collection.intersect_by(vec![Value::from(&twin)], ByInstance).unwrap();
//!
//! assert_eq!(by_value.len(), 1);
//! assert!(by_instance.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model, every collection type, the capability and
/// operation traits, and the comparators.
///
/// # Usage
///
/// ```rust
/// use value_collection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::*;
    pub use crate::collections::*;
    pub use crate::comparison::{
        ByInstance, ByValue, ComparisonStrategy, compare_by_instance, compare_by_value,
    };
    pub use crate::container::{Container, KeyMode, Validator};
    pub use crate::error::CollectionError;
    pub use crate::grouped::GroupedCollection;
    pub use crate::set_algebra::{Operand, SetAlgebra};
    pub use crate::sort::Sortable;
    pub use crate::{Array, Entries, Key, Object, ObjectRef, Value};
}

pub mod capability;
pub mod collections;
pub mod comparison;
pub mod container;
mod entries;
mod error;
pub mod grouped;
mod key;
pub mod set_algebra;
pub mod sort;
pub mod value;

pub use capability::*;
pub use collections::*;
pub use comparison::{ByInstance, ByValue, ComparisonStrategy};
pub use container::{Container, KeyMode, Validator};
pub use entries::{Entries, EntriesIntoIter, EntriesIter};
pub use error::{CollectionError, Result};
pub use grouped::GroupedCollection;
pub use key::Key;
pub use set_algebra::{Operand, SetAlgebra};
pub use sort::Sortable;
pub use value::{Array, Object, ObjectId, ObjectRef, Value};
