//! Value and instance comparators.
//!
//! Two comparison strategies over mixed values are provided, usable
//! standalone or injected into set operations and sorting:
//!
//! - [`compare_by_value`] ([`ByValue`]): objects match when they are of the
//!   same class with loosely equal fields; primitives match only when
//!   identical.
//! - [`compare_by_instance`] ([`ByInstance`]): objects match only when they
//!   are the same instance.
//!
//! Both are total over any pair of values and never fail, but neither is a
//! strict total order once objects and primitives are mixed: callers must
//! not assume transitivity.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use value_collection::comparison::{compare_by_instance, compare_by_value};
//! use value_collection::{Object, Value};
//!
//! let first = Value::object(Object::new("TypeA").with_field("value", "same"));
//! let second = Value::object(Object::new("TypeA").with_field("value", "same"));
//!
//! assert_eq!(compare_by_value(&first, &second), Ordering::Equal);
//! assert_ne!(compare_by_instance(&first, &second), Ordering::Equal);
//! ```

use std::cmp::Ordering;

use crate::Value;
use crate::value::coercion::{loose_eq, native_cmp, strict_eq};

/// Compares two values, matching objects by their field values.
///
/// Rules, in order:
///
/// 1. If exactly one side is an object, the object sorts after.
/// 2. If both are objects: `Equal` when loosely equal (same class, loosely
///    equal fields), otherwise `Less`. Two distinct non-equal objects are
///    `Less` in *both* argument orders.
/// 3. If either side is a boolean, both sides are converted to booleans
///    and compared (`false < true`).
/// 4. Strictly identical values are `Equal`.
/// 5. `Greater` if `a > b` under the native coercion table, else `Less`.
///
/// Note that rule 4 only fires for identical values: `1` and `"1"` are
/// loosely equal but compare as `Less` in both orders.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use value_collection::comparison::compare_by_value;
/// use value_collection::Value;
///
/// assert_eq!(compare_by_value(&Value::from("a"), &Value::from("b")), Ordering::Less);
/// assert_eq!(compare_by_value(&Value::from(true), &Value::from("x")), Ordering::Equal);
/// assert_eq!(compare_by_value(&Value::from(1), &Value::from("1")), Ordering::Less);
/// ```
#[must_use]
pub fn compare_by_value(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Object(_), Value::Object(_)) => {
            if loose_eq(a, b) {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        }
        (Value::Object(_), _) => Ordering::Greater,
        (_, Value::Object(_)) => Ordering::Less,
        (Value::Bool(_), _) | (_, Value::Bool(_)) => a.to_bool().cmp(&b.to_bool()),
        _ if strict_eq(a, b) => Ordering::Equal,
        _ => greater_or_less(a, b),
    }
}

/// Compares two values, matching objects only by instance.
///
/// Rules, in order:
///
/// 1. Strictly identical values (the same instance, or identical
///    primitives) are `Equal`.
/// 2. Two distinct objects are ordered by their identity token; they are
///    never `Equal`, even when every field matches.
/// 3. If exactly one side is an object, the object sorts after.
/// 4. `Greater` if `a > b` under the native coercion table, else `Less`.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use value_collection::comparison::compare_by_instance;
/// use value_collection::{Object, ObjectRef, Value};
///
/// let instance = ObjectRef::new(Object::new("TypeA"));
/// let same = Value::from(&instance);
/// assert_eq!(compare_by_instance(&same, &Value::from(&instance)), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_by_instance(a: &Value, b: &Value) -> Ordering {
    if strict_eq(a, b) {
        return Ordering::Equal;
    }
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => {
            if left.id() > right.id() {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Value::Object(_), _) => Ordering::Greater,
        (_, Value::Object(_)) => Ordering::Less,
        _ => greater_or_less(a, b),
    }
}

fn greater_or_less(a: &Value, b: &Value) -> Ordering {
    match native_cmp(a, b) {
        Some(Ordering::Greater) => Ordering::Greater,
        _ => Ordering::Less,
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// A comparison strategy used by set operations and sorting.
///
/// `compare(a, b) == Ordering::Equal` is the membership test used by
/// `diff` and `intersect`. Implementations must be pure: they must not
/// mutate their inputs and must return the same result for the same inputs.
///
/// Any `Fn(&Value, &Value) -> Ordering` is a strategy.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use value_collection::comparison::{ByValue, ComparisonStrategy};
/// use value_collection::Value;
///
/// let reverse = |a: &Value, b: &Value| ByValue.compare(b, a);
/// assert_eq!(reverse.compare(&Value::from(1), &Value::from(2)), Ordering::Greater);
/// ```
pub trait ComparisonStrategy {
    /// Compares `a` with `b`.
    fn compare(&self, a: &Value, b: &Value) -> Ordering;

    /// A short name for log output.
    fn name(&self) -> &'static str {
        "custom"
    }

    /// Returns `true` if `a` and `b` compare as `Equal`.
    #[inline]
    fn matches(&self, a: &Value, b: &Value) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<F> ComparisonStrategy for F
where
    F: Fn(&Value, &Value) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        self(a, b)
    }
}

/// The [`compare_by_value`] strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByValue;

impl ComparisonStrategy for ByValue {
    #[inline]
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        compare_by_value(a, b)
    }

    fn name(&self) -> &'static str {
        "by_value"
    }
}

/// The [`compare_by_instance`] strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByInstance;

impl ComparisonStrategy for ByInstance {
    #[inline]
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        compare_by_instance(a, b)
    }

    fn name(&self) -> &'static str {
        "by_instance"
    }
}
