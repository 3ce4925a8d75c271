//! Dynamic values stored in collections.
//!
//! A [`Value`] is one of: null, boolean, integer, float, text, a nested
//! ordered keyed [`Array`], or a shared [`ObjectRef`]. A single collection
//! may hold any mix of them.
//!
//! `PartialEq` on `Value` is *strict identity*: same variant and same
//! value with no coercion, arrays pairwise in order, objects by instance.
//! Loose equality, structural equality and the native ordering used by the
//! comparators live in [`coercion`].
//!
//! # Examples
//!
//! ```rust
//! use value_collection::Value;
//!
//! assert_eq!(Value::from(1), Value::Int(1));
//! assert_ne!(Value::from(1), Value::from(1.0));
//! assert_ne!(Value::from(1), Value::from("1"));
//!
//! assert!(Value::from("3.4").is_numeric());
//! assert!(!Value::from(true).is_numeric());
//! ```

pub mod coercion;
mod object;

#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;

pub use object::{Object, ObjectId, ObjectRef};
pub(crate) use object::ReferenceCounter;

use crate::Entries;

/// A nested ordered keyed container of values.
pub type Array = Entries<Value>;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
    /// Text.
    String(String),
    /// A nested ordered keyed container.
    Array(Array),
    /// A shared class instance.
    Object(ObjectRef),
}

impl Value {
    /// Builds a list array value from `values`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::Value;
    ///
    /// let array = Value::array(["a", "b"]);
    /// assert_eq!(array.as_array().map(|entries| entries.len()), Some(2));
    /// ```
    #[must_use]
    pub fn array<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Array(values.into_iter().map(Into::into).collect())
    }

    /// Wraps `object` in a new instance handle.
    #[must_use]
    pub fn object(object: Object) -> Self {
        Self::Object(ObjectRef::new(object))
    }

    /// Returns the name of the variant, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Value::Bool`].
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns `true` for [`Value::Object`].
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` for [`Value::Array`].
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns `true` for integers, floats and numeric strings.
    ///
    /// Numeric strings may carry leading and trailing whitespace, a sign, a
    /// fractional part and an exponent (`" 1"`, `"-2.5"`, `"1e3"`).
    /// Booleans and null are never numeric.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Int(_) | Self::Float(_) => true,
            Self::String(text) => coercion::parse_numeric(text).is_some(),
            Self::Null | Self::Bool(_) | Self::Array(_) | Self::Object(_) => false,
        }
    }

    /// Converts the value to a boolean.
    ///
    /// `null`, `false`, `0`, `0.0`, `""`, `"0"` and the empty array are
    /// false; everything else, including every object, is true.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => *number != 0,
            Self::Float(number) => *number != 0.0,
            Self::String(text) => !(text.is_empty() || text == "0"),
            Self::Array(entries) => !entries.is_empty(),
            Self::Object(_) => true,
        }
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`Value::Int`].
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the float, if this is a [`Value::Float`].
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text, if this is a [`Value::String`].
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the nested entries, if this is a [`Value::Array`].
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the object handle, if this is a [`Value::Object`].
    #[inline]
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    #[inline]
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(number: u32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(number: f32) -> Self {
        Self::Float(f64::from(number))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Array> for Value {
    #[inline]
    fn from(entries: Array) -> Self {
        Self::Array(entries)
    }
}

impl From<Vec<Self>> for Value {
    #[inline]
    fn from(values: Vec<Self>) -> Self {
        Self::Array(Entries::from_values(values))
    }
}

impl From<ObjectRef> for Value {
    #[inline]
    fn from(object: ObjectRef) -> Self {
        Self::Object(object)
    }
}

impl From<&ObjectRef> for Value {
    #[inline]
    fn from(object: &ObjectRef) -> Self {
        Self::Object(object.clone())
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(object: Object) -> Self {
        Self::object(object)
    }
}

impl From<&Self> for Value {
    #[inline]
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::String(text) => write!(formatter, "{text:?}"),
            Self::Array(entries) => {
                if entries.is_list() {
                    formatter.write_str("[")?;
                    for (position, value) in entries.values().enumerate() {
                        if position > 0 {
                            formatter.write_str(", ")?;
                        }
                        write!(formatter, "{value}")?;
                    }
                    formatter.write_str("]")
                } else {
                    formatter.write_str("{")?;
                    for (position, (key, value)) in entries.iter().enumerate() {
                        if position > 0 {
                            formatter.write_str(", ")?;
                        }
                        write!(formatter, "{key}: {value}")?;
                    }
                    formatter.write_str("}")
                }
            }
            Self::Object(object) => {
                write!(formatter, "{} {{", object.class())?;
                for (position, (name, value)) in object.fields().enumerate() {
                    if position > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, " {name}: {value}")?;
                }
                formatter.write_str(" }")
            }
        }
    }
}
