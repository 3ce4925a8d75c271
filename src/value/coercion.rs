//! The coercion table behind equality and ordering of mixed values.
//!
//! Three equalities and one ordering are defined here:
//!
//! | Function       | Meaning                                                           |
//! |----------------|-------------------------------------------------------------------|
//! | [`strict_eq`]  | same variant and value; arrays pairwise in order; objects by instance |
//! | [`value_eq`]   | like `strict_eq`, but objects compare by class and field values   |
//! | [`loose_eq`]   | equal under [`native_cmp`] coercion                               |
//! | [`native_cmp`] | the coercing three-way comparison below                            |
//!
//! # Native Ordering
//!
//! Rules are tried top to bottom; the first matching row decides.
//!
//! | Left            | Right           | Rule                                                       |
//! |-----------------|-----------------|------------------------------------------------------------|
//! | null            | null            | equal                                                      |
//! | null            | string          | null becomes `""`, then string rule                        |
//! | bool or null    | anything        | both sides converted with [`Value::to_bool`], `false < true` |
//! | object          | object          | same instance: equal; same class: field by field; else incomparable |
//! | array           | array           | shorter is less; then key by key, missing key is incomparable |
//! | object          | anything        | object is greater                                          |
//! | array           | anything        | array is greater                                           |
//! | number          | number          | numeric (`NaN` is incomparable)                            |
//! | string          | string          | numeric if both are numeric strings, else bytewise         |
//! | number          | string          | numeric if the string is numeric, else the number's text form bytewise |
//!
//! Every row is applied symmetrically. `None` means incomparable: the
//! comparators treat it as "not greater".

use std::borrow::Cow;
use std::cmp::Ordering;

use super::{Array, Object, Value};

/// Returns `true` if `left` and `right` are the same variant with the same
/// value, with no coercion.
///
/// Arrays must hold identical pairs in the same order; objects must be the
/// same instance.
#[inline]
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    left == right
}

/// Structural equality used by membership tests.
///
/// Primitives compare strictly; arrays compare pairwise in order; objects
/// compare by class and field values (recursively with `value_eq`), not by
/// instance.
///
/// # Examples
///
/// ```rust
/// use value_collection::value::coercion::value_eq;
/// use value_collection::{Object, Value};
///
/// let first = Value::object(Object::new("Sample").with_field("a", "1"));
/// let second = Value::object(Object::new("Sample").with_field("a", "1"));
/// assert!(value_eq(&first, &second));
/// assert!(!value_eq(&Value::from(1), &Value::from("1")));
/// ```
#[must_use]
pub fn value_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left.iter().zip(right.iter()).all(
                    |((left_key, left_value), (right_key, right_value))| {
                        left_key == right_key && value_eq(left_value, right_value)
                    },
                )
        }
        (Value::Object(left), Value::Object(right)) => {
            left.same_instance(right)
                || (left.class() == right.class()
                    && left.field_count() == right.field_count()
                    && left.fields().zip(right.fields()).all(
                        |((left_name, left_value), (right_name, right_value))| {
                            left_name == right_name && value_eq(left_value, right_value)
                        },
                    ))
        }
        _ => strict_eq(left, right),
    }
}

/// Loose equality: `true` when [`native_cmp`] finds the values equal.
///
/// Two objects are loosely equal when they are of the same class and their
/// fields are pairwise loosely equal.
///
/// # Examples
///
/// ```rust
/// use value_collection::value::coercion::loose_eq;
/// use value_collection::Value;
///
/// assert!(loose_eq(&Value::from(1), &Value::from("1")));
/// assert!(loose_eq(&Value::from(1), &Value::from(1.0)));
/// assert!(loose_eq(&Value::Null, &Value::from(false)));
/// assert!(!loose_eq(&Value::Null, &Value::from("0")));
/// ```
#[inline]
#[must_use]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    native_cmp(left, right) == Some(Ordering::Equal)
}

/// Coercing three-way comparison, following the table in the module docs.
///
/// Returns `None` when the two values are incomparable.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use value_collection::value::coercion::native_cmp;
/// use value_collection::Value;
///
/// assert_eq!(native_cmp(&Value::from("10"), &Value::from("9")), Some(Ordering::Greater));
/// assert_eq!(native_cmp(&Value::from("a"), &Value::from("b")), Some(Ordering::Less));
/// assert_eq!(native_cmp(&Value::from(f64::NAN), &Value::from(1)), None);
/// ```
#[must_use]
pub fn native_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Null, Value::String(text)) => Some(compare_strings("", text)),
        (Value::String(text), Value::Null) => Some(compare_strings(text, "")),
        (Value::Null | Value::Bool(_), _) | (_, Value::Null | Value::Bool(_)) => {
            Some(left.to_bool().cmp(&right.to_bool()))
        }
        (Value::Object(left), Value::Object(right)) => {
            if left.same_instance(right) {
                Some(Ordering::Equal)
            } else {
                compare_objects(left, right)
            }
        }
        (Value::Array(left), Value::Array(right)) => compare_arrays(left, right),
        (Value::Object(_) | Value::Array(_), _) => Some(Ordering::Greater),
        (_, Value::Object(_) | Value::Array(_)) => Some(Ordering::Less),
        (Value::String(left), Value::String(right)) => Some(compare_strings(left, right)),
        (Value::String(text), number) => {
            let number = Number::of(number)?;
            match parse_numeric(text) {
                Some(parsed) => parsed.partial_cmp(&number),
                None => Some(text.as_bytes().cmp(number.text_form().as_bytes())),
            }
        }
        (number, Value::String(text)) => {
            let number = Number::of(number)?;
            match parse_numeric(text) {
                Some(parsed) => number.partial_cmp(&parsed),
                None => Some(number.text_form().as_bytes().cmp(text.as_bytes())),
            }
        }
        (left, right) => Number::of(left)?.partial_cmp(&Number::of(right)?),
    }
}

fn compare_strings(left: &str, right: &str) -> Ordering {
    match (parse_numeric(left), parse_numeric(right)) {
        (Some(left_number), Some(right_number)) => left_number
            .partial_cmp(&right_number)
            .unwrap_or_else(|| left.as_bytes().cmp(right.as_bytes())),
        _ => left.as_bytes().cmp(right.as_bytes()),
    }
}

fn compare_arrays(left: &Array, right: &Array) -> Option<Ordering> {
    match left.len().cmp(&right.len()) {
        Ordering::Equal => {}
        unequal => return Some(unequal),
    }
    for (key, left_value) in left {
        let right_value = right.get(key)?;
        match native_cmp(left_value, right_value)? {
            Ordering::Equal => {}
            unequal => return Some(unequal),
        }
    }
    Some(Ordering::Equal)
}

fn compare_objects(left: &Object, right: &Object) -> Option<Ordering> {
    if left.class() != right.class() {
        return None;
    }
    match left.field_count().cmp(&right.field_count()) {
        Ordering::Equal => {}
        unequal => return Some(unequal),
    }
    for (name, left_value) in left.fields() {
        let right_value = right.field(name)?;
        match native_cmp(left_value, right_value)? {
            Ordering::Equal => {}
            unequal => return Some(unequal),
        }
    }
    Some(Ordering::Equal)
}

// =============================================================================
// Numbers
// =============================================================================

/// A numeric operand after coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    const fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Int(number) => Some(Self::Int(*number)),
            Value::Float(number) => Some(Self::Float(*number)),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    const fn as_float(self) -> f64 {
        match self {
            Self::Int(number) => number as f64,
            Self::Float(number) => number,
        }
    }

    /// The text a number is compared as against a non-numeric string.
    fn text_form(self) -> Cow<'static, str> {
        match self {
            Self::Int(number) => Cow::Owned(number.to_string()),
            Self::Float(number) if number.is_nan() => Cow::Borrowed("NAN"),
            Self::Float(number) if number.is_infinite() => {
                Cow::Borrowed(if number > 0.0 { "INF" } else { "-INF" })
            }
            Self::Float(number) => Cow::Owned(number.to_string()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => Some(left.cmp(right)),
            _ => self.as_float().partial_cmp(&other.as_float()),
        }
    }
}

/// Parses a numeric string.
///
/// Accepts surrounding whitespace, an optional sign, digits with an optional
/// fractional part (`"1."`, `".5"`) and an optional exponent. Hexadecimal,
/// `inf` and `nan` spellings are not numeric.
pub(crate) fn parse_numeric(text: &str) -> Option<Number> {
    let trimmed = text.trim_matches([' ', '\t', '\n', '\r', '\u{0b}', '\u{0c}']);
    if !is_numeric_literal(trimmed.as_bytes()) {
        return None;
    }
    let is_integral = !trimmed.contains(['.', 'e', 'E']);
    if is_integral && let Ok(number) = trimmed.parse::<i64>() {
        return Some(Number::Int(number));
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

fn is_numeric_literal(bytes: &[u8]) -> bool {
    let mut position = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        position += 1;
    }

    let integer_digits = count_digits(&bytes[position..]);
    position += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(position) == Some(&b'.') {
        position += 1;
        fraction_digits = count_digits(&bytes[position..]);
        position += fraction_digits;
    }
    if integer_digits + fraction_digits == 0 {
        return false;
    }

    if matches!(bytes.get(position), Some(b'e' | b'E')) {
        position += 1;
        if matches!(bytes.get(position), Some(b'+' | b'-')) {
            position += 1;
        }
        let exponent_digits = count_digits(&bytes[position..]);
        if exponent_digits == 0 {
            return false;
        }
        position += exponent_digits;
    }

    position == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
