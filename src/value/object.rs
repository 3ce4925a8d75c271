//! Object values with a stable identity.
//!
//! An [`Object`] is a class name plus ordered public fields. Every object
//! receives an [`ObjectId`] when it is constructed; the id never changes and
//! is never reused within a process. [`ObjectRef`] is the shared handle
//! stored inside [`Value::Object`](crate::Value::Object): cloning the handle
//! shares the instance, constructing a new object creates a new instance even
//! when every field is equal.
//!
//! # Examples
//!
//! ```rust
//! use value_collection::{Object, ObjectRef};
//!
//! let first = ObjectRef::new(Object::new("TypeA").with_field("value", "same"));
//! let second = ObjectRef::new(Object::new("TypeA").with_field("value", "same"));
//!
//! assert!(first.same_instance(&first.clone()));
//! assert!(!first.same_instance(&second));
//! assert!(first.id() < second.id());
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Value;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, which makes
/// values `Send + Sync` at a slightly higher cost.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity token of an [`Object`].
///
/// Tokens are assigned in construction order and only compared with each
/// other; they carry no meaning beyond "which instance".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A class instance with ordered public fields.
///
/// Cloning an object produces a new instance with a fresh [`ObjectId`].
pub struct Object {
    class: String,
    fields: Vec<(String, Value)>,
    id: ObjectId,
}

impl Object {
    /// Creates an instance of `class` with no fields.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: Vec::new(),
            id: ObjectId::next(),
        }
    }

    /// Returns this object with `name` set to `value`.
    ///
    /// Setting an existing field replaces it in place.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Sets `name` to `value`, replacing an existing field in place.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns the class name.
    #[inline]
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the value of field `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of fields.
    #[inline]
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the identity token assigned at construction.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }
}

impl Clone for Object {
    fn clone(&self) -> Self {
        Self {
            class: self.class.clone(),
            fields: self.fields.clone(),
            id: ObjectId::next(),
        }
    }
}

/// A shared handle to an [`Object`].
///
/// `PartialEq` on handles is identity: two handles are equal only when they
/// point at the same instance.
#[derive(Clone)]
pub struct ObjectRef(ReferenceCounter<Object>);

impl ObjectRef {
    /// Wraps `object` in a new shared handle.
    #[must_use]
    pub fn new(object: Object) -> Self {
        Self(ReferenceCounter::new(object))
    }

    /// Returns `true` if both handles refer to the same instance.
    #[inline]
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if the instance is of class `class`.
    #[inline]
    #[must_use]
    pub fn is_instance_of(&self, class: &str) -> bool {
        self.0.class == class
    }
}

impl Deref for ObjectRef {
    type Target = Object;

    #[inline]
    fn deref(&self) -> &Object {
        &self.0
    }
}

impl From<Object> for ObjectRef {
    #[inline]
    fn from(object: Object) -> Self {
        Self::new(object)
    }
}

impl PartialEq for ObjectRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct(&self.class);
        for (name, value) in &self.fields {
            debug.field(name, value);
        }
        debug.finish()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}
