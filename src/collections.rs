//! Concrete collection types and the macro that declares them.
//!
//! Every type here is a [`Container`](crate::Container) of
//! [`Value`](crate::Value)s, so all of them get the base operations,
//! [`SetAlgebra`](crate::SetAlgebra) and [`Sortable`](crate::Sortable). They
//! differ in key mode and in the capabilities they declare:
//!
//! | Type | Key mode | Capabilities |
//! |------|----------|--------------|
//! | [`Collection`] | sequence | `Sequence` |
//! | [`SequenceCollection`] | sequence | `Sequence` |
//! | [`IndexedCollection`] | keyed | `Sequence`, `Indexed` |
//! | [`ArrayCollection`] | keyed | `Sequence`, `Indexed`, `ArrayAccess` |
//! | [`IterableCollection`] | keyed | `Sequence`, `Indexed`, `Iterable` |
//! | `JsonCollection` | sequence | `Sequence`, `JsonSerializable` |
//! | [`TypedCollection`] | sequence | `Sequence`, validator required |

/// Declares a collection type with a key mode and a set of capabilities.
///
/// The generated struct holds its entries, an iteration cursor and an
/// optional [`Validator`](crate::Validator). It implements
/// [`Container`](crate::Container), `Clone`, `Debug`, `PartialEq` (by
/// entries), `IntoIterator` for references, and `From<&Self>` for
/// [`Operand`](crate::Operand), plus one trait impl per listed capability.
///
/// # Syntax
///
/// ```text
/// define_collection! {
///     /// Optional doc comment
///     pub struct Name: sequence { Sequence, Indexed }
/// }
/// ```
///
/// The key mode is `sequence` or `keyed`. Capabilities are any of
/// `Sequence`, `Indexed`, `ArrayAccess`, `Iterable` and `JsonSerializable`.
/// Appending `+ typed` to the key mode drops the unvalidated constructors
/// (`new`, `from_values`, `Default`, `FromIterator`), so every instance must
/// be built with `with_validator` or `instance_of`.
///
/// # Examples
///
/// ```rust
/// use value_collection::define_collection;
/// use value_collection::prelude::*;
///
/// define_collection! {
///     /// A queue of pending jobs.
///     pub struct JobQueue: sequence { Sequence }
/// }
///
/// let mut queue = JobQueue::new();
/// queue.push("build").push("test");
/// assert_eq!(queue.shift(), Ok(Value::from("build")));
/// ```
///
/// ```rust
/// use value_collection::define_collection;
/// use value_collection::prelude::*;
///
/// define_collection! {
///     pub struct Points: sequence + typed { Sequence }
/// }
///
/// let points = Points::instance_of("Point", [
///     Value::object(Object::new("Point")),
///     Value::from("not a point"),
/// ]);
/// assert_eq!(points.len(), 1);
/// ```
#[macro_export]
macro_rules! define_collection {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $mode:ident $(+ $typed:ident)? {
            $($capability:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name {
            entries: $crate::Array,
            // Only read by the `Iterable` capability.
            #[allow(dead_code)]
            cursor: usize,
            validator: ::core::option::Option<$crate::Validator>,
        }

        impl $name {
            /// Creates a collection that only admits values accepted by
            /// `validator`, filtering `values` through it.
            pub fn with_validator<I>(validator: $crate::Validator, values: I) -> Self
            where
                I: ::core::iter::IntoIterator,
                I::Item: ::core::convert::Into<$crate::Value>,
            {
                let mut collection = Self {
                    entries: $crate::Array::new(),
                    cursor: 0,
                    validator: ::core::option::Option::Some(validator),
                };
                for value in values {
                    $crate::Container::append_admitted(&mut collection, value.into());
                }
                collection
            }

            /// Creates a collection that only admits objects of class `class`.
            pub fn instance_of<I>(class: impl ::core::convert::Into<::std::string::String>, values: I) -> Self
            where
                I: ::core::iter::IntoIterator,
                I::Item: ::core::convert::Into<$crate::Value>,
            {
                Self::with_validator($crate::Validator::instance_of(class), values)
            }

            /// Returns the insertion filter, if any.
            #[inline]
            #[must_use]
            pub const fn validator(&self) -> ::core::option::Option<&$crate::Validator> {
                self.validator.as_ref()
            }
        }

        impl $crate::Container for $name {
            type Item = $crate::Value;

            const KEY_MODE: $crate::KeyMode = $crate::define_collection!(@mode $mode);

            #[inline]
            fn entries(&self) -> &$crate::Array {
                &self.entries
            }

            #[inline]
            fn entries_mut(&mut self) -> &mut $crate::Array {
                &mut self.entries
            }

            fn derive(&self, entries: $crate::Array) -> Self {
                Self {
                    entries,
                    cursor: 0,
                    validator: self.validator.clone(),
                }
            }

            fn admits(&self, item: &$crate::Value) -> bool {
                self.validator
                    .as_ref()
                    .is_none_or(|validator| validator.check(stringify!($name), item))
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.entries == other.entries
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("entries", &self.entries)
                    .field("validator", &self.validator)
                    .finish()
            }
        }

        impl<'a> ::core::iter::IntoIterator for &'a $name {
            type Item = (&'a $crate::Key, &'a $crate::Value);
            type IntoIter = $crate::EntriesIter<'a, $crate::Value>;

            fn into_iter(self) -> Self::IntoIter {
                self.entries.iter()
            }
        }

        impl<'a> ::core::convert::From<&'a $name> for $crate::Operand<'a> {
            fn from(collection: &'a $name) -> Self {
                $crate::Operand::borrowed(&collection.entries)
            }
        }

        $crate::define_collection!(@constructors $name $($typed)?);

        $(
            $crate::define_collection!(@capability $name $capability);
        )*
    };

    (@mode sequence) => {
        $crate::KeyMode::Sequence
    };
    (@mode keyed) => {
        $crate::KeyMode::Keyed
    };

    (@constructors $name:ident typed) => {};
    (@constructors $name:ident) => {
        impl $name {
            /// Creates an empty collection.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates a collection holding `values` under keys `0..n`.
            pub fn from_values<I>(values: I) -> Self
            where
                I: ::core::iter::IntoIterator,
                I::Item: ::core::convert::Into<$crate::Value>,
            {
                values.into_iter().collect()
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::from($crate::Array::new())
            }
        }

        impl<V: ::core::convert::Into<$crate::Value>> ::core::iter::FromIterator<V> for $name {
            fn from_iter<I: ::core::iter::IntoIterator<Item = V>>(values: I) -> Self {
                Self::from(values.into_iter().map(::core::convert::Into::into).collect::<$crate::Array>())
            }
        }

        impl ::core::convert::From<$crate::Array> for $name {
            fn from(entries: $crate::Array) -> Self {
                Self {
                    entries,
                    cursor: 0,
                    validator: ::core::option::Option::None,
                }
            }
        }
    };

    (@capability $name:ident Sequence) => {
        impl $crate::Sequence for $name {}
    };
    (@capability $name:ident Indexed) => {
        impl $crate::Indexed for $name {}
    };
    (@capability $name:ident ArrayAccess) => {
        impl $crate::ArrayAccess for $name {}

        impl<K: ::core::convert::Into<$crate::Key>> ::core::ops::Index<K> for $name {
            type Output = $crate::Value;

            fn index(&self, key: K) -> &$crate::Value {
                let key = key.into();
                match self.entries.get(&key) {
                    ::core::option::Option::Some(value) => value,
                    ::core::option::Option::None => panic!("no entry found for key {key}"),
                }
            }
        }

        impl<K: ::core::convert::Into<$crate::Key>> ::core::ops::IndexMut<K> for $name {
            fn index_mut(&mut self, key: K) -> &mut $crate::Value {
                let key = key.into();
                match self.entries.get_mut(&key) {
                    ::core::option::Option::Some(value) => value,
                    ::core::option::Option::None => panic!("no entry found for key {key}"),
                }
            }
        }
    };
    (@capability $name:ident Iterable) => {
        impl $crate::Iterable for $name {
            #[inline]
            fn cursor(&self) -> usize {
                self.cursor
            }

            #[inline]
            fn cursor_mut(&mut self) -> &mut usize {
                &mut self.cursor
            }
        }
    };
    (@capability $name:ident JsonSerializable) => {
        impl $crate::JsonSerializable for $name {}
    };
}

define_collection! {
    /// The general-purpose collection: an ordered sequence of mixed values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let mut collection = Collection::from_values([1, 2, 3]);
    /// collection.push(4);
    /// let total = collection.reduce(|sum, value| sum + value.as_int().unwrap_or(0), 0);
    /// assert_eq!(total, 10);
    /// ```
    pub struct Collection: sequence { Sequence }
}

define_collection! {
    /// A collection used as a stack or queue.
    pub struct SequenceCollection: sequence { Sequence }
}

define_collection! {
    /// A collection with keyed access. Sorting keeps keys attached.
    pub struct IndexedCollection: keyed { Sequence, Indexed }
}

define_collection! {
    /// A collection with bracket-style access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let mut collection = ArrayCollection::new();
    /// collection.offset_set(Some(Key::from("name")), "first");
    /// collection["name"] = Value::from("second");
    /// assert_eq!(collection["name"], Value::from("second"));
    /// ```
    pub struct ArrayCollection: keyed { Sequence, Indexed, ArrayAccess }
}

define_collection! {
    /// A collection with an internal cursor.
    pub struct IterableCollection: keyed { Sequence, Indexed, Iterable }
}

#[cfg(feature = "serde")]
define_collection! {
    /// A collection that encodes to JSON.
    pub struct JsonCollection: sequence { Sequence, JsonSerializable }
}

define_collection! {
    /// A collection that requires a validator at construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_collection::prelude::*;
    ///
    /// let mut collection = TypedCollection::instance_of("TypeA", [
    ///     Value::object(Object::new("TypeA")),
    ///     Value::object(Object::new("TypeB")),
    /// ]);
    /// collection.push(Object::new("TypeA")).push("text");
    /// assert_eq!(collection.len(), 2);
    /// ```
    pub struct TypedCollection: sequence + typed { Sequence }
}

static_assertions::assert_impl_all!(Collection: crate::Sequence, crate::SetAlgebra, crate::Sortable, Clone);
static_assertions::assert_not_impl_any!(Collection: crate::Indexed, crate::ArrayAccess, crate::Iterable);
static_assertions::assert_impl_all!(IndexedCollection: crate::Sequence, crate::Indexed);
static_assertions::assert_not_impl_any!(IndexedCollection: crate::ArrayAccess, crate::Iterable);
static_assertions::assert_impl_all!(ArrayCollection: crate::Indexed, crate::ArrayAccess, std::ops::Index<&'static str>);
static_assertions::assert_impl_all!(IterableCollection: crate::Indexed, crate::Iterable);
static_assertions::assert_not_impl_any!(TypedCollection: Default, crate::Indexed);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Collection: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Collection: Send, Sync);
