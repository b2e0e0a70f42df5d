//! Optional type - zero or one value.
//!
//! This module provides the `Optional<T>` type. Its contents are private: a value
//! is put in with a named constructor and taken out with [`Optional::handle`],
//! which requires a function for the present case and one for the absent case.
//! Every other accessor in the crate is written in terms of `handle`.
//!
//! # Examples
//!
//! ```rust
//! use options::Optional;
//!
//! let present = Optional::present(42);
//! let absent: Optional<i32> = Optional::absent();
//!
//! assert_eq!(present.handle(|value| value * 2, || 0), 84);
//! assert_eq!(absent.handle(|value| value * 2, || 0), 0);
//!
//! // Null-equivalent values collapse to absent
//! let collapsed: Optional<i32> = Optional::from_nullable(None);
//! assert_eq!(collapsed, Optional::absent());
//! ```

use std::fmt;

use super::nullable::Nullable;
use super::unit::Unit;

/// A container holding zero or one value of type `T`.
///
/// Equality, hashing and ordering are structural: two optionals are equal when
/// both are absent, or both are present with equal payloads. Absent orders
/// before every present value.
///
/// # Type Parameters
///
/// * `T` - The type of the value that may be present
///
/// # Examples
///
/// ```rust
/// use options::Optional;
///
/// let length = Optional::present("hello").handle(|text| text.len(), || 0);
/// assert_eq!(length, 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an optional holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// assert!(Optional::present(5).is_present());
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an optional holding no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// assert!(Optional::<i32>::absent().is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self { value: None }
    }

    /// Creates an optional from a value that may be null-equivalent.
    ///
    /// A null-equivalent value produces the absent optional, whatever the
    /// caller intended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some(3)), Optional::present(3));
    /// assert_eq!(Optional::from_nullable(None::<i32>), Optional::absent());
    /// ```
    #[inline]
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        Self {
            value: value.into_value(),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the optional by calling `if_present` with the value, or
    /// `if_absent` when there is none.
    ///
    /// Exactly one of the two functions is called, exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// let described = Optional::present(3).handle(|n| format!("got {n}"), String::new);
    /// assert_eq!(described, "got 3");
    /// ```
    #[inline]
    pub fn handle<R, P, A>(self, if_present: P, if_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self.value {
            Some(value) => if_present(value),
            None => if_absent(),
        }
    }

    /// Eliminates the optional by reference, leaving it intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// let name = Optional::present("ferris".to_string());
    /// assert_eq!(name.handle_ref(|text| text.len(), || 0), 6);
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub fn handle_ref<'a, R, P, A>(&'a self, if_present: P, if_absent: A) -> R
    where
        P: FnOnce(&'a T) -> R,
        A: FnOnce() -> R,
    {
        match &self.value {
            Some(value) => if_present(value),
            None => if_absent(),
        }
    }

    /// Converts `&Optional<T>` into `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }
}

impl Optional<Unit> {
    /// Returns a present [`Unit`] when `condition` holds, otherwise absent.
    ///
    /// This is the guard used by comprehension syntax: binding through a guard
    /// continues only when the condition is true.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::{Optional, Unit};
    ///
    /// assert_eq!(Optional::guard(true), Optional::present(Unit));
    /// assert_eq!(Optional::guard(false), Optional::absent());
    /// ```
    #[inline]
    pub const fn guard(condition: bool) -> Self {
        if condition {
            Self::present(Unit)
        } else {
            Self::absent()
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Present").field(value).finish(),
            None => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// `Some(v)` becomes present `v`; `None` becomes absent.
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Present `v` becomes `Some(v)`; absent becomes `None`.
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.handle(Some, || None)
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.value {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
