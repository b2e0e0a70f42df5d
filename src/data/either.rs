//! Either type - exactly one of two values.
//!
//! This module provides the `Either<A, B>` type, which holds either a *first*
//! value of type `A` or a *second* value of type `B`. There is no empty state.
//! Like [`Optional`](super::Optional), its contents are reached through an
//! elimination operator, [`Either::handle`], that takes a function for each side.
//!
//! The first side is the one the combinators project (`map`, `bind`); a second
//! value passes through them unchanged.
//!
//! # Examples
//!
//! ```rust
//! use options::Either;
//!
//! let first: Either<i32, String> = Either::with_first(42);
//! let second: Either<i32, String> = Either::with_second("hello".to_string());
//!
//! let describe = |either: Either<i32, String>| {
//!     either.handle(|n| format!("Number: {n}"), |s| format!("String: {s}"))
//! };
//! assert_eq!(describe(first), "Number: 42");
//! assert_eq!(describe(second), "String: hello");
//! ```

use std::fmt;

use super::error::{EitherError, Side};
use super::nullable::Nullable;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Repr<A, B> {
    First(A),
    Second(B),
}

/// A value that is exactly one of a first `A` or a second `B`.
///
/// Equality requires the same active side and equal payloads on it, so for
/// `Either<T, T>` a first `v` never equals a second `v`.
///
/// # Type Parameters
///
/// * `A` - The type of the first value
/// * `B` - The type of the second value
///
/// # Examples
///
/// ```rust
/// use options::Either;
///
/// let first: Either<i32, i32> = Either::with_first(1);
/// let second: Either<i32, i32> = Either::with_second(1);
/// assert_ne!(first, second);
/// assert_eq!(first.swap(), second);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Either<A, B> {
    repr: Repr<A, B>,
}

impl<A, B> Either<A, B> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an either holding a first value.
    #[inline]
    pub const fn with_first(value: A) -> Self {
        Self {
            repr: Repr::First(value),
        }
    }

    /// Creates an either holding a second value.
    #[inline]
    pub const fn with_second(value: B) -> Self {
        Self {
            repr: Repr::Second(value),
        }
    }

    /// Creates an either from a condition, calling only the factory for the
    /// chosen side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Either;
    ///
    /// let either: Either<i32, &str> = Either::from_condition(false, || 1, || "two");
    /// assert_eq!(either, Either::with_second("two"));
    /// ```
    #[inline]
    pub fn from_condition<F, G>(is_first: bool, first: F, second: G) -> Self
    where
        F: FnOnce() -> A,
        G: FnOnce() -> B,
    {
        if is_first {
            Self::with_first(first())
        } else {
            Self::with_second(second())
        }
    }

    /// Creates an either holding a first value taken from a nullable payload.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::NullPayload`] if `value` is null-equivalent. An
    /// either always holds a genuine value on its active side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::data::{Either, EitherError, Side};
    ///
    /// let built: Result<Either<i32, String>, _> = Either::try_first_from_nullable(Some(1));
    /// assert_eq!(built, Ok(Either::with_first(1)));
    ///
    /// let rejected: Result<Either<i32, String>, _> = Either::try_first_from_nullable(None);
    /// assert_eq!(rejected, Err(EitherError::NullPayload { side: Side::First }));
    /// ```
    pub fn try_first_from_nullable<N>(value: N) -> Result<Self, EitherError>
    where
        N: Nullable<Value = A>,
    {
        value
            .into_value()
            .map(Self::with_first)
            .ok_or(EitherError::NullPayload { side: Side::First })
    }

    /// Creates an either holding a second value taken from a nullable payload.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::NullPayload`] if `value` is null-equivalent.
    pub fn try_second_from_nullable<N>(value: N) -> Result<Self, EitherError>
    where
        N: Nullable<Value = B>,
    {
        value
            .into_value()
            .map(Self::with_second)
            .ok_or(EitherError::NullPayload { side: Side::Second })
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the either by applying the function for the active side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Either;
    ///
    /// let either: Either<i32, String> = Either::with_first(42);
    /// assert_eq!(either.handle(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn handle<R, F, G>(self, if_first: F, if_second: G) -> R
    where
        F: FnOnce(A) -> R,
        G: FnOnce(B) -> R,
    {
        match self.repr {
            Repr::First(value) => if_first(value),
            Repr::Second(value) => if_second(value),
        }
    }

    /// Eliminates the either by reference, leaving it intact.
    #[inline]
    pub fn handle_ref<'a, R, F, G>(&'a self, if_first: F, if_second: G) -> R
    where
        F: FnOnce(&'a A) -> R,
        G: FnOnce(&'a B) -> R,
    {
        match &self.repr {
            Repr::First(value) => if_first(value),
            Repr::Second(value) => if_second(value),
        }
    }

    /// Converts `&Either<A, B>` into `Either<&A, &B>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&A, &B> {
        match &self.repr {
            Repr::First(value) => Either::with_first(value),
            Repr::Second(value) => Either::with_second(value),
        }
    }

    /// Returns the active side.
    #[inline]
    pub const fn side(&self) -> Side {
        match self.repr {
            Repr::First(_) => Side::First,
            Repr::Second(_) => Side::Second,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Either<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::First(value) => formatter.debug_tuple("First").field(value).finish(),
            Repr::Second(value) => formatter.debug_tuple("Second").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A, B> From<Result<A, B>> for Either<A, B> {
    /// `Ok(a)` becomes a first `a`, and `Err(b)` becomes a second `b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<i32, String> = ok.into();
    /// assert_eq!(either, Either::with_first(42));
    /// ```
    #[inline]
    fn from(result: Result<A, B>) -> Self {
        match result {
            Ok(value) => Self::with_first(value),
            Err(error) => Self::with_second(error),
        }
    }
}

impl<A, B> From<Either<A, B>> for Result<A, B> {
    /// A first `a` becomes `Ok(a)`, and a second `b` becomes `Err(b)`.
    #[inline]
    fn from(either: Either<A, B>) -> Self {
        either.handle(Ok, Err)
    }
}
