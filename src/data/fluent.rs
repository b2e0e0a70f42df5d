//! Two-step builders for [`Either`].
//!
//! Type inference cannot always determine both type arguments of an `Either`
//! from a single value. These builders fix one side (a value or a type) first
//! and name the other in a second call.
//!
//! # Examples
//!
//! ```rust
//! use options::Either;
//! use options::data::fluent;
//!
//! let from_value = fluent::with_first(1).with_second_type::<String>();
//! let from_type = fluent::with_first_type::<i32>().with_second("two".to_string());
//!
//! assert_eq!(from_value, Either::with_first(1));
//! assert_eq!(from_type, Either::with_second("two".to_string()));
//! ```

use std::marker::PhantomData;

use super::either::Either;

/// A first value waiting for the second side's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "call `with_second_type` to build the either"]
pub struct NeedsSecondType<A> {
    first: A,
}

impl<A> NeedsSecondType<A> {
    /// Names the second type and builds the either.
    #[inline]
    pub fn with_second_type<B>(self) -> Either<A, B> {
        Either::with_first(self.first)
    }
}

/// A second value waiting for the first side's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "call `with_first_type` to build the either"]
pub struct NeedsFirstType<B> {
    second: B,
}

impl<B> NeedsFirstType<B> {
    /// Names the first type and builds the either.
    #[inline]
    pub fn with_first_type<A>(self) -> Either<A, B> {
        Either::with_second(self.second)
    }
}

/// A fixed first type waiting for a second value.
#[must_use = "call `with_second` to build the either"]
pub struct NeedsSecondValue<A> {
    first: PhantomData<fn() -> A>,
}

impl<A> NeedsSecondValue<A> {
    /// Supplies the second value and builds the either.
    #[inline]
    pub fn with_second<B>(self, second: B) -> Either<A, B> {
        Either::with_second(second)
    }
}

/// A fixed second type waiting for a first value.
#[must_use = "call `with_first` to build the either"]
pub struct NeedsFirstValue<B> {
    second: PhantomData<fn() -> B>,
}

impl<B> NeedsFirstValue<B> {
    /// Supplies the first value and builds the either.
    #[inline]
    pub fn with_first<A>(self, first: A) -> Either<A, B> {
        Either::with_first(first)
    }
}

/// Starts an either from a first value.
#[inline]
pub const fn with_first<A>(first: A) -> NeedsSecondType<A> {
    NeedsSecondType { first }
}

/// Starts an either from a second value.
#[inline]
pub const fn with_second<B>(second: B) -> NeedsFirstType<B> {
    NeedsFirstType { second }
}

/// Starts an either whose first type is `A`; the second value comes next.
#[inline]
pub const fn with_first_type<A>() -> NeedsSecondValue<A> {
    NeedsSecondValue { first: PhantomData }
}

/// Starts an either whose second type is `B`; the first value comes next.
#[inline]
pub const fn with_second_type<B>() -> NeedsFirstValue<B> {
    NeedsFirstValue {
        second: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn second_value_with_first_type() {
        let either = with_second(2.5).with_first_type::<i32>();
        assert_eq!(either, Either::with_second(2.5));
    }

    #[rstest]
    fn first_value_after_second_type() {
        let either = with_second_type::<String>().with_first(7);
        assert_eq!(either, Either::with_first(7));
    }

    #[rstest]
    fn builders_agree_with_direct_construction() {
        let built: Either<&str, u8> = with_first("a").with_second_type();
        assert_eq!(built, Either::with_first("a"));
    }
}
