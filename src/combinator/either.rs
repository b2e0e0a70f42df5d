//! Combinators for `Either<A, B>`.

use crate::data::{Either, EitherError, Optional, Side, Unit};

impl<A, B> Either<A, B> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this holds a first value.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.handle_ref(|_| true, |_| false)
    }

    /// Returns `true` if this holds a second value.
    #[inline]
    pub fn is_second(&self) -> bool {
        !self.is_first()
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs the function for the active side for its side effect.
    #[inline]
    pub fn act<F, G>(self, if_first: F, if_second: G) -> Unit
    where
        F: FnOnce(A),
        G: FnOnce(B),
    {
        self.handle(
            |value| {
                if_first(value);
                Unit
            },
            |value| {
                if_second(value);
                Unit
            },
        )
    }

    /// Runs `if_first` on a first value; does nothing for a second value.
    #[inline]
    pub fn act_first<F>(self, if_first: F) -> Unit
    where
        F: FnOnce(A),
    {
        self.act(if_first, |_| {})
    }

    /// Runs `if_second` on a second value; does nothing for a first value.
    #[inline]
    pub fn act_second<G>(self, if_second: G) -> Unit
    where
        G: FnOnce(B),
    {
        self.act(|_| {}, if_second)
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the sides: a first value becomes a second value and vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Either;
    ///
    /// let first: Either<i32, String> = Either::with_first(1);
    /// assert_eq!(first.swap(), Either::<String, i32>::with_second(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<B, A> {
        self.handle(Either::with_second, Either::with_first)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::MissingSide`] if this holds a second value.
    #[inline]
    pub fn get_first_or_throw(self) -> Result<A, EitherError> {
        self.handle(Ok, |_| {
            Err(EitherError::MissingSide {
                requested: Side::First,
            })
        })
    }

    /// Returns the second value.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::MissingSide`] if this holds a first value.
    #[inline]
    pub fn get_second_or_throw(self) -> Result<B, EitherError> {
        self.handle(
            |_| {
                Err(EitherError::MissingSide {
                    requested: Side::Second,
                })
            },
            Ok,
        )
    }

    /// Returns the first value, or `default` for a second value.
    #[inline]
    pub fn get_first_or(self, default: A) -> A {
        self.handle(|value| value, |_| default)
    }

    /// Returns the first value, or the result of `fallback` for a second value.
    ///
    /// `fallback` is called only when the first side is inactive.
    #[inline]
    pub fn get_first_or_else<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.handle(|value| value, |_| fallback())
    }

    /// Returns the second value, or `default` for a first value.
    #[inline]
    pub fn get_second_or(self, default: B) -> B {
        self.handle(|_| default, |value| value)
    }

    /// Returns the second value, or the result of `fallback` for a first value.
    ///
    /// `fallback` is called only when the second side is inactive.
    #[inline]
    pub fn get_second_or_else<G>(self, fallback: G) -> B
    where
        G: FnOnce() -> B,
    {
        self.handle(|_| fallback(), |value| value)
    }

    /// Returns the first value, converting a second value with `if_second`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Either;
    ///
    /// let either: Either<usize, String> = Either::with_second("four".to_string());
    /// assert_eq!(either.first_or_handle(|text| text.len()), 4);
    /// ```
    #[inline]
    pub fn first_or_handle<G>(self, if_second: G) -> A
    where
        G: FnOnce(B) -> A,
    {
        self.handle(|value| value, if_second)
    }

    /// Returns the second value, converting a first value with `if_first`.
    #[inline]
    pub fn second_or_handle<F>(self, if_first: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        self.handle(if_first, |value| value)
    }

    /// Converts into a pair, filling the inactive side from its factory.
    ///
    /// `if_second` supplies the first half when this holds a second value, and
    /// `if_first` supplies the second half when this holds a first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Either;
    ///
    /// let either: Either<i32, &str> = Either::with_first(1);
    /// assert_eq!(either.to_pair(|| 0, || "none"), (1, "none"));
    /// ```
    #[inline]
    pub fn to_pair<F, G>(self, if_second: F, if_first: G) -> (A, B)
    where
        F: FnOnce() -> A,
        G: FnOnce() -> B,
    {
        self.handle(|first| (first, if_first()), |second| (if_second(), second))
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Returns the first value as an optional, discarding a second value.
    #[inline]
    pub fn first_optional(self) -> Optional<A> {
        self.handle(Optional::present, |_| Optional::absent())
    }

    /// Returns the second value as an optional, discarding a first value.
    #[inline]
    pub fn second_optional(self) -> Optional<B> {
        self.handle(|_| Optional::absent(), Optional::present)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a first value; a second value passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Either;
    ///
    /// let first: Either<i32, String> = Either::with_first(21);
    /// assert_eq!(first.map(|x| x * 2), Either::with_first(42));
    ///
    /// let second: Either<i32, String> = Either::with_second("kept".to_string());
    /// assert_eq!(second.map(|x| x * 2), Either::with_second("kept".to_string()));
    /// ```
    #[inline]
    pub fn map<C, F>(self, function: F) -> Either<C, B>
    where
        F: FnOnce(A) -> C,
    {
        self.handle(
            |value| Either::with_first(function(value)),
            Either::with_second,
        )
    }

    /// Chains a computation on a first value; a second value passes through.
    #[inline]
    pub fn bind<C, F>(self, function: F) -> Either<C, B>
    where
        F: FnOnce(A) -> Either<C, B>,
    {
        self.handle(function, Either::with_second)
    }

    /// Chains a computation on a first value and combines its first result
    /// with the original value.
    ///
    /// A second value from either step passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Either;
    ///
    /// let source: Either<i32, String> = Either::with_first(3);
    /// let result = source.bind_with(|x| Either::with_first(x + 1), |x, y| x * y);
    /// assert_eq!(result, Either::with_first(12));
    /// ```
    #[inline]
    pub fn bind_with<I, C, F, G>(self, intermediate: F, combine: G) -> Either<C, B>
    where
        A: Clone,
        F: FnOnce(A) -> Either<I, B>,
        G: FnOnce(A, I) -> C,
    {
        self.bind(|value| intermediate(value.clone()).map(|middle| combine(value, middle)))
    }
}
