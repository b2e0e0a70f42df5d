//! Combinators for `Optional<T>`.

use crate::data::{NoneError, Optional, Unit};

impl<T> Optional<T> {
    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.handle_ref(|_| true, || false)
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// assert_eq!(Optional::present(2).map(|x| x * 10), Optional::present(20));
    /// assert_eq!(Optional::<i32>::absent().map(|x| x * 10), Optional::absent());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.handle(|value| Optional::present(function(value)), Optional::absent)
    }

    /// Chains a computation that itself produces an optional.
    ///
    /// `function` is never called on an absent optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::present(x / 2) } else { Optional::absent() };
    /// assert_eq!(Optional::present(8).bind(half), Optional::present(4));
    /// assert_eq!(Optional::present(3).bind(half), Optional::absent());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.handle(function, Optional::absent)
    }

    /// Chains a computation and combines its result with the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// let total = Optional::present(2).bind_with(|x| Optional::present(x + 1), |x, y| x * y);
    /// assert_eq!(total, Optional::present(6));
    /// ```
    #[inline]
    pub fn bind_with<I, U, F, G>(self, intermediate: F, combine: G) -> Optional<U>
    where
        T: Clone,
        F: FnOnce(T) -> Optional<I>,
        G: FnOnce(T, I) -> U,
    {
        self.bind(|value| intermediate(value.clone()).map(|middle| combine(value, middle)))
    }

    /// Keeps a present value only if `predicate` accepts it.
    ///
    /// `predicate` is never called on an absent optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// assert_eq!(Optional::present(6).filter(|x| *x > 5), Optional::present(6));
    /// assert_eq!(Optional::present(5).filter(|x| *x > 5), Optional::absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.handle(
            |value| {
                if predicate(&value) {
                    Self::present(value)
                } else {
                    Self::absent()
                }
            },
            Self::absent,
        )
    }

    /// Pairs two present values; absent if either is absent.
    ///
    /// See [`zip`](crate::combinator::zip).
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        zip(self, other)
    }

    /// Returns `self` if present, otherwise the optional produced by `fallback`.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.handle(Self::present, fallback)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value, or `default` when absent.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        self.handle(|value| value, || default)
    }

    /// Returns the value, or the result of `fallback` when absent.
    ///
    /// `fallback` is called only when the optional is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// assert_eq!(Optional::present(1).get_or_else(|| unreachable!()), 1);
    /// assert_eq!(Optional::<i32>::absent().get_or_else(|| 9), 9);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.handle(|value| value, fallback)
    }

    /// Returns the value, or `T::default()` when absent.
    #[inline]
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.get_or_else(T::default)
    }

    /// Returns the value, or the error built by `make_error` when absent.
    ///
    /// # Errors
    ///
    /// Returns `Err(make_error())` if the optional is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// let absent: Optional<i32> = Optional::absent();
    /// assert_eq!(absent.get_or_throw(|| "missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn get_or_throw<E, F>(self, make_error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.handle(Ok, || Err(make_error()))
    }

    /// Returns the value, or [`NoneError`] when absent.
    ///
    /// # Errors
    ///
    /// Returns `Err(NoneError)` if the optional is absent.
    #[inline]
    pub fn get_or_none_error(self) -> Result<T, NoneError> {
        self.get_or_throw(|| NoneError)
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Returns a reference to the value as an `Option<&T>`.
    #[inline]
    pub fn as_option_ref(&self) -> Option<&T> {
        self.handle_ref(Some, || None)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `if_present` or `if_absent` for its side effect.
    #[inline]
    pub fn act<P, A>(self, if_present: P, if_absent: A) -> Unit
    where
        P: FnOnce(T),
        A: FnOnce(),
    {
        self.handle(
            |value| {
                if_present(value);
                Unit
            },
            || {
                if_absent();
                Unit
            },
        )
    }

    /// Runs `if_present` when a value is present; does nothing otherwise.
    #[inline]
    pub fn act_present<P>(self, if_present: P) -> Unit
    where
        P: FnOnce(T),
    {
        self.act(if_present, || {})
    }

    /// Runs `if_absent` when no value is present; does nothing otherwise.
    #[inline]
    pub fn act_absent<A>(self, if_absent: A) -> Unit
    where
        A: FnOnce(),
    {
        self.act(|_| {}, if_absent)
    }
}

impl<A, B> Optional<(A, B)> {
    /// Eliminates an optional pair, passing its halves as separate arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// let sum = Optional::present((2, 3)).handle_pair(|a, b| a + b, || 0);
    /// assert_eq!(sum, 5);
    /// ```
    #[inline]
    pub fn handle_pair<R, P, F>(self, if_present: P, if_absent: F) -> R
    where
        P: FnOnce(A, B) -> R,
        F: FnOnce() -> R,
    {
        self.handle(|(first, second)| if_present(first, second), if_absent)
    }
}

/// Pairs two present values; absent if either is absent.
///
/// `second` is only inspected when `first` is present.
///
/// # Examples
///
/// ```rust
/// use options::combinator::zip;
/// use options::Optional;
///
/// assert_eq!(zip(Optional::present(5), Optional::<i32>::absent()), Optional::absent());
/// assert_eq!(zip(Optional::present(5), Optional::present(6)), Optional::present((5, 6)));
/// ```
#[inline]
pub fn zip<T, U>(first: Optional<T>, second: Optional<U>) -> Optional<(T, U)> {
    first.bind(|left| second.map(|right| (left, right)))
}

/// Returns the first present optional of `options`, or absent if there is none.
///
/// Stops pulling from the iterator at the first present element.
///
/// # Examples
///
/// ```rust
/// use options::combinator::coalesce;
/// use options::Optional;
///
/// let options = vec![Optional::absent(), Optional::present("b"), Optional::present("c")];
/// assert_eq!(coalesce(options), Optional::present("b"));
/// assert_eq!(coalesce(Vec::<Optional<i32>>::new()), Optional::absent());
/// ```
pub fn coalesce<T, I>(options: I) -> Optional<T>
where
    I: IntoIterator<Item = Optional<T>>,
{
    options
        .into_iter()
        .find(Optional::is_present)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(5, false)]
    #[case(6, true)]
    fn filter_then_handle_pipeline(#[case] value: i32, #[case] expected: bool) {
        let result = Optional::present(value)
            .filter(|x| *x > 5)
            .handle(|_| true, || false);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn filter_on_absent_never_calls_predicate() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::absent().filter(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(result, Optional::absent());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn bind_on_absent_never_calls_function() {
        let calls = Cell::new(0);
        let result: Optional<String> = Optional::<i32>::absent().bind(|x| {
            calls.set(calls.get() + 1);
            Optional::present(x.to_string())
        });
        assert_eq!(result, Optional::absent());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn bind_with_combines_original_and_intermediate() {
        let source = Optional::present("ab".to_string());
        let result = source.bind_with(
            |text| Optional::present(text.len()),
            |text, length| format!("{text}:{length}"),
        );
        assert_eq!(result, Optional::present("ab:2".to_string()));
    }

    #[rstest]
    fn bind_with_absent_intermediate_is_absent() {
        let result = Optional::present(1).bind_with(|_| Optional::<i32>::absent(), |a, b| a + b);
        assert_eq!(result, Optional::absent());
    }

    #[rstest]
    #[case(Optional::present(1), 0)]
    #[case(Optional::absent(), 1)]
    fn get_or_else_invokes_fallback_only_when_absent(
        #[case] option: Optional<i32>,
        #[case] expected_calls: usize,
    ) {
        let calls = Cell::new(0);
        let _ = option.get_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(calls.get(), expected_calls);
    }

    #[rstest]
    fn get_or_returns_default_when_absent() {
        assert_eq!(Optional::<i32>::absent().get_or(3), 3);
        assert_eq!(Optional::present(1).get_or(3), 1);
        assert_eq!(Optional::<String>::absent().get_or_default(), String::new());
    }

    #[rstest]
    fn get_or_throw_builds_error_only_when_absent() {
        let present: Result<i32, String> = Optional::present(1).get_or_throw(|| unreachable!());
        assert_eq!(present, Ok(1));

        let absent = Optional::<i32>::absent();
        assert_eq!(absent.get_or_none_error(), Err(NoneError));
    }

    #[rstest]
    fn act_runs_the_matching_side_effect() {
        let seen = Cell::new(0);
        Optional::present(4).act(|x| seen.set(x), || seen.set(-1));
        assert_eq!(seen.get(), 4);
        Optional::<i32>::absent().act(|x| seen.set(x), || seen.set(-1));
        assert_eq!(seen.get(), -1);
    }

    #[rstest]
    fn act_present_ignores_absent() {
        let seen = Cell::new(false);
        Optional::<i32>::absent().act_present(|_| seen.set(true));
        assert!(!seen.get());
        Optional::present(()).act_absent(|| seen.set(true));
        assert!(!seen.get());
    }

    #[rstest]
    fn or_else_keeps_present_value() {
        assert_eq!(
            Optional::present(1).or_else(|| unreachable!()),
            Optional::present(1)
        );
        assert_eq!(
            Optional::absent().or_else(|| Optional::present(2)),
            Optional::present(2)
        );
    }

    #[rstest]
    fn coalesce_stops_at_first_present() {
        let pulled = Cell::new(0);
        let source = [
            Optional::absent(),
            Optional::present(1),
            Optional::present(2),
        ]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

        assert_eq!(coalesce(source), Optional::present(1));
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn coalesce_of_all_absent_is_absent() {
        let options: [Optional<i32>; 2] = [Optional::absent(), Optional::absent()];
        assert_eq!(coalesce(options), Optional::absent());
    }

    #[rstest]
    fn reference_conversion() {
        let option = Optional::present(String::from("x"));
        assert_eq!(option.as_option_ref().map(String::as_str), Some("x"));
        assert_eq!(option.as_ref().map(String::len), Optional::present(1));
    }
}
