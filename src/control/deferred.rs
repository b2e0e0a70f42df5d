//! Deferred options - optionals produced on demand.
//!
//! A deferred option holds the recipe for an [`Optional`] rather than the
//! optional itself. Every combinator returns another deferred option, so a
//! whole pipeline can be assembled without running any user code.
//!
//! # Examples
//!
//! ```rust
//! use options::Optional;
//! use options::control::{DeferredOption, generate};
//!
//! let pipeline = generate(|| Optional::present(6))
//!     .filter(|x| *x > 5)
//!     .map(|x| x * 7);
//!
//! assert_eq!(pipeline.evaluate(), Optional::present(42));
//! ```

use std::fmt;

use super::published::{LocalCell, Published, SyncCell};
use crate::data::{Nullable, Optional};

/// An optional that has not been produced yet.
///
/// Implementors describe how to obtain an [`Optional`] when
/// [`evaluate`](DeferredOption::evaluate) is called. Unless a deferred option is
/// published, each evaluation runs its source again.
///
/// All provided combinators are lazy: they wrap `self` and defer the
/// transformation to evaluation time.
///
/// # Examples
///
/// ```rust
/// use options::Optional;
/// use options::control::DeferredOption;
///
/// struct Always(i32);
///
/// impl DeferredOption for Always {
///     type Item = i32;
///
///     fn evaluate(&self) -> Optional<i32> {
///         Optional::present(self.0)
///     }
/// }
///
/// assert_eq!(Always(3).map(|x| x + 1).evaluate(), Optional::present(4));
/// ```
pub trait DeferredOption {
    /// The type of the value inside the produced optional.
    type Item;

    /// Produces the optional.
    fn evaluate(&self) -> Optional<Self::Item>;

    /// Returns a deferred option that evaluates `self` and passes the whole
    /// result through `selector`.
    ///
    /// The selector sees absent results too, which makes `project` the most
    /// general combinator; the others are special cases of it.
    #[inline]
    fn project<U, S>(self, selector: S) -> Projected<Self, S>
    where
        Self: Sized,
        S: Fn(Optional<Self::Item>) -> Optional<U>,
    {
        Projected {
            source: self,
            selector,
        }
    }

    /// Lazily applies `function` to a present value.
    #[inline]
    fn map<U, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map {
            source: self,
            function,
        }
    }

    /// Lazily chains a computation producing an optional.
    #[inline]
    fn bind<U, F>(self, function: F) -> Bind<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Optional<U>,
    {
        Bind {
            source: self,
            function,
        }
    }

    /// Lazily chains a computation producing another deferred option.
    ///
    /// The inner deferred option is evaluated in the same call that evaluates
    /// `self`.
    #[inline]
    fn bind_deferred<E, F>(self, function: F) -> BindDeferred<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> E,
        E: DeferredOption,
    {
        BindDeferred {
            source: self,
            function,
        }
    }

    /// Lazily chains a computation and combines its value with the source
    /// value.
    #[inline]
    fn bind_with<I, U, F, G>(self, intermediate: F, combine: G) -> BindWith<Self, F, G>
    where
        Self: Sized,
        Self::Item: Clone,
        F: Fn(Self::Item) -> Optional<I>,
        G: Fn(Self::Item, I) -> U,
    {
        BindWith {
            source: self,
            intermediate,
            combine,
        }
    }

    /// Lazily keeps a present value only if it satisfies `predicate`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter {
            source: self,
            predicate,
        }
    }

    /// Runs a side effect on every evaluation and passes the result through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    /// use options::control::{DeferredOption, empty};
    /// use std::cell::Cell;
    ///
    /// let absences = Cell::new(0);
    /// let tapped = empty::<i32>().tap(|_| {}, || absences.set(absences.get() + 1));
    ///
    /// assert_eq!(tapped.evaluate(), Optional::absent());
    /// assert_eq!(tapped.evaluate(), Optional::absent());
    /// assert_eq!(absences.get(), 2);
    /// ```
    #[inline]
    fn tap<P, A>(self, on_present: P, on_absent: A) -> Tap<Self, P, A>
    where
        Self: Sized,
        P: Fn(&Self::Item),
        A: Fn(),
    {
        Tap {
            source: self,
            on_present,
            on_absent,
        }
    }

    /// Runs a side effect on every present result.
    #[inline]
    fn tap_present<P>(self, on_present: P) -> Tap<Self, P, fn()>
    where
        Self: Sized,
        P: Fn(&Self::Item),
    {
        self.tap(on_present, ignore_absent as fn())
    }

    /// Runs a side effect on every absent result.
    #[inline]
    fn tap_absent<A>(self, on_absent: A) -> Tap<Self, fn(&Self::Item), A>
    where
        Self: Sized,
        A: Fn(),
    {
        self.tap(ignore_present::<Self::Item> as fn(&Self::Item), on_absent)
    }

    /// Wraps `self` in a thread-safe evaluate-once cell.
    ///
    /// The returned option may be cloned and shared across threads; the source
    /// runs at most once over the lifetime of all clones.
    #[inline]
    fn publish(self) -> Published<Self, SyncCell<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Published::new(self)
    }

    /// Wraps `self` in a single-threaded evaluate-once cell.
    ///
    /// Skips synchronization; the result cannot be shared between threads.
    #[inline]
    fn publish_local(self) -> Published<Self, LocalCell<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Published::new(self)
    }
}

const fn ignore_absent() {}

const fn ignore_present<T>(_: &T) {}

impl<D: DeferredOption + ?Sized> DeferredOption for &D {
    type Item = D::Item;

    #[inline]
    fn evaluate(&self) -> Optional<Self::Item> {
        (**self).evaluate()
    }
}

// =============================================================================
// Factory-backed Deferred Option
// =============================================================================

/// A deferred option whose evaluation calls a factory.
///
/// Built with [`generate`], [`generate_nullable`], [`constant`] or [`empty`].
#[derive(Clone, Copy)]
#[must_use = "a deferred option does nothing until evaluated"]
pub struct Deferred<F> {
    factory: F,
}

impl<F> Deferred<F> {
    /// Wraps `factory` without calling it.
    #[inline]
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<T, F> DeferredOption for Deferred<F>
where
    F: Fn() -> Optional<T>,
{
    type Item = T;

    #[inline]
    fn evaluate(&self) -> Optional<T> {
        (self.factory)()
    }
}

impl<F> fmt::Debug for Deferred<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Deferred(<factory>)")
    }
}

/// Creates a deferred option that calls `factory` on every evaluation.
///
/// # Examples
///
/// ```rust
/// use options::Optional;
/// use options::control::{DeferredOption, generate};
///
/// let deferred = generate(|| Optional::present(1));
/// assert_eq!(deferred.evaluate(), Optional::present(1));
/// ```
#[inline]
pub const fn generate<T, F>(factory: F) -> Deferred<F>
where
    F: Fn() -> Optional<T>,
{
    Deferred::new(factory)
}

/// Creates a deferred option from a factory returning a nullable value.
///
/// Each result is collapsed with [`Optional::from_nullable`].
///
/// # Examples
///
/// ```rust
/// use options::Optional;
/// use options::control::{DeferredOption, generate_nullable};
///
/// let deferred = generate_nullable(|| None::<i32>);
/// assert_eq!(deferred.evaluate(), Optional::absent());
/// ```
#[inline]
pub fn generate_nullable<N, F>(factory: F) -> Deferred<impl Fn() -> Optional<N::Value>>
where
    N: Nullable,
    F: Fn() -> N,
{
    Deferred::new(move || Optional::from_nullable(factory()))
}

/// Creates a deferred option that is always present with a clone of `value`.
#[inline]
pub fn constant<T: Clone>(value: T) -> Deferred<impl Fn() -> Optional<T>> {
    Deferred::new(move || Optional::present(value.clone()))
}

/// Creates a deferred option that is always absent.
#[inline]
pub const fn empty<T>() -> Deferred<fn() -> Optional<T>> {
    Deferred::new(Optional::absent as fn() -> Optional<T>)
}

// =============================================================================
// Combinator Types
// =============================================================================

/// A deferred option whose result is passed through a selector.
///
/// Returned by [`DeferredOption::project`].
#[derive(Clone, Copy)]
#[must_use = "a deferred option does nothing until evaluated"]
pub struct Projected<D, S> {
    source: D,
    selector: S,
}

impl<D, S, U> DeferredOption for Projected<D, S>
where
    D: DeferredOption,
    S: Fn(Optional<D::Item>) -> Optional<U>,
{
    type Item = U;

    #[inline]
    fn evaluate(&self) -> Optional<U> {
        (self.selector)(self.source.evaluate())
    }
}

/// Returned by [`DeferredOption::map`].
#[derive(Clone, Copy)]
#[must_use = "a deferred option does nothing until evaluated"]
pub struct Map<D, F> {
    source: D,
    function: F,
}

impl<D, F, U> DeferredOption for Map<D, F>
where
    D: DeferredOption,
    F: Fn(D::Item) -> U,
{
    type Item = U;

    #[inline]
    fn evaluate(&self) -> Optional<U> {
        self.source.evaluate().map(|value| (self.function)(value))
    }
}

/// Returned by [`DeferredOption::bind`].
#[derive(Clone, Copy)]
#[must_use = "a deferred option does nothing until evaluated"]
pub struct Bind<D, F> {
    source: D,
    function: F,
}

impl<D, F, U> DeferredOption for Bind<D, F>
where
    D: DeferredOption,
    F: Fn(D::Item) -> Optional<U>,
{
    type Item = U;

    #[inline]
    fn evaluate(&self) -> Optional<U> {
        self.source.evaluate().bind(|value| (self.function)(value))
    }
}

/// Returned by [`DeferredOption::bind_deferred`].
#[derive(Clone, Copy)]
#[must_use = "a deferred option does nothing until evaluated"]
pub struct BindDeferred<D, F> {
    source: D,
    function: F,
}

impl<D, F, E> DeferredOption for BindDeferred<D, F>
where
    D: DeferredOption,
    F: Fn(D::Item) -> E,
    E: DeferredOption,
{
    type Item = E::Item;

    #[inline]
    fn evaluate(&self) -> Optional<E::Item> {
        self.source
            .evaluate()
            .bind(|value| (self.function)(value).evaluate())
    }
}

/// Returned by [`DeferredOption::bind_with`].
#[derive(Clone, Copy)]
#[must_use = "a deferred option does nothing until evaluated"]
pub struct BindWith<D, F, G> {
    source: D,
    intermediate: F,
    combine: G,
}

impl<D, F, G, I, U> DeferredOption for BindWith<D, F, G>
where
    D: DeferredOption,
    D::Item: Clone,
    F: Fn(D::Item) -> Optional<I>,
    G: Fn(D::Item, I) -> U,
{
    type Item = U;

    #[inline]
    fn evaluate(&self) -> Optional<U> {
        self.source.evaluate().bind_with(
            |value| (self.intermediate)(value),
            |value, middle| (self.combine)(value, middle),
        )
    }
}

/// Returned by [`DeferredOption::filter`].
#[derive(Clone, Copy)]
#[must_use = "a deferred option does nothing until evaluated"]
pub struct Filter<D, P> {
    source: D,
    predicate: P,
}

impl<D, P> DeferredOption for Filter<D, P>
where
    D: DeferredOption,
    P: Fn(&D::Item) -> bool,
{
    type Item = D::Item;

    #[inline]
    fn evaluate(&self) -> Optional<D::Item> {
        self.source
            .evaluate()
            .filter(|value| (self.predicate)(value))
    }
}

/// Returned by [`DeferredOption::tap`] and its one-sided variants.
#[derive(Clone, Copy)]
#[must_use = "a deferred option does nothing until evaluated"]
pub struct Tap<D, P, A> {
    source: D,
    on_present: P,
    on_absent: A,
}

impl<D, P, A> DeferredOption for Tap<D, P, A>
where
    D: DeferredOption,
    P: Fn(&D::Item),
    A: Fn(),
{
    type Item = D::Item;

    #[inline]
    fn evaluate(&self) -> Optional<D::Item> {
        let option = self.source.evaluate();
        option.handle_ref(|value| (self.on_present)(value), || (self.on_absent)());
        option
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn generate_runs_the_factory_on_every_evaluation() {
        let calls = Cell::new(0);
        let deferred = generate(|| {
            calls.set(calls.get() + 1);
            Optional::present(calls.get())
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(deferred.evaluate(), Optional::present(1));
        assert_eq!(deferred.evaluate(), Optional::present(2));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    #[case(5, false)]
    #[case(6, true)]
    fn filter_then_handle(#[case] value: i32, #[case] expected: bool) {
        let deferred = constant(value).filter(|x| *x > 5);
        assert_eq!(deferred.evaluate().handle(|_| true, || false), expected);
    }

    #[rstest]
    fn project_sees_absent_results() {
        let projected = empty::<i32>().project(|option| option.or_else(|| Optional::present(0)));
        assert_eq!(projected.evaluate(), Optional::present(0));
    }

    #[rstest]
    fn combinators_do_not_run_until_evaluated() {
        let calls = Cell::new(0);
        let pipeline = generate(|| Optional::present(2))
            .map(|x| {
                calls.set(calls.get() + 1);
                x + 1
            })
            .bind(|x| Optional::present(x * 10));

        assert_eq!(calls.get(), 0);
        assert_eq!(pipeline.evaluate(), Optional::present(30));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn bind_on_absent_skips_the_continuation() {
        let deferred = empty::<i32>().bind(|_| -> Optional<i32> { unreachable!() });
        assert_eq!(deferred.evaluate(), Optional::absent());
    }

    #[rstest]
    fn bind_deferred_evaluates_the_inner_option() {
        let deferred = constant(3).bind_deferred(|x| constant(x * 2));
        assert_eq!(deferred.evaluate(), Optional::present(6));
    }

    #[rstest]
    fn bind_with_combines_both_values() {
        let deferred = constant(4).bind_with(|x| Optional::present(x + 1), |x, y| x * y);
        assert_eq!(deferred.evaluate(), Optional::present(20));
    }

    #[rstest]
    fn generate_nullable_collapses_each_result() {
        let toggle = Cell::new(false);
        let deferred = generate_nullable(|| {
            toggle.set(!toggle.get());
            toggle.get().then_some("on")
        });

        assert_eq!(deferred.evaluate(), Optional::present("on"));
        assert_eq!(deferred.evaluate(), Optional::absent());
    }

    #[rstest]
    fn one_sided_taps() {
        let presents = Cell::new(0);
        let absents = Cell::new(0);

        let _ = constant(1)
            .tap_present(|_| presents.set(presents.get() + 1))
            .tap_absent(|| absents.set(absents.get() + 1))
            .evaluate();
        let _ = empty::<i32>()
            .tap_present(|_| presents.set(presents.get() + 1))
            .tap_absent(|| absents.set(absents.get() + 1))
            .evaluate();

        assert_eq!((presents.get(), absents.get()), (1, 1));
    }

    #[rstest]
    fn references_are_deferred_options() {
        let deferred = constant("shared");
        let by_ref = (&deferred).map(str::len);
        assert_eq!(by_ref.evaluate(), Optional::present(6));
        assert_eq!(deferred.evaluate(), Optional::present("shared"));
    }
}
