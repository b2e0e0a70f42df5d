//! Comprehension operators.
//!
//! [`Query`] names the operators a comprehension needs (`select`,
//! `select_many`, `select_many_with`) for the eager containers, [`Optional`]
//! and [`Either`]. [`QueryWhere`] adds the `where_` guard for containers with
//! an empty state. [`DeferredQuery`] provides the same operators for every
//! [`DeferredOption`], where they build lazy pipelines instead.

use crate::control::{BindDeferred, BindWith, DeferredOption, Filter, Map};
use crate::data::{Either, Optional};

/// Comprehension operators of an eager container.
///
/// # Examples
///
/// ```rust
/// use options::compose::Query;
/// use options::{Either, Optional};
///
/// assert_eq!(Optional::present(2).select(|x| x * 3), Optional::present(6));
///
/// let first: Either<i32, String> = Either::with_first(2);
/// assert_eq!(first.select_many(|x| Either::with_first(x + 1)), Either::with_first(3));
/// ```
pub trait Query: Sized {
    /// The type of the value a comprehension step binds.
    type Item;

    /// The same container holding a `U` instead.
    type Wrapped<U>;

    /// Projects the bound value.
    fn select<U, F>(self, selector: F) -> Self::Wrapped<U>
    where
        F: FnOnce(Self::Item) -> U;

    /// Feeds the bound value to `selector`, which produces the next step.
    fn select_many<U, F>(self, selector: F) -> Self::Wrapped<U>
    where
        F: FnOnce(Self::Item) -> Self::Wrapped<U>;

    /// Feeds the bound value to `collection`, then combines the bound value
    /// and the intermediate value with `result`.
    fn select_many_with<I, U, F, G>(self, collection: F, result: G) -> Self::Wrapped<U>
    where
        Self::Item: Clone,
        F: FnOnce(Self::Item) -> Self::Wrapped<I>,
        G: FnOnce(Self::Item, I) -> U;
}

/// The guard operator of an eager container with an empty state.
///
/// [`Either`] does not implement it: it always holds a value and has nothing
/// to fall back to.
pub trait QueryWhere: Query {
    /// Keeps the bound value only if it satisfies `predicate`.
    fn where_<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&Self::Item) -> bool;
}

// =============================================================================
// Optional
// =============================================================================

impl<T> Query for Optional<T> {
    type Item = T;
    type Wrapped<U> = Optional<U>;

    #[inline]
    fn select<U, F>(self, selector: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(selector)
    }

    #[inline]
    fn select_many<U, F>(self, selector: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.bind(selector)
    }

    #[inline]
    fn select_many_with<I, U, F, G>(self, collection: F, result: G) -> Optional<U>
    where
        T: Clone,
        F: FnOnce(T) -> Optional<I>,
        G: FnOnce(T, I) -> U,
    {
        self.bind_with(collection, result)
    }
}

impl<T> QueryWhere for Optional<T> {
    #[inline]
    fn where_<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(predicate)
    }
}

// =============================================================================
// Either
// =============================================================================

impl<A, B> Query for Either<A, B> {
    type Item = A;
    type Wrapped<U> = Either<U, B>;

    #[inline]
    fn select<U, F>(self, selector: F) -> Either<U, B>
    where
        F: FnOnce(A) -> U,
    {
        self.map(selector)
    }

    #[inline]
    fn select_many<U, F>(self, selector: F) -> Either<U, B>
    where
        F: FnOnce(A) -> Either<U, B>,
    {
        self.bind(selector)
    }

    #[inline]
    fn select_many_with<I, U, F, G>(self, collection: F, result: G) -> Either<U, B>
    where
        A: Clone,
        F: FnOnce(A) -> Either<I, B>,
        G: FnOnce(A, I) -> U,
    {
        self.bind_with(collection, result)
    }
}

// =============================================================================
// Deferred Options
// =============================================================================

/// Comprehension operators of a deferred option.
///
/// Every operator returns another deferred option; nothing runs until it is
/// evaluated. The functions are `Fn` because each evaluation calls them
/// again.
///
/// # Examples
///
/// ```rust
/// use options::Optional;
/// use options::compose::DeferredQuery;
/// use options::control::{DeferredOption, constant};
///
/// let pipeline = constant(3).select(|x| x + 1).where_(|x| x % 2 == 0);
/// assert_eq!(pipeline.evaluate(), Optional::present(4));
/// ```
pub trait DeferredQuery: DeferredOption + Sized {
    /// Lazily projects the value.
    #[inline]
    fn select<U, F>(self, selector: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        self.map(selector)
    }

    /// Lazily chains a deferred step.
    #[inline]
    fn select_many<E, F>(self, selector: F) -> BindDeferred<Self, F>
    where
        F: Fn(Self::Item) -> E,
        E: DeferredOption,
    {
        self.bind_deferred(selector)
    }

    /// Lazily chains a step and combines both values.
    #[inline]
    fn select_many_with<I, U, F, G>(self, collection: F, result: G) -> BindWith<Self, F, G>
    where
        Self::Item: Clone,
        F: Fn(Self::Item) -> Optional<I>,
        G: Fn(Self::Item, I) -> U,
    {
        self.bind_with(collection, result)
    }

    /// Lazily guards the value.
    #[inline]
    fn where_<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.filter(predicate)
    }
}

impl<D: DeferredOption> DeferredQuery for D {}
