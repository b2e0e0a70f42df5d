//! Published options - deferred options evaluated at most once.
//!
//! A [`Published`] option pairs a deferred source with a memoization cell. The
//! first evaluation runs the source and stores the result; every later
//! evaluation, from any clone of the published option, returns a clone of the
//! stored result without touching the source again.
//!
//! The cell decides the threading model:
//!
//! - [`SyncCell`] serializes population with a [`parking_lot::Mutex`] and
//!   serves later reads from a [`OnceLock`] without locking. Concurrent first
//!   evaluations run the source exactly once; the other callers block until
//!   the result is stored and then observe it.
//! - [`LocalCell`] is a [`RefCell`] without synchronization. It is `!Sync`, so a
//!   published option using it cannot be shared between threads.
//!
//! # Panics
//!
//! A panic raised by the source propagates to the caller of `evaluate`. The
//! cell stays empty, and the next evaluation runs the source again.
//!
//! Evaluating a `SyncCell`-backed option from inside its own source deadlocks.

use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use super::deferred::DeferredOption;
use crate::data::Optional;

/// Storage strategy for a published option.
///
/// A memo cell starts empty, is populated once, and then serves clones of its
/// contents.
pub trait MemoCell<T>: Default {
    /// Returns the stored optional, calling `populate` first if the cell is
    /// empty.
    fn get_or_populate<F>(&self, populate: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>;

    /// Returns `true` once the cell holds a value.
    fn is_populated(&self) -> bool;
}

// =============================================================================
// SyncCell
// =============================================================================

/// A thread-safe memo cell.
///
/// Reads of a populated cell go straight to a [`OnceLock`] without locking.
/// Population is serialized by a [`parking_lot::Mutex`], so concurrent first
/// evaluations run the source once and the other callers wait for its result.
pub struct SyncCell<T> {
    value: OnceLock<Optional<T>>,
    populating: Mutex<()>,
}

impl<T> Default for SyncCell<T> {
    fn default() -> Self {
        Self {
            value: OnceLock::new(),
            populating: Mutex::new(()),
        }
    }
}

impl<T: Clone> MemoCell<T> for SyncCell<T> {
    fn get_or_populate<F>(&self, populate: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        if let Some(cached) = self.value.get() {
            return cached.clone();
        }

        let _guard = self.populating.lock();
        if let Some(cached) = self.value.get() {
            return cached.clone();
        }

        let computed = populate();
        let stored = self.value.get_or_init(|| computed).clone();
        tracing::trace!(present = stored.is_present(), "published option populated");
        stored
    }

    #[inline]
    fn is_populated(&self) -> bool {
        self.value.get().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for SyncCell<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("SyncCell").field(value).finish(),
            None if self.populating.is_locked() => formatter.write_str("SyncCell(<populating>)"),
            None => formatter.write_str("SyncCell(<unevaluated>)"),
        }
    }
}

// =============================================================================
// LocalCell
// =============================================================================

/// A single-threaded memo cell.
///
/// If the source re-enters the same cell while it is being populated, the
/// first result to be stored wins.
pub struct LocalCell<T> {
    value: RefCell<Option<Optional<T>>>,
}

impl<T> Default for LocalCell<T> {
    fn default() -> Self {
        Self {
            value: RefCell::new(None),
        }
    }
}

impl<T: Clone> MemoCell<T> for LocalCell<T> {
    fn get_or_populate<F>(&self, populate: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        if let Some(cached) = self.value.borrow().as_ref() {
            return cached.clone();
        }

        let computed = populate();
        let stored = self.value.borrow_mut().get_or_insert(computed).clone();
        tracing::trace!(present = stored.is_present(), "published option populated");
        stored
    }

    #[inline]
    fn is_populated(&self) -> bool {
        self.value.borrow().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalCell<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.try_borrow() {
            Ok(slot) => match slot.as_ref() {
                Some(value) => formatter.debug_tuple("LocalCell").field(value).finish(),
                None => formatter.write_str("LocalCell(<unevaluated>)"),
            },
            Err(_) => formatter.write_str("LocalCell(<borrowed>)"),
        }
    }
}

// =============================================================================
// Published
// =============================================================================

struct Shared<D, C> {
    source: D,
    cell: C,
}

/// A deferred option evaluated at most once.
///
/// Created by [`DeferredOption::publish`] (thread-safe) or
/// [`DeferredOption::publish_local`] (single-threaded). Cloning shares the
/// cell, so the source runs at most once across all clones.
///
/// A published option is itself a [`DeferredOption`]. Projecting it yields a
/// plain deferred option whose selector re-runs on every evaluation while the
/// published source stays cached.
///
/// # Type Parameters
///
/// * `D` - The deferred source
/// * `C` - The memo cell, [`SyncCell`] or [`LocalCell`]
///
/// # Examples
///
/// ```rust
/// use options::Optional;
/// use options::control::{DeferredOption, generate};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
///
/// static CALLS: AtomicUsize = AtomicUsize::new(0);
///
/// let published = generate(|| {
///     CALLS.fetch_add(1, Ordering::SeqCst);
///     Optional::present(42)
/// })
/// .publish();
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let published = published.clone();
///         thread::spawn(move || published.evaluate())
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), Optional::present(42));
/// }
/// assert_eq!(CALLS.load(Ordering::SeqCst), 1);
/// ```
#[must_use = "a published option does nothing until evaluated"]
pub struct Published<D, C> {
    shared: Arc<Shared<D, C>>,
}

impl<D, C> Published<D, C>
where
    D: DeferredOption,
    C: MemoCell<D::Item>,
{
    pub(crate) fn new(source: D) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                cell: C::default(),
            }),
        }
    }

    /// Returns `true` once the source has been evaluated.
    ///
    /// A source that panicked does not count as evaluated.
    #[inline]
    pub fn has_evaluated(&self) -> bool {
        self.shared.cell.is_populated()
    }

    /// Evaluates (at most once) and eliminates the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    /// use options::control::{DeferredOption, constant};
    ///
    /// let published = constant(7).publish();
    /// assert_eq!(published.handle(|x| x * 2, || 0), 14);
    /// ```
    #[inline]
    pub fn handle<R, P, A>(&self, if_present: P, if_absent: A) -> R
    where
        P: FnOnce(D::Item) -> R,
        A: FnOnce() -> R,
    {
        self.evaluate().handle(if_present, if_absent)
    }

    /// Evaluates (at most once) and returns the result as a plain optional.
    #[inline]
    pub fn as_optional(&self) -> Optional<D::Item> {
        self.evaluate()
    }
}

impl<D, C> DeferredOption for Published<D, C>
where
    D: DeferredOption,
    C: MemoCell<D::Item>,
{
    type Item = D::Item;

    #[inline]
    fn evaluate(&self) -> Optional<D::Item> {
        let shared = &*self.shared;
        shared.cell.get_or_populate(|| shared.source.evaluate())
    }
}

impl<D, C> Clone for Published<D, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<D, C: fmt::Debug> fmt::Debug for Published<D, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Published")
            .field("cell", &self.shared.cell)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(
    Published<super::Deferred<fn() -> Optional<i32>>, SyncCell<i32>>: Send, Sync, Clone
);
static_assertions::assert_not_impl_any!(
    Published<super::Deferred<fn() -> Optional<i32>>, LocalCell<i32>>: Send, Sync
);
