//! Deferred and published options.
//!
//! A [`DeferredOption`] describes how to produce an [`Optional`](crate::Optional)
//! without producing it yet. Nothing runs until [`DeferredOption::evaluate`] is
//! called, and a plain deferred option re-runs its factory on every evaluation.
//!
//! Publishing a deferred option wraps it in a memoization cell: the source is
//! evaluated at most once, and every later evaluation returns a clone of the
//! cached result.
//!
//! - [`DeferredOption`]: the deferred interface and its lazy combinators
//! - [`Deferred`]: a deferred option backed by a factory closure
//! - [`Projected`]: a deferred option post-processed by a selector
//! - [`Published`]: an evaluate-once deferred option
//! - [`SyncCell`] / [`LocalCell`]: thread-safe and single-threaded memo cells
//!
//! # Examples
//!
//! ## Deferred Evaluation
//!
//! ```rust
//! use options::Optional;
//! use options::control::{DeferredOption, generate};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = AtomicUsize::new(0);
//! let deferred = generate(|| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     Optional::present(5)
//! })
//! .filter(|x| *x > 4);
//! // Nothing has run yet
//! assert_eq!(calls.load(Ordering::SeqCst), 0);
//!
//! assert_eq!(deferred.evaluate(), Optional::present(5));
//! assert_eq!(deferred.evaluate(), Optional::present(5));
//! assert_eq!(calls.load(Ordering::SeqCst), 2);
//! ```
//!
//! ## Publishing
//!
//! ```rust
//! use options::Optional;
//! use options::control::{DeferredOption, generate};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = AtomicUsize::new(0);
//! let published = generate(|| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     Optional::present("computed")
//! })
//! .publish();
//!
//! assert!(!published.has_evaluated());
//! assert_eq!(published.evaluate(), Optional::present("computed"));
//! assert_eq!(published.evaluate(), Optional::present("computed"));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

mod deferred;
mod published;

pub use deferred::{
    Bind, BindDeferred, BindWith, Deferred, DeferredOption, Filter, Map, Projected, Tap, constant,
    empty, generate, generate_nullable,
};
pub use published::{LocalCell, MemoCell, Published, SyncCell};
