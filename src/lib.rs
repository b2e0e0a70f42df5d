//! # options
//!
//! Disciplined optional and either values for Rust.
//!
//! ## Overview
//!
//! The crate provides two sum types whose contents can only be reached through
//! an elimination operator that forces every case to be handled:
//!
//! - **[`Optional<T>`](data::Optional)**: zero or one value, with null collapse for
//!   types that have a null representation
//! - **[`Either<A, B>`](data::Either)**: exactly one of a first or a second value
//! - **Combinators**: map, bind, filter, zip, coalesce, default extraction and the
//!   analogous Either operators, all written in terms of `handle`
//! - **Deferred and published options**: lazily produced optionals, optionally
//!   memoized so the producer runs at most once, even across threads
//! - **Comparison wrappers**: equality and ordering driven by an external strategy
//! - **Query syntax**: a `query!` comprehension macro over all of the above
//!
//! ## Feature Flags
//!
//! - `control`: Deferred and published options
//! - `comparison`: Equatable and comparable wrappers
//! - `compose`: Query-syntax bindings and the `query!` macro
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use options::prelude::*;
//!
//! let accepted = Optional::present(6)
//!     .filter(|value| *value > 5)
//!     .handle(|_| true, || false);
//! assert!(accepted);
//!
//! let rejected = Optional::present(5)
//!     .filter(|value| *value > 5)
//!     .handle(|_| true, || false);
//! assert!(!rejected);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use options::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::data::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "comparison")]
    pub use crate::comparison::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod combinator;
pub mod data;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "comparison")]
pub mod comparison;

#[cfg(feature = "compose")]
pub mod compose;

pub use data::{Either, Optional, Unit};
