//! Equality and ordering of optionals under caller-supplied strategies.
//!
//! `Optional<T>` already derives `PartialEq`, `Eq`, `Hash` and `Ord` from `T`.
//! The wrappers here replace the contained type's own notion of equality or
//! order with a strategy object:
//!
//! - [`EquatableOptional`]: `Eq + Hash` by an [`EqualityComparer`]
//! - [`ComparableOptional`]: `Ord` by a [`Comparer`], absent ordering first
//!
//! # Examples
//!
//! ```rust
//! use options::Optional;
//! use options::comparison::KeyEquality;
//!
//! let by_length = KeyEquality::new(|text: &String| text.len());
//! let left = Optional::present("abc".to_string()).to_equatable_with(by_length);
//! let right = Optional::present("xyz".to_string()).to_equatable_with(by_length);
//! assert_eq!(left, right);
//! ```

mod comparable;
mod comparer;
mod equatable;

pub use comparable::ComparableOptional;
pub use comparer::{Comparer, EqualityComparer, KeyEquality, NaturalEquality, NaturalOrder};
pub use equatable::EquatableOptional;
