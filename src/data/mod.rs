//! Core data types.
//!
//! This module provides the sum types the rest of the crate is built on:
//!
//! - [`Unit`]: The single-valued marker type
//! - [`Optional`]: Zero or one value, eliminated through [`Optional::handle`]
//! - [`Either`]: Exactly one of two values, eliminated through [`Either::handle`]
//! - [`Nullable`]: Types with an explicit null representation
//! - [`fluent`]: Two-step `Either` builders that fix one side's type first
//!
//! # Examples
//!
//! ```rust
//! use options::data::{Either, Optional};
//!
//! let name: Optional<&str> = Optional::from_nullable(Some("ferris"));
//! assert_eq!(name.handle(|value| value.len(), || 0), 6);
//!
//! let parsed: Either<i32, String> = Either::with_second("not a number".to_string());
//! assert_eq!(parsed.handle(|number| number.to_string(), |text| text), "not a number");
//! ```

mod either;
mod error;
pub mod fluent;
mod nullable;
mod optional;
mod unit;

pub use either::Either;
pub use error::{EitherError, NoneError, Side};
pub use nullable::Nullable;
pub use optional::Optional;
pub use unit::Unit;
