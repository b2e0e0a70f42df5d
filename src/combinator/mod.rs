//! Combinators over [`Optional`](crate::Optional) and [`Either`](crate::Either).
//!
//! Every combinator here is written in terms of the elimination operators
//! `Optional::handle` and `Either::handle`; none of them inspects the internal
//! representation.
//!
//! # Laws
//!
//! ```text
//! option.map(|x| x) == option
//! option.map(f).map(g) == option.map(|x| g(f(x)))
//! Optional::absent().bind(f) == Optional::absent()   // f is never called
//! either.swap().swap() == either
//! ```
//!
//! # Examples
//!
//! ```rust
//! use options::combinator::{coalesce, zip};
//! use options::Optional;
//!
//! let pair = zip(Optional::present(5), Optional::present(6));
//! assert_eq!(pair, Optional::present((5, 6)));
//!
//! let first = coalesce([Optional::absent(), Optional::present(2), Optional::present(3)]);
//! assert_eq!(first, Optional::present(2));
//! ```

mod either;
mod optional;

pub use optional::{coalesce, zip};
