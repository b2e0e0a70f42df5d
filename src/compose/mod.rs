//! Comprehension bindings.
//!
//! This module gives [`Optional`](crate::Optional), [`Either`](crate::Either)
//! and deferred options the operator names of a query comprehension, and the
//! [`query!`](crate::query) macro that chains them:
//!
//! - [`Query`]: `select`, `select_many`, `select_many_with` for the eager types
//! - [`QueryWhere`]: the `where_` guard for [`Optional`](crate::Optional)
//! - [`DeferredQuery`]: the same operators, lazily, for every deferred option
//!
//! The operators are renamings of `map`, `bind`, `bind_with` and `filter`.
//!
//! # Examples
//!
//! ```rust
//! use options::compose::{Query, QueryWhere};
//! use options::{Optional, query};
//!
//! let chained = Optional::present(5)
//!     .select_many(|x| Optional::present(6).select(move |y| x + y))
//!     .where_(|sum| *sum > 10);
//!
//! let comprehended = query! {
//!     x <= Optional::present(5);
//!     y <= Optional::present(6);
//!     where x + y > 10;
//!     yield x + y
//! };
//!
//! assert_eq!(chained, comprehended);
//! ```

mod query;
mod query_macro;

pub use query::{DeferredQuery, Query, QueryWhere};
