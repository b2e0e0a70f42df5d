//! Comprehension syntax over optionals, eithers and deferred options.
//!
//! The `query!` macro turns a sequence of binding steps into nested
//! `select_many` calls, with `select` for a final `yield`.
//!
//! # Syntax
//!
//! ```text
//! query! {
//!     pattern <= source;     // bind the value of source (select_many)
//!     let pattern = expr;    // pure binding
//!     where condition;       // guard, optionals only
//!     yield result           // project the last step (select)
//! }
//! ```
//!
//! Instead of `yield`, the block may end with any expression of the
//! container type, which becomes the result of the innermost step.
//!
//! Patterns may be identifiers, tuples or `_`.
//!
//! # Guards
//!
//! `where condition;` expands to `Optional::guard(condition)` chained into the
//! rest of the block, so it only type-checks when the rest of the block
//! produces an [`Optional`](crate::Optional).
//!
//! # Deferred Options
//!
//! Over deferred options every step closure must be `Fn`, because the
//! pipeline runs again on each evaluation. Sources used inside a closure must
//! therefore be `Copy`; bind a reference (`let source = &deferred;`) outside
//! the macro when they are not.

/// Comprehension syntax for [`Optional`](crate::Optional),
/// [`Either`](crate::Either) and every
/// [`DeferredOption`](crate::control::DeferredOption).
///
/// # Examples
///
/// ```rust
/// use options::{Optional, query};
///
/// let sum = query! {
///     x <= Optional::present(5);
///     y <= Optional::present(6);
///     where x < y;
///     yield x + y
/// };
/// assert_eq!(sum, Optional::present(11));
///
/// let missing: Optional<i32> = query! {
///     x <= Optional::present(5);
///     y <= Optional::<i32>::absent();
///     yield x + y
/// };
/// assert_eq!(missing, Optional::absent());
/// ```
///
/// Either comprehensions stop at the first second value:
///
/// ```rust
/// use options::{Either, query};
///
/// let parse = |text: &str| -> Either<i32, String> {
///     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
/// };
///
/// let total = query! {
///     a <= parse("1");
///     b <= parse("x");
///     yield a + b
/// };
/// assert_eq!(total, Either::with_second("not a number: x".to_string()));
/// ```
#[macro_export]
macro_rules! query {
    // =========================================================================
    // Final projection
    // =========================================================================

    ($pattern:ident <= $source:expr ; yield $result:expr $(;)?) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select(move |$pattern| $result)
    }};

    (($($pattern:tt)*) <= $source:expr ; yield $result:expr $(;)?) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select(move |($($pattern)*)| $result)
    }};

    (_ <= $source:expr ; yield $result:expr $(;)?) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select(move |_| $result)
    }};

    (where $condition:expr ; yield $result:expr $(;)?) => {{
        use $crate::compose::Query as _;
        $crate::Optional::guard($condition).select(move |_| $result)
    }};

    // Pure bindings between the last step and `yield` move into the projection.

    (
        $pattern:ident <= $source:expr ;
        $(let $bound:pat = $value:expr ;)+
        yield $result:expr $(;)?
    ) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select(move |$pattern| {
            $(let $bound = $value;)+
            $result
        })
    }};

    (
        ($($pattern:tt)*) <= $source:expr ;
        $(let $bound:pat = $value:expr ;)+
        yield $result:expr $(;)?
    ) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select(move |($($pattern)*)| {
            $(let $bound = $value;)+
            $result
        })
    }};

    (
        _ <= $source:expr ;
        $(let $bound:pat = $value:expr ;)+
        yield $result:expr $(;)?
    ) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select(move |_| {
            $(let $bound = $value;)+
            $result
        })
    }};

    (
        where $condition:expr ;
        $(let $bound:pat = $value:expr ;)+
        yield $result:expr $(;)?
    ) => {{
        use $crate::compose::Query as _;
        $crate::Optional::guard($condition).select(move |_| {
            $(let $bound = $value;)+
            $result
        })
    }};

    // =========================================================================
    // Binding steps
    // =========================================================================

    ($pattern:ident <= $source:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select_many(move |$pattern| $crate::query!($($rest)+))
    }};

    (($($pattern:tt)*) <= $source:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select_many(move |($($pattern)*)| $crate::query!($($rest)+))
    }};

    (_ <= $source:expr ; $($rest:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::compose::{DeferredQuery as _, Query as _};
        ($source).select_many(move |_| $crate::query!($($rest)+))
    }};

    (where $condition:expr ; $($rest:tt)+) => {{
        use $crate::compose::Query as _;
        $crate::Optional::guard($condition).select_many(move |_| $crate::query!($($rest)+))
    }};

    // =========================================================================
    // Pure bindings
    // =========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::query!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::query!($($rest)+)
    }};

    // =========================================================================
    // Final expression
    // =========================================================================

    ($result:expr) => {
        $result
    };
}
