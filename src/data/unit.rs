//! The unit marker type.

use std::fmt;

/// A value carrying no information.
///
/// `Unit` has exactly one value. Every `Unit` equals every other, hashes the
/// same, and orders as `Equal`. It is the result type of side-effecting
/// eliminations such as [`Optional::act`](crate::Optional::act), and the payload
/// of [`Optional::guard`](crate::Optional::guard).
///
/// # Examples
///
/// ```rust
/// use options::Unit;
///
/// assert_eq!(Unit, Unit::DEFAULT);
/// assert_eq!(Unit.to_string(), "()");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The single `Unit` value.
    pub const DEFAULT: Self = Self;
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
