//! Error types for force-extraction and construction failures.

use std::fmt;

/// One of the two sides of an [`Either`](super::Either).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first side.
    First,
    /// The second side.
    Second,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => formatter.write_str("first"),
            Self::Second => formatter.write_str("second"),
        }
    }
}

/// Returned when a value is forced out of an absent [`Optional`](super::Optional).
///
/// # Examples
///
/// ```rust
/// use options::data::{NoneError, Optional};
///
/// let absent: Optional<i32> = Optional::absent();
/// assert_eq!(absent.get_or_none_error(), Err(NoneError));
/// assert_eq!(NoneError.to_string(), "option does not contain a value");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("option does not contain a value")]
pub struct NoneError;

/// Errors raised by [`Either`](super::Either) construction and extraction.
///
/// # Examples
///
/// ```rust
/// use options::data::{Either, EitherError, Side};
///
/// let either: Either<i32, String> = Either::with_first(1);
/// assert_eq!(
///     either.get_second_or_throw(),
///     Err(EitherError::MissingSide { requested: Side::Second })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EitherError {
    /// The requested side is not the active one.
    #[error("tried to get the {requested} value out of an either that does not have one")]
    MissingSide {
        /// The side that was requested.
        requested: Side,
    },
    /// A null-equivalent payload was supplied for the given side.
    #[error("cannot construct an either whose {side} value is null")]
    NullPayload {
        /// The side that received the null payload.
        side: Side,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Side::First, Side::Second)]
    #[case(Side::Second, Side::First)]
    fn opposite_side(#[case] side: Side, #[case] expected: Side) {
        assert_eq!(side.opposite(), expected);
    }

    #[rstest]
    fn missing_side_message_names_the_side() {
        let error = EitherError::MissingSide {
            requested: Side::First,
        };
        assert_eq!(
            error.to_string(),
            "tried to get the first value out of an either that does not have one"
        );
    }

    #[rstest]
    fn null_payload_message_names_the_side() {
        let error = EitherError::NullPayload { side: Side::Second };
        assert_eq!(
            error.to_string(),
            "cannot construct an either whose second value is null"
        );
    }
}
