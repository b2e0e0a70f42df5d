//! `ComparableOptional` - an optional ordered by a comparison strategy.

use std::cmp::Ordering;
use std::fmt;

use super::comparer::{Comparer, NaturalOrder};
use crate::data::Optional;

/// An optional whose total order comes from a [`Comparer`].
///
/// Absent orders before every present value, and two absent values are equal.
/// Equality is derived from the order: two present values are equal when the
/// comparer returns [`Ordering::Equal`].
///
/// # Examples
///
/// ```rust
/// use options::Optional;
///
/// let mut values = vec![
///     Optional::present(3).to_comparable(),
///     Optional::absent().to_comparable(),
///     Optional::present(1).to_comparable(),
/// ];
/// values.sort();
///
/// let sorted: Vec<_> = values.into_iter().map(|value| value.into_inner()).collect();
/// assert_eq!(
///     sorted,
///     vec![Optional::absent(), Optional::present(1), Optional::present(3)]
/// );
/// ```
#[derive(Clone, Copy)]
pub struct ComparableOptional<T, C = NaturalOrder> {
    option: Optional<T>,
    comparer: C,
}

impl<T, C> ComparableOptional<T, C> {
    /// Wraps `option`, ordering contained values with `comparer`.
    #[inline]
    pub const fn new(option: Optional<T>, comparer: C) -> Self {
        Self { option, comparer }
    }

    /// Eliminates the wrapped optional.
    #[inline]
    pub fn handle<R, P, A>(self, if_present: P, if_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        self.option.handle(if_present, if_absent)
    }

    /// Returns the wrapped optional, dropping the strategy.
    #[inline]
    pub fn into_inner(self) -> Optional<T> {
        self.option
    }
}

impl<T, C: Comparer<T>> Ord for ComparableOptional<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.option.as_option_ref(), other.option.as_option_ref()) {
            (Some(left), Some(right)) => self.comparer.compare(left, right),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T, C: Comparer<T>> PartialOrd for ComparableOptional<T, C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Comparer<T>> PartialEq for ComparableOptional<T, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, C: Comparer<T>> Eq for ComparableOptional<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for ComparableOptional<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ComparableOptional")
            .field(&self.option)
            .finish()
    }
}

impl<T> Optional<T> {
    /// Wraps this optional for ordering by `T`'s own `Ord`.
    #[inline]
    pub fn to_comparable(self) -> ComparableOptional<T>
    where
        T: Ord,
    {
        ComparableOptional::new(self, NaturalOrder)
    }

    /// Wraps this optional for ordering by `comparer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use options::Optional;
    ///
    /// let descending = |left: &i32, right: &i32| right.cmp(left);
    /// let low = Optional::present(1).to_comparable_with(descending);
    /// let high = Optional::present(9).to_comparable_with(descending);
    /// assert!(high < low);
    /// ```
    #[inline]
    pub fn to_comparable_with<C>(self, comparer: C) -> ComparableOptional<T, C>
    where
        C: Comparer<T>,
    {
        ComparableOptional::new(self, comparer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Optional::absent(), Optional::present(i32::MIN), Ordering::Less)]
    #[case(Optional::present(2), Optional::absent(), Ordering::Greater)]
    #[case(Optional::absent(), Optional::absent(), Ordering::Equal)]
    #[case(Optional::present(2), Optional::present(5), Ordering::Less)]
    fn absent_orders_first(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: Ordering,
    ) {
        assert_eq!(left.to_comparable().cmp(&right.to_comparable()), expected);
    }

    #[rstest]
    fn equality_follows_the_comparer() {
        let by_abs = |left: &i32, right: &i32| left.abs().cmp(&right.abs());
        let left = Optional::present(-4).to_comparable_with(by_abs);
        let right = Optional::present(4).to_comparable_with(by_abs);
        assert_eq!(left, right);
    }

    #[rstest]
    fn max_prefers_present_values() {
        let best = [Optional::absent(), Optional::present(7), Optional::present(3)]
            .into_iter()
            .map(Optional::to_comparable)
            .max()
            .map(ComparableOptional::into_inner);
        assert_eq!(best, Some(Optional::present(7)));
    }
}
