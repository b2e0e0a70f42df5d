//! `EquatableOptional` - an optional compared by an equality strategy.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::comparer::{EqualityComparer, NaturalEquality};
use crate::data::Optional;

/// An optional whose `PartialEq`, `Eq` and `Hash` come from an
/// [`EqualityComparer`].
///
/// Two absent values are equal. An absent value never equals a present one.
/// Absent values all feed the same single byte to the hasher.
///
/// Comparisons use the left operand's strategy.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
/// * `E` - The equality strategy
///
/// # Examples
///
/// ```rust
/// use options::Optional;
/// use std::collections::HashSet;
///
/// let set: HashSet<_> = [
///     Optional::present(1).to_equatable(),
///     Optional::absent().to_equatable(),
///     Optional::present(1).to_equatable(),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct EquatableOptional<T, E = NaturalEquality> {
    option: Optional<T>,
    comparer: E,
}

impl<T, E> EquatableOptional<T, E> {
    /// Wraps `option`, comparing contained values with `comparer`.
    #[inline]
    pub const fn new(option: Optional<T>, comparer: E) -> Self {
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

impl<T, E: EqualityComparer<T>> PartialEq for EquatableOptional<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.option.handle_ref(
            |left| {
                other
                    .option
                    .handle_ref(|right| self.comparer.equals(left, right), || false)
            },
            || other.option.is_absent(),
        )
    }
}

impl<T, E: EqualityComparer<T>> Eq for EquatableOptional<T, E> {}

impl<T, E: EqualityComparer<T>> Hash for EquatableOptional<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.option.as_option_ref() {
            Some(value) => {
                state.write_u8(1);
                self.comparer.hash_value(value, state);
            }
            None => state.write_u8(0),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for EquatableOptional<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("EquatableOptional")
            .field(&self.option)
            .finish()
    }
}

impl<T> Optional<T> {
    /// Wraps this optional for comparison by `T`'s own `Eq` and `Hash`.
    #[inline]
    pub fn to_equatable(self) -> EquatableOptional<T>
    where
        T: Eq + Hash,
    {
        EquatableOptional::new(self, NaturalEquality)
    }

    /// Wraps this optional for comparison by `comparer`.
    #[inline]
    pub fn to_equatable_with<E>(self, comparer: E) -> EquatableOptional<T, E>
    where
        E: EqualityComparer<T>,
    {
        EquatableOptional::new(self, comparer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::KeyEquality;
    use rstest::rstest;
    use std::hash::DefaultHasher;

    fn hash_of<V: Hash>(value: &V) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(Optional::present(1), Optional::present(1), true)]
    #[case(Optional::present(1), Optional::present(2), false)]
    #[case(Optional::present(1), Optional::absent(), false)]
    #[case(Optional::absent(), Optional::present(1), false)]
    #[case(Optional::absent(), Optional::absent(), true)]
    fn natural_equality_table(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(left.to_equatable() == right.to_equatable(), expected);
    }

    #[rstest]
    fn absent_values_hash_identically() {
        let left: EquatableOptional<String> = Optional::absent().to_equatable();
        let right: EquatableOptional<String> = Optional::absent().to_equatable();
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[rstest]
    fn key_strategy_drives_equality_and_hash() {
        let by_length = KeyEquality::new(|text: &&str| text.len());
        let left = Optional::present("one").to_equatable_with(by_length);
        let right = Optional::present("two").to_equatable_with(by_length);

        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[rstest]
    fn unwrapping_keeps_the_value() {
        let wrapped = Optional::present(9).to_equatable();
        assert_eq!(wrapped.handle(|x| x + 1, || 0), 10);
        let unwrapped = Optional::present(9).to_equatable().into_inner();
        assert_eq!(unwrapped, Optional::present(9));
    }
}
