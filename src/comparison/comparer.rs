//! Equality and ordering strategies.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A strategy deciding when two values are equal.
///
/// Implementations must keep `hash_value` consistent with `equals`: values
/// that compare equal must feed the same data to the hasher.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if `left` and `right` are equal under this strategy.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Feeds the parts of `value` that `equals` inspects into `state`.
    fn hash_value<H: Hasher>(&self, value: &T, state: &mut H);
}

/// Equality through the type's own `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEquality;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for NaturalEquality {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash_value<H: Hasher>(&self, value: &T, state: &mut H) {
        value.hash(state);
    }
}

/// Equality of a key projected out of each value.
///
/// # Examples
///
/// ```rust
/// use options::comparison::{EqualityComparer, KeyEquality};
///
/// let case_insensitive = KeyEquality::new(|text: &&str| text.to_lowercase());
/// assert!(case_insensitive.equals(&"Rust", &"rust"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyEquality<F> {
    key: F,
}

impl<F> KeyEquality<F> {
    /// Creates a strategy comparing the keys produced by `key`.
    #[inline]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> EqualityComparer<T> for KeyEquality<F>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.key)(left) == (self.key)(right)
    }

    #[inline]
    fn hash_value<H: Hasher>(&self, value: &T, state: &mut H) {
        (self.key)(value).hash(state);
    }
}

/// A strategy deciding the order of two values.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparer.
pub trait Comparer<T: ?Sized> {
    /// Orders `left` relative to `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// Ordering through the type's own `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}
