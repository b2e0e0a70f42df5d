//! Types with an explicit null representation.

use super::optional::Optional;

/// A type whose values may be null-equivalent.
///
/// Only types with an explicit empty representation implement `Nullable`:
/// `Option<T>`, [`Optional<T>`] and raw pointers. Ordinary values have no null
/// state and are always present when wrapped with [`Optional::present`].
///
/// [`Optional::from_nullable`] uses this trait to collapse a null-equivalent
/// value into the absent option.
///
/// # Examples
///
/// ```rust
/// use options::data::Nullable;
///
/// assert_eq!(Some(3).into_value(), Some(3));
/// assert_eq!(None::<i32>.into_value(), None);
/// assert_eq!(std::ptr::null::<u8>().into_value(), None);
/// ```
pub trait Nullable {
    /// The type of a non-null value.
    type Value;

    /// Returns `None` if `self` is null-equivalent, otherwise the value.
    fn into_value(self) -> Option<Self::Value>;

    /// Returns `true` if `self` is null-equivalent.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> Option<T> {
        self
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for Optional<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> Option<T> {
        self.into_option()
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_absent()
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Value = Self;

    #[inline]
    fn into_value(self) -> Option<Self> {
        if self.is_null() { None } else { Some(self) }
    }

    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = Self;

    #[inline]
    fn into_value(self) -> Option<Self> {
        if self.is_null() { None } else { Some(self) }
    }

    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}
