//! Values compared through a type-level equality capability.

use std::fmt;
use std::marker::PhantomData;

use super::Equality;

/// A value compared with the [`Equality`] named by `E`.
///
/// `EqBy` turns an equality capability back into `PartialEq`/`Eq`, so values
/// with custom equality can be used with `assert_eq!`, `Vec::dedup`,
/// `contains` and similar APIs. The capability is part of the type and is
/// obtained through `E::default()`, so every value of one `EqBy` type is
/// compared the same way and `==` is symmetric whenever `E` is.
///
/// `Eq` is implemented on the assumption that `E` is lawful; check it with
/// [`EqualityLaws`](crate::laws::EqualityLaws).
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::equality::{CaseInsensitive, EqBy};
///
/// type Tag = EqBy<String, CaseInsensitive>;
///
/// let tags = vec![Tag::new("Rust".to_string())];
/// assert!(tags.contains(&Tag::new("rust".to_string())));
/// ```
pub struct EqBy<A, E> {
    value: A,
    equality: PhantomData<fn() -> E>,
}

impl<A, E> EqBy<A, E> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self {
            value,
            equality: PhantomData,
        }
    }

    /// Returns the wrapped value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_value(self) -> A {
        self.value
    }
}

impl<A, E> PartialEq for EqBy<A, E>
where
    E: Equality<A> + Default,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        E::default().equal(&self.value, &other.value)
    }
}

impl<A, E> Eq for EqBy<A, E> where E: Equality<A> + Default {}

impl<A: Clone, E> Clone for EqBy<A, E> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<A: Copy, E> Copy for EqBy<A, E> {}

impl<A: Default, E> Default for EqBy<A, E> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<A: fmt::Debug, E> fmt::Debug for EqBy<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("EqBy").field(&self.value).finish()
    }
}

static_assertions::assert_impl_all!(EqBy<u8, super::Structural>: Copy, Eq, Send, Sync);
