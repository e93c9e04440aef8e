//! Conditional and lifting constructors for [`Maybe`].

use std::any::Any;

use super::Maybe;

impl<A> Maybe<A> {
    /// Builds a `Present` value only when `condition` holds.
    ///
    /// `producer` is not called when `condition` is `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::when(true, || 1), Maybe::present(1));
    /// assert_eq!(Maybe::when(false, || unreachable!()), Maybe::<i32>::absent());
    /// ```
    #[inline]
    pub fn when<F>(condition: bool, producer: F) -> Self
    where
        F: FnOnce() -> A,
    {
        if condition {
            Self::Present(producer())
        } else {
            Self::Absent
        }
    }

    /// Eager form of [`Maybe::when`].
    #[inline]
    pub fn when_value(condition: bool, value: A) -> Self {
        if condition {
            Self::Present(value)
        } else {
            Self::Absent
        }
    }

    /// Lifts a nullable value.
    ///
    /// Same as `Maybe::from(option)`.
    #[inline]
    pub fn from_nullable(option: Option<A>) -> Self {
        Self::from(option)
    }
}

impl<'a, A: ?Sized> Maybe<&'a A> {
    /// Lifts a reference that may be missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let names = ["ada", "grace"];
    /// assert_eq!(Maybe::from_ref(names.get(1)), Maybe::present(&"grace"));
    /// assert_eq!(Maybe::from_ref(names.get(5)), Maybe::absent());
    /// ```
    #[inline]
    pub fn from_ref(reference: Option<&'a A>) -> Self {
        reference.map_or(Maybe::Absent, Maybe::Present)
    }
}

impl<'a, A: Any> Maybe<&'a A> {
    /// Views a dynamically typed value as `A`, if that is its concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let boxed: Box<dyn Any> = Box::new(7_u8);
    /// assert_eq!(Maybe::<&u8>::downcast_ref(boxed.as_ref()), Maybe::present(&7));
    /// assert!(Maybe::<&String>::downcast_ref(boxed.as_ref()).is_absent());
    /// ```
    #[inline]
    pub fn downcast_ref(value: &'a dyn Any) -> Self {
        Self::from_ref(value.downcast_ref::<A>())
    }
}

/// Applies a wrapped function to a wrapped value.
///
/// Present only if both are present. This is [`Maybe::apply`] with the
/// arguments in applicative order.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::{Maybe, ap};
///
/// let double = Maybe::present(|x: i32| x * 2);
/// assert_eq!(ap(double, Maybe::present(21)), Maybe::present(42));
/// ```
#[inline]
pub fn ap<A, B, F>(wrapped: Maybe<F>, value: Maybe<A>) -> Maybe<B>
where
    F: FnOnce(A) -> B,
{
    value.apply(wrapped)
}
