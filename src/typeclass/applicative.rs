//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).ap(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).ap(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.ap(pure(y)) == pure(|f| f(y)).ap(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_algebra::maybe::Maybe;
//! use maybe_algebra::typeclass::Applicative;
//!
//! let width = Maybe::present(3);
//! let height = Maybe::present(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Maybe::present(12));
//! assert_eq!(width.map2(Maybe::<i32>::absent(), |w, h| w * h), Maybe::absent());
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A type class for types that support lifting values and combining contexts.
///
/// The function-application operation is named `ap` here;
/// [`Maybe::apply`] is the inherent form taking the wrapped function as an
/// argument.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    /// use maybe_algebra::typeclass::Applicative;
    ///
    /// let lifted: Maybe<i32> = <Maybe<()> as Applicative>::pure(42);
    /// assert_eq!(lifted, Maybe::present(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    /// use maybe_algebra::typeclass::Applicative;
    ///
    /// let total = Maybe::present(1).map3(Maybe::present(2), Maybe::present(3), |a, b, c| a + b + c);
    /// assert_eq!(total, Maybe::present(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicative values, keeping the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicative values, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function inside `self` to the value inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    /// use maybe_algebra::typeclass::Applicative;
    ///
    /// let increment: Maybe<fn(i32) -> i32> = Maybe::present(|x| x + 1);
    /// assert_eq!(increment.ap(Maybe::present(5)), Maybe::present(6));
    /// ```
    fn ap<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
                Maybe::Present(function(a, b, c))
            }
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn ap<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        other.apply(self)
    }
}
