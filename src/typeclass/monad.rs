//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! These laws are checked for [`Maybe`] with generated inputs by
//! [`MonadLaws`](crate::laws::MonadLaws).

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::Maybe;
/// use maybe_algebra::typeclass::Monad;
///
/// fn halve(n: i32) -> Maybe<i32> {
///     if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::absent() }
/// }
///
/// let quarter = Monad::flat_map(Monad::flat_map(Maybe::present(20), halve), halve);
/// assert_eq!(quarter, Maybe::present(5));
/// assert_eq!(Maybe::present(3).and_then(halve), Maybe::absent());
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a new context and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    /// use maybe_algebra::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::present(5).then(Maybe::present("next")), Maybe::present("next"));
    /// assert_eq!(Maybe::<i32>::absent().then(Maybe::present("next")), Maybe::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reciprocal(value: i32) -> Maybe<f64> {
        Maybe::when(value != 0, || 1.0 / f64::from(value))
    }

    // =========================================================================
    // Basic Operations
    // =========================================================================

    #[rstest]
    #[case(Maybe::present(4), Maybe::present(0.25))]
    #[case(Maybe::present(0), Maybe::absent())]
    #[case(Maybe::absent(), Maybe::absent())]
    fn flat_map_through_trait(#[case] input: Maybe<i32>, #[case] expected: Maybe<f64>) {
        assert_eq!(Monad::flat_map(input, reciprocal), expected);
    }

    #[rstest]
    fn and_then_alias() {
        assert_eq!(Maybe::present(2).and_then(reciprocal), Maybe::present(0.5));
    }

    #[rstest]
    fn then_requires_first_present() {
        assert_eq!(Maybe::present(()).then(Maybe::present(1)), Maybe::present(1));
        assert_eq!(Maybe::<()>::absent().then(Maybe::present(1)), Maybe::absent());
        assert_eq!(Maybe::present(()).then(Maybe::<i32>::absent()), Maybe::absent());
    }

    // =========================================================================
    // Monad Laws
    // =========================================================================

    #[rstest]
    #[case(4)]
    #[case(0)]
    fn left_identity_law(#[case] value: i32) {
        let lifted: Maybe<i32> = <Maybe<()> as super::Applicative>::pure(value);
        assert_eq!(Monad::flat_map(lifted, reciprocal), reciprocal(value));
    }

    #[rstest]
    #[case(Maybe::present(4))]
    #[case(Maybe::absent())]
    fn right_identity_law(#[case] input: Maybe<i32>) {
        assert_eq!(Monad::flat_map(input, Maybe::present), input);
    }

    #[rstest]
    #[case(Maybe::present(4))]
    #[case(Maybe::present(0))]
    #[case(Maybe::absent())]
    fn associativity_law(#[case] input: Maybe<i32>) {
        let positive = |x: f64| Maybe::when(x > 0.0, || x.sqrt());
        let left = Monad::flat_map(Monad::flat_map(input, reciprocal), positive);
        let right = Monad::flat_map(input, |x| Monad::flat_map(reciprocal(x), positive));
        assert_eq!(left, right);
    }
}
