//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_algebra::maybe::Maybe;
//! use maybe_algebra::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::present(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::present("5".to_string()));
//!
//! // Absent is preserved
//! let transformed: Maybe<String> = Maybe::<i32>::absent().fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::absent());
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::Maybe;
/// use maybe_algebra::typeclass::Functor;
///
/// fn describe<F: Functor<Inner = u8>>(container: F) -> F::WithType<String> {
///     container.fmap(|byte| format!("0x{byte:02x}"))
/// }
///
/// assert_eq!(describe(Maybe::present(255)), Maybe::present("0xff".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    /// use maybe_algebra::typeclass::Functor;
    ///
    /// let name = Maybe::present("hello".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Maybe::present(5));
    /// // name is still available here
    /// assert!(name.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    /// use maybe_algebra::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).replace("replaced"), Maybe::present("replaced"));
    /// assert_eq!(Maybe::<i32>::absent().replace("replaced"), Maybe::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Basic Operations
    // =========================================================================

    #[rstest]
    fn fmap_present() {
        assert_eq!(Maybe::present(5).fmap(|n| n * 2), Maybe::present(10));
    }

    #[rstest]
    fn fmap_absent() {
        assert_eq!(Maybe::<i32>::absent().fmap(|n| n * 2), Maybe::absent());
    }

    #[rstest]
    fn fmap_ref_keeps_original() {
        let original = Maybe::present(vec![1, 2, 3]);
        assert_eq!(original.fmap_ref(Vec::len), Maybe::present(3));
        assert_eq!(original, Maybe::present(vec![1, 2, 3]));
    }

    #[rstest]
    #[case(Maybe::present(1), Maybe::present(()))]
    #[case(Maybe::absent(), Maybe::absent())]
    fn void_keeps_shape(#[case] input: Maybe<i32>, #[case] expected: Maybe<()>) {
        assert_eq!(input.void(), expected);
    }

    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[rstest]
    #[case(Maybe::present(7))]
    #[case(Maybe::absent())]
    fn identity_law(#[case] input: Maybe<i32>) {
        assert_eq!(input.fmap(|value| value), input);
    }

    #[rstest]
    #[case(Maybe::present(7))]
    #[case(Maybe::absent())]
    fn composition_law(#[case] input: Maybe<i32>) {
        let first = |value: i32| value + 1;
        let second = |value: i32| value * 3;
        assert_eq!(
            input.fmap(first).fmap(second),
            input.fmap(|value| second(first(value)))
        );
    }
}
