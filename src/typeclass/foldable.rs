//! Foldable type class - reducing a structure to a summary value.
//!
//! A `Maybe` folds like a sequence of zero or one elements.
//!
//! # Examples
//!
//! ```rust
//! use maybe_algebra::maybe::Maybe;
//! use maybe_algebra::typeclass::Foldable;
//!
//! assert_eq!(Maybe::present(10).fold_left(5, |total, element| total + element), 15);
//! assert_eq!(Maybe::<i32>::absent().fold_left(5, |total, element| total + element), 5);
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for data structures that can be folded to a summary value.
///
/// Only `fold_left` and `fold_right` are required; everything else is
/// derived from `fold_left`.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects every element into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    /// use maybe_algebra::typeclass::Foldable;
    ///
    /// assert_eq!(Maybe::present(4).find(|n| n % 2 == 0), Maybe::present(4));
    /// assert_eq!(Maybe::present(3).find(|n| n % 2 == 0), Maybe::absent());
    /// ```
    fn find<P>(self, mut predicate: P) -> Maybe<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Maybe::Absent, |found, element| match found {
            Maybe::Absent if predicate(&element) => Maybe::Present(element),
            other => other,
        })
    }

    /// Checks whether any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_present()
    }

    /// Checks whether every element satisfies `predicate`.
    ///
    /// Vacuously true for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Present(value) => function(init, value),
            Self::Absent => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Present(value) => function(value, init),
            Self::Absent => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.is_absent()
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        usize::from(self.is_present())
    }

    #[inline]
    fn to_list(self) -> Vec<A> {
        self.into_vec()
    }
}
