//! Iteration over the zero-or-one elements of a [`Maybe`].

use std::iter::FusedIterator;

use super::Maybe;

/// Borrowing iterator over a [`Maybe`], created by [`Maybe::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

/// Owning iterator over a [`Maybe`], created by `into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Maybe<A> {
    /// Iterates over the payload, yielding at most one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let total: i32 = [Maybe::present(1), Maybe::absent(), Maybe::present(5)]
    ///     .iter()
    ///     .flat_map(Maybe::iter)
    ///     .sum();
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            inner: self.as_ref().into_option(),
        }
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<&'a A> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<A> DoubleEndedIterator for Iter<'_, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<A> ExactSizeIterator for Iter<'_, A> {}

impl<A> FusedIterator for Iter<'_, A> {}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> Option<A> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<A> DoubleEndedIterator for IntoIter<A> {
    #[inline]
    fn next_back(&mut self) -> Option<A> {
        self.inner.take()
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}

impl<A> FusedIterator for IntoIter<A> {}

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    #[inline]
    fn into_iter(self) -> IntoIter<A> {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    #[inline]
    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}
