//! Maybe type - a value that may or may not be present.
//!
//! This module provides [`Maybe<A>`], which is either `Present(A)` or
//! `Absent`. It plays the same role as `Option<A>`, but exposes the
//! catamorphism-centred API of a functional library: every derived
//! operation can be written in terms of [`Maybe::cata`], and equality can be
//! supplied per call site through an [`Equality`] capability instead of being
//! fixed by `PartialEq`.
//!
//! # Examples
//!
//! ```rust
//! use maybe_algebra::maybe::Maybe;
//!
//! let five = Maybe::present(5);
//! assert_eq!(five.map(|value| value + 1), Maybe::present(6));
//!
//! let nothing: Maybe<i32> = Maybe::absent();
//! assert_eq!(nothing.value_or(0), 0);
//!
//! // `cata` is the elimination primitive
//! let description = Maybe::present("ready").cata(|| "waiting".to_string(), str::to_uppercase);
//! assert_eq!(description, "READY");
//! ```

mod construct;
mod iter;
mod recover;
mod sequence;

#[cfg(feature = "serde")]
mod serialize;

pub use construct::ap;
pub use iter::{IntoIter, Iter};
pub use recover::{recover, recover_any, recover_panic};
pub use sequence::{MaybeLookup, first, lookup, sequence, traverse};

use std::fmt;
use std::ops::BitOr;

use crate::equality::Equality;
use crate::error::EmptyValueError;

/// A value of type `A`, or nothing.
///
/// `Maybe<A>` has pure value semantics: equality, ordering and hashing are
/// structural and derived from `A`. `Absent` orders before any `Present`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::Maybe;
///
/// let parsed: Maybe<i32> = Maybe::from("42".parse::<i32>().ok());
/// let doubled = parsed.flat_map(|n| Maybe::when(n > 0, || n * 2));
/// assert_eq!(doubled, Maybe::Present(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// No value.
    Absent,
    /// A value of type `A`.
    Present(A),
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` in the `Present` state.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// Returns the `Absent` state.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Lifts a value into `Maybe`. Same as [`Maybe::present`].
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Present(value)
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Maybe` by handling both states.
    ///
    /// `on_absent` runs only for `Absent` and `on_present` only for
    /// `Present`; exactly one of them is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let length = Maybe::present("four").cata(|| 0, str::len);
    /// assert_eq!(length, 4);
    ///
    /// let length = Maybe::<&str>::absent().cata(|| 0, str::len);
    /// assert_eq!(length, 0);
    /// ```
    #[inline]
    pub fn cata<B, N, J>(self, on_absent: N, on_present: J) -> B
    where
        N: FnOnce() -> B,
        J: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Mutably borrows the payload.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the payload, leaving `Absent` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).map(|x| x + 1), Maybe::present(6));
    /// assert_eq!(Maybe::<i32>::absent().map(|x| x + 1), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation that may itself produce `Absent`.
    ///
    /// On `Present` the result is entirely whatever `function` returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let half = |n: i32| Maybe::when(n % 2 == 0, || n / 2);
    /// assert_eq!(Maybe::present(8).flat_map(half), Maybe::present(4));
    /// assert_eq!(Maybe::present(7).flat_map(half), Maybe::absent());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Runs `function` only to decide presence, keeping the original payload.
    ///
    /// Equivalent to `flat_map(|a| function(&a).map(|_| a))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let non_empty = |name: &String| Maybe::when(!name.is_empty(), || ());
    /// assert_eq!(
    ///     Maybe::present("ada".to_string()).flat_map_for_effect(non_empty),
    ///     Maybe::present("ada".to_string())
    /// );
    /// assert_eq!(
    ///     Maybe::present(String::new()).flat_map_for_effect(non_empty),
    ///     Maybe::absent()
    /// );
    /// ```
    #[inline]
    pub fn flat_map_for_effect<B, F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> Maybe<B>,
    {
        self.flat_map(|value| function(&value).map(|_| value))
    }

    /// Comprehension-style chaining: binds `first`, then combines both values.
    ///
    /// Equivalent to `flat_map(|a| first(&a).map(|b| combine(a, b)))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let result = Maybe::present(3).select_many(
    ///     |n| Maybe::present(n * 10),
    ///     |n, tens| n + tens,
    /// );
    /// assert_eq!(result, Maybe::present(33));
    /// ```
    #[inline]
    pub fn select_many<B, C, F, G>(self, first: F, combine: G) -> Maybe<C>
    where
        F: FnOnce(&A) -> Maybe<B>,
        G: FnOnce(A, B) -> C,
    {
        self.flat_map(|value| first(&value).map(|bound| combine(value, bound)))
    }

    /// Combines two `Maybe`s; present only if both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let sum = Maybe::present(2).zip_with(Maybe::present(3), |a, b| a + b);
    /// assert_eq!(sum, Maybe::present(5));
    ///
    /// let sum = Maybe::present(2).zip_with(Maybe::<i32>::absent(), |a, b| a + b);
    /// assert_eq!(sum, Maybe::absent());
    /// ```
    #[inline]
    pub fn zip_with<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => Maybe::Present(function(left, right)),
            _ => Maybe::Absent,
        }
    }

    /// Pairs two `Maybe`s; present only if both are present.
    #[inline]
    pub fn zip<B>(self, other: Maybe<B>) -> Maybe<(A, B)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Applies a wrapped function to this value.
    ///
    /// Present only if both the function and the value are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let increment = Maybe::present(|x: i32| x + 1);
    /// assert_eq!(Maybe::present(41).apply(increment), Maybe::present(42));
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::absent();
    /// assert_eq!(Maybe::present(41).apply(missing), Maybe::absent());
    /// ```
    #[inline]
    pub fn apply<B, F>(self, wrapped: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        wrapped.flat_map(|function| self.map(function))
    }

    /// Traverses the payload with a function producing a sequence.
    ///
    /// On `Present`, every element produced by `function` is wrapped in
    /// `Present`, keeping length and order. On `Absent`, the result is the
    /// single-element sequence `[Absent]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let digits = Maybe::present(123).traverse(|n: u32| {
    ///     n.to_string().chars().filter_map(|c| c.to_digit(10)).collect::<Vec<_>>()
    /// });
    /// assert_eq!(
    ///     digits,
    ///     vec![Maybe::present(1), Maybe::present(2), Maybe::present(3)]
    /// );
    ///
    /// let nothing = Maybe::<u32>::absent().traverse(|n| vec![n]);
    /// assert_eq!(nothing, vec![Maybe::absent()]);
    /// ```
    pub fn traverse<B, I, F>(self, function: F) -> Vec<Maybe<B>>
    where
        F: FnOnce(A) -> I,
        I: IntoIterator<Item = B>,
    {
        match self {
            Self::Present(value) => function(value).into_iter().map(Maybe::Present).collect(),
            Self::Absent => vec![Maybe::Absent],
        }
    }

    /// Keeps the payload only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(3).filter(|x| *x > 5), Maybe::absent());
    /// assert_eq!(Maybe::present(8).filter(|x| *x > 5), Maybe::present(8));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Alternatives and Extraction
    // =========================================================================

    /// Returns `self` if present, otherwise `fallback`.
    ///
    /// `fallback` is evaluated eagerly by the caller; use [`Maybe::or_else`]
    /// when building it is expensive.
    #[inline]
    pub fn or(self, fallback: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => fallback,
        }
    }

    /// Returns `self` if present, otherwise the result of `fallback`.
    ///
    /// `fallback` is never called when `self` is present and called exactly
    /// once when it is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let mut calls = 0;
    /// let value = Maybe::present(1).or_else(|| {
    ///     calls += 1;
    ///     Maybe::present(2)
    /// });
    /// assert_eq!(value, Maybe::present(1));
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => fallback(),
        }
    }

    /// Returns the payload, or `default` when absent.
    #[inline]
    pub fn value_or(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the payload, or the result of `default` when absent.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Returns the payload, or [`EmptyValueError`] when absent.
    ///
    /// This is the escape hatch out of `Maybe`. Prefer [`Maybe::cata`],
    /// [`Maybe::value_or`] or pattern matching, which cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if `self` is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::error::EmptyValueError;
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(7).value_or_fail(), Ok(7));
    /// assert_eq!(Maybe::<i32>::absent().value_or_fail(), Err(EmptyValueError));
    /// ```
    #[inline]
    pub fn value_or_fail(self) -> Result<A, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueError),
        }
    }

    // =========================================================================
    // Equality
    // =========================================================================

    /// Compares two `Maybe`s using an explicit equality capability for `A`.
    ///
    /// Two values are equal when both are absent, or both are present with
    /// payloads equal under `equality`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::equality::ByKey;
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// let case_insensitive = ByKey::new(|name: &&str| name.to_lowercase());
    /// let left = Maybe::present("Ada");
    /// let right = Maybe::present("ADA");
    /// assert!(left.equal(&right, &case_insensitive));
    /// assert_ne!(left, right);
    /// ```
    #[inline]
    pub fn equal<E>(&self, other: &Self, equality: &E) -> bool
    where
        E: Equality<A> + ?Sized,
    {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => equality.equal(left, right),
            (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a zero-or-one-element `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present('a').into_vec(), vec!['a']);
    /// assert!(Maybe::<char>::absent().into_vec().is_empty());
    /// ```
    #[inline]
    pub fn into_vec(self) -> Vec<A> {
        self.into_iter().collect()
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<A> Maybe<&A> {
    /// Copies the borrowed payload.
    #[inline]
    pub fn copied(self) -> Maybe<A>
    where
        A: Copy,
    {
        self.map(|value| *value)
    }

    /// Clones the borrowed payload.
    #[inline]
    pub fn cloned(self) -> Maybe<A>
    where
        A: Clone,
    {
        self.map(Clone::clone)
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::present(Maybe::present(1)).flatten(), Maybe::present(1));
    /// assert_eq!(Maybe::present(Maybe::<i32>::absent()).flatten(), Maybe::absent());
    /// assert_eq!(Maybe::<Maybe<i32>>::absent().flatten(), Maybe::absent());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.value_or(Maybe::Absent)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

/// `left | right` keeps `left` if present, otherwise takes `right`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::Maybe;
///
/// assert_eq!(Maybe::absent() | Maybe::present(2), Maybe::present(2));
/// assert_eq!(Maybe::present(1) | Maybe::present(2), Maybe::present(1));
/// ```
impl<A> BitOr for Maybe<A> {
    type Output = Self;

    #[inline]
    fn bitor(self, fallback: Self) -> Self {
        self.or(fallback)
    }
}

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
