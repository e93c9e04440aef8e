//! Sequence and collection helpers for [`Maybe`].
//!
//! These functions connect `Maybe` with iterators and collections:
//!
//! - [`sequence`] / [`traverse`]: many `Maybe`s into one `Maybe` of a `Vec`
//! - [`Maybe::sequence`]: one `Maybe` of a collection into many `Maybe`s
//! - [`lookup`] / [`MaybeLookup`]: key lookup that returns `Absent` instead of failing
//! - [`first`]: the first element of a sequence, or `Absent` if it is empty

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::Maybe;

/// Collects a sequence of `Maybe`s into a `Maybe` of all payloads.
///
/// The result is `Present` iff every element is `Present`; payloads keep
/// their original order. Iteration stops at the first `Absent`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::{Maybe, sequence};
///
/// let all = sequence([Maybe::present(1), Maybe::present(2), Maybe::present(3)]);
/// assert_eq!(all, Maybe::present(vec![1, 2, 3]));
///
/// let gap = sequence([Maybe::present(1), Maybe::absent(), Maybe::present(3)]);
/// assert_eq!(gap, Maybe::absent());
/// ```
pub fn sequence<A, I>(maybes: I) -> Maybe<Vec<A>>
where
    I: IntoIterator<Item = Maybe<A>>,
{
    maybes.into_iter().collect()
}

/// Maps every element to a `Maybe` and collects the payloads.
///
/// Equivalent to `sequence(elements.map(function))`, without the
/// intermediate collection. `function` is not called after the first
/// `Absent`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::{Maybe, traverse};
///
/// let parse = |text: &str| Maybe::from(text.parse::<u8>().ok());
/// assert_eq!(traverse(["1", "2"], parse), Maybe::present(vec![1, 2]));
/// assert_eq!(traverse(["1", "x"], parse), Maybe::absent());
/// ```
pub fn traverse<A, B, I, F>(elements: I, function: F) -> Maybe<Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Maybe<B>,
{
    elements.into_iter().map(function).collect()
}

/// Returns the first element, or `Absent` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::{Maybe, first};
///
/// assert_eq!(first(vec![3, 4]), Maybe::present(3));
/// assert_eq!(first(Vec::<i32>::new()), Maybe::absent());
/// ```
pub fn first<I>(elements: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    elements.into_iter().next().into()
}

/// Looks up `key`, returning `Absent` when it is missing.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use maybe_algebra::maybe::{Maybe, lookup};
///
/// let ages = HashMap::from([("ada", 36)]);
/// assert_eq!(lookup(&ages, "ada"), Maybe::present(&36));
/// assert_eq!(lookup(&ages, "alan"), Maybe::absent());
/// ```
pub fn lookup<'a, M, Q>(container: &'a M, key: &Q) -> Maybe<&'a M::Value>
where
    M: MaybeLookup<Q> + ?Sized,
    Q: ?Sized,
{
    container.maybe_get(key)
}

/// Containers that support lookup returning [`Maybe`].
pub trait MaybeLookup<Q: ?Sized> {
    /// The type of the stored values.
    type Value;

    /// Returns the value stored under `key`, or `Absent`.
    fn maybe_get(&self, key: &Q) -> Maybe<&Self::Value>;
}

impl<K, V, S, Q> MaybeLookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn maybe_get(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_ref(self.get(key))
    }
}

impl<K, V, Q> MaybeLookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn maybe_get(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_ref(self.get(key))
    }
}

impl<V> MaybeLookup<usize> for [V] {
    type Value = V;

    #[inline]
    fn maybe_get(&self, index: &usize) -> Maybe<&V> {
        Maybe::from_ref(self.get(*index))
    }
}

impl<V> MaybeLookup<usize> for Vec<V> {
    type Value = V;

    #[inline]
    fn maybe_get(&self, index: &usize) -> Maybe<&V> {
        self.as_slice().maybe_get(index)
    }
}

impl<I: IntoIterator> Maybe<I> {
    /// Turns a `Maybe` of a collection into a `Vec` of `Maybe`s.
    ///
    /// This is `traverse` with the identity function: `Absent` becomes
    /// `[Absent]`, and `Present(items)` becomes one `Present` per item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_algebra::maybe::Maybe;
    ///
    /// assert_eq!(
    ///     Maybe::present(vec![1, 2]).sequence(),
    ///     vec![Maybe::present(1), Maybe::present(2)]
    /// );
    /// assert_eq!(Maybe::<Vec<i32>>::absent().sequence(), vec![Maybe::absent()]);
    /// ```
    #[inline]
    pub fn sequence(self) -> Vec<Maybe<I::Item>> {
        self.traverse(|items| items)
    }
}

/// Collects an iterator of `Maybe<A>` into `Maybe<V>`.
///
/// Present iff every element is present, preserving order.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::maybe::Maybe;
///
/// let text: Maybe<String> = ["a", "b"].into_iter().map(Maybe::present).collect();
/// assert_eq!(text, Maybe::present("ab".to_string()));
/// ```
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        iterable
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}
