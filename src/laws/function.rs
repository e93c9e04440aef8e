//! Randomly generated total functions.
//!
//! Law suites quantify over functions as well as values. A [`Fun`] is a
//! finite lookup table: the argument is hashed with a fixed-key hasher and
//! the hash selects an entry. Equal arguments therefore always map to the
//! same result, and the function shrinks by shrinking its table.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::marker::PhantomData;

use proptest::collection::vec;
use proptest::strategy::Strategy;

/// Largest number of table entries beyond the first one.
const MAX_EXTRA_ENTRIES: usize = 7;

/// A deterministic function from `A` to `B` backed by a lookup table.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::laws::Fun;
///
/// let parity = Fun::<u32, &str>::new("even", vec!["odd"]);
/// assert_eq!(parity.call(&7), parity.call(&7));
///
/// let constant = Fun::<String, i32>::constant(3);
/// assert_eq!(constant.call(&"anything".to_string()), 3);
/// ```
pub struct Fun<A: ?Sized, B> {
    table: Vec<B>,
    argument: PhantomData<fn(&A)>,
}

impl<A: ?Sized, B> Fun<A, B> {
    /// Creates a function whose results are `first` and the entries of `rest`.
    pub fn new(first: B, rest: Vec<B>) -> Self {
        let mut table = Vec::with_capacity(rest.len() + 1);
        table.push(first);
        table.extend(rest);
        Self {
            table,
            argument: PhantomData,
        }
    }

    /// Creates a function that ignores its argument.
    pub fn constant(value: B) -> Self {
        Self::new(value, Vec::new())
    }

    /// The possible results, in table order.
    pub fn table(&self) -> &[B] {
        &self.table
    }
}

impl<A, B> Fun<A, B>
where
    A: Hash + ?Sized,
    B: Clone,
{
    /// Applies the function.
    pub fn call(&self, argument: &A) -> B {
        let mut hasher = DefaultHasher::new();
        argument.hash(&mut hasher);
        let length = self.table.len() as u64;
        #[allow(clippy::cast_possible_truncation)]
        let slot = (hasher.finish() % length) as usize;
        self.table[slot].clone()
    }
}

impl<A: ?Sized, B: Clone> Clone for Fun<A, B> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            argument: PhantomData,
        }
    }
}

impl<A: ?Sized, B: fmt::Debug> fmt::Debug for Fun<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Fun").field(&self.table).finish()
    }
}

/// Strategy for functions `A -> B` whose results are drawn from `results`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::arbitrary::any_maybe;
/// use maybe_algebra::laws::{Fun, fun};
/// use maybe_algebra::maybe::Maybe;
/// use proptest::prelude::*;
/// use proptest::strategy::ValueTree;
/// use proptest::test_runner::TestRunner;
///
/// let mut runner = TestRunner::default();
/// let kleisli: Fun<i32, Maybe<i32>> = fun(any_maybe(any::<i32>()))
///     .new_tree(&mut runner)
///     .unwrap()
///     .current();
/// assert_eq!(kleisli.call(&1), kleisli.call(&1));
/// ```
pub fn fun<A, S>(results: S) -> impl Strategy<Value = Fun<A, S::Value>>
where
    A: ?Sized,
    S: Strategy + Clone,
{
    (results.clone(), vec(results, 0..=MAX_EXTRA_ENTRIES))
        .prop_map(|(first, rest)| Fun::new(first, rest))
}
