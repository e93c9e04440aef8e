//! Consistency of `Hash` with `Eq`.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use proptest::prop_assert_eq;
use proptest::strategy::Strategy;

use super::LawConfig;
use super::runner::check_law;
use crate::error::LawViolation;

/// Law suite checking that structurally equal values hash equally.
///
/// Only the implication `x == y => hash(x) == hash(y)` is checked; distinct
/// values are allowed to collide.
///
/// Pairs are drawn independently, so the law is only exercised by pairs that
/// happen to be equal. Over a large domain such pairs are rare and the law
/// passes without testing anything: use strategies with small domains
/// (`bool`, short strings, small ranges) that produce equal but distinct
/// values often.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::arbitrary::any_maybe;
/// use maybe_algebra::laws::HashingLaws;
///
/// let laws = HashingLaws::new(any_maybe(0..3_u16));
/// assert_eq!(laws.check(), Ok(()));
/// ```
#[derive(Debug, Clone)]
pub struct HashingLaws<S, H = RandomState> {
    values: S,
    hasher: H,
    config: LawConfig,
}

impl<S> HashingLaws<S> {
    /// Creates the suite over values drawn from `values`, hashed with the
    /// standard library's `RandomState`.
    pub fn new(values: S) -> Self {
        Self {
            values,
            hasher: RandomState::new(),
            config: LawConfig::default(),
        }
    }
}

impl<S, H> HashingLaws<S, H> {
    /// Hashes with `hasher` instead.
    pub fn with_hasher<G: BuildHasher>(self, hasher: G) -> HashingLaws<S, G> {
        HashingLaws {
            values: self.values,
            hasher,
            config: self.config,
        }
    }

    /// Replaces the runner configuration.
    #[must_use]
    pub fn with_config(self, config: LawConfig) -> Self {
        Self { config, ..self }
    }
}

impl<S, H> HashingLaws<S, H>
where
    S: Strategy,
    S::Value: Eq + Hash,
    H: BuildHasher,
{
    /// `x == y` implies `hash(x) == hash(y)`.
    ///
    /// # Errors
    ///
    /// Returns the violation with the smallest counterexample found.
    pub fn consistent_with_equality(&self) -> Result<(), LawViolation> {
        let pairs = (&self.values, &self.values);
        check_law("consistent_with_equality", self.config, &pairs, |(x, y)| {
            if x == y {
                prop_assert_eq!(self.hasher.hash_one(&x), self.hasher.hash_one(&y));
            }
            Ok(())
        })
    }

    /// Runs every law of the suite.
    ///
    /// # Errors
    ///
    /// Returns the first violated law.
    pub fn check(&self) -> Result<(), LawViolation> {
        self.consistent_with_equality()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::any_maybe;
    use rstest::rstest;
    use std::hash::{BuildHasherDefault, DefaultHasher, Hasher};

    /// Equal whenever the first byte matches, but hashes every byte.
    #[derive(Debug, Clone)]
    struct FirstByte(Vec<u8>);

    impl PartialEq for FirstByte {
        fn eq(&self, other: &Self) -> bool {
            self.0.first() == other.0.first()
        }
    }

    impl Eq for FirstByte {}

    impl Hash for FirstByte {
        fn hash<T: Hasher>(&self, state: &mut T) {
            self.0.hash(state);
        }
    }

    /// Equal when the values agree above the last three decimal digits, but
    /// hashes the whole number.
    #[derive(Debug, Clone, Copy)]
    struct Thousands(u32);

    impl PartialEq for Thousands {
        fn eq(&self, other: &Self) -> bool {
            self.0 / 1000 == other.0 / 1000
        }
    }

    impl Eq for Thousands {}

    impl Hash for Thousands {
        fn hash<T: Hasher>(&self, state: &mut T) {
            self.0.hash(state);
        }
    }

    fn quick() -> LawConfig {
        LawConfig::default().with_cases(128)
    }

    #[rstest]
    fn derived_hash_of_maybe_is_consistent() {
        let laws = HashingLaws::new(any_maybe(any_maybe(0..2_u8))).with_config(quick());
        assert_eq!(laws.check(), Ok(()));
    }

    #[rstest]
    fn custom_hasher_is_used() {
        let laws = HashingLaws::new(any_maybe("[ab]{0,2}"))
            .with_hasher(BuildHasherDefault::<DefaultHasher>::default())
            .with_config(quick());
        assert_eq!(laws.consistent_with_equality(), Ok(()));
    }

    #[rstest]
    fn hash_disagreeing_with_eq_is_reported() {
        let values = proptest::collection::vec(0..2_u8, 1..3).prop_map(FirstByte);
        let violation = HashingLaws::new(values)
            .with_config(quick())
            .check()
            .unwrap_err();
        assert_eq!(violation.law(), "consistent_with_equality");
    }

    #[rstest]
    fn small_domain_exposes_hash_of_ignored_digits() {
        let values = (0..2000_u32).prop_map(Thousands);
        let violation = HashingLaws::new(values)
            .with_config(quick())
            .check()
            .unwrap_err();
        assert_eq!(violation.law(), "consistent_with_equality");
    }
}
