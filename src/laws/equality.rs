//! Equivalence-relation laws for an [`Equality`] capability.

use proptest::prop_assert;
use proptest::strategy::Strategy;

use super::LawConfig;
use super::runner::check_law;
use crate::equality::Equality;
use crate::error::LawViolation;

/// Law suite checking that an [`Equality`] is reflexive, symmetric and
/// transitive over the values produced by a strategy.
///
/// Transitivity is only exercised by triples that happen to be pairwise
/// equal, so strategies with small domains (`bool`, short strings, small
/// ranges) give the strongest check.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::arbitrary::any_maybe;
/// use maybe_algebra::equality::{Structural, maybe};
/// use maybe_algebra::laws::EqualityLaws;
/// use proptest::prelude::any;
///
/// let laws = EqualityLaws::new(any_maybe(any::<bool>()), maybe(Structural));
/// assert_eq!(laws.check(), Ok(()));
/// ```
#[derive(Debug, Clone)]
pub struct EqualityLaws<S, E> {
    values: S,
    equality: E,
    config: LawConfig,
}

impl<S, E> EqualityLaws<S, E>
where
    S: Strategy,
    E: Equality<S::Value>,
{
    /// Creates the suite for `equality` over values drawn from `values`.
    pub fn new(values: S, equality: E) -> Self {
        Self {
            values,
            equality,
            config: LawConfig::default(),
        }
    }

    /// Replaces the runner configuration.
    #[must_use]
    pub fn with_config(self, config: LawConfig) -> Self {
        Self { config, ..self }
    }

    /// `equal(x, x)` for every `x`.
    ///
    /// # Errors
    ///
    /// Returns the violation with the smallest counterexample found.
    pub fn reflexive(&self) -> Result<(), LawViolation> {
        check_law("reflexive", self.config, &self.values, |x| {
            prop_assert!(self.equality.equal(&x, &x), "value is not equal to itself");
            Ok(())
        })
    }

    /// `equal(x, y) == equal(y, x)` for every `x`, `y`.
    ///
    /// # Errors
    ///
    /// Returns the violation with the smallest counterexample found.
    pub fn symmetric(&self) -> Result<(), LawViolation> {
        check_law("symmetric", self.config, &(&self.values, &self.values), |(x, y)| {
            let forward = self.equality.equal(&x, &y);
            let backward = self.equality.equal(&y, &x);
            prop_assert!(
                forward == backward,
                "equal(x, y) = {} but equal(y, x) = {}",
                forward,
                backward
            );
            Ok(())
        })
    }

    /// `equal(x, y) && equal(y, z)` implies `equal(x, z)`.
    ///
    /// # Errors
    ///
    /// Returns the violation with the smallest counterexample found.
    pub fn transitive(&self) -> Result<(), LawViolation> {
        let triples = (&self.values, &self.values, &self.values);
        check_law("transitive", self.config, &triples, |(x, y, z)| {
            if self.equality.equal(&x, &y) && self.equality.equal(&y, &z) {
                prop_assert!(self.equality.equal(&x, &z), "x = y and y = z but x != z");
            }
            Ok(())
        })
    }

    /// Runs every law in order, stopping at the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first violated law.
    pub fn check(&self) -> Result<(), LawViolation> {
        self.reflexive()?;
        self.symmetric()?;
        self.transitive()
    }
}
