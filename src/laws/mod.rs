//! Reusable algebraic law suites.
//!
//! Each suite is generic over the type under test: it is instantiated with
//! `proptest` strategies producing inputs and with the operations or
//! equality capability being checked. Every law is a method returning
//! `Ok(())` when it held for all generated cases, or a [`LawViolation`]
//! holding the shrunk counterexample.
//!
//! - [`EqualityLaws`]: an [`Equality`](crate::equality::Equality) is an
//!   equivalence relation
//! - [`HashingLaws`]: `Hash` agrees with `Eq`
//! - [`MonadLaws`]: left identity, right identity, associativity and
//!   map/flat-map coherence
//!
//! # Examples
//!
//! ```rust
//! use maybe_algebra::arbitrary::any_maybe;
//! use maybe_algebra::equality::{CaseInsensitive, maybe};
//! use maybe_algebra::laws::{EqualityLaws, LawConfig};
//!
//! let laws = EqualityLaws::new(any_maybe("[a-zA-Z]{0,3}"), maybe(CaseInsensitive))
//!     .with_config(LawConfig::default().with_cases(64));
//! assert_eq!(laws.check(), Ok(()));
//! ```

mod equality;
mod function;
mod hashing;
mod macros;
mod monad;
mod runner;

use proptest::test_runner::Config;

pub use equality::EqualityLaws;
pub use function::{Fun, fun};
pub use hashing::HashingLaws;
pub use monad::{MaybeMonad, MonadGenerators, MonadLaws, MonadOps};

pub use crate::error::LawViolation;

/// How many cases a law is checked against, and how hard failures are shrunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LawConfig {
    /// Number of successful cases required for a law to pass.
    pub cases: u32,
    /// Upper bound on shrinking steps after a failure.
    pub max_shrink_iters: u32,
}

impl LawConfig {
    /// Returns a copy checking `cases` cases.
    #[must_use]
    pub const fn with_cases(self, cases: u32) -> Self {
        Self { cases, ..self }
    }

    /// Returns a copy performing at most `max_shrink_iters` shrinking steps.
    #[must_use]
    pub const fn with_max_shrink_iters(self, max_shrink_iters: u32) -> Self {
        Self {
            max_shrink_iters,
            ..self
        }
    }

    fn to_proptest(self) -> Config {
        Config {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            failure_persistence: None,
            ..Config::default()
        }
    }
}

impl Default for LawConfig {
    /// Starts from `proptest`'s defaults, so `PROPTEST_CASES` and
    /// `PROPTEST_MAX_SHRINK_ITERS` are honored.
    fn default() -> Self {
        let defaults = Config::default();
        Self {
            cases: defaults.cases,
            max_shrink_iters: defaults.max_shrink_iters,
        }
    }
}
