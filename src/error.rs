//! Error types for the crate.
//!
//! The optional value type is total except for one escape hatch,
//! [`Maybe::value_or_fail`](crate::maybe::Maybe::value_or_fail), which reports
//! an [`EmptyValueError`] instead of panicking. The law suites report
//! [`LawViolation`] when a property is falsified.

use thiserror::Error;

/// Returned when a value is demanded from an absent [`Maybe`](crate::maybe::Maybe).
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::error::EmptyValueError;
/// use maybe_algebra::maybe::Maybe;
///
/// let empty: Maybe<i32> = Maybe::absent();
/// assert_eq!(empty.value_or_fail(), Err(EmptyValueError));
/// assert_eq!(
///     EmptyValueError.to_string(),
///     "attempted to take the value of an absent Maybe"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("attempted to take the value of an absent Maybe")]
pub struct EmptyValueError;

/// A law that did not hold for some generated input.
///
/// `Falsified` carries the shrunk counterexample, rendered with `Debug`, so
/// the report does not depend on the generic value type of the suite.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::error::LawViolation;
///
/// let violation = LawViolation::Falsified {
///     law: "reflexive",
///     counterexample: "Present(NaN)".to_string(),
///     reason: "x is not equal to itself".to_string(),
/// };
/// assert_eq!(violation.law(), "reflexive");
/// assert_eq!(
///     violation.to_string(),
///     "law `reflexive` falsified by Present(NaN): x is not equal to itself"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    /// The property returned `false` for `counterexample`.
    #[error("law `{law}` falsified by {counterexample}: {reason}")]
    Falsified {
        /// Name of the law, e.g. `left_identity`.
        law: &'static str,
        /// `Debug` rendering of the minimal failing input.
        counterexample: String,
        /// Why the property failed.
        reason: String,
    },
    /// The runner gave up before a verdict, e.g. too many rejected inputs.
    #[error("law `{law}` aborted: {reason}")]
    Aborted {
        /// Name of the law.
        law: &'static str,
        /// Why the runner stopped.
        reason: String,
    },
}

impl LawViolation {
    /// Returns the name of the violated law.
    pub const fn law(&self) -> &'static str {
        match self {
            Self::Falsified { law, .. } | Self::Aborted { law, .. } => law,
        }
    }

    /// Returns the rendered counterexample, if the law was falsified.
    pub fn counterexample(&self) -> Option<&str> {
        match self {
            Self::Falsified { counterexample, .. } => Some(counterexample),
            Self::Aborted { .. } => None,
        }
    }
}
