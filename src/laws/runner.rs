//! Runs a single law through `proptest` and reports the outcome.

use proptest::strategy::Strategy;
use proptest::test_runner::{TestCaseResult, TestError, TestRunner};
use tracing::{debug, warn};

use super::LawConfig;
use crate::error::LawViolation;

/// Checks `property` against values drawn from `strategy`.
///
/// A falsified law is shrunk by `proptest` before being reported, so the
/// counterexample in the returned [`LawViolation`] is the simplest one found.
pub(crate) fn check_law<S, P>(
    law: &'static str,
    config: LawConfig,
    strategy: &S,
    property: P,
) -> Result<(), LawViolation>
where
    S: Strategy,
    P: Fn(S::Value) -> TestCaseResult,
{
    debug!(law, cases = config.cases, "checking law");

    let mut runner = TestRunner::new(config.to_proptest());
    match runner.run(strategy, property) {
        Ok(()) => {
            debug!(law, "law held");
            Ok(())
        }
        Err(TestError::Fail(reason, value)) => {
            let counterexample = format!("{value:?}");
            warn!(law, %counterexample, %reason, "law falsified");
            Err(LawViolation::Falsified {
                law,
                counterexample,
                reason: reason.to_string(),
            })
        }
        Err(TestError::Abort(reason)) => {
            warn!(law, %reason, "law aborted");
            Err(LawViolation::Aborted {
                law,
                reason: reason.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn config() -> LawConfig {
        LawConfig::default().with_cases(32)
    }

    #[rstest]
    fn passing_property_is_ok() {
        let result = check_law("non_negative", config(), &(0..100_u32), |value| {
            prop_assert!(value < 100);
            Ok(())
        });
        assert_eq!(result, Ok(()));
    }

    #[rstest]
    fn failing_property_reports_shrunk_counterexample() {
        let result = check_law("small", config(), &(0..1000_u32), |value| {
            prop_assert!(value < 10, "{} is too large", value);
            Ok(())
        });
        let violation = result.unwrap_err();
        assert_eq!(violation.law(), "small");
        assert_eq!(violation.counterexample(), Some("10"));
    }

    #[rstest]
    fn rejecting_every_case_aborts() {
        let result = check_law("filtered", config(), &(0..10_u32), |_| {
            Err(TestCaseError::reject("never applicable"))
        });
        assert!(matches!(result, Err(LawViolation::Aborted { law: "filtered", .. })));
    }
}
