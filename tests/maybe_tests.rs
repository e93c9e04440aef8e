//! Integration tests for the `Maybe` operations.
//!
//! Covers the documented scenarios (mapping, extraction, filtering,
//! sequencing and recovery) and the evaluation guarantees of the lazy
//! alternatives.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use maybe_algebra::error::EmptyValueError;
use maybe_algebra::maybe::{self, Maybe, first, lookup, recover, recover_any, sequence, traverse};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArithmeticError {
    DivideByZero,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Failure {
    Arithmetic(ArithmeticError),
    Io(String),
}

fn is_divide_by_zero(failure: &Failure) -> bool {
    matches!(failure, Failure::Arithmetic(ArithmeticError::DivideByZero))
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[rstest]
fn present_five_plus_one_is_present_six() {
    assert_eq!(Maybe::present(5).map(|x| x + 1), Maybe::present(6));
}

#[rstest]
fn absent_value_or_zero_is_zero() {
    assert_eq!(Maybe::<i32>::absent().value_or(0), 0);
}

#[rstest]
fn present_three_filtered_above_five_is_absent() {
    assert_eq!(Maybe::present(3).filter(|x| *x > 5), Maybe::absent());
}

#[rstest]
#[case(vec![Maybe::present(1), Maybe::present(2), Maybe::present(3)], Maybe::present(vec![1, 2, 3]))]
#[case(vec![Maybe::present(1), Maybe::absent(), Maybe::present(3)], Maybe::absent())]
#[case(vec![], Maybe::present(vec![]))]
fn sequence_scenarios(#[case] input: Vec<Maybe<i32>>, #[case] expected: Maybe<Vec<i32>>) {
    assert_eq!(sequence(input), expected);
}

#[rstest]
fn recover_matching_failure_is_absent() {
    let result = recover(
        || Err::<i32, _>(Failure::Arithmetic(ArithmeticError::DivideByZero)),
        is_divide_by_zero,
    );
    assert_eq!(result, Ok(Maybe::absent()));
}

#[rstest]
fn recover_other_failure_is_raised_unchanged() {
    let result = recover(
        || Err::<i32, _>(Failure::Io("broken pipe".to_string())),
        is_divide_by_zero,
    );
    assert_eq!(result, Err(Failure::Io("broken pipe".to_string())));
}

#[rstest]
fn recover_any_treats_every_failure_as_absent() {
    let result = recover_any(|| Err::<i32, _>(Failure::Io("closed".to_string())));
    assert_eq!(result, Maybe::absent());
}

// =============================================================================
// Alternatives and Extraction
// =============================================================================

#[rstest]
fn or_else_evaluates_fallback_only_when_absent() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        Maybe::present(0)
    };

    assert_eq!(Maybe::present(7).or_else(fallback), Maybe::present(7));
    assert_eq!(calls.get(), 0);

    assert_eq!(Maybe::absent().or_else(fallback), Maybe::present(0));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn value_or_else_evaluates_default_only_when_absent() {
    let calls = Cell::new(0);
    let default = || {
        calls.set(calls.get() + 1);
        -1
    };

    assert_eq!(Maybe::present(3).value_or_else(default), 3);
    assert_eq!(Maybe::absent().value_or_else(default), -1);
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(Maybe::present(1), Maybe::present(2), Maybe::present(1))]
#[case(Maybe::absent(), Maybe::present(2), Maybe::present(2))]
#[case(Maybe::absent(), Maybe::absent(), Maybe::absent())]
fn bit_or_is_eager_or(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(left | right, expected);
    assert_eq!(left.or(right), expected);
}

#[rstest]
fn value_or_fail_reports_empty_value() {
    assert_eq!(Maybe::present('v').value_or_fail(), Ok('v'));
    assert_eq!(Maybe::<char>::absent().value_or_fail(), Err(EmptyValueError));
}

// =============================================================================
// Sequences and Collections
// =============================================================================

#[rstest]
fn traverse_stops_at_first_absent() {
    let visited = Cell::new(0);
    let result = traverse(["1", "x", "3"], |text| {
        visited.set(visited.get() + 1);
        recover_any(|| text.parse::<u8>())
    });
    assert_eq!(result, Maybe::absent());
    assert_eq!(visited.get(), 2);
}

#[rstest]
fn collect_into_maybe() {
    let collected: Maybe<Vec<u8>> = ["4", "5"].iter().map(|t| recover_any(|| t.parse::<u8>())).collect();
    assert_eq!(collected, Maybe::present(vec![4, 5]));
}

#[rstest]
fn inner_sequence_distributes_over_elements() {
    assert_eq!(
        Maybe::present(vec!['a', 'b']).sequence(),
        vec![Maybe::present('a'), Maybe::present('b')]
    );
}

#[rstest]
fn traverse_on_absent_is_single_absent() {
    let result = Maybe::<u8>::absent().traverse(|n| vec![n; 3]);
    assert_eq!(result, vec![Maybe::absent()]);
}

#[rstest]
fn safe_lookups() {
    let ports: HashMap<&str, u16> = HashMap::from([("http", 80), ("https", 443)]);
    assert_eq!(lookup(&ports, "https"), Maybe::present(&443));
    assert_eq!(lookup(&ports, "gopher"), Maybe::absent());

    let ordered: BTreeMap<u8, char> = BTreeMap::from([(1, 'a')]);
    assert_eq!(lookup(&ordered, &1), Maybe::present(&'a'));

    assert_eq!(first(Vec::<i32>::new()), Maybe::absent());
    assert_eq!(first([9, 8]), Maybe::present(9));
}

#[rstest]
fn free_ap_applies_wrapped_function() {
    let double = Maybe::present(|n: i32| n * 2);
    assert_eq!(maybe::ap(double, Maybe::present(21)), Maybe::present(42));
}

// =============================================================================
// Properties
// =============================================================================

fn operand() -> impl Strategy<Value = Maybe<i32>> {
    maybe_algebra::arbitrary::any_maybe(any::<i32>())
}

proptest! {
    #[test]
    fn map_of_present_applies_function(value in any::<i32>()) {
        let increment = |n: i32| n.wrapping_add(1);
        prop_assert_eq!(Maybe::present(value).map(increment), Maybe::present(increment(value)));
    }

    #[test]
    fn flat_map_of_present_is_function_application(value in any::<i32>()) {
        let half = |n: i32| Maybe::when(n % 2 == 0, || n / 2);
        prop_assert_eq!(Maybe::present(value).flat_map(half), half(value));
        prop_assert_eq!(Maybe::<i32>::absent().flat_map(half), Maybe::absent());
    }

    #[test]
    fn into_vec_has_length_zero_or_one(value in operand()) {
        let elements = value.into_vec();
        match value {
            Maybe::Present(payload) => prop_assert_eq!(elements, vec![payload]),
            Maybe::Absent => prop_assert!(elements.is_empty()),
        }
    }

    #[test]
    fn sequence_is_present_iff_every_element_is(values in proptest::collection::vec(operand(), 0..6)) {
        let every_present = values.iter().all(Maybe::is_present);
        let expected: Vec<i32> = values.iter().filter_map(|value| value.into_option()).collect();
        let result = sequence(values);
        if every_present {
            prop_assert_eq!(result, Maybe::present(expected));
        } else {
            prop_assert_eq!(result, Maybe::absent());
        }
    }

    #[test]
    fn option_conversion_round_trips(value in operand()) {
        let option: Option<i32> = value.into();
        prop_assert_eq!(Maybe::from(option), value);
    }
}
