//! Macros expanding law suites into individual `#[test]` functions.
//!
//! Each law becomes its own test named `<prefix>_<law>`, so a failure points
//! at the violated law and the counterexample appears in the panic message.

/// Generates one `#[test]` per equality law.
///
/// Expands to `<prefix>_reflexive`, `<prefix>_symmetric` and
/// `<prefix>_transitive`. An optional `cases = n` argument overrides the
/// number of generated cases.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::arbitrary::any_maybe;
/// use maybe_algebra::equality::{CaseInsensitive, maybe};
/// use maybe_algebra::equality_law_tests;
///
/// equality_law_tests!(
///     maybe_string_ignoring_case,
///     any_maybe("[a-cA-C]{0,2}"),
///     maybe(CaseInsensitive),
///     cases = 128
/// );
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! equality_law_tests {
    ($prefix:ident, $values:expr, $equality:expr $(, cases = $cases:expr)? $(,)?) => {
        $crate::equality_law_tests!(@law $prefix, reflexive, $values, $equality $(, $cases)?);
        $crate::equality_law_tests!(@law $prefix, symmetric, $values, $equality $(, $cases)?);
        $crate::equality_law_tests!(@law $prefix, transitive, $values, $equality $(, $cases)?);
    };
    (@law $prefix:ident, $law:ident, $values:expr, $equality:expr $(, $cases:expr)?) => {
        $crate::paste::paste! {
            #[test]
            fn [<$prefix _ $law>]() {
                #[allow(unused_mut)]
                let mut config = $crate::laws::LawConfig::default();
                $(config = config.with_cases($cases);)?
                let laws = $crate::laws::EqualityLaws::new($values, $equality).with_config(config);
                if let Err(violation) = laws.$law() {
                    panic!("{violation}");
                }
            }
        }
    };
}

/// Generates a `#[test]` checking that `Hash` agrees with `Eq`.
///
/// Expands to `<prefix>_hash_consistent_with_equality`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::arbitrary::any_maybe;
/// use maybe_algebra::hashing_law_tests;
///
/// hashing_law_tests!(nested_maybe, any_maybe(any_maybe(0..3_u8)));
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! hashing_law_tests {
    ($prefix:ident, $values:expr $(, cases = $cases:expr)? $(,)?) => {
        $crate::paste::paste! {
            #[test]
            fn [<$prefix _hash_consistent_with_equality>]() {
                #[allow(unused_mut)]
                let mut config = $crate::laws::LawConfig::default();
                $(config = config.with_cases($cases);)?
                let laws = $crate::laws::HashingLaws::new($values).with_config(config);
                if let Err(violation) = laws.consistent_with_equality() {
                    panic!("{violation}");
                }
            }
        }
    };
}
