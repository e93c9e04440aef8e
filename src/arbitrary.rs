//! Generators for [`Maybe`] and [`EqBy`] built on `proptest`.
//!
//! [`any_maybe`] lifts a strategy for `A` into a strategy for `Maybe<A>`
//! that yields `Present` nine times out of ten. `Absent` is the simplest
//! alternative: shrinking a failing `Present` input tries `Absent` as well
//! as smaller payloads.
//!
//! # Examples
//!
//! ```rust
//! use maybe_algebra::arbitrary::any_maybe;
//! use proptest::prelude::*;
//! use proptest::test_runner::TestRunner;
//!
//! let mut runner = TestRunner::default();
//! runner
//!     .run(&any_maybe(any::<u8>()), |value| {
//!         prop_assert_eq!(value.map(|x| x), value);
//!         Ok(())
//!     })
//!     .unwrap();
//! ```

use std::sync::Arc;

use proptest::arbitrary::{Arbitrary, any_with};
use proptest::strategy::{LazyJust, Map, Strategy, TupleUnion};

use crate::equality::EqBy;
use crate::maybe::Maybe;

/// Relative weight of `Present` samples.
pub const PRESENT_WEIGHT: u32 = 9;

/// Relative weight of `Absent` samples.
pub const ABSENT_WEIGHT: u32 = 1;

type AbsentArm<A> = LazyJust<Maybe<A>, fn() -> Maybe<A>>;

type PresentArm<S> = Map<S, fn(<S as Strategy>::Value) -> Maybe<<S as Strategy>::Value>>;

/// The strategy returned by [`any_maybe`].
pub type MaybeStrategy<S> = TupleUnion<(
    (u32, Arc<AbsentArm<<S as Strategy>::Value>>),
    (u32, Arc<PresentArm<S>>),
)>;

/// Strategy for `Maybe<A>`: `Present` with weight [`PRESENT_WEIGHT`],
/// `Absent` with weight [`ABSENT_WEIGHT`].
///
/// `Absent` is the first alternative, so shrinking can always reach it.
pub fn any_maybe<S: Strategy>(payload: S) -> MaybeStrategy<S> {
    let absent: fn() -> Maybe<S::Value> = Maybe::absent;
    let present: fn(S::Value) -> Maybe<S::Value> = Maybe::Present;
    TupleUnion::new((
        (ABSENT_WEIGHT, Arc::new(LazyJust::new(absent))),
        (PRESENT_WEIGHT, Arc::new(payload.prop_map(present))),
    ))
}

/// Strategy for `Maybe<A>` that always yields `Present`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::arbitrary::any_present;
/// use proptest::prelude::*;
/// use proptest::test_runner::TestRunner;
///
/// let mut runner = TestRunner::default();
/// runner
///     .run(&any_present(0..10_u8), |value| {
///         prop_assert!(value.is_present());
///         Ok(())
///     })
///     .unwrap();
/// ```
pub fn any_present<S: Strategy>(payload: S) -> impl Strategy<Value = Maybe<S::Value>> {
    payload.prop_map(Maybe::Present)
}

/// Strategy wrapping every value of `payload` in [`EqBy`], compared with `E`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::arbitrary::any_eq_by;
/// use maybe_algebra::equality::{CaseInsensitive, EqBy};
/// use proptest::prelude::*;
/// use proptest::test_runner::TestRunner;
///
/// let mut runner = TestRunner::default();
/// runner
///     .run(&any_eq_by::<CaseInsensitive, _>("[a-z]{1,4}"), |tag| {
///         prop_assert_eq!(&tag, &EqBy::new(tag.value().to_uppercase()));
///         Ok(())
///     })
///     .unwrap();
/// ```
pub fn any_eq_by<E, S>(payload: S) -> Map<S, fn(S::Value) -> EqBy<S::Value, E>>
where
    S: Strategy,
{
    let wrap: fn(S::Value) -> EqBy<S::Value, E> = EqBy::new;
    payload.prop_map(wrap)
}

impl<A: Arbitrary> Arbitrary for Maybe<A> {
    type Parameters = A::Parameters;
    type Strategy = MaybeStrategy<A::Strategy>;

    fn arbitrary_with(parameters: Self::Parameters) -> Self::Strategy {
        any_maybe(any_with::<A>(parameters))
    }
}

impl<A: Arbitrary, E> Arbitrary for EqBy<A, E> {
    type Parameters = A::Parameters;
    type Strategy = Map<A::Strategy, fn(A) -> Self>;

    fn arbitrary_with(parameters: Self::Parameters) -> Self::Strategy {
        any_eq_by(any_with::<A>(parameters))
    }
}
