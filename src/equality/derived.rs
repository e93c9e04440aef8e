//! Equality for [`Maybe`] derived from equality for its payload.

use super::Equality;
use crate::maybe::Maybe;

/// Equality for `Maybe<A>` built from an [`Equality<A>`].
///
/// Two `Maybe`s are equal iff both are absent, or both are present and their
/// payloads are equal under the wrapped capability. If the wrapped capability
/// is an equivalence relation, so is this one.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::equality::{ByKey, Equality, MaybeEquality};
/// use maybe_algebra::maybe::Maybe;
///
/// let by_magnitude = MaybeEquality::new(ByKey::new(|n: &i32| n.unsigned_abs()));
/// assert!(by_magnitude.equal(&Maybe::present(-4), &Maybe::present(4)));
/// assert!(by_magnitude.equal(&Maybe::<i32>::absent(), &Maybe::absent()));
/// assert!(!by_magnitude.equal(&Maybe::present(0), &Maybe::absent()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaybeEquality<E> {
    payload: E,
}

impl<E> MaybeEquality<E> {
    /// Derives `Maybe` equality from `payload`.
    #[inline]
    pub const fn new(payload: E) -> Self {
        Self { payload }
    }

    /// Returns the capability used for payloads.
    #[inline]
    pub const fn payload(&self) -> &E {
        &self.payload
    }
}

impl<A, E> Equality<Maybe<A>> for MaybeEquality<E>
where
    E: Equality<A>,
{
    #[inline]
    fn equal(&self, left: &Maybe<A>, right: &Maybe<A>) -> bool {
        left.equal(right, &self.payload)
    }
}

/// Derives equality for `Maybe<A>` from equality for `A`.
///
/// Apply it repeatedly for nested values: `maybe(maybe(eq))` compares
/// `Maybe<Maybe<A>>`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::equality::{CaseInsensitive, Equality, maybe};
/// use maybe_algebra::maybe::Maybe;
///
/// let nested = maybe(maybe(CaseInsensitive));
/// let left = Maybe::present(Maybe::present("Tea".to_string()));
/// let right = Maybe::present(Maybe::present("TEA".to_string()));
/// assert!(nested.equal(&left, &right));
/// assert!(!nested.equal(&left, &Maybe::present(Maybe::absent())));
/// ```
#[inline]
pub const fn maybe<E>(payload: E) -> MaybeEquality<E> {
    MaybeEquality::new(payload)
}

static_assertions::assert_impl_all!(MaybeEquality<super::Structural>: Equality<Maybe<u8>>, Send, Sync);
static_assertions::assert_impl_all!(
    MaybeEquality<MaybeEquality<super::CaseInsensitive>>: Equality<Maybe<Maybe<String>>>
);
