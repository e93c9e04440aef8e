//! Equality capabilities - equality supplied as a value.
//!
//! This module provides the [`Equality`] trait, which describes *how* two
//! values of a type are compared, independently of the type's own
//! `PartialEq`. A capability is passed explicitly wherever custom equality is
//! needed, so the same type can be compared structurally in one place and,
//! say, case-insensitively in another.
//!
//! # Laws
//!
//! Every `Equality` implementation must be an equivalence relation:
//!
//! ```text
//! equal(x, x)                              (reflexivity)
//! equal(x, y) == equal(y, x)               (symmetry)
//! equal(x, y) && equal(y, z) => equal(x, z) (transitivity)
//! ```
//!
//! The [`laws`](crate::laws) module checks these with generated inputs.
//!
//! # Provided Capabilities
//!
//! - [`Structural`]: delegates to `PartialEq`
//! - [`ByKey`]: compares a projected key
//! - [`CaseInsensitive`]: Unicode case-insensitive string comparison
//! - any `Fn(&A, &A) -> bool`
//! - [`MaybeEquality`]: derived equality for [`Maybe`](crate::maybe::Maybe)
//!
//! # Examples
//!
//! ```rust
//! use maybe_algebra::equality::{CaseInsensitive, Equality, Structural};
//! use maybe_algebra::maybe::Maybe;
//!
//! assert!(CaseInsensitive.equal("Hello", "hELLO"));
//! assert!(!Structural.equal("Hello", "hELLO"));
//!
//! // Derive equality for Maybe<String> from equality for String
//! let names = maybe_algebra::equality::maybe(CaseInsensitive);
//! assert!(names.equal(&Maybe::present("Ada".to_string()), &Maybe::present("ADA".to_string())));
//! ```

mod derived;
mod wrapped;

pub use derived::{MaybeEquality, maybe};
pub use wrapped::EqBy;

/// A capability for comparing two values of type `A`.
///
/// Implementations must be side-effect free and form an equivalence
/// relation. Closures `Fn(&A, &A) -> bool` are capabilities too.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::equality::Equality;
///
/// let same_length = |left: &&str, right: &&str| left.len() == right.len();
/// assert!(same_length.equal(&"abc", &"xyz"));
/// assert!(same_length.not_equal(&"abc", &"xy"));
/// ```
pub trait Equality<A: ?Sized> {
    /// Returns `true` if `left` and `right` are equal under this capability.
    fn equal(&self, left: &A, right: &A) -> bool;

    /// Negation of [`Equality::equal`].
    #[inline]
    fn not_equal(&self, left: &A, right: &A) -> bool {
        !self.equal(left, right)
    }
}

impl<A, F> Equality<A> for F
where
    A: ?Sized,
    F: Fn(&A, &A) -> bool,
{
    #[inline]
    fn equal(&self, left: &A, right: &A) -> bool {
        self(left, right)
    }
}

/// Equality through `PartialEq`.
///
/// Only lawful for types whose `PartialEq` is an equivalence relation, i.e.
/// types that are also `Eq` (floating point `NaN` breaks reflexivity).
///
/// Types without `PartialEq` have no structural capability:
///
/// ```compile_fail
/// use maybe_algebra::equality::{Equality, Structural};
///
/// struct Opaque;
/// Structural.equal(&Opaque, &Opaque);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Structural;

impl<A: PartialEq + ?Sized> Equality<A> for Structural {
    #[inline]
    fn equal(&self, left: &A, right: &A) -> bool {
        left == right
    }
}

/// Equality of a projected key.
///
/// Two values are equal when `key(left) == key(right)`. Any projection
/// gives an equivalence relation as long as the key type's `PartialEq` is
/// one.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::equality::{ByKey, Equality};
///
/// let by_parity = ByKey::new(|n: &i32| n.rem_euclid(2));
/// assert!(by_parity.equal(&3, &-1));
/// assert!(!by_parity.equal(&3, &4));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Creates an equality comparing `key(value)`.
    #[inline]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<A, K, F> Equality<A> for ByKey<F>
where
    A: ?Sized,
    K: PartialEq,
    F: Fn(&A) -> K,
{
    #[inline]
    fn equal(&self, left: &A, right: &A) -> bool {
        (self.key)(left) == (self.key)(right)
    }
}

/// Case-insensitive string equality, using full Unicode lowercasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CaseInsensitive;

impl Equality<str> for CaseInsensitive {
    fn equal(&self, left: &str, right: &str) -> bool {
        left.chars()
            .flat_map(char::to_lowercase)
            .eq(right.chars().flat_map(char::to_lowercase))
    }
}

impl Equality<String> for CaseInsensitive {
    #[inline]
    fn equal(&self, left: &String, right: &String) -> bool {
        Equality::<str>::equal(self, left, right)
    }
}

impl Equality<&str> for CaseInsensitive {
    #[inline]
    fn equal(&self, left: &&str, right: &&str) -> bool {
        Equality::<str>::equal(self, left, right)
    }
}

static_assertions::assert_impl_all!(Structural: Send, Sync, Copy);
static_assertions::assert_impl_all!(CaseInsensitive: Equality<str>, Equality<String>);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    fn structural_matches_partial_eq(#[case] left: i32, #[case] right: i32, #[case] expected: bool) {
        assert_eq!(Structural.equal(&left, &right), expected);
        assert_eq!(Structural.not_equal(&left, &right), !expected);
    }

    #[rstest]
    fn structural_on_unsized_slices() {
        let left: &[u8] = &[1, 2];
        let right: &[u8] = &[1, 2];
        assert!(Equality::<[u8]>::equal(&Structural, left, right));
    }

    #[rstest]
    #[case("straße", "STRASSE", false)]
    #[case("Grüße", "GRÜSSE", false)]
    #[case("Ünïcödé", "üNÏCÖDÉ", true)]
    #[case("abc", "abcd", false)]
    #[case("", "", true)]
    fn case_insensitive_strings(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        assert_eq!(CaseInsensitive.equal(left, right), expected);
        assert_eq!(
            CaseInsensitive.equal(&left.to_string(), &right.to_string()),
            expected
        );
    }

    #[rstest]
    fn closure_is_a_capability() {
        let within_ten = |left: &i32, right: &i32| left / 10 == right / 10;
        assert!(within_ten.equal(&11, &19));
        assert!(!within_ten.equal(&9, &10));
    }

    #[rstest]
    fn fn_pointer_is_a_capability() {
        fn same_sign(left: &i64, right: &i64) -> bool {
            left.signum() == right.signum()
        }
        let capability: fn(&i64, &i64) -> bool = same_sign;
        assert!(capability.equal(&-3, &-40));
    }

    #[rstest]
    fn by_key_compares_projection() {
        let by_length = ByKey::new(|text: &String| text.len());
        assert!(by_length.equal(&"ab".to_string(), &"cd".to_string()));
        assert!(by_length.not_equal(&"ab".to_string(), &"c".to_string()));
    }

    #[rstest]
    fn trait_object_capability() {
        let capability: &dyn Equality<i32> = &Structural;
        assert!(Equality::equal(capability, &5, &5));
    }
}
