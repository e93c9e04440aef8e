//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the constructor through a GAT so that the
//! type-class traits in this module can talk about "the same container with
//! a different payload".
//!
//! # Example
//!
//! ```rust
//! use maybe_algebra::maybe::Maybe;
//! use maybe_algebra::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = emptied(Maybe::present(42));
//! assert_eq!(emptied, Maybe::absent());
//! ```

use crate::maybe::Maybe;

/// A type constructor applied to some type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn nested_maybe_inner_type_is_the_inner_maybe() {
        fn assert_inner<T: TypeConstructor<Inner = Maybe<String>>>() {}
        assert_inner::<Maybe<Maybe<String>>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Maybe<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_maybe_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_maybe_bool::<Step2>();
        static_assertions::assert_type_eq_all!(Step2, Maybe<bool>);
    }

    #[rstest]
    #[case(Maybe::present(42))]
    #[case(Maybe::absent())]
    fn with_type_of_inner_is_identity(#[case] original: Maybe<i32>) {
        fn roundtrip<T: TypeConstructor>(value: T) -> T::WithType<T::Inner>
        where
            T: Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Maybe<i32> = roundtrip(original);
        assert_eq!(result, original);
    }
}
