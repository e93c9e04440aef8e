//! Type class traits implemented for [`Maybe`](crate::maybe::Maybe).
//!
//! - [`Functor`]: mapping over the payload
//! - [`Applicative`]: lifting values and combining independent `Maybe`s
//! - [`Monad`]: sequencing dependent computations
//! - [`Foldable`]: folding a `Maybe` as a zero-or-one element sequence
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native higher-kinded types. [`TypeConstructor`] uses
//! generic associated types so that the traits can name `Maybe<B>` while
//! implemented for `Maybe<A>`.
//!
//! The inherent methods on `Maybe` (`map`, `flat_map`, `apply`, ...) cover
//! everyday use. These traits exist for code that is generic over the
//! container.
//!
//! # Examples
//!
//! ```rust
//! use maybe_algebra::maybe::Maybe;
//! use maybe_algebra::typeclass::{Applicative, Foldable, Functor};
//!
//! fn total<F>(values: F) -> i64
//! where
//!     F: Foldable<Inner = i64>,
//! {
//!     values.fold_left(0, |sum, value| sum + value)
//! }
//!
//! let lifted = Maybe::present(20_i32).fmap(i64::from).map2(Maybe::present(22_i64), |a, b| a + b);
//! assert_eq!(total(lifted), 42);
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
