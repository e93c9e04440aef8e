//! # maybe-algebra
//!
//! An optional value type with pluggable equality and reusable algebraic
//! law suites.
//!
//! ## Overview
//!
//! - **[`Maybe`](maybe::Maybe)**: `Present(value)` or `Absent`, with
//!   construction, transformation, combination and extraction operations,
//!   plus helpers for sequences, dictionary lookups and recovering from
//!   failures
//! - **[`Equality`](equality::Equality)**: equality supplied as a value, so
//!   one type can be compared in several ways, and a derivation lifting
//!   equality for `A` to equality for `Maybe<A>`
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and `Foldable` for
//!   `Maybe`
//! - **Generators**: `proptest` strategies for `Maybe` biased 9:1 towards
//!   `Present`
//! - **Law Suites**: equality, hashing and monad laws checked against
//!   generated inputs
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits (default)
//! - `arbitrary`: `proptest` strategies (default)
//! - `laws`: law suites and law test macros, implies `arbitrary` (default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: every feature
//!
//! ## Example
//!
//! ```rust
//! use maybe_algebra::prelude::*;
//!
//! let configured: Option<&str> = None;
//! let port = Maybe::from(configured)
//!     .flat_map(|text| recover_any(|| text.parse::<u16>()))
//!     .filter(|port| *port != 0)
//!     .value_or(8080);
//! assert_eq!(port, 8080);
//!
//! let names = maybe(CaseInsensitive);
//! assert!(names.equal(&Maybe::present("Ada".to_string()), &Maybe::present("ADA".to_string())));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use maybe_algebra::prelude::*;
///
/// assert_eq!(Maybe::present(2).map(|n| n * 2), Maybe::present(4));
/// ```
pub mod prelude {
    pub use crate::equality::{
        ByKey, CaseInsensitive, EqBy, Equality, MaybeEquality, Structural, maybe,
    };
    pub use crate::error::EmptyValueError;
    pub use crate::maybe::{Maybe, recover, recover_any};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "arbitrary")]
    pub use crate::arbitrary::{any_maybe, any_present};

    #[cfg(feature = "laws")]
    pub use crate::laws::{EqualityLaws, HashingLaws, LawConfig, MonadLaws};
}

pub mod equality;
pub mod error;
pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;

#[cfg(feature = "laws")]
pub mod laws;

#[cfg(feature = "laws")]
#[doc(hidden)]
pub use paste;
