//! Monad laws over user-supplied operations.
//!
//! Rust has no higher-kinded types, so the monad under test is described by
//! a [`MonadOps`] implementation: a marker type naming the container `Of<T>`
//! and providing `pure`, `map` and `flat_map` for every payload type. The
//! suite quantifies over two payload types, `A` and `B`, so functions
//! `A -> B` and `A -> Of<B>` change the payload type just as they do in real
//! code. Containers are compared with an [`Equality`] capability.

use std::fmt::Debug;
use std::hash::Hash;

use proptest::prop_assert;
use proptest::strategy::Strategy;

use super::LawConfig;
use super::function::Fun;
use super::runner::check_law;
use crate::equality::Equality;
use crate::error::LawViolation;
use crate::maybe::Maybe;

/// The operations of a monad under test.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::laws::MonadOps;
/// use maybe_algebra::maybe::Maybe;
///
/// /// Maybe, going through `Option`.
/// struct ViaOption;
///
/// impl MonadOps for ViaOption {
///     type Of<T> = Maybe<T>;
///
///     fn pure<T>(value: T) -> Maybe<T> {
///         Some(value).into()
///     }
///
///     fn map<T, U>(container: Maybe<T>, function: &dyn Fn(T) -> U) -> Maybe<U> {
///         container.into_option().map(function).into()
///     }
///
///     fn flat_map<T, U>(container: Maybe<T>, function: &dyn Fn(T) -> Maybe<U>) -> Maybe<U> {
///         container.into_option().and_then(|value| function(value).into_option()).into()
///     }
/// }
///
/// assert_eq!(ViaOption::map(ViaOption::pure(2), &|n: i32| n.to_string()), Maybe::present("2".to_string()));
/// ```
pub trait MonadOps {
    /// The container holding a payload of type `T`.
    type Of<T>;

    /// Lifts a value.
    fn pure<T>(value: T) -> Self::Of<T>;

    /// Maps over the payload.
    fn map<T, U>(container: Self::Of<T>, function: &dyn Fn(T) -> U) -> Self::Of<U>;

    /// Binds the payload.
    fn flat_map<T, U>(container: Self::Of<T>, function: &dyn Fn(T) -> Self::Of<U>)
    -> Self::Of<U>;
}

/// [`MonadOps`] for [`Maybe`], using its inherent operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaybeMonad;

impl MonadOps for MaybeMonad {
    type Of<T> = Maybe<T>;

    #[inline]
    fn pure<T>(value: T) -> Maybe<T> {
        Maybe::pure(value)
    }

    #[inline]
    fn map<T, U>(container: Maybe<T>, function: &dyn Fn(T) -> U) -> Maybe<U> {
        container.map(function)
    }

    #[inline]
    fn flat_map<T, U>(container: Maybe<T>, function: &dyn Fn(T) -> Maybe<U>) -> Maybe<U> {
        container.flat_map(function)
    }
}

/// Strategies feeding the monad laws, for payload types `A` and `B`.
#[derive(Debug, Clone)]
pub struct MonadGenerators<V, M, K, N, F> {
    /// Plain values of type `A`.
    pub values: V,
    /// Containers of `A`.
    pub monads: M,
    /// Functions `A -> Of<B>`, usually built with [`fun`](super::fun).
    pub kleislis: K,
    /// Functions `B -> Of<B>`, run after `kleislis` in the associativity law.
    pub next_kleislis: N,
    /// Functions `A -> B`, usually built with [`fun`](super::fun).
    pub functions: F,
}

/// Law suite for the monad `O`, comparing containers with `E`.
///
/// # Examples
///
/// ```rust
/// use maybe_algebra::arbitrary::any_maybe;
/// use maybe_algebra::equality::Structural;
/// use maybe_algebra::laws::{LawConfig, MaybeMonad, MonadGenerators, MonadLaws, fun};
/// use proptest::prelude::any;
///
/// let generators = MonadGenerators {
///     values: any::<i16>(),
///     monads: any_maybe(any::<i16>()),
///     kleislis: fun(any_maybe(any::<bool>())),
///     next_kleislis: fun(any_maybe(any::<bool>())),
///     functions: fun(any::<bool>()),
/// };
/// let laws = MonadLaws::new(MaybeMonad, Structural, generators)
///     .with_config(LawConfig::default().with_cases(64));
/// assert_eq!(laws.check(), Ok(()));
/// ```
#[derive(Debug, Clone)]
pub struct MonadLaws<O, E, G> {
    ops: O,
    equality: E,
    generators: G,
    config: LawConfig,
}

impl<O, E, G> MonadLaws<O, E, G> {
    /// Creates the suite for the monad `ops`.
    pub fn new(ops: O, equality: E, generators: G) -> Self {
        Self {
            ops,
            equality,
            generators,
            config: LawConfig::default(),
        }
    }

    /// Replaces the runner configuration.
    #[must_use]
    pub fn with_config(self, config: LawConfig) -> Self {
        Self { config, ..self }
    }

    /// Returns the monad under test.
    pub const fn ops(&self) -> &O {
        &self.ops
    }
}

impl<O, E, A, B, V, Ms, K, N, F> MonadLaws<O, E, MonadGenerators<V, Ms, K, N, F>>
where
    O: MonadOps,
    O::Of<A>: Clone + Debug,
    O::Of<B>: Clone + Debug,
    E: Equality<O::Of<A>> + Equality<O::Of<B>>,
    A: Hash + Clone + Debug,
    B: Hash + Clone + Debug,
    V: Strategy<Value = A>,
    Ms: Strategy<Value = O::Of<A>>,
    K: Strategy<Value = Fun<A, O::Of<B>>>,
    N: Strategy<Value = Fun<B, O::Of<B>>>,
    F: Strategy<Value = Fun<A, B>>,
{
    fn equal_a(&self, left: &O::Of<A>, right: &O::Of<A>) -> bool {
        Equality::<O::Of<A>>::equal(&self.equality, left, right)
    }

    fn equal_b(&self, left: &O::Of<B>, right: &O::Of<B>) -> bool {
        Equality::<O::Of<B>>::equal(&self.equality, left, right)
    }

    /// `flat_map(pure(a), f) == f(a)`.
    ///
    /// # Errors
    ///
    /// Returns the violation with the smallest counterexample found.
    pub fn left_identity(&self) -> Result<(), LawViolation> {
        let inputs = (&self.generators.values, &self.generators.kleislis);
        check_law("left_identity", self.config, &inputs, |(value, kleisli)| {
            let apply = |argument: A| kleisli.call(&argument);
            let left = O::flat_map::<A, B>(O::pure(value.clone()), &apply);
            let right = apply(value);
            prop_assert!(self.equal_b(&left, &right), "{:?} != {:?}", left, right);
            Ok(())
        })
    }

    /// `flat_map(m, pure) == m`.
    ///
    /// # Errors
    ///
    /// Returns the violation with the smallest counterexample found.
    pub fn right_identity(&self) -> Result<(), LawViolation> {
        check_law("right_identity", self.config, &self.generators.monads, |container| {
            let left = O::flat_map::<A, A>(container.clone(), &|value: A| O::pure(value));
            prop_assert!(self.equal_a(&left, &container), "{:?} != {:?}", left, container);
            Ok(())
        })
    }

    /// `flat_map(flat_map(m, f), g) == flat_map(m, |a| flat_map(f(a), g))`.
    ///
    /// # Errors
    ///
    /// Returns the violation with the smallest counterexample found.
    pub fn associativity(&self) -> Result<(), LawViolation> {
        let inputs = (
            &self.generators.monads,
            &self.generators.kleislis,
            &self.generators.next_kleislis,
        );
        check_law("associativity", self.config, &inputs, |(container, first, second)| {
            let first = |argument: A| first.call(&argument);
            let second = |argument: B| second.call(&argument);
            let inner = O::flat_map::<A, B>(container.clone(), &first);
            let left = O::flat_map::<B, B>(inner, &second);
            let nested = |argument: A| O::flat_map::<B, B>(first(argument), &second);
            let right = O::flat_map::<A, B>(container, &nested);
            prop_assert!(self.equal_b(&left, &right), "{:?} != {:?}", left, right);
            Ok(())
        })
    }

    /// `map(m, f) == flat_map(m, |a| pure(f(a)))`.
    ///
    /// # Errors
    ///
    /// Returns the violation with the smallest counterexample found.
    pub fn map_coherence(&self) -> Result<(), LawViolation> {
        let inputs = (&self.generators.monads, &self.generators.functions);
        check_law("map_coherence", self.config, &inputs, |(container, function)| {
            let function = |argument: A| function.call(&argument);
            let left = O::map::<A, B>(container.clone(), &function);
            let lifted = |argument: A| O::pure(function(argument));
            let right = O::flat_map::<A, B>(container, &lifted);
            prop_assert!(self.equal_b(&left, &right), "{:?} != {:?}", left, right);
            Ok(())
        })
    }

    /// Runs every law in order, stopping at the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first violated law.
    pub fn check(&self) -> Result<(), LawViolation> {
        self.left_identity()?;
        self.right_identity()?;
        self.associativity()?;
        self.map_coherence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::any_maybe;
    use crate::equality::Structural;
    use crate::laws::fun;
    use proptest::prelude::*;
    use rstest::rstest;

    /// `Maybe` whose `pure` forgets its argument.
    struct ForgetfulPure;

    impl MonadOps for ForgetfulPure {
        type Of<T> = Maybe<T>;

        fn pure<T>(_: T) -> Maybe<T> {
            Maybe::absent()
        }

        fn map<T, U>(container: Maybe<T>, function: &dyn Fn(T) -> U) -> Maybe<U> {
            container.map(function)
        }

        fn flat_map<T, U>(container: Maybe<T>, function: &dyn Fn(T) -> Maybe<U>) -> Maybe<U> {
            container.flat_map(function)
        }
    }

    /// `Maybe` whose `map` never calls its function.
    struct EmptyingMap;

    impl MonadOps for EmptyingMap {
        type Of<T> = Maybe<T>;

        fn pure<T>(value: T) -> Maybe<T> {
            Maybe::present(value)
        }

        fn map<T, U>(_: Maybe<T>, _: &dyn Fn(T) -> U) -> Maybe<U> {
            Maybe::absent()
        }

        fn flat_map<T, U>(container: Maybe<T>, function: &dyn Fn(T) -> Maybe<U>) -> Maybe<U> {
            container.flat_map(function)
        }
    }

    fn quick() -> LawConfig {
        LawConfig::default().with_cases(64)
    }

    fn generators() -> MonadGenerators<
        impl Strategy<Value = u8>,
        impl Strategy<Value = Maybe<u8>>,
        impl Strategy<Value = Fun<u8, Maybe<String>>>,
        impl Strategy<Value = Fun<String, Maybe<String>>>,
        impl Strategy<Value = Fun<u8, String>>,
    > {
        MonadGenerators {
            values: any::<u8>(),
            monads: any_maybe(any::<u8>()),
            kleislis: fun(any_maybe("[a-c]{0,3}")),
            next_kleislis: fun(any_maybe("[a-c]{0,3}")),
            functions: fun("[a-c]{0,3}"),
        }
    }

    #[rstest]
    fn maybe_satisfies_every_law() {
        let laws = MonadLaws::new(MaybeMonad, Structural, generators()).with_config(quick());
        assert_eq!(laws.check(), Ok(()));
    }

    #[rstest]
    fn maybe_ops_follow_inherent_operations() {
        let doubled = MaybeMonad::map(MaybeMonad::pure(4), &|n: i32| n * 2);
        assert_eq!(doubled, Maybe::present(8));
        let checked = MaybeMonad::flat_map(doubled, &|n: i32| Maybe::when(n > 10, || n));
        assert_eq!(checked, Maybe::absent());
    }

    #[rstest]
    fn pure_that_drops_values_breaks_right_identity() {
        let violation = MonadLaws::new(ForgetfulPure, Structural, generators())
            .with_config(quick())
            .right_identity()
            .unwrap_err();
        assert_eq!(violation.law(), "right_identity");
        assert_eq!(violation.counterexample(), Some("Present(0)"));
    }

    #[rstest]
    fn map_ignoring_function_breaks_coherence() {
        let violation = MonadLaws::new(EmptyingMap, Structural, generators())
            .with_config(quick())
            .map_coherence()
            .unwrap_err();
        assert_eq!(violation.law(), "map_coherence");
    }
}
