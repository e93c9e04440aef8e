use maybe_algebra::maybe::Maybe;
use maybe_algebra::typeclass::{Applicative, Foldable, Functor, Monad};

fn describe<F>(container: F) -> F::WithType<String>
where
    F: Functor,
    F::Inner: std::fmt::Debug,
{
    container.fmap(|value| format!("<{value:?}>"))
}

fn total<F: Foldable<Inner = i32>>(container: F) -> i32 {
    container.fold_left(0, |accumulator, value| accumulator + value)
}

fn halve(value: i32) -> Maybe<i32> {
    Maybe::when(value % 2 == 0, || value / 2)
}

fn main() {
    assert_eq!(describe(Maybe::present(1)), Maybe::present("<1>".to_string()));
    assert_eq!(total(Maybe::present(5)), 5);
    assert_eq!(total(Maybe::absent()), 0);

    let quartered = Monad::flat_map(Maybe::present(8), halve).and_then(halve);
    assert_eq!(quartered, Maybe::present(2));

    let sum = <Maybe<i32> as Applicative>::pure(1).map2(Maybe::present(2), |left, right| left + right);
    assert_eq!(sum, Maybe::present(3));
}
