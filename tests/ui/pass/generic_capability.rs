use maybe_algebra::equality::{ByKey, CaseInsensitive, Equality, Structural, maybe};
use maybe_algebra::maybe::Maybe;

fn count_matches<A, E: Equality<A>>(values: &[A], target: &A, equality: &E) -> usize {
    values
        .iter()
        .filter(|value| equality.equal(value, target))
        .count()
}

fn main() {
    let words = vec!["Tea".to_string(), "TEA".to_string(), "coffee".to_string()];
    assert_eq!(count_matches(&words, &"tea".to_string(), &CaseInsensitive), 2);
    assert_eq!(count_matches(&words, &"tea".to_string(), &Structural), 0);

    let lengths = ByKey::new(|text: &String| text.len());
    assert_eq!(count_matches(&words, &"abc".to_string(), &lengths), 2);

    let nested = vec![
        Maybe::present(Maybe::present("A".to_string())),
        Maybe::present(Maybe::absent()),
        Maybe::absent(),
    ];
    let target = Maybe::present(Maybe::present("a".to_string()));
    assert_eq!(count_matches(&nested, &target, &maybe(maybe(CaseInsensitive))), 1);
}
