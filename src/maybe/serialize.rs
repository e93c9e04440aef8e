//! `serde` support for [`Maybe`].
//!
//! A `Maybe` has the same data model as `Option`: `Present(value)` is
//! serialized as `Some(value)` and `Absent` as `None`, so JSON renders them
//! as the bare value and `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Maybe;

impl<A: Serialize> Serialize for Maybe<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, A> Deserialize<'de> for Maybe<A>
where
    A: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::present(3), "3")]
    #[case(Maybe::absent(), "null")]
    fn serializes_like_option(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&maybe).unwrap(), expected);
    }

    #[rstest]
    fn deserializes_null_as_absent() {
        let maybe: Maybe<String> = serde_json::from_str("null").unwrap();
        assert_eq!(maybe, Maybe::absent());
    }
}
