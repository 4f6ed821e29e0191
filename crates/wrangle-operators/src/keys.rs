//! Join key specifications.

use serde::{Deserialize, Serialize};

/// The columns two tables are joined on.
///
/// Pairs are `(left column, right column)`; in a composite key the i-th left
/// column is matched against the i-th right column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    Single(String, String),
    Composite(Vec<(String, String)>),
}

impl KeySpec {
    pub fn single(left: impl Into<String>, right: impl Into<String>) -> Self {
        KeySpec::Single(left.into(), right.into())
    }

    pub fn composite<I, L, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
        L: Into<String>,
        R: Into<String>,
    {
        KeySpec::Composite(
            pairs
                .into_iter()
                .map(|(l, r)| (l.into(), r.into()))
                .collect(),
        )
    }

    /// Key pairs in order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        match self {
            KeySpec::Single(l, r) => vec![(l.clone(), r.clone())],
            KeySpec::Composite(pairs) => pairs.clone(),
        }
    }

    pub fn left_keys(&self) -> Vec<&str> {
        match self {
            KeySpec::Single(l, _) => vec![l.as_str()],
            KeySpec::Composite(pairs) => pairs.iter().map(|(l, _)| l.as_str()).collect(),
        }
    }

    pub fn right_keys(&self) -> Vec<&str> {
        match self {
            KeySpec::Single(_, r) => vec![r.as_str()],
            KeySpec::Composite(pairs) => pairs.iter().map(|(_, r)| r.as_str()).collect(),
        }
    }
}

impl From<(&str, &str)> for KeySpec {
    fn from((l, r): (&str, &str)) -> Self {
        KeySpec::single(l, r)
    }
}

impl From<(String, String)> for KeySpec {
    fn from((l, r): (String, String)) -> Self {
        KeySpec::Single(l, r)
    }
}

impl From<Vec<(&str, &str)>> for KeySpec {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        KeySpec::composite(pairs)
    }
}

impl From<Vec<(String, String)>> for KeySpec {
    fn from(pairs: Vec<(String, String)>) -> Self {
        KeySpec::Composite(pairs)
    }
}

impl From<&[(&str, &str)]> for KeySpec {
    fn from(pairs: &[(&str, &str)]) -> Self {
        KeySpec::composite(pairs.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unzips_in_order() {
        let keys = KeySpec::from(vec![("a1", "b1"), ("a2", "b2")]);
        assert_eq!(keys.left_keys(), vec!["a1", "a2"]);
        assert_eq!(keys.right_keys(), vec!["b1", "b2"]);
    }

    #[test]
    fn single_pair_is_one_pair() {
        let keys = KeySpec::from(("id", "person_id"));
        assert_eq!(keys.pairs(), vec![("id".to_string(), "person_id".to_string())]);
    }
}
