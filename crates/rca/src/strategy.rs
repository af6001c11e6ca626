use fca_core::ElementSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a source object must relate to a target concept's extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantifier {
    /// Some related object lies in the extent
    Exists,
    /// The object has related objects and all of them lie in the extent
    ForAll,
}

impl Quantifier {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Exists => "∃",
            Self::ForAll => "∀",
        }
    }

    /// Whether an object whose relation image is `image` qualifies for a
    /// concept with object set `extent`
    pub fn holds(self, image: &ElementSet, extent: &ElementSet) -> bool {
        match self {
            Self::Exists => !image.is_disjoint(extent),
            Self::ForAll => !image.is_empty() && image.is_subset(extent),
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One relational scaling step: read the concepts of `target` and add them,
/// quantified over `relation`, as a new dimension of `source`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub relation: String,
    pub source: usize,
    pub target: usize,
    pub quantifier: Quantifier,
}

impl Rule {
    pub fn new(
        relation: impl Into<String>,
        source: usize,
        target: usize,
        quantifier: Quantifier,
    ) -> Self {
        Self {
            relation: relation.into(),
            source,
            target,
            quantifier,
        }
    }

    pub fn exists(relation: impl Into<String>, source: usize, target: usize) -> Self {
        Self::new(relation, source, target, Quantifier::Exists)
    }

    pub fn for_all(relation: impl Into<String>, source: usize, target: usize) -> Self {
        Self::new(relation, source, target, Quantifier::ForAll)
    }
}

/// Rules applied in order, once per iteration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Strategy {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for Strategy {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[usize]) -> ElementSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_exists() {
        assert!(Quantifier::Exists.holds(&set(&[0, 1]), &set(&[1, 2])));
        assert!(!Quantifier::Exists.holds(&set(&[0]), &set(&[1, 2])));
        assert!(!Quantifier::Exists.holds(&set(&[]), &set(&[1, 2])));
    }

    #[test]
    fn test_for_all() {
        assert!(Quantifier::ForAll.holds(&set(&[1]), &set(&[1, 2])));
        assert!(!Quantifier::ForAll.holds(&set(&[0, 1]), &set(&[1, 2])));
        // Objects without related objects never qualify
        assert!(!Quantifier::ForAll.holds(&set(&[]), &set(&[1, 2])));
    }

    #[test]
    fn test_strategy_from_toml() {
        let strategy: Strategy = toml::from_str(
            r#"
            [[rules]]
            relation = "likes"
            source = 0
            target = 1
            quantifier = "exists"

            [[rules]]
            relation = "liked_by"
            source = 1
            target = 0
            quantifier = "for_all"
            "#,
        )
        .unwrap();

        assert_eq!(
            strategy,
            Strategy::new(vec![
                Rule::exists("likes", 0, 1),
                Rule::for_all("liked_by", 1, 0),
            ])
        );
        assert_eq!(Quantifier::ForAll.to_string(), "∀");
    }
}
