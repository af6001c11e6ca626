use crate::lattice::confidence;
use crate::order::covering_relation;
use fca_core::{Concept, ElementSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule read off one covering edge: objects carrying `premise` carry
/// `conclusion` with the given confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    pub premise: ElementSet,
    pub conclusion: ElementSet,
    pub confidence: f64,
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |set: &ElementSet| {
            set.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(
            f,
            "{{{}}} -> {{{}}} ({:.2})",
            render(&self.premise),
            render(&self.conclusion),
            self.confidence
        )
    }
}

/// One rule per covering edge `(C, D)`: `intent(C) -> intent(D)` with
/// confidence `|extent(D)| / |extent(C)|`. Edges between concepts without an
/// intent yield no rule.
pub fn association_rules(concepts: &[Concept]) -> Vec<AssociationRule> {
    covering_relation(concepts)
        .into_iter()
        .filter_map(|edge| {
            let lower = &concepts[edge.lower];
            let upper = &concepts[edge.upper];
            Some(AssociationRule {
                premise: lower.intent()?.clone(),
                conclusion: upper.intent()?.clone(),
                confidence: confidence(lower, upper),
            })
        })
        .collect()
}
