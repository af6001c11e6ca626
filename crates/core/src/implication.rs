use crate::context::{Context, ElementSet};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `premise -> conclusion` over one attribute dimension
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Implication {
    premise: ElementSet,
    conclusion: ElementSet,
}

impl Implication {
    pub fn new(premise: ElementSet, conclusion: ElementSet) -> Self {
        Self {
            premise,
            conclusion,
        }
    }

    pub fn premise(&self) -> &ElementSet {
        &self.premise
    }

    pub fn conclusion(&self) -> &ElementSet {
        &self.conclusion
    }

    /// Every object having the premise also has the conclusion
    pub fn holds_in(&self, context: &Context) -> Result<bool> {
        let extent = context.extent(&self.premise)?;
        let shared = context.intent(&extent)?;
        Ok(self.conclusion.is_subset(&shared))
    }
}

impl fmt::Display for Implication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = |set: &ElementSet| {
            set.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(f, "{{{}}} -> {{{}}}", render(&self.premise), render(&self.conclusion))
    }
}

/// Smallest superset of `set` closed under `rules`.
///
/// Fires every rule whose premise is already contained, until a full pass
/// adds nothing. Each rule fires at most once.
pub fn closure(set: &ElementSet, rules: &[Implication]) -> ElementSet {
    let mut closed = set.clone();
    let mut fired = vec![false; rules.len()];

    loop {
        let mut grew = false;
        for (rule, done) in rules.iter().zip(fired.iter_mut()) {
            if *done || !rule.premise.is_subset(&closed) {
                continue;
            }
            *done = true;
            if !rule.conclusion.is_subset(&closed) {
                closed.extend(rule.conclusion.iter().copied());
                grew = true;
            }
        }
        if !grew {
            return closed;
        }
    }
}
