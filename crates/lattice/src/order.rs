use fca_core::Concept;
use serde::{Deserialize, Serialize};

/// Immediate-successor pair in the attribute order: `concepts[lower]` lies
/// strictly below `concepts[upper]` with nothing in between
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CoveringEdge {
    pub lower: usize,
    pub upper: usize,
}

/// Hasse diagram of a concept set under componentwise inclusion of the
/// non-object components.
///
/// Pairwise comparison, O(n³) in the number of concepts.
pub fn covering_relation(concepts: &[Concept]) -> Vec<CoveringEdge> {
    let mut edges = Vec::new();

    for (lower, concept) in concepts.iter().enumerate() {
        let mut covers: Vec<usize> = Vec::new();
        for (upper, candidate) in concepts.iter().enumerate() {
            if !concept.strictly_below(candidate) {
                continue;
            }
            if covers
                .iter()
                .any(|&known| concepts[known].attributes_within(candidate))
            {
                continue;
            }
            covers.retain(|&known| !candidate.attributes_within(&concepts[known]));
            covers.push(upper);
        }

        covers.sort_unstable();
        edges.extend(covers.into_iter().map(|upper| CoveringEdge { lower, upper }));
    }

    edges
}
