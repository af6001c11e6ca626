use crate::error::Result;
use crate::hypergraph::{Hypergraph, Transversal};

/// Minimal-transversal solver boundary.
///
/// One synchronous request/response per call: the solver receives a whole
/// hypergraph and returns every minimal transversal, with no streaming of
/// partial results. Implementations must not share per-call resources
/// between invocations.
pub trait TransversalSolver {
    fn minimal_transversals(&self, hypergraph: &Hypergraph) -> Result<Vec<Transversal>>;
}

impl<T: TransversalSolver + ?Sized> TransversalSolver for &T {
    fn minimal_transversals(&self, hypergraph: &Hypergraph) -> Result<Vec<Transversal>> {
        (**self).minimal_transversals(hypergraph)
    }
}

impl<T: TransversalSolver + ?Sized> TransversalSolver for Box<T> {
    fn minimal_transversals(&self, hypergraph: &Hypergraph) -> Result<Vec<Transversal>> {
        (**self).minimal_transversals(hypergraph)
    }
}

/// In-process solver using Berge's sequential algorithm.
///
/// Processes edges one at a time, extending every transversal that misses
/// the new edge by each of its vertices and pruning non-minimal sets.
/// Exponential in the worst case; meant for small inputs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BergeSolver;

impl BergeSolver {
    pub fn new() -> Self {
        Self
    }
}

impl TransversalSolver for BergeSolver {
    fn minimal_transversals(&self, hypergraph: &Hypergraph) -> Result<Vec<Transversal>> {
        let mut minimal = vec![Transversal::new()];

        for edge in hypergraph.edges() {
            let mut grown = Vec::with_capacity(minimal.len());
            for transversal in &minimal {
                if edge.iter().any(|v| transversal.contains(v)) {
                    grown.push(transversal.clone());
                    continue;
                }
                for &vertex in edge {
                    let mut extended = transversal.clone();
                    extended.insert(vertex);
                    grown.push(extended);
                }
            }
            minimal = keep_minimal(grown);
        }

        Ok(minimal)
    }
}

/// Drop duplicates and every set that contains another one
fn keep_minimal(mut sets: Vec<Transversal>) -> Vec<Transversal> {
    sets.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let mut kept: Vec<Transversal> = Vec::with_capacity(sets.len());
    for set in sets {
        if !kept.iter().any(|k| k.is_subset(&set)) {
            kept.push(set);
        }
    }
    kept.sort();
    kept
}
