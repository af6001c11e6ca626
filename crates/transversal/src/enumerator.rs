use crate::error::Result;
use crate::hypergraph::{offsets, Hypergraph, Transversal};
use crate::solver::TransversalSolver;
use fca_core::{Concept, Context, ElementSet, Flattening};

/// Concept enumeration through minimal transversals of the complement
/// hypergraph.
///
/// A box `A0 x .. x Ak` lies inside the relation exactly when its complement
/// `(D0 \ A0) ∪ .. ∪ (Dk \ Ak)`, taken in the flat vertex universe, hits every
/// absent tuple. Maximal boxes therefore correspond one-to-one to minimal
/// transversals, and each concept is read back by complementing a
/// transversal dimension by dimension.
#[derive(Debug, Clone)]
pub struct ConceptEnumerator<S> {
    solver: S,
}

impl<S: TransversalSolver> ConceptEnumerator<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Minimal transversals of `hypergraph`.
    ///
    /// A hypergraph without edges has the empty set as its only minimal
    /// transversal; the solver is not consulted for it.
    pub fn transversals(&self, hypergraph: &Hypergraph) -> Result<Vec<Transversal>> {
        if hypergraph.is_empty() {
            return Ok(vec![Transversal::new()]);
        }
        self.solver.minimal_transversals(hypergraph)
    }

    /// Every concept of a context of any dimension
    pub fn concepts(&self, context: &Context) -> Result<Vec<Concept>> {
        let hypergraph = Hypergraph::complement_of(context);
        log::debug!(
            "Enumerating concepts of {}-dimensional context: {} absent tuples",
            context.dimensions(),
            hypergraph.len()
        );

        let concepts: Vec<Concept> = self
            .transversals(&hypergraph)?
            .iter()
            .map(|t| transversal_to_concept(t, context.sizes()))
            .collect();

        log::debug!("Reconstructed {} concepts", concepts.len());
        Ok(concepts)
    }

    /// Concepts of the binary flattening, with the table that maps each
    /// synthetic attribute back to its original attribute tuple
    pub fn flattened_concepts(&self, context: &Context) -> Result<(Vec<Concept>, Flattening)> {
        let flattening = context.flatten()?;
        let concepts = self.concepts(flattening.context())?;
        Ok((concepts, flattening))
    }
}

/// Concept whose `i`-th component is dimension `i` minus the transversal's
/// vertices that fall into it
pub fn transversal_to_concept(transversal: &Transversal, sizes: &[usize]) -> Concept {
    let components = sizes
        .iter()
        .zip(offsets(sizes))
        .map(|(&size, offset)| {
            (0..size)
                .filter(|e| !transversal.contains(&(offset + e)))
                .collect::<ElementSet>()
        })
        .collect();
    Concept::new(components)
}
