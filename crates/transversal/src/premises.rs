use crate::enumerator::ConceptEnumerator;
use crate::error::Result;
use crate::hypergraph::Hypergraph;
use crate::solver::TransversalSolver;
use fca_core::{closure, Context, ElementSet, Flattening, Implication};

/// Implication basis made of proper premises.
///
/// Sound and complete, not minimal: closing under it gives the same result as
/// closing under the canonical basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiseBasis {
    pub implications: Vec<Implication>,
    pub flattening: Option<Flattening>,
}

impl PremiseBasis {
    /// Close an attribute set under the basis
    pub fn close(&self, attributes: &ElementSet) -> ElementSet {
        closure(attributes, &self.implications)
    }
}

impl<S: TransversalSolver> ConceptEnumerator<S> {
    /// Proper-premise basis.
    ///
    /// For each attribute `a`, the premises of `a` are the minimal
    /// transversals of the hypergraph whose edges are the complemented
    /// intents of the objects lacking `a`. Every such edge contains `a`, so
    /// the trivial premise `{a}` is skipped. Contexts with more than two
    /// dimensions are flattened first.
    pub fn proper_premise_basis(&self, context: &Context) -> Result<PremiseBasis> {
        let flattening = if context.dimensions() > 2 {
            Some(context.flatten()?)
        } else {
            None
        };
        let binary = flattening.as_ref().map_or(context, Flattening::context);
        let attributes = binary.attribute_count()?;

        let mut implications = Vec::new();
        for a in 0..attributes {
            let mut hypergraph = Hypergraph::new(attributes);
            for o in (0..binary.object_count()).filter(|&o| !binary.contains(&[o, a])) {
                hypergraph.push_edge((0..attributes).filter(|&b| !binary.contains(&[o, b])))?;
            }

            let conclusion: ElementSet = [a].into_iter().collect();
            for premise in self.transversals(&hypergraph)? {
                if premise != conclusion {
                    implications.push(Implication::new(premise, conclusion.clone()));
                }
            }
        }

        log::debug!(
            "Proper-premise basis over {} attributes has {} implications",
            attributes,
            implications.len()
        );

        Ok(PremiseBasis {
            implications,
            flattening,
        })
    }
}
