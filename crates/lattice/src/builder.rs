use crate::error::Result;
use crate::lattice::ConceptLattice;
use crate::rules::{association_rules, AssociationRule};
use fca_core::{Concept, Context};
use fca_transversal::{ConceptEnumerator, TransversalSolver};
use std::collections::HashSet;

/// Build lattices, rules and introducer concepts from contexts
pub struct LatticeBuilder<S> {
    enumerator: ConceptEnumerator<S>,
}

impl<S: TransversalSolver> LatticeBuilder<S> {
    pub fn new(solver: S) -> Self {
        Self {
            enumerator: ConceptEnumerator::new(solver),
        }
    }

    pub fn enumerator(&self) -> &ConceptEnumerator<S> {
        &self.enumerator
    }

    /// Concept lattice of a context
    pub fn lattice(&self, context: &Context) -> Result<ConceptLattice> {
        let concepts = self.enumerator.concepts(context)?;
        Ok(ConceptLattice::from_concepts(concepts))
    }

    /// Association rules of a context, one per covering edge
    pub fn association_rules(&self, context: &Context) -> Result<Vec<AssociationRule>> {
        let concepts = self.enumerator.concepts(context)?;
        Ok(association_rules(&concepts))
    }

    /// Concepts introducing the elements of one dimension.
    ///
    /// The context is sliced at each element of `dimension`, every concept of
    /// a slice gets its support on `dimension` put back in place, and repeats
    /// are dropped. Order follows the elements, then the slice's concepts.
    pub fn introducers_dimension(
        &self,
        context: &Context,
        dimension: usize,
    ) -> Result<Vec<Concept>> {
        let mut seen = HashSet::new();
        let mut introducers = Vec::new();
        self.collect_introducers(context, dimension, &mut seen, &mut introducers)?;
        Ok(introducers)
    }

    /// Introducer concepts over every dimension, first occurrence kept
    pub fn all_introducers(&self, context: &Context) -> Result<Vec<Concept>> {
        let mut seen = HashSet::new();
        let mut introducers = Vec::new();
        for dimension in 0..context.dimensions() {
            self.collect_introducers(context, dimension, &mut seen, &mut introducers)?;
        }

        log::debug!(
            "Found {} introducer concepts over {} dimensions",
            introducers.len(),
            context.dimensions()
        );
        Ok(introducers)
    }

    fn collect_introducers(
        &self,
        context: &Context,
        dimension: usize,
        seen: &mut HashSet<Concept>,
        introducers: &mut Vec<Concept>,
    ) -> Result<()> {
        for element in 0..context.dimension_size(dimension)? {
            let slice = context.slice(element, dimension)?;
            for concept in self.enumerator.concepts(&slice)? {
                let support = context.support(&concept, dimension)?;
                let introducer = concept.with_component(dimension, support)?;
                if seen.insert(introducer.clone()) {
                    introducers.push(introducer);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fca_core::ElementSet;
    use fca_transversal::BergeSolver;
    use pretty_assertions::assert_eq;

    fn set(items: &[usize]) -> ElementSet {
        items.iter().copied().collect()
    }

    fn scenario() -> Context {
        Context::binary(3, 2, [(0, 0), (1, 0), (1, 1), (2, 1)]).unwrap()
    }

    #[test]
    fn test_attribute_introducers() {
        let builder = LatticeBuilder::new(BergeSolver);
        let introducers = builder.introducers_dimension(&scenario(), 1).unwrap();
        assert_eq!(
            introducers,
            vec![
                Concept::binary(set(&[0, 1]), set(&[0])),
                Concept::binary(set(&[1, 2]), set(&[1])),
            ]
        );
    }

    #[test]
    fn test_object_introducers() {
        let builder = LatticeBuilder::new(BergeSolver);
        let introducers = builder.introducers_dimension(&scenario(), 0).unwrap();
        assert_eq!(
            introducers,
            vec![
                Concept::binary(set(&[0, 1]), set(&[0])),
                Concept::binary(set(&[1]), set(&[0, 1])),
                Concept::binary(set(&[1, 2]), set(&[1])),
            ]
        );
    }

    #[test]
    fn test_all_introducers_deduplicates_across_dimensions() {
        let builder = LatticeBuilder::new(BergeSolver);
        let introducers = builder.all_introducers(&scenario()).unwrap();
        assert_eq!(
            introducers,
            vec![
                Concept::binary(set(&[0, 1]), set(&[0])),
                Concept::binary(set(&[1]), set(&[0, 1])),
                Concept::binary(set(&[1, 2]), set(&[1])),
            ]
        );
    }

    #[test]
    fn test_introducers_reject_bad_dimension() {
        let builder = LatticeBuilder::new(BergeSolver);
        assert!(builder.introducers_dimension(&scenario(), 2).is_err());
    }

    #[test]
    fn test_builder_lattice_and_rules() {
        let builder = LatticeBuilder::new(BergeSolver);
        let lattice = builder.lattice(&scenario()).unwrap();
        assert_eq!(lattice.node_count(), 4);
        assert_eq!(lattice.edge_count(), 4);

        let rules = builder.association_rules(&scenario()).unwrap();
        assert_eq!(rules.len(), 4);
    }
}
