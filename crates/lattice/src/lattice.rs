use crate::order::{covering_relation, CoveringEdge};
use fca_core::Concept;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Edge weight of the lattice graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverEdge {
    /// |extent(upper)| / |extent(lower)|
    pub confidence: f64,
}

/// Concept lattice as a directed Hasse diagram.
///
/// Edges point from a concept to each of its immediate successors in the
/// attribute order, so the most general concept (largest extent) has no
/// incoming edges.
pub struct ConceptLattice {
    /// Directed graph (lower concept -> upper concept)
    pub graph: DiGraph<Concept, CoverEdge>,

    /// Concept -> NodeIndex mapping for fast lookup
    pub concept_index: HashMap<Concept, NodeIndex>,
}

impl ConceptLattice {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            concept_index: HashMap::new(),
        }
    }

    /// Build the Hasse diagram of a concept set. Duplicate concepts collapse
    /// into one node.
    pub fn from_concepts(concepts: Vec<Concept>) -> Self {
        let mut lattice = Self::new();
        let mut unique = Vec::with_capacity(concepts.len());
        for concept in concepts {
            if !lattice.concept_index.contains_key(&concept) {
                lattice.add_concept(concept.clone());
                unique.push(concept);
            }
        }

        for CoveringEdge { lower, upper } in covering_relation(&unique) {
            let from = lattice.concept_index[&unique[lower]];
            let to = lattice.concept_index[&unique[upper]];
            let edge = CoverEdge {
                confidence: confidence(&unique[lower], &unique[upper]),
            };
            lattice.graph.add_edge(from, to, edge);
        }

        log::info!(
            "Built concept lattice: {} nodes, {} edges",
            lattice.node_count(),
            lattice.edge_count()
        );

        lattice
    }

    fn add_concept(&mut self, concept: Concept) -> NodeIndex {
        let idx = self.graph.add_node(concept.clone());
        self.concept_index.insert(concept, idx);
        idx
    }

    /// Find node by concept
    pub fn find_node(&self, concept: &Concept) -> Option<NodeIndex> {
        self.concept_index.get(concept).copied()
    }

    pub fn get_concept(&self, idx: NodeIndex) -> Option<&Concept> {
        self.graph.node_weight(idx)
    }

    /// Immediate successors in the attribute order
    pub fn upper_covers(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect()
    }

    /// Immediate predecessors in the attribute order
    pub fn lower_covers(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(node, Direction::Incoming)
            .collect()
    }

    /// Concept without predecessors (the most general one), if unique
    pub fn top(&self) -> Option<NodeIndex> {
        self.unique_extreme(Direction::Incoming)
    }

    /// Concept without successors (the most specific one), if unique
    pub fn bottom(&self) -> Option<NodeIndex> {
        self.unique_extreme(Direction::Outgoing)
    }

    fn unique_extreme(&self, direction: Direction) -> Option<NodeIndex> {
        let mut extremes = self
            .graph
            .node_indices()
            .filter(|&idx| self.graph.edges_directed(idx, direction).next().is_none());
        let first = extremes.next()?;
        extremes.next().is_none().then_some(first)
    }

    /// Covering pairs as concepts, with the confidence of each
    pub fn edges(&self) -> impl Iterator<Item = (&Concept, &Concept, CoverEdge)> {
        self.graph
            .edge_references()
            .map(move |e| (&self.graph[e.source()], &self.graph[e.target()], *e.weight()))
    }

    /// Get all concepts
    pub fn concepts(&self) -> impl Iterator<Item = (NodeIndex, &Concept)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for ConceptLattice {
    fn default() -> Self {
        Self::new()
    }
}

/// Ratio of object-component sizes, `|extent(upper)| / |extent(lower)|`;
/// zero when the lower concept has no objects
pub fn confidence(lower: &Concept, upper: &Concept) -> f64 {
    let base = lower.extent().len();
    if base == 0 {
        return 0.0;
    }
    upper.extent().len() as f64 / base as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use fca_core::ElementSet;

    fn set(items: &[usize]) -> ElementSet {
        items.iter().copied().collect()
    }

    fn scenario() -> Vec<Concept> {
        vec![
            Concept::binary(set(&[1]), set(&[0, 1])),
            Concept::binary(set(&[0, 1, 2]), set(&[])),
            Concept::binary(set(&[0, 1]), set(&[0])),
            Concept::binary(set(&[1, 2]), set(&[1])),
        ]
    }

    #[test]
    fn test_lattice_shape() {
        let lattice = ConceptLattice::from_concepts(scenario());
        assert_eq!(lattice.node_count(), 4);
        assert_eq!(lattice.edge_count(), 4);

        let top = lattice.top().expect("top");
        assert_eq!(lattice.get_concept(top).unwrap().extent(), &set(&[0, 1, 2]));
        assert_eq!(lattice.upper_covers(top).len(), 2);

        let bottom = lattice.bottom().expect("bottom");
        assert_eq!(lattice.get_concept(bottom).unwrap().intent(), Some(&set(&[0, 1])));
        assert_eq!(lattice.lower_covers(bottom).len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut concepts = scenario();
        concepts.push(concepts[0].clone());
        let lattice = ConceptLattice::from_concepts(concepts);
        assert_eq!(lattice.node_count(), 4);
        assert_eq!(lattice.edge_count(), 4);
    }

    #[test]
    fn test_edge_confidence() {
        let lattice = ConceptLattice::from_concepts(scenario());
        for (lower, upper, edge) in lattice.edges() {
            assert!(lower.strictly_below(upper));
            assert_eq!(edge.confidence, confidence(lower, upper));
        }
    }

    #[test]
    fn test_confidence_with_empty_extent() {
        let lower = Concept::binary(set(&[]), set(&[0]));
        let upper = Concept::binary(set(&[]), set(&[0, 1]));
        assert_eq!(confidence(&lower, &upper), 0.0);
    }

    #[test]
    fn test_find_node() {
        let lattice = ConceptLattice::from_concepts(scenario());
        let concept = Concept::binary(set(&[1, 2]), set(&[1]));
        let idx = lattice.find_node(&concept).expect("node");
        assert_eq!(lattice.get_concept(idx), Some(&concept));
        assert!(lattice
            .find_node(&Concept::binary(set(&[2]), set(&[])))
            .is_none());
    }
}
