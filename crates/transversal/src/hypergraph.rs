use crate::error::{Result, SolverError};
use fca_core::{Context, CrossProduct, ElementSet};

/// Minimal hitting set of a hypergraph
pub type Transversal = ElementSet;

/// Edges over the flat vertex universe `0..universe`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hypergraph {
    universe: usize,
    edges: Vec<Vec<usize>>,
}

impl Hypergraph {
    pub fn new(universe: usize) -> Self {
        Self {
            universe,
            edges: Vec::new(),
        }
    }

    /// Build from edges, rejecting vertices outside the universe
    pub fn from_edges<I, E>(universe: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = usize>,
    {
        let mut hypergraph = Self::new(universe);
        for edge in edges {
            hypergraph.push_edge(edge)?;
        }
        Ok(hypergraph)
    }

    /// Add an edge; vertices are sorted and deduplicated
    pub fn push_edge<E>(&mut self, edge: E) -> Result<()>
    where
        E: IntoIterator<Item = usize>,
    {
        let vertices: ElementSet = edge.into_iter().collect();
        if let Some(&vertex) = vertices.iter().next_back() {
            if vertex >= self.universe {
                return Err(SolverError::VertexOutOfRange {
                    vertex,
                    universe: self.universe,
                });
            }
        }
        self.edges.push(vertices.into_iter().collect());
        Ok(())
    }

    /// Complement hypergraph of a context.
    ///
    /// One edge per tuple of the full Cartesian product that is absent from
    /// the relation. Coordinate `x` of dimension `i` becomes vertex
    /// `offset(i) + x`, where `offset(i)` is the sum of the sizes before `i`.
    pub fn complement_of(context: &Context) -> Self {
        let offsets = offsets(context.sizes());
        let universe = context.sizes().iter().sum();

        let edges = CrossProduct::of_ranges(context.sizes())
            .filter(|tuple| !context.contains(tuple))
            .map(|tuple| {
                tuple
                    .iter()
                    .zip(&offsets)
                    .map(|(&x, &offset)| offset + x)
                    .collect()
            })
            .collect();

        Self { universe, edges }
    }

    pub fn universe(&self) -> usize {
        self.universe
    }

    pub fn edges(&self) -> &[Vec<usize>] {
        &self.edges
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether `set` hits every edge
    pub fn is_transversal(&self, set: &ElementSet) -> bool {
        self.edges
            .iter()
            .all(|edge| edge.iter().any(|v| set.contains(v)))
    }

    /// Solver input: one line per edge, comma-separated vertex ids
    pub fn to_solver_input(&self) -> String {
        let mut out = String::new();
        for edge in &self.edges {
            let line = edge
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Start of each dimension in the flat vertex universe
pub fn offsets(sizes: &[usize]) -> Vec<usize> {
    sizes
        .iter()
        .scan(0, |acc, &size| {
            let start = *acc;
            *acc += size;
            Some(start)
        })
        .collect()
}
