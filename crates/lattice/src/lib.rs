//! # FCA Lattice
//!
//! Order structure over a concept set: the covering (Hasse) relation, the
//! association rules it carries, and the concepts introducing each element of
//! each dimension.
//!
//! ## Architecture
//!
//! ```text
//! Context
//!     │
//!     ├──> ConceptEnumerator (fca-transversal)
//!     │      └─ Concept[]
//!     │
//!     ├──> Covering relation (pairwise, minimal upper candidates)
//!     │      ├─ ConceptLattice (petgraph, confidence on edges)
//!     │      └─ AssociationRule[] (intent -> intent, extent ratio)
//!     │
//!     └──> Introducers
//!            ├─ Slice at each element of a dimension
//!            ├─ Enumerate slice concepts
//!            └─ Re-insert the support, drop repeats
//! ```

mod builder;
mod error;
mod lattice;
mod order;
mod rules;

pub use builder::LatticeBuilder;
pub use error::{LatticeError, Result};
pub use lattice::{confidence, ConceptLattice, CoverEdge};
pub use order::{covering_relation, CoveringEdge};
pub use rules::{association_rules, AssociationRule};
