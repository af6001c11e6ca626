//! # FCA Transversal
//!
//! Concept enumeration for contexts of any dimension through minimal
//! transversals of the complement hypergraph, plus the boundary to the
//! external solver that computes them.
//!
//! ## Pipeline
//!
//! ```text
//! Context
//!     │
//!     ├──> Complement hypergraph (one edge per absent tuple, flat vertex ids)
//!     │
//!     ├──> TransversalSolver
//!     │      ├─ ExternalSolver (child process, per-call temp file, timeout)
//!     │      └─ BergeSolver    (in-process, small inputs)
//!     │
//!     └──> Complement each transversal per dimension
//!            └─> Concept[]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fca_core::Context;
//! use fca_transversal::{BergeSolver, ConceptEnumerator};
//!
//! let context = Context::binary(3, 2, [(0, 0), (1, 0), (1, 1), (2, 1)]).unwrap();
//! let enumerator = ConceptEnumerator::new(BergeSolver);
//! assert_eq!(enumerator.concepts(&context).unwrap().len(), 4);
//! ```

mod config;
mod enumerator;
mod error;
mod external;
mod hypergraph;
mod premises;
mod solver;

pub use config::{OutputFormat, SolverConfig, INPUT_PLACEHOLDER};
pub use enumerator::{transversal_to_concept, ConceptEnumerator};
pub use error::{Result, SolverError};
pub use external::{parse_solver_output, ExternalSolver};
pub use hypergraph::{offsets, Hypergraph, Transversal};
pub use premises::PremiseBasis;
pub use solver::{BergeSolver, TransversalSolver};
