//! # FCA Core
//!
//! Context algebra and closure operators for formal concept analysis over
//! binary and polyadic incidence relations.
//!
//! ## Architecture
//!
//! ```text
//! Context (sizes + distinct tuples, validated on construction)
//!     │
//!     ├──> Derivation operators (binary)
//!     │      ├─ intent / extent
//!     │      └─ object / attribute Galois closure
//!     │
//!     ├──> Reshaping
//!     │      ├─ slice   (fix one element, drop its dimension)
//!     │      ├─ support (dimension elements compatible with a box)
//!     │      └─ flatten (realized attribute tuples -> one dimension)
//!     │
//!     ├──> Canonical lattice walker
//!     │      ├─ next_closure            (all concepts, lectic order)
//!     │      └─ duquenne_guigues_basis  (canonical implication basis)
//!     │
//!     └──> Implication closure
//!            ├─ closure (rule fixpoint)
//!            └─ minimal generators
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fca_core::{next_closure, Context};
//!
//! let context = Context::binary(3, 2, [(0, 0), (1, 0), (1, 1), (2, 1)]).unwrap();
//! let concepts = next_closure(&context).unwrap();
//! assert_eq!(concepts.len(), 4);
//! ```

mod concept;
mod context;
mod error;
mod flatten;
mod generators;
mod implication;
mod next_closure;
mod product;

pub use concept::Concept;
pub use context::{Context, ElementSet};
pub use error::{Result, ValidationError};
pub use flatten::Flattening;
pub use generators::{all_minimal_generators, minimal_generator};
pub use implication::{closure, Implication};
pub use next_closure::{duquenne_guigues_basis, next_closure, CanonicalBasis};
pub use product::CrossProduct;
