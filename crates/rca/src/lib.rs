//! # FCA RCA
//!
//! Relational concept analysis over families of polyadic contexts: objects of
//! one context are described by the concepts of another, reached through a
//! named relation and a quantifier.
//!
//! ## Architecture
//!
//! ```text
//! ContextFamily (labeled contexts + named relations)
//!     │
//!     ├──> Preprocess
//!     │      └─ Disjunction element on every attribute dimension
//!     │
//!     ├──> Iterate `depth` times, rules in strategy order
//!     │      ├─ Enumerate target concepts (fca-transversal)
//!     │      ├─ Name one relational attribute per concept (∃ / ∀)
//!     │      └─ Replace the source context with one more dimension
//!     │
//!     └──> Concepts of every final context
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fca_core::Context;
//! use fca_rca::{ContextFamily, LabeledContext, RcaConfig, Relation, RelationalEngine, Rule, Strategy};
//! use fca_transversal::BergeSolver;
//!
//! let mut family = ContextFamily::new();
//! family.add_context(LabeledContext::unlabeled(Context::binary(2, 1, [(0, 0)]).unwrap()));
//! family.add_context(LabeledContext::unlabeled(Context::binary(2, 2, [(0, 0), (1, 1)]).unwrap()));
//! family.add_relation("r", Relation::from_pairs(0, 1, 2, [(0, 1)])).unwrap();
//!
//! let engine = RelationalEngine::new(BergeSolver, RcaConfig::with_depth(1)).unwrap();
//! let output = engine.run(&family, &Strategy::new(vec![Rule::exists("r", 0, 1)])).unwrap();
//! assert_eq!(output.family.context(0).unwrap().dimensions(), 3);
//! ```

mod config;
mod engine;
mod error;
mod family;
mod preprocess;
mod strategy;

pub use config::RcaConfig;
pub use engine::{RcaOutput, RelationalEngine};
pub use error::{RcaError, Result};
pub use family::{ContextFamily, LabeledContext, Relation};
pub use preprocess::add_disjunctions;
pub use strategy::{Quantifier, Rule, Strategy};
