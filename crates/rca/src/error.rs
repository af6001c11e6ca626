use fca_core::ValidationError;
use fca_transversal::SolverError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RcaError>;

#[derive(Error, Debug)]
pub enum RcaError {
    #[error("Unknown relation: {0}")]
    UnknownRelation(String),

    #[error("Context index {index} out of range for a family of {contexts} contexts")]
    ContextIndex { index: usize, contexts: usize },

    #[error("Relation {relation} does not fit the family: {reason}")]
    RelationMismatch { relation: String, reason: String },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RcaError {
    pub fn context_index(index: usize, contexts: usize) -> Self {
        Self::ContextIndex { index, contexts }
    }

    pub fn mismatch(relation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RelationMismatch {
            relation: relation.into(),
            reason: reason.into(),
        }
    }
}
