use fca_core::ValidationError;
use fca_transversal::SolverError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LatticeError>;

#[derive(Error, Debug)]
pub enum LatticeError {
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
