use fca_core::ValidationError;
use thiserror::Error;

/// Result type for transversal enumeration
pub type Result<T> = std::result::Result<T, SolverError>;

/// Failures at the minimal-transversal solver boundary
#[derive(Error, Debug)]
pub enum SolverError {
    /// Solver produced no parseable transversal
    #[error("Solver returned no transversal")]
    EmptyOutput,

    /// Solver missing, exited with failure, or could not be driven
    #[error("Solver process error ({program}): {reason}")]
    Process { program: String, reason: String },

    /// Solver did not finish within the configured bound
    #[error("Solver timed out after {timeout_ms} ms ({program})")]
    Timeout { program: String, timeout_ms: u64 },

    /// Solver output does not follow the line protocol
    #[error("Malformed solver output: {0}")]
    MalformedOutput(String),

    /// Invalid solver configuration
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    /// Hypergraph edge refers to a vertex outside the universe
    #[error("Vertex {vertex} is outside the hypergraph universe of size {universe}")]
    VertexOutOfRange { vertex: usize, universe: usize },

    /// IO error while exchanging data with the solver
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed context
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SolverError {
    /// Create a process error
    pub fn process(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Process {
            program: program.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed output error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedOutput(msg.into())
    }

    /// Whether the solver itself failed (as opposed to the input being bad)
    pub fn is_solver_failure(&self) -> bool {
        matches!(
            self,
            Self::EmptyOutput | Self::Process { .. } | Self::Timeout { .. } | Self::MalformedOutput(_)
        )
    }
}
