use thiserror::Error;

/// Result type for context algebra operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Malformed input detected before any closure computation runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A context needs at least the object dimension
    #[error("Validation error: a context needs at least one dimension")]
    NoDimensions,

    /// Tuple length disagrees with the number of dimensions
    #[error("Validation error: tuple {index} has {found} coordinates, expected {expected}")]
    RaggedTuple {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Tuple coordinate outside its dimension
    #[error(
        "Validation error: coordinate {value} of tuple {index} is out of range for dimension {dimension} (size {size})"
    )]
    CoordinateOutOfRange {
        index: usize,
        dimension: usize,
        value: usize,
        size: usize,
    },

    /// Operation defined only on binary contexts
    #[error("Validation error: expected a binary context, found {0} dimensions")]
    NotBinary(usize),

    /// Operation needs more dimensions than the context has
    #[error("Validation error: operation needs at least {required} dimensions, found {found}")]
    TooFewDimensions { required: usize, found: usize },

    /// Dimension index outside the context
    #[error("Validation error: dimension {dimension} does not exist ({dimensions} dimensions)")]
    DimensionOutOfRange { dimension: usize, dimensions: usize },

    /// Element index outside its dimension
    #[error("Validation error: element {element} is out of range for dimension {dimension} (size {size})")]
    ElementOutOfRange {
        dimension: usize,
        element: usize,
        size: usize,
    },

    /// Concept component count disagrees with the context
    #[error("Validation error: concept has {found} components, expected {expected}")]
    ConceptArity { expected: usize, found: usize },
}

impl ValidationError {
    /// Create a dimension range error
    pub fn dimension(dimension: usize, dimensions: usize) -> Self {
        Self::DimensionOutOfRange {
            dimension,
            dimensions,
        }
    }

    /// Create an element range error
    pub fn element(dimension: usize, element: usize, size: usize) -> Self {
        Self::ElementOutOfRange {
            dimension,
            element,
            size,
        }
    }

    /// Create a concept arity error
    pub fn arity(expected: usize, found: usize) -> Self {
        Self::ConceptArity { expected, found }
    }
}
