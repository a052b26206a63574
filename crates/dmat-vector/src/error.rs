use thiserror::Error;

/// An error type for vector operations.
#[derive(Error, Debug, PartialEq)]
pub enum VectorError {
    /// Length mismatch for element-wise vector operations
    #[error("Length mismatch: expected equal length vectors, got {0} and {1}")]
    LengthMismatch(usize, usize),

    /// The vector has zero length and cannot be normalized
    #[error("Cannot normalize a vector of zero length")]
    ZeroLength,

    /// The cross product is only defined here for 3 dimensional vectors
    #[error("Cross product needs two 3 dimensional vectors, got {0} and {1}")]
    CrossDimension(usize, usize),
}
