use dmat_storage::StorageError;
use dmat_vector::VectorError;
use thiserror::Error;

/// An error type for matrix operations.
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    /// The two operands of an element-wise operation have different shapes.
    #[error("Shape mismatch: {left:?} != {right:?}")]
    ShapeMismatch {
        /// Shape of the left operand.
        left: [usize; 2],
        /// Shape of the right operand.
        right: [usize; 2],
    },

    /// The inner dimensions of a product do not agree.
    #[error("Matrices with shapes {left:?} and {right:?} are not conformable")]
    NotConformable {
        /// Shape of the left operand.
        left: [usize; 2],
        /// Shape of the right operand.
        right: [usize; 2],
    },

    /// The operation requires a square matrix.
    #[error("Matrix must be square, got shape {0:?}")]
    NotSquare([usize; 2]),

    /// The operation requires at least one element.
    #[error("Matrix is empty")]
    EmptyMatrix,

    /// No pivot larger than the zero test was found.
    #[error("Matrix is singular: no usable pivot in column {column}")]
    Singular {
        /// The elimination column where the pivot search failed.
        column: usize,
    },

    /// A vector operand does not match the matrix dimension.
    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length required by the matrix.
        expected: usize,
        /// Length of the vector.
        actual: usize,
    },

    /// Storage error
    #[error(transparent)]
    StorageError(#[from] StorageError),

    /// Vector error
    #[error(transparent)]
    VectorError(#[from] VectorError),
}
