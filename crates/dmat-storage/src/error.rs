use thiserror::Error;

/// An error type for 2D array storage operations.
#[derive(Error, Debug, PartialEq)]
pub enum StorageError {
    /// A fixed-size array was asked to take a shape other than its compile-time one.
    #[error("Fixed array shape is {expected:?}, cannot take shape {actual:?}")]
    FixedShape {
        /// The compile-time shape of the array.
        expected: [usize; 2],
        /// The requested shape.
        actual: [usize; 2],
    },

    /// The provided element slice does not cover the array.
    #[error("Invalid data length: expected at least {expected} elements, got {actual}")]
    InvalidLength {
        /// Number of elements required by the shape.
        expected: usize,
        /// Number of elements provided.
        actual: usize,
    },
}
