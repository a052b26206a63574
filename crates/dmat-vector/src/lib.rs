#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the vector module.
pub mod error;

/// Slice level kernels shared by the vector and matrix code.
pub mod ops;

/// The owned numeric vector.
pub mod vector;

pub use error::VectorError;
pub use vector::Vector;
