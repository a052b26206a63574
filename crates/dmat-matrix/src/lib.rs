#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! [`Matrix`] is generic over its element type and over the [`Array2D`] storage that
//! holds the elements. [`DenseMatrix`] can be resized and exchanges rows in O(1) through
//! a row offset table; [`FixedMatrix`] has a compile-time shape.
//!
//! The arithmetic comes in three forms:
//!
//! - free functions in [`ops`] that write into a result matrix,
//! - member functions such as [`Matrix::assign_mul`] where the matrix is the result,
//! - in place functions such as [`Matrix::add_scalar`], plus the `std::ops` operators.
//!
//! Linear systems are handled by [`solve`]: Gauss-Jordan inversion and Gaussian
//! elimination, both with partial pivoting.
//!
//! ```rust
//! use dmat_matrix::{DenseMatrix, Vector};
//!
//! let a = DenseMatrix::<f64>::from_shape_slice(2, 2, &[3.0, 2.0, 1.0, 4.0]).unwrap();
//! let x = a.solve(&Vector::from(vec![7.0, 9.0])).unwrap();
//!
//! let mut b = Vector::new(0);
//! a.mul_vector(&x, &mut b).unwrap();
//! assert!((b[0] - 7.0).abs() < 1e-12 && (b[1] - 9.0).abs() < 1e-12);
//! ```

/// Error types for the matrix module.
pub mod error;

/// The matrix type and its element-wise operations.
pub mod matrix;

/// Matrix arithmetic.
pub mod ops;

/// Inversion and linear system solvers.
pub mod solve;

mod transpose;

/// Serialization of matrices when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::error::MatrixError;
pub use crate::matrix::{default_zero_test, DenseMatrix, FixedMatrix, Matrix};

pub use dmat_storage::{Array2D, DenseArray2D, FixedArray2D, StorageError};
pub use dmat_vector::{Vector, VectorError};
