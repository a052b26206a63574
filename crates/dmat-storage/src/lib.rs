#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `dmat-storage` provides the element containers that back a matrix. The storage is
//! separated from the matrix so that different layouts can be plugged in through the
//! [`Array2D`] trait:
//!
//! - [`DenseArray2D`]: all elements live in one contiguous buffer and a table of row
//!   offsets gives O(1) access to each row. Exchanging two rows only swaps two table
//!   entries.
//! - [`FixedArray2D`]: a native `[[T; C]; R]` array whose shape is fixed at compile time.
//!   It cannot be resized.
//!
//! ```rust
//! use dmat_storage::{Array2D, DenseArray2D};
//!
//! let mut a = DenseArray2D::<f64>::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! a.swap_rows(0, 1);
//! assert_eq!(a[0], [3.0, 4.0]);
//! assert!(a.rows_swapped());
//! ```

/// Array2D trait shared by every storage layout.
pub mod array;

/// Dense storage with a row offset table.
pub mod dense;

/// Error types for the storage module.
pub mod error;

/// Compile-time sized storage.
pub mod fixed;

/// Serialization of the storage types when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::array::Array2D;
pub use crate::dense::DenseArray2D;
pub use crate::error::StorageError;
pub use crate::fixed::FixedArray2D;
