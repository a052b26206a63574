#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use dmat_storage as storage;

#[doc(inline)]
pub use dmat_vector as vector;

#[doc(inline)]
pub use dmat_matrix as matrix;
