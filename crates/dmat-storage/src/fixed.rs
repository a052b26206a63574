use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::{array::Array2D, error::StorageError};

/// A 2D array backed by a native `[[T; C]; R]` array.
///
/// The shape is part of the type, so the array cannot be resized: asking for any
/// other shape is an error. There is no row indirection, exchanging two rows moves
/// their elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedArray2D<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T: Copy + Zero, const R: usize, const C: usize> FixedArray2D<T, R, C> {
    /// Creates a zero filled array.
    pub fn new() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Creates an array from a native 2D array.
    pub fn from_array(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    /// Returns the native 2D array.
    #[inline]
    pub fn as_array(&self) -> &[[T; C]; R] {
        &self.data
    }

    fn check_shape(rows: usize, cols: usize) -> Result<(), StorageError> {
        if rows != R || cols != C {
            log::warn!("fixed {R}x{C} array cannot take shape {rows}x{cols}");
            return Err(StorageError::FixedShape {
                expected: [R, C],
                actual: [rows, cols],
            });
        }
        Ok(())
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Default for FixedArray2D<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Array2D<T> for FixedArray2D<T, R, C> {
    fn with_shape(rows: usize, cols: usize) -> Result<Self, StorageError> {
        Self::check_shape(rows, cols)?;
        Ok(Self::new())
    }

    #[inline]
    fn num_rows(&self) -> usize {
        R
    }

    #[inline]
    fn num_cols(&self) -> usize {
        C
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<(), StorageError> {
        Self::check_shape(rows, cols)
    }

    #[inline]
    fn row(&self, row: usize) -> &[T] {
        &self.data[row]
    }

    #[inline]
    fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[row]
    }

    fn row_pair_mut(&mut self, dst: usize, src: usize) -> (&mut [T], &[T]) {
        assert_ne!(dst, src, "row_pair_mut needs two distinct rows");
        if dst < src {
            let (lo, hi) = self.data.split_at_mut(src);
            (&mut lo[dst][..], &hi[0][..])
        } else {
            let (lo, hi) = self.data.split_at_mut(dst);
            (&mut hi[0][..], &lo[src][..])
        }
    }

    fn swap_rows(&mut self, r1: usize, r2: usize) {
        self.data.swap(r1, r2);
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Index<usize> for FixedArray2D<T, R, C> {
    type Output = [T];

    #[inline]
    fn index(&self, row: usize) -> &[T] {
        &self.data[row]
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> IndexMut<usize> for FixedArray2D<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Fixed23 = FixedArray2D<i32, 2, 3>;

    #[test]
    fn test_fixed_shape() {
        let a = Fixed23::new();
        assert_eq!(a.shape(), [2, 3]);
        assert_eq!(a.to_vec(), vec![0; 6]);
        assert!(!a.rows_swapped());
    }

    #[test]
    fn test_fixed_with_shape() {
        assert!(Fixed23::with_shape(2, 3).is_ok());
        assert_eq!(
            Fixed23::with_shape(3, 2).err(),
            Some(StorageError::FixedShape {
                expected: [2, 3],
                actual: [3, 2]
            })
        );
    }

    #[test]
    fn test_fixed_resize() {
        let mut a = Fixed23::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(a.resize(2, 3), Ok(()));
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert!(a.resize(2, 2).is_err());
        assert_eq!(a.shape(), [2, 3]);
    }

    #[test]
    fn test_fixed_swap_rows() {
        let mut a = Fixed23::from_array([[1, 2, 3], [4, 5, 6]]);
        a.swap_rows(0, 1);
        assert_eq!(a.as_array(), &[[4, 5, 6], [1, 2, 3]]);
        assert!(!a.rows_swapped());
    }

    #[test]
    fn test_fixed_initialize() -> Result<(), StorageError> {
        let mut a = Fixed23::new();
        a.initialize(&[1, 2, 3, 4, 5, 6])?;
        assert_eq!(a[1], [4, 5, 6]);
        a[1][2] = 9;
        assert_eq!(a.row(1), [4, 5, 9]);
        assert!(a.initialize(&[1]).is_err());
        Ok(())
    }

    #[test]
    fn test_fixed_row_pair_mut() {
        let mut a = Fixed23::from_array([[1, 2, 3], [4, 5, 6]]);
        let (dst, src) = a.row_pair_mut(0, 1);
        dst.copy_from_slice(src);
        assert_eq!(a[0], [4, 5, 6]);
    }

    #[test]
    #[should_panic]
    fn test_fixed_row_out_of_bounds() {
        let a = Fixed23::new();
        let _ = a.row(2);
    }
}
