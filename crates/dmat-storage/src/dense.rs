use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::{array::Array2D, error::StorageError};

/// Dense 2D array with a row offset table.
///
/// All the elements are stored in a single vector and a second vector holds the
/// offset of the first element of each logical row. Row access never has to compute
/// `row * cols`, and exchanging two rows is O(1): only the two offsets are swapped.
///
/// Once rows have been exchanged the element vector is no longer in logical row-major
/// order, which is recorded by [`Array2D::rows_swapped`]. Bulk operations that need
/// the logical order go through the rows, see [`DenseArray2D::as_contiguous_slice`].
///
/// # Fields
///
/// * `rows` - The number of rows.
/// * `cols` - The number of columns.
/// * `data` - The element buffer of `rows * cols` elements.
/// * `row_offsets` - The buffer offset of each logical row.
/// * `rows_swapped` - Whether any rows were exchanged.
#[derive(Debug)]
pub struct DenseArray2D<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
    row_offsets: Vec<usize>,
    rows_swapped: bool,
}

impl<T: Copy + Zero> DenseArray2D<T> {
    /// Creates a zero filled array with the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut array = Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
            row_offsets: Vec::with_capacity(rows),
            rows_swapped: false,
        };
        array.init_row_offsets();
        array
    }

    /// Creates an array from a row-major vector without copying the data.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidLength`] if `data.len() != rows * cols`.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, StorageError> {
        if data.len() != rows * cols {
            return Err(StorageError::InvalidLength {
                expected: rows * cols,
                actual: data.len(),
            });
        }

        let mut array = Self {
            rows,
            cols,
            data,
            row_offsets: Vec::with_capacity(rows),
            rows_swapped: false,
        };
        array.init_row_offsets();
        Ok(array)
    }

    /// Returns the buffer offset of every logical row.
    #[inline]
    pub fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    /// Returns the element buffer if it is still in logical row-major order.
    pub fn as_contiguous_slice(&self) -> Option<&[T]> {
        if self.rows_swapped {
            None
        } else {
            Some(&self.data)
        }
    }

    fn init_row_offsets(&mut self) {
        let cols = self.cols;
        self.row_offsets.clear();
        self.row_offsets.extend((0..self.rows).map(|r| r * cols));
        self.rows_swapped = false;
    }
}

impl<T: Copy + Zero> Default for DenseArray2D<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Deep copy in logical row order.
///
/// The offset table of the source cannot be reused since it may have been permuted,
/// so the rows are copied one by one into a fresh, unswapped layout.
impl<T: Copy + Zero> Clone for DenseArray2D<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for r in 0..self.rows {
            data.extend_from_slice(self.row(r));
        }

        let mut array = Self {
            rows: self.rows,
            cols: self.cols,
            data,
            row_offsets: Vec::with_capacity(self.rows),
            rows_swapped: false,
        };
        array.init_row_offsets();
        array
    }
}

impl<T: Copy + Zero> Array2D<T> for DenseArray2D<T> {
    fn with_shape(rows: usize, cols: usize) -> Result<Self, StorageError> {
        Ok(Self::new(rows, cols))
    }

    #[inline]
    fn num_rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn num_cols(&self) -> usize {
        self.cols
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<(), StorageError> {
        if rows != self.rows || cols != self.cols {
            self.data.clear();
            self.data.resize(rows * cols, T::zero());
            self.rows = rows;
            self.cols = cols;
            self.init_row_offsets();
        }
        Ok(())
    }

    #[inline]
    fn row(&self, row: usize) -> &[T] {
        let offset = self.row_offsets[row];
        &self.data[offset..offset + self.cols]
    }

    #[inline]
    fn row_mut(&mut self, row: usize) -> &mut [T] {
        let offset = self.row_offsets[row];
        &mut self.data[offset..offset + self.cols]
    }

    fn row_pair_mut(&mut self, dst: usize, src: usize) -> (&mut [T], &[T]) {
        assert_ne!(dst, src, "row_pair_mut needs two distinct rows");
        let cols = self.cols;
        let (d, s) = (self.row_offsets[dst], self.row_offsets[src]);

        if d < s {
            let (lo, hi) = self.data.split_at_mut(s);
            (&mut lo[d..d + cols], &hi[..cols])
        } else {
            let (lo, hi) = self.data.split_at_mut(d);
            (&mut hi[..cols], &lo[s..s + cols])
        }
    }

    fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 != r2 {
            self.row_offsets.swap(r1, r2);
            self.rows_swapped = true;
        }
    }

    #[inline]
    fn rows_swapped(&self) -> bool {
        self.rows_swapped
    }

    fn fill(&mut self, value: T) {
        // every element gets the same value, so the physical order does not matter
        self.data.fill(value);
    }
}

impl<T: Copy + Zero> Index<usize> for DenseArray2D<T> {
    type Output = [T];

    #[inline]
    fn index(&self, row: usize) -> &[T] {
        self.row(row)
    }
}

impl<T: Copy + Zero> IndexMut<usize> for DenseArray2D<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        self.row_mut(row)
    }
}
