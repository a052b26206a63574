use crate::error::StorageError;

/// A two dimensional, row addressable element container.
///
/// Rows are handed out as contiguous slices of `num_cols()` elements. The physical
/// order of the rows in memory is an implementation detail: after a row exchange the
/// logical row `r` may live anywhere in the backing buffer.
///
/// # Methods
///
/// * `with_shape` - Allocates a zero filled array with the given shape.
/// * `resize` - Changes the shape, discarding the element values.
/// * `row` / `row_mut` - Access a single logical row.
/// * `row_pair_mut` - Mutable access to one row while reading another.
/// * `swap_rows` - Exchanges two logical rows.
pub trait Array2D<T: Copy>: Clone {
    /// Creates an array with `rows x cols` zeroed elements.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::FixedShape`] if the layout cannot hold that shape.
    fn with_shape(rows: usize, cols: usize) -> Result<Self, StorageError>;

    /// Returns the number of rows.
    fn num_rows(&self) -> usize;

    /// Returns the number of columns.
    fn num_cols(&self) -> usize;

    /// Returns the shape as `[rows, cols]`.
    #[inline]
    fn shape(&self) -> [usize; 2] {
        [self.num_rows(), self.num_cols()]
    }

    /// Returns the number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.num_rows() * self.num_cols()
    }

    /// Returns true if the array holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resizes the array to `rows x cols`.
    ///
    /// Element values are not preserved across a resize. Calling it with the current
    /// shape is a no-op.
    fn resize(&mut self, rows: usize, cols: usize) -> Result<(), StorageError>;

    /// Returns the elements of the logical row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    fn row(&self, row: usize) -> &[T];

    /// Returns the elements of the logical row `row` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    fn row_mut(&mut self, row: usize) -> &mut [T];

    /// Returns the row `dst` mutably together with the row `src`.
    ///
    /// # Panics
    ///
    /// Panics if `dst == src` or either row is out of bounds.
    fn row_pair_mut(&mut self, dst: usize, src: usize) -> (&mut [T], &[T]);

    /// Exchanges the logical rows `r1` and `r2`.
    fn swap_rows(&mut self, r1: usize, r2: usize);

    /// Returns true if rows were exchanged since the last (re)allocation, meaning the
    /// backing buffer is no longer in logical row-major order.
    fn rows_swapped(&self) -> bool {
        false
    }

    /// Loads row-major values into the array, in logical row order.
    ///
    /// Values past `rows * cols` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidLength`] if `init` is shorter than the array.
    fn initialize(&mut self, init: &[T]) -> Result<(), StorageError> {
        let (rows, cols) = (self.num_rows(), self.num_cols());
        if init.len() < rows * cols {
            return Err(StorageError::InvalidLength {
                expected: rows * cols,
                actual: init.len(),
            });
        }

        for r in 0..rows {
            self.row_mut(r)
                .copy_from_slice(&init[r * cols..(r + 1) * cols]);
        }

        Ok(())
    }

    /// Sets every element to `value`.
    fn fill(&mut self, value: T) {
        for r in 0..self.num_rows() {
            self.row_mut(r).fill(value);
        }
    }

    /// Copies the elements into a vector in logical row-major order.
    fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        for r in 0..self.num_rows() {
            out.extend_from_slice(self.row(r));
        }
        out
    }
}
