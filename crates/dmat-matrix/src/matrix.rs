use std::ops::{Index, IndexMut};

use dmat_storage::{Array2D, DenseArray2D, FixedArray2D, StorageError};
use num_traits::Float;

use crate::error::MatrixError;

/// Returns the default zero test of a matrix, `100 * T::epsilon()`.
pub fn default_zero_test<T: Float>() -> T {
    // 100 is exactly representable by every float type
    T::epsilon() * T::from(100u8).unwrap_or_else(T::one)
}

/// A dense 2D matrix.
///
/// The elements are kept in a storage of type `A` that implements [`Array2D`], so the
/// same numeric code runs on a resizable [`DenseArray2D`] or on a compile-time sized
/// [`FixedArray2D`]. Rows are reached through `m[r]`, which yields a slice, so `m[r][c]`
/// reads a single element; `m[(r, c)]` is the equivalent tuple form.
///
/// Each matrix carries a zero test: the tolerance under which a value is considered
/// zero when comparing matrices and when looking for a pivot.
///
/// # Type Parameters
///
/// * `T` - The floating point element type.
/// * `A` - The storage layout, [`DenseArray2D`] by default.
///
/// # Examples
///
/// ```rust
/// use dmat_matrix::DenseMatrix;
///
/// let a = DenseMatrix::<f64>::from_shape_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]).unwrap();
/// let i = DenseMatrix::<f64>::eye(2).unwrap();
/// let b = (&a * &i).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b[1][1], 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct Matrix<T, A = DenseArray2D<T>> {
    storage: A,
    zero_test: T,
}

/// A matrix backed by a resizable [`DenseArray2D`].
pub type DenseMatrix<T> = Matrix<T, DenseArray2D<T>>;

/// A matrix backed by a [`FixedArray2D`] of `R` rows and `C` columns.
pub type FixedMatrix<T, const R: usize, const C: usize> = Matrix<T, FixedArray2D<T, R, C>>;

impl<T: Float, A: Array2D<T>> Matrix<T, A> {
    /// Wraps an existing storage with the default zero test.
    pub fn from_storage(storage: A) -> Self {
        Self {
            storage,
            zero_test: default_zero_test(),
        }
    }

    /// Creates a zero filled matrix with the given shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot take the shape.
    pub fn with_shape(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Ok(Self::from_storage(A::with_shape(rows, cols)?))
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len() != rows * cols` or the storage cannot take the
    /// shape.
    pub fn from_shape_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::from(StorageError::InvalidLength {
                expected: rows * cols,
                actual: data.len(),
            }));
        }

        let mut m = Self::with_shape(rows, cols)?;
        m.storage.initialize(data)?;
        Ok(m)
    }

    /// Creates a matrix from a row-major vector.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        Self::from_shape_slice(rows, cols, &data)
    }

    /// Creates a matrix whose element `(r, c)` is `f(r, c)`.
    pub fn from_shape_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self, MatrixError>
    where
        F: Fn(usize, usize) -> T,
    {
        let mut m = Self::with_shape(rows, cols)?;
        for r in 0..rows {
            for (c, x) in m.row_mut(r).iter_mut().enumerate() {
                *x = f(r, c);
            }
        }
        Ok(m)
    }

    /// Creates the `n x n` identity matrix.
    pub fn eye(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::with_shape(n, n)?;
        m.identity()?;
        Ok(m)
    }

    /// Sets the zero test, consuming and returning the matrix.
    pub fn with_zero_test(mut self, zero_test: T) -> Self {
        self.zero_test = zero_test;
        self
    }

    /// Returns the zero test.
    #[inline]
    pub fn zero_test(&self) -> T {
        self.zero_test
    }

    /// Sets the zero test.
    #[inline]
    pub fn set_zero_test(&mut self, zero_test: T) {
        self.zero_test = zero_test;
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.storage.num_rows()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.storage.num_cols()
    }

    /// Returns the shape as `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.storage.shape()
    }

    /// Returns the underlying storage.
    #[inline]
    pub fn as_storage(&self) -> &A {
        &self.storage
    }

    /// Consumes the matrix and returns the underlying storage.
    pub fn into_storage(self) -> A {
        self.storage
    }

    /// Copies the elements into a vector in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.to_vec()
    }

    /// Returns the logical row `row`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        self.storage.row(row)
    }

    /// Returns the logical row `row` mutably.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        self.storage.row_mut(row)
    }

    /// Returns the row `dst` mutably together with the row `src`.
    ///
    /// # Panics
    ///
    /// Panics if `dst == src`.
    #[inline]
    pub fn row_pair_mut(&mut self, dst: usize, src: usize) -> (&mut [T], &[T]) {
        self.storage.row_pair_mut(dst, src)
    }

    /// Resizes the matrix. Element values are not preserved.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), MatrixError> {
        Ok(self.storage.resize(rows, cols)?)
    }

    /// Resizes this matrix to the shape of `other`.
    pub fn make_same_size(&mut self, other: &Self) -> Result<(), MatrixError> {
        self.resize(other.num_rows(), other.num_cols())
    }

    /// Loads row-major values, ignoring values past `rows * cols`.
    pub fn initialize(&mut self, data: &[T]) -> Result<(), MatrixError> {
        Ok(self.storage.initialize(data)?)
    }

    /// Returns true if the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }

    /// Returns true if this matrix has the same shape as `other`.
    #[inline]
    pub fn is_same_size(&self, other: &Self) -> bool {
        Self::same_size(self, other)
    }

    /// Returns true if `a` and `b` have the same shape.
    #[inline]
    pub fn same_size(a: &Self, b: &Self) -> bool {
        a.shape() == b.shape()
    }

    /// Exchanges two rows.
    #[inline]
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        self.storage.swap_rows(r1, r2);
    }

    /// Sets every element to `value`.
    pub fn set(&mut self, value: T) {
        self.storage.fill(value);
    }

    /// Sets every element to zero.
    pub fn zero(&mut self) {
        self.set(T::zero());
    }

    /// Makes this matrix diagonal with `d` on the diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if the matrix is not square.
    pub fn diagonal(&mut self, d: T) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare(self.shape()));
        }

        for r in 0..self.num_rows() {
            let row = self.row_mut(r);
            row.fill(T::zero());
            row[r] = d;
        }
        Ok(())
    }

    /// Makes this matrix the identity.
    pub fn identity(&mut self) -> Result<(), MatrixError> {
        self.diagonal(T::one())
    }

    /// Applies `f` to every element in place.
    pub(crate) fn apply<F: Fn(T) -> T>(&mut self, f: F) {
        for r in 0..self.num_rows() {
            self.row_mut(r).iter_mut().for_each(|x| *x = f(*x));
        }
    }
}

impl<T: Float, A: Array2D<T> + Default> Default for Matrix<T, A> {
    fn default() -> Self {
        Self::from_storage(A::default())
    }
}

/// Two matrices are equal if they have the same shape and every pair of elements
/// differs by less than the zero test of the left hand side.
impl<T: Float, A: Array2D<T>> PartialEq for Matrix<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_size(other)
            && (0..self.num_rows()).all(|r| {
                self.row(r)
                    .iter()
                    .zip(other.row(r))
                    .all(|(&x, &y)| (x - y).abs() < self.zero_test)
            })
    }
}

impl<T: Float, A: Array2D<T>> Index<usize> for Matrix<T, A> {
    type Output = [T];

    #[inline]
    fn index(&self, row: usize) -> &[T] {
        self.row(row)
    }
}

impl<T: Float, A: Array2D<T>> IndexMut<usize> for Matrix<T, A> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        self.row_mut(row)
    }
}

impl<T: Float, A: Array2D<T>> Index<(usize, usize)> for Matrix<T, A> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.row(row)[col]
    }
}

impl<T: Float, A: Array2D<T>> IndexMut<(usize, usize)> for Matrix<T, A> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.row_mut(row)[col]
    }
}
