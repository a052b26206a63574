use dmat_storage::Array2D;
use num_traits::Float;

use crate::{error::MatrixError, matrix::Matrix};

impl<T: Float, A: Array2D<T>> Matrix<T, A> {
    /// Transposes the matrix in place.
    ///
    /// A square matrix exchanges its strictly upper and lower triangular elements and
    /// keeps the diagonal. A non square matrix is copied first and rebuilt with
    /// [`Matrix::transpose_from`].
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square and its storage cannot take the
    /// transposed shape, as with a [`dmat_storage::FixedArray2D`].
    ///
    /// # Example
    ///
    /// ```
    /// use dmat_matrix::DenseMatrix;
    ///
    /// let mut m = DenseMatrix::from_shape_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// m.transpose().unwrap();
    /// assert_eq!(m.shape(), [3, 2]);
    /// assert_eq!(m.to_vec(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    /// ```
    pub fn transpose(&mut self) -> Result<(), MatrixError> {
        if !self.is_square() {
            let snapshot = self.clone();
            return self.transpose_from(&snapshot);
        }

        for r in 1..self.num_rows() {
            for c in 0..r {
                let (row_r, row_c) = self.row_pair_mut(r, c);
                let upper = row_c[r];
                let lower = std::mem::replace(&mut row_r[c], upper);
                self.row_mut(c)[r] = lower;
            }
        }
        Ok(())
    }

    /// Makes this matrix the transpose of `a`, resized to `a.num_cols() x a.num_rows()`.
    pub fn transpose_from(&mut self, a: &Self) -> Result<(), MatrixError> {
        self.resize(a.num_cols(), a.num_rows())?;
        for r in 0..a.num_cols() {
            for (c, x) in self.row_mut(r).iter_mut().enumerate() {
                *x = a[c][r];
            }
        }
        Ok(())
    }

    /// Returns the transpose as a new matrix with the same zero test.
    pub fn transposed(&self) -> Result<Self, MatrixError> {
        let mut out = self.clone();
        out.transpose_from(self)?;
        Ok(out)
    }
}
