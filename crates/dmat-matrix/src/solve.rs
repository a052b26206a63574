use dmat_storage::Array2D;
use dmat_vector::{ops::dot_kernel, Vector};
use num_traits::Float;

use crate::{error::MatrixError, matrix::Matrix};

/// Subtracts `m * src` from `dst`, element by element.
#[inline]
fn eliminate<T: Float>(dst: &mut [T], src: &[T], m: T) {
    dst.iter_mut()
        .zip(src)
        .for_each(|(d, &s)| *d = *d - m * s);
}

#[inline]
fn scale<T: Float>(row: &mut [T], pivot: T) {
    row.iter_mut().for_each(|x| *x = *x / pivot);
}

fn check_system<T: Float, A: Array2D<T>>(a: &Matrix<T, A>, len: usize) -> Result<(), MatrixError> {
    if a.num_rows() == 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    if !a.is_square() {
        return Err(MatrixError::NotSquare(a.shape()));
    }
    if a.num_cols() != len {
        return Err(MatrixError::LengthMismatch {
            expected: a.num_cols(),
            actual: len,
        });
    }
    Ok(())
}

fn singular<T: Float>(column: usize, pivot: T) -> MatrixError {
    log::debug!(
        "singular matrix: pivot {:e} in column {column}",
        pivot.to_f64().unwrap_or(f64::NAN)
    );
    MatrixError::Singular { column }
}

/// Inverts `a` into `ai` by Gauss-Jordan elimination with partial pivoting.
///
/// `ai` is resized to the shape of `a` and starts as the identity. Every row operation
/// applied to `a` is mirrored on `ai`, including the pivot row exchanges, so when `a`
/// has been reduced to the identity `ai` holds the inverse.
///
/// A pivot is usable only if its magnitude is greater than the zero test of `a`. A 1x1
/// matrix is inverted directly and only fails on an exact zero.
///
/// # Errors
///
/// * [`MatrixError::EmptyMatrix`] if `a` has no rows.
/// * [`MatrixError::NotSquare`] if `a` is not square.
/// * [`MatrixError::Singular`] if no usable pivot is found.
///
/// On error the contents of `a` and `ai` are unspecified.
///
/// # Example
///
/// ```
/// use dmat_matrix::{solve, DenseMatrix};
///
/// let mut a = DenseMatrix::from_shape_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
/// let mut ai = DenseMatrix::default();
/// solve::invert(&mut a, &mut ai).unwrap();
///
/// let expected = DenseMatrix::from_shape_slice(2, 2, &[0.6, -0.7, -0.2, 0.4]).unwrap();
/// assert_eq!(ai.with_zero_test(1e-12), expected);
/// ```
pub fn invert<T: Float, A: Array2D<T>>(
    a: &mut Matrix<T, A>,
    ai: &mut Matrix<T, A>,
) -> Result<(), MatrixError> {
    if a.num_rows() == 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    if !a.is_square() {
        return Err(MatrixError::NotSquare(a.shape()));
    }

    ai.make_same_size(a)?;
    ai.identity()?;

    let n = a.num_rows();
    if n == 1 {
        let x = a[0][0];
        if x.is_zero() {
            return Err(singular(0, x));
        }
        ai[0][0] = x.recip();
        a[0][0] = T::one();
        return Ok(());
    }

    let zero_test = a.zero_test();

    // forward pass, reduce a to unit upper triangular
    for c in 0..n {
        let (p, pivot) = a.find_max_pivot(c);
        if pivot.abs() <= zero_test {
            return Err(singular(c, pivot));
        }

        if p != c {
            log::trace!("pivot column {c}: exchanging rows {c} and {p}");
            a.swap_rows(c, p);
            ai.swap_rows(c, p);
        }

        scale(&mut a.row_mut(c)[c..], pivot);
        scale(ai.row_mut(c), pivot);

        for r in c + 1..n {
            let m = a[r][c];
            let (dst, src) = a.row_pair_mut(r, c);
            eliminate(&mut dst[c..], &src[c..], m);
            let (dst, src) = ai.row_pair_mut(r, c);
            eliminate(dst, src, m);
        }
    }

    let last = a[n - 1][n - 1];
    if last.abs() <= zero_test {
        return Err(singular(n - 1, last));
    }

    // backward pass, clear everything above the diagonal
    for c in 1..n {
        for r in 0..c {
            let m = a[r][c];
            let (dst, src) = a.row_pair_mut(r, c);
            eliminate(&mut dst[c..], &src[c..], m);
            let (dst, src) = ai.row_pair_mut(r, c);
            eliminate(dst, src, m);
        }
    }

    Ok(())
}

/// Solves `a x = b` by Gaussian elimination with partial pivoting and back substitution.
///
/// On success `a` and `b` hold the triangularized system and `x` is resized to the
/// dimension of `a` and holds the solution.
///
/// # Errors
///
/// * [`MatrixError::EmptyMatrix`] if `a` has no rows.
/// * [`MatrixError::NotSquare`] if `a` is not square.
/// * [`MatrixError::LengthMismatch`] if `b` does not have one entry per column of `a`.
/// * [`MatrixError::Singular`] if no usable pivot is found.
///
/// On error the contents of `a`, `b` and `x` are unspecified.
///
/// # Example
///
/// ```
/// use dmat_matrix::{solve, DenseMatrix};
/// use dmat_vector::Vector;
///
/// let mut a = DenseMatrix::<f64>::from_shape_slice(2, 2, &[3.0, 2.0, 1.0, 4.0]).unwrap();
/// let mut b = Vector::from(vec![7.0, 9.0]);
/// let mut x = Vector::<f64>::new(0);
/// solve::gauss_elim(&mut a, &mut b, &mut x).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
pub fn gauss_elim<T: Float, A: Array2D<T>>(
    a: &mut Matrix<T, A>,
    b: &mut Vector<T>,
    x: &mut Vector<T>,
) -> Result<(), MatrixError> {
    check_system(a, b.dim())?;

    let n = a.num_rows();
    let zero_test = a.zero_test();

    for c in 0..n - 1 {
        let (p, pivot) = a.find_max_pivot(c);
        if pivot.abs() <= zero_test {
            return Err(singular(c, pivot));
        }

        if p != c {
            log::trace!("pivot column {c}: exchanging rows {c} and {p}");
            a.swap_rows(c, p);
            b.swap(c, p);
        }

        scale(&mut a.row_mut(c)[c..], pivot);
        b[c] = b[c] / pivot;

        for r in c + 1..n {
            let m = a[r][c];
            let (dst, src) = a.row_pair_mut(r, c);
            eliminate(&mut dst[c..], &src[c..], m);
            b[r] = b[r] - m * b[c];
        }
    }

    let last = a[n - 1][n - 1];
    if last.abs() <= zero_test {
        return Err(singular(n - 1, last));
    }

    solve_triangular(a, b, x)
}

/// Solves the upper triangular system `a x = b` by back substitution.
///
/// Only the diagonal and the elements above it are read. `x` is resized to the
/// dimension of `a`.
///
/// # Errors
///
/// Returns [`MatrixError::EmptyMatrix`], [`MatrixError::NotSquare`] or
/// [`MatrixError::LengthMismatch`] if the system is not well formed.
pub fn solve_triangular<T: Float, A: Array2D<T>>(
    a: &Matrix<T, A>,
    b: &Vector<T>,
    x: &mut Vector<T>,
) -> Result<(), MatrixError> {
    check_system(a, b.dim())?;

    let n = a.num_rows();
    x.resize(n);

    for i in (0..n).rev() {
        let row = a.row(i);
        let sum = row[i + 1..]
            .iter()
            .zip(&x[i + 1..])
            .fold(b[i], |acc, (&aij, &xj)| acc - aij * xj);
        x[i] = sum / row[i];
    }
    Ok(())
}

/// Computes `out = a * rhs`, resizing `out` to the number of rows of `a`.
///
/// # Errors
///
/// Returns [`MatrixError::LengthMismatch`] if `rhs` does not have one entry per column
/// of `a`.
pub fn mul_vector<T: Float, A: Array2D<T>>(
    a: &Matrix<T, A>,
    rhs: &Vector<T>,
    out: &mut Vector<T>,
) -> Result<(), MatrixError> {
    if a.num_cols() != rhs.dim() {
        return Err(MatrixError::LengthMismatch {
            expected: a.num_cols(),
            actual: rhs.dim(),
        });
    }

    out.resize(a.num_rows());
    for (r, y) in out.iter_mut().enumerate() {
        *y = dot_kernel(a.row(r), &rhs[..])?;
    }
    Ok(())
}

impl<T: Float, A: Array2D<T>> Matrix<T, A> {
    /// Returns the row in `col..num_rows()` holding the largest absolute value of
    /// column `col`, together with the signed value found there.
    ///
    /// The first row wins on ties, starting from the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not a valid row and column index.
    pub fn find_max_pivot(&self, col: usize) -> (usize, T) {
        let mut best = col;
        let mut best_abs = self[col][col].abs();
        for r in col + 1..self.num_rows() {
            let x = self[r][col].abs();
            if x > best_abs {
                best = r;
                best_abs = x;
            }
        }
        (best, self[best][col])
    }

    /// Inverts this matrix into `ai`, reducing this matrix to the identity.
    /// See [`invert`].
    pub fn invert_into(&mut self, ai: &mut Self) -> Result<(), MatrixError> {
        invert(self, ai)
    }

    /// Returns the inverse, leaving this matrix untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use dmat_matrix::DenseMatrix;
    ///
    /// let a = DenseMatrix::from_shape_slice(2, 2, &[2.0, 0.0, 0.0, 4.0]).unwrap();
    /// let ai = a.inverse().unwrap();
    /// assert_eq!(ai.to_vec(), vec![0.5, 0.0, 0.0, 0.25]);
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let mut a = self.clone();
        let mut ai = self.clone();
        invert(&mut a, &mut ai)?;
        Ok(ai)
    }

    /// Solves `self x = b` in place. See [`gauss_elim`].
    pub fn gauss_elim(&mut self, b: &mut Vector<T>, x: &mut Vector<T>) -> Result<(), MatrixError> {
        gauss_elim(self, b, x)
    }

    /// Returns the solution of `self x = b`, leaving this matrix and `b` untouched.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, MatrixError> {
        let mut a = self.clone();
        let mut b = b.clone();
        let mut x = Vector::new(0);
        gauss_elim(&mut a, &mut b, &mut x)?;
        Ok(x)
    }

    /// Back substitutes the upper triangular system `self x = b`.
    /// See [`solve_triangular`].
    pub fn solve_triangular(&self, b: &Vector<T>, x: &mut Vector<T>) -> Result<(), MatrixError> {
        solve_triangular(self, b, x)
    }

    /// Computes `out = self * rhs`. See [`mul_vector`].
    pub fn mul_vector(&self, rhs: &Vector<T>, out: &mut Vector<T>) -> Result<(), MatrixError> {
        mul_vector(self, rhs, out)
    }
}
