use dmat_storage::Array2D;
use dmat_vector::ops::dot_kernel;
use num_traits::Float;

use crate::{error::MatrixError, matrix::Matrix};

fn check_same_size<T: Float, A: Array2D<T>>(
    a: &Matrix<T, A>,
    b: &Matrix<T, A>,
) -> Result<(), MatrixError> {
    if !a.is_same_size(b) {
        return Err(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Writes `f(a[r][c])` into `result[r][c]`, resizing `result` to the shape of `a`.
fn map_into<T, A, F>(result: &mut Matrix<T, A>, a: &Matrix<T, A>, f: F) -> Result<(), MatrixError>
where
    T: Float,
    A: Array2D<T>,
    F: Fn(T) -> T,
{
    result.make_same_size(a)?;
    for r in 0..a.num_rows() {
        result
            .row_mut(r)
            .iter_mut()
            .zip(a.row(r))
            .for_each(|(out, &x)| *out = f(x));
    }
    Ok(())
}

/// Writes `f(a[r][c], b[r][c])` into `result[r][c]`; `a` and `b` must have the same shape.
fn zip_into<T, A, F>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    b: &Matrix<T, A>,
    f: F,
) -> Result<(), MatrixError>
where
    T: Float,
    A: Array2D<T>,
    F: Fn(T, T) -> T,
{
    check_same_size(a, b)?;
    result.make_same_size(a)?;
    for r in 0..a.num_rows() {
        result
            .row_mut(r)
            .iter_mut()
            .zip(a.row(r).iter().zip(b.row(r)))
            .for_each(|(out, (&x, &y))| *out = f(x, y));
    }
    Ok(())
}

/// Makes `result` the element-wise sum `a + b`.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if `a` and `b` have different shapes.
///
/// # Example
///
/// ```
/// use dmat_matrix::{ops, DenseMatrix};
///
/// let a = DenseMatrix::from_shape_slice(1, 2, &[1.0, 2.0]).unwrap();
/// let b = DenseMatrix::from_shape_slice(1, 2, &[3.0, 4.0]).unwrap();
/// let mut c = DenseMatrix::default();
/// ops::add(&mut c, &a, &b).unwrap();
/// assert_eq!(c.to_vec(), vec![4.0, 6.0]);
/// ```
pub fn add<T: Float, A: Array2D<T>>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    b: &Matrix<T, A>,
) -> Result<(), MatrixError> {
    zip_into(result, a, b, |x, y| x + y)
}

/// Makes `result` the element-wise difference `a - b`.
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if `a` and `b` have different shapes.
pub fn sub<T: Float, A: Array2D<T>>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    b: &Matrix<T, A>,
) -> Result<(), MatrixError> {
    zip_into(result, a, b, |x, y| x - y)
}

/// Makes `result` equal to `a` with `s` added to every element.
///
/// Only fails if `result` cannot take the shape of `a`.
pub fn add_scalar<T: Float, A: Array2D<T>>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    s: T,
) -> Result<(), MatrixError> {
    map_into(result, a, |x| x + s)
}

/// Makes `result` equal to `a` with `s` subtracted from every element.
pub fn sub_scalar<T: Float, A: Array2D<T>>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    s: T,
) -> Result<(), MatrixError> {
    map_into(result, a, |x| x - s)
}

/// Makes `result` equal to `a` with every element multiplied by `s`.
pub fn mul_scalar<T: Float, A: Array2D<T>>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    s: T,
) -> Result<(), MatrixError> {
    map_into(result, a, |x| x * s)
}

/// Makes `result` the matrix product `a * b`.
///
/// `result` is resized to `a.num_rows() x b.num_cols()` and every element is the dot
/// product of a row of `a` with a column of `b`.
///
/// # Errors
///
/// Returns [`MatrixError::NotConformable`] if `a.num_cols() != b.num_rows()`.
///
/// # Example
///
/// ```
/// use dmat_matrix::{ops, DenseMatrix};
///
/// let a = DenseMatrix::from_shape_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]).unwrap();
/// let b = DenseMatrix::from_shape_slice(2, 1, &[1.0, 1.0]).unwrap();
/// let mut c = DenseMatrix::default();
/// ops::mul(&mut c, &a, &b).unwrap();
/// assert_eq!(c.to_vec(), vec![3.0, 4.0]);
/// ```
pub fn mul<T: Float, A: Array2D<T>>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    b: &Matrix<T, A>,
) -> Result<(), MatrixError> {
    if a.num_cols() != b.num_rows() {
        return Err(MatrixError::NotConformable {
            left: a.shape(),
            right: b.shape(),
        });
    }

    result.resize(a.num_rows(), b.num_cols())?;
    for r in 0..a.num_rows() {
        let ra = a.row(r);
        for (c, out) in result.row_mut(r).iter_mut().enumerate() {
            *out = ra
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (i, &x)| acc + x * b[i][c]);
        }
    }
    Ok(())
}

/// Makes `result` the product `a * bᵗ` without building the transpose of `b`.
///
/// `result` is resized to `a.num_rows() x b.num_rows()`; element `(r, c)` is the dot
/// product of row `r` of `a` with row `c` of `b`.
///
/// # Errors
///
/// Returns [`MatrixError::NotConformable`] if `a.num_cols() != b.num_cols()`.
pub fn mul_a_bt<T: Float, A: Array2D<T>>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    b: &Matrix<T, A>,
) -> Result<(), MatrixError> {
    if a.num_cols() != b.num_cols() {
        return Err(MatrixError::NotConformable {
            left: a.shape(),
            right: b.shape(),
        });
    }

    result.resize(a.num_rows(), b.num_rows())?;
    for r in 0..a.num_rows() {
        let ra = a.row(r);
        for (c, out) in result.row_mut(r).iter_mut().enumerate() {
            *out = dot_kernel(ra, b.row(c))?;
        }
    }
    Ok(())
}

/// Makes `result` the product `aᵗ * b` without building the transpose of `a`.
///
/// `result` is resized to `a.num_cols() x b.num_cols()` and
/// `result[r][c] = Σ_i a[i][r] * b[i][c]`.
///
/// # Errors
///
/// Returns [`MatrixError::NotConformable`] if `a.num_rows() != b.num_rows()`.
pub fn mul_at_b<T: Float, A: Array2D<T>>(
    result: &mut Matrix<T, A>,
    a: &Matrix<T, A>,
    b: &Matrix<T, A>,
) -> Result<(), MatrixError> {
    if a.num_rows() != b.num_rows() {
        return Err(MatrixError::NotConformable {
            left: a.shape(),
            right: b.shape(),
        });
    }

    result.resize(a.num_cols(), b.num_cols())?;
    result.zero();
    // accumulate one row of a and b at a time so both are read row-wise
    for i in 0..a.num_rows() {
        let (ra, rb) = (a.row(i), b.row(i));
        for (r, &x) in ra.iter().enumerate() {
            result
                .row_mut(r)
                .iter_mut()
                .zip(rb)
                .for_each(|(out, &y)| *out = *out + x * y);
        }
    }
    Ok(())
}

impl<T: Float, A: Array2D<T>> Matrix<T, A> {
    /// Adds `s` to every element.
    pub fn add_scalar(&mut self, s: T) {
        self.apply(|x| x + s);
    }

    /// Subtracts `s` from every element.
    pub fn sub_scalar(&mut self, s: T) {
        self.apply(|x| x - s);
    }

    /// Multiplies every element by `s`.
    pub fn mul_scalar(&mut self, s: T) {
        self.apply(|x| x * s);
    }

    /// Adds `a` to this matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ; the matrix is left
    /// unchanged.
    pub fn add_matrix(&mut self, a: &Self) -> Result<(), MatrixError> {
        check_same_size(self, a)?;
        for r in 0..self.num_rows() {
            self.row_mut(r)
                .iter_mut()
                .zip(a.row(r))
                .for_each(|(x, &y)| *x = *x + y);
        }
        Ok(())
    }

    /// Subtracts `a` from this matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the shapes differ; the matrix is left
    /// unchanged.
    pub fn sub_matrix(&mut self, a: &Self) -> Result<(), MatrixError> {
        check_same_size(self, a)?;
        for r in 0..self.num_rows() {
            self.row_mut(r)
                .iter_mut()
                .zip(a.row(r))
                .for_each(|(x, &y)| *x = *x - y);
        }
        Ok(())
    }

    /// Makes this matrix `a + b`. See [`add`].
    pub fn assign_add(&mut self, a: &Self, b: &Self) -> Result<(), MatrixError> {
        add(self, a, b)
    }

    /// Makes this matrix `a - b`. See [`sub`].
    pub fn assign_sub(&mut self, a: &Self, b: &Self) -> Result<(), MatrixError> {
        sub(self, a, b)
    }

    /// Makes this matrix `a * b`. See [`mul`].
    pub fn assign_mul(&mut self, a: &Self, b: &Self) -> Result<(), MatrixError> {
        mul(self, a, b)
    }

    /// Makes this matrix `a + s`. See [`add_scalar`].
    pub fn assign_add_scalar(&mut self, a: &Self, s: T) -> Result<(), MatrixError> {
        add_scalar(self, a, s)
    }

    /// Makes this matrix `a - s`. See [`sub_scalar`].
    pub fn assign_sub_scalar(&mut self, a: &Self, s: T) -> Result<(), MatrixError> {
        sub_scalar(self, a, s)
    }

    /// Makes this matrix `a * s`. See [`mul_scalar`].
    pub fn assign_mul_scalar(&mut self, a: &Self, s: T) -> Result<(), MatrixError> {
        mul_scalar(self, a, s)
    }

    /// Makes this matrix `a * bᵗ`. See [`mul_a_bt`].
    pub fn mul_a_bt(&mut self, a: &Self, b: &Self) -> Result<(), MatrixError> {
        mul_a_bt(self, a, b)
    }

    /// Makes this matrix `aᵗ * b`. See [`mul_at_b`].
    pub fn mul_at_b(&mut self, a: &Self, b: &Self) -> Result<(), MatrixError> {
        mul_at_b(self, a, b)
    }
}

impl<T: Float, A: Array2D<T>> std::ops::Add for &Matrix<T, A> {
    type Output = Result<Matrix<T, A>, MatrixError>;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.add_matrix(rhs)?;
        Ok(out)
    }
}

impl<T: Float, A: Array2D<T>> std::ops::Sub for &Matrix<T, A> {
    type Output = Result<Matrix<T, A>, MatrixError>;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out.sub_matrix(rhs)?;
        Ok(out)
    }
}

impl<T: Float, A: Array2D<T>> std::ops::Mul for &Matrix<T, A> {
    type Output = Result<Matrix<T, A>, MatrixError>;

    fn mul(self, rhs: Self) -> Self::Output {
        // the clone only carries the zero test and storage type, mul resizes it
        let mut out = self.clone();
        mul(&mut out, self, rhs)?;
        Ok(out)
    }
}

/// # Panics
///
/// Panics if the shapes differ. Use [`Matrix::add_matrix`] to handle the error.
impl<T: Float, A: Array2D<T>> std::ops::AddAssign<&Matrix<T, A>> for Matrix<T, A> {
    fn add_assign(&mut self, rhs: &Matrix<T, A>) {
        if let Err(e) = self.add_matrix(rhs) {
            panic!("{e}");
        }
    }
}

/// # Panics
///
/// Panics if the shapes differ. Use [`Matrix::sub_matrix`] to handle the error.
impl<T: Float, A: Array2D<T>> std::ops::SubAssign<&Matrix<T, A>> for Matrix<T, A> {
    fn sub_assign(&mut self, rhs: &Matrix<T, A>) {
        if let Err(e) = self.sub_matrix(rhs) {
            panic!("{e}");
        }
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<A: Array2D<$t>> std::ops::Add<$t> for &Matrix<$t, A> {
                type Output = Matrix<$t, A>;

                fn add(self, s: $t) -> Matrix<$t, A> {
                    let mut out = self.clone();
                    out.add_scalar(s);
                    out
                }
            }

            impl<A: Array2D<$t>> std::ops::Sub<$t> for &Matrix<$t, A> {
                type Output = Matrix<$t, A>;

                fn sub(self, s: $t) -> Matrix<$t, A> {
                    let mut out = self.clone();
                    out.sub_scalar(s);
                    out
                }
            }

            impl<A: Array2D<$t>> std::ops::Mul<$t> for &Matrix<$t, A> {
                type Output = Matrix<$t, A>;

                fn mul(self, s: $t) -> Matrix<$t, A> {
                    let mut out = self.clone();
                    out.mul_scalar(s);
                    out
                }
            }

            impl<A: Array2D<$t>> std::ops::AddAssign<$t> for Matrix<$t, A> {
                fn add_assign(&mut self, s: $t) {
                    self.add_scalar(s);
                }
            }

            impl<A: Array2D<$t>> std::ops::SubAssign<$t> for Matrix<$t, A> {
                fn sub_assign(&mut self, s: $t) {
                    self.sub_scalar(s);
                }
            }

            impl<A: Array2D<$t>> std::ops::MulAssign<$t> for Matrix<$t, A> {
                fn mul_assign(&mut self, s: $t) {
                    self.mul_scalar(s);
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);
