use num_traits::Zero;

use crate::error::VectorError;

/// Sum of the pairwise products of `a` and `b`.
///
/// This is the inner loop shared by [`Vector::dot`](crate::Vector::dot) and by the
/// row products of the matrix crate, where a row of `A` meets a row of `B` in
/// `A·Bᵗ` or a right-hand side vector in `A·x`. Empty slices give zero.
///
/// # Errors
///
/// Returns [`VectorError::LengthMismatch`] with both lengths when they differ.
///
/// ```
/// use dmat_vector::ops::dot_kernel;
///
/// // perpendicular rows
/// assert_eq!(dot_kernel(&[2.0, -1.0], &[1.0, 2.0]), Ok(0.0));
/// assert!(dot_kernel(&[2.0, -1.0], &[1.0]).is_err());
/// ```
pub fn dot_kernel<T>(a: &[T], b: &[T]) -> Result<T, VectorError>
where
    T: Zero + Copy + std::ops::Mul<Output = T>,
{
    if a.len() != b.len() {
        return Err(VectorError::LengthMismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}
