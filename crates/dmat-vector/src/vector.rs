use std::ops::{Deref, DerefMut};

use num_traits::{Float, Zero};

use crate::{error::VectorError, ops::dot_kernel};

/// An owned, one dimensional numeric vector.
///
/// The vector dereferences to a slice, so indexing, iteration and the slice API are
/// available directly. The dimension of the vector is its length.
///
/// # Examples
///
/// ```rust
/// use dmat_vector::Vector;
///
/// let mut v = Vector::from(vec![3.0, 4.0]);
/// assert_eq!(v.length(), 5.0);
/// v.normalize().unwrap();
/// assert_eq!(v[0], 0.6);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates a vector with `dim` zero elements.
    pub fn new(dim: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self {
            data: vec![T::zero(); dim],
        }
    }

    /// Creates a vector by copying the given slice.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the dimension of the vector.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Resizes the vector to `dim` elements, new elements are zero.
    pub fn resize(&mut self, dim: usize)
    where
        T: Zero + Clone,
    {
        self.data.resize(dim, T::zero());
    }

    /// Consumes the vector and returns the underlying `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the dot product of `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if the dimensions differ.
    pub fn dot_of(a: &Self, b: &Self) -> Result<T, VectorError>
    where
        T: Zero + Copy + std::ops::Mul<Output = T>,
    {
        dot_kernel(&a.data, &b.data)
    }

    /// Returns the dot product of this vector and `other`.
    pub fn dot(&self, other: &Self) -> Result<T, VectorError>
    where
        T: Zero + Copy + std::ops::Mul<Output = T>,
    {
        Self::dot_of(self, other)
    }
}

impl<T: Float> Vector<T> {
    /// Returns the euclidean length of the vector.
    pub fn length(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// Reduces the vector to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroLength`] if the length is zero or not a number, in
    /// which case the vector is left unchanged.
    pub fn normalize(&mut self) -> Result<(), VectorError> {
        let len = self.length();
        if len.is_nan() || len.is_zero() {
            return Err(VectorError::ZeroLength);
        }

        self.data.iter_mut().for_each(|x| *x = *x / len);
        Ok(())
    }

    /// Makes this vector the cross product `a x b`.
    ///
    /// The cross product is only computed for 3 dimensional vectors.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::CrossDimension`] if either operand is not 3 dimensional,
    /// in which case this vector is left unchanged.
    pub fn cross(&mut self, a: &Self, b: &Self) -> Result<(), VectorError> {
        let (a, b) = match (a.data.as_slice(), b.data.as_slice()) {
            ([a0, a1, a2], [b0, b1, b2]) => ([*a0, *a1, *a2], [*b0, *b1, *b2]),
            _ => return Err(VectorError::CrossDimension(a.dim(), b.dim())),
        };

        self.data.clear();
        self.data.extend_from_slice(&[
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]);
        Ok(())
    }

    /// Returns the cross product `a x b` as a new vector.
    pub fn cross_of(a: &Self, b: &Self) -> Result<Self, VectorError> {
        let mut out = Self::new(3);
        out.cross(a, b)?;
        Ok(out)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_new() {
        let v = Vector::<f32>::new(4);
        assert_eq!(v.dim(), 4);
        assert_eq!(v.to_vec(), vec![0.0; 4]);
    }

    #[test]
    fn test_vector_length() {
        let v = Vector::from(vec![1.0, 2.0, 2.0]);
        assert_relative_eq!(v.length(), 3.0);
        assert_eq!(Vector::<f64>::new(0).length(), 0.0);
    }

    #[test]
    fn test_vector_dot() -> Result<(), VectorError> {
        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![4.0, -5.0, 6.0]);
        assert_eq!(a.dot(&b)?, 12.0);
        assert_eq!(Vector::dot_of(&a, &b)?, 12.0);

        let c = Vector::from(vec![1.0]);
        assert_eq!(a.dot(&c), Err(VectorError::LengthMismatch(3, 1)));
        Ok(())
    }

    #[test]
    fn test_vector_normalize() -> Result<(), VectorError> {
        let mut v = Vector::from(vec![0.0, 3.0, 4.0]);
        v.normalize()?;
        assert_relative_eq!(v[1], 0.6);
        assert_relative_eq!(v[2], 0.8);
        assert_relative_eq!(v.length(), 1.0);
        Ok(())
    }

    #[test]
    fn test_vector_normalize_zero() {
        let mut v = Vector::<f64>::new(3);
        assert_eq!(v.normalize(), Err(VectorError::ZeroLength));
        assert_eq!(v.to_vec(), vec![0.0; 3]);
    }

    #[test]
    fn test_vector_normalize_nan() {
        let mut v = Vector::from(vec![f64::NAN, 1.0]);
        assert_eq!(v.normalize(), Err(VectorError::ZeroLength));
        assert!(v[0].is_nan());
        assert_eq!(v[1], 1.0);
    }

    #[test]
    fn test_vector_cross() -> Result<(), VectorError> {
        let x = Vector::from(vec![1.0, 0.0, 0.0]);
        let y = Vector::from(vec![0.0, 1.0, 0.0]);
        let mut z = Vector::new(0);
        z.cross(&x, &y)?;
        assert_eq!(z.to_vec(), vec![0.0, 0.0, 1.0]);

        let a = Vector::from(vec![1.0, 2.0, 3.0]);
        let b = Vector::from(vec![4.0, 5.0, 6.0]);
        let c = Vector::cross_of(&a, &b)?;
        assert_eq!(c.to_vec(), vec![-3.0, 6.0, -3.0]);

        // the cross product is orthogonal to both operands
        assert_relative_eq!(c.dot(&a)?, 0.0);
        assert_relative_eq!(c.dot(&b)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_vector_cross_wrong_dim() {
        let a = Vector::from(vec![1.0, 2.0]);
        let b = Vector::from(vec![4.0, 5.0]);
        let mut c = Vector::from(vec![9.0]);
        assert_eq!(c.cross(&a, &b), Err(VectorError::CrossDimension(2, 2)));
        assert_eq!(c.to_vec(), vec![9.0]);
    }

    #[test]
    fn test_vector_resize_and_collect() {
        let mut v: Vector<i32> = (1..=3).collect();
        v.resize(5);
        assert_eq!(v.into_vec(), vec![1, 2, 3, 0, 0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_vector_serde() -> Result<(), Box<dyn std::error::Error>> {
        let v = Vector::from(vec![1.5, -2.0]);
        let serialized = serde_json::to_string(&v)?;
        assert_eq!(serialized, "[1.5,-2.0]");
        let w: Vector<f64> = serde_json::from_str(&serialized)?;
        assert_eq!(v, w);
        Ok(())
    }
}
