//! Fixed-length real vector.

use crate::error::LinalgError;
use crate::operations::{self, dot};
use crate::scalar::Scalar;
use crate::storage::Dense;

/// A 1-D vector of real values with exclusively owned, contiguous storage.
///
/// # Examples
///
/// ```
/// use lams::Vector;
///
/// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
/// assert_eq!(a.dot(&b).unwrap(), 32.0);
/// assert_eq!(a.cross(&b).unwrap().as_slice(), &[-3.0, 6.0, -3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<ElT: Scalar = f64> {
    storage: Dense<ElT>,
}

impl<ElT: Scalar> Vector<ElT> {
    /// Create a zero-filled vector of `size` elements.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if the storage cannot be obtained.
    pub fn new(size: usize) -> Result<Self, LinalgError> {
        Ok(Self {
            storage: Dense::try_zeros(size)?,
        })
    }

    /// Create a vector taking ownership of `data`.
    pub fn from_vec(data: Vec<ElT>) -> Self {
        Self {
            storage: Dense::from_vec(data),
        }
    }

    /// Create a vector by copying externally owned values.
    pub fn from_slice(data: &[ElT]) -> Self {
        Self::from_vec(data.to_vec())
    }

    pub(crate) fn from_storage(storage: Dense<ElT>) -> Self {
        Self { storage }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ElT] {
        self.storage.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ElT] {
        self.storage.as_mut_slice()
    }

    /// Return a newly allocated copy of the values.
    pub fn to_vec(&self) -> Vec<ElT> {
        self.as_slice().to_vec()
    }

    /// Consume the vector, returning its values.
    pub fn into_vec(self) -> Vec<ElT> {
        self.storage.into_vec()
    }

    /// Get element `i`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&ElT> {
        self.as_slice().get(i)
    }

    /// Set element `i`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if `i >= len`.
    pub fn set_at(&mut self, i: usize, value: ElT) -> Result<(), LinalgError> {
        let len = self.len();
        let slot = self
            .as_mut_slice()
            .get_mut(i)
            .ok_or(LinalgError::IndexOutOfBounds {
                index: i,
                dim_size: len,
            })?;
        *slot = value;
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: ElT) {
        self.storage.fill(value);
    }

    fn check_same_len(&self, other: &Self, op: &'static str) -> Result<(), LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::shape_mismatch(
                op,
                &[self.len()],
                &[other.len()],
            ));
        }
        Ok(())
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_len(other, "vector add")?;
        operations::zip_with(self.as_slice(), other.as_slice(), |a, b| a + b)
            .map(Self::from_storage)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if the lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_len(other, "vector sub")?;
        operations::zip_with(self.as_slice(), other.as_slice(), |a, b| a - b)
            .map(Self::from_storage)
    }

    /// Multiply every element by `alpha`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if the result cannot be allocated.
    pub fn scale(&self, alpha: ElT) -> Result<Self, LinalgError> {
        operations::scale(self.as_slice(), alpha).map(Self::from_storage)
    }

    /// Dot product.
    ///
    /// A size mismatch is an error, so a returned zero is always a real zero.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<ElT, LinalgError> {
        self.check_same_len(other, "vector dot")?;
        Ok(dot(self.as_slice(), other.as_slice()))
    }

    /// Euclidean norm.
    pub fn norm(&self) -> ElT {
        dot(self.as_slice(), self.as_slice()).sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DegenerateInput` if the norm is zero or not
    /// finite, since the result would contain non-finite values.
    pub fn normalize(&self) -> Result<Self, LinalgError> {
        let norm = self.norm();
        if norm == ElT::zero() || !norm.is_finite() {
            return Err(LinalgError::DegenerateInput {
                op: "vector normalize",
                reason: "norm is zero or not finite",
            });
        }
        operations::map(self.as_slice(), |x| x / norm).map(Self::from_storage)
    }

    /// 3-D cross product.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if the lengths differ and
    /// `LinalgError::DegenerateInput` if they are not 3.
    pub fn cross(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_len(other, "vector cross")?;
        if self.len() != 3 {
            return Err(LinalgError::DegenerateInput {
                op: "vector cross",
                reason: "cross product is only defined for 3-element vectors",
            });
        }
        let (a, b) = (self.as_slice(), other.as_slice());
        let mut out = Self::new(3)?;
        for (i, o) in out.as_mut_slice().iter_mut().enumerate() {
            let (j, k) = ((i + 1) % 3, (i + 2) % 3);
            *o = a[j] * b[k] - a[k] * b[j];
        }
        Ok(out)
    }
}

impl<ElT: Scalar> From<Vec<ElT>> for Vector<ElT> {
    fn from(data: Vec<ElT>) -> Self {
        Self::from_vec(data)
    }
}

impl<ElT: Scalar> std::ops::Index<usize> for Vector<ElT> {
    type Output = ElT;

    #[inline]
    fn index(&self, i: usize) -> &ElT {
        &self.storage[i]
    }
}

impl<ElT: Scalar> std::ops::IndexMut<usize> for Vector<ElT> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut ElT {
        &mut self.storage[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_is_zeroed() {
        let v: Vector = Vector::new(3).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_new_empty() {
        let v: Vector = Vector::new(0).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn test_from_slice_to_vec() {
        let data = [1.0, 2.0, 3.0];
        let v = Vector::from_slice(&data);
        assert_eq!(v.to_vec(), data.to_vec());
    }

    #[test]
    fn test_clone_is_independent() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let mut copy = v.clone();
        copy[0] = 10.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(copy[0], 10.0);
    }

    #[test]
    fn test_add_sub() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(a.add(&b).unwrap().as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!(a.sub(&b).unwrap().as_slice(), &[-3.0, -3.0, -3.0]);
    }

    #[test]
    fn test_add_size_mismatch() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[1.0, 2.0]);
        assert_eq!(
            a.add(&b).unwrap_err(),
            LinalgError::ShapeMismatch {
                op: "vector add",
                expected: vec![3],
                actual: vec![2],
            }
        );
        assert!(a.sub(&b).is_err());
    }

    #[test]
    fn test_scale() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.scale(2.0).unwrap().as_slice(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_dot_mismatch_is_error_not_zero() {
        let a = Vector::from_slice(&[1.0, 2.0]);
        let b = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert!(matches!(a.dot(&b), Err(LinalgError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_norm_and_normalize() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.norm(), 14.0_f64.sqrt());
        let u = v.normalize().unwrap();
        assert_relative_eq!(u[0], 1.0 / 14.0_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v: Vector = Vector::new(3).unwrap();
        assert!(matches!(
            v.normalize(),
            Err(LinalgError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_cross() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(a.cross(&b).unwrap().as_slice(), &[-3.0, 6.0, -3.0]);
    }

    #[test]
    fn test_cross_requires_three_elements() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(
            a.cross(&a),
            Err(LinalgError::DegenerateInput { .. })
        ));
        let b = Vector::from_slice(&[1.0, 2.0]);
        assert!(matches!(
            a.cross(&b),
            Err(LinalgError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_set_at_and_get() {
        let mut v: Vector<f32> = Vector::new(2).unwrap();
        v.set_at(1, 4.5).unwrap();
        assert_eq!(v.get(1), Some(&4.5));
        assert_eq!(v.get(2), None);
        assert_eq!(
            v.set_at(2, 1.0).unwrap_err(),
            LinalgError::IndexOutOfBounds {
                index: 2,
                dim_size: 2
            }
        );
    }
}
