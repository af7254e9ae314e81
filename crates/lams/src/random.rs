//! Random container construction.
//!
//! Vectors, matrices and tensors can be filled from the uniform
//! distribution on `[0, 1)` or the standard normal distribution. Like the
//! zero-filled constructors, they report an oversized shape as
//! `LinalgError::AllocationFailure` instead of aborting.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use crate::storage::Dense;
use crate::strides::checked_len;
use crate::tensor::Tensor;
use crate::vector::Vector;

/// Trait for types that can be randomly sampled from a uniform distribution.
pub trait RandomUniform: Scalar {
    /// Sample a random value from the uniform distribution [0, 1).
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for f32 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

/// Trait for types that can be randomly sampled from a normal distribution.
pub trait RandomNormal: Scalar {
    /// Sample a random value from the standard normal distribution.
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomNormal for f64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for f32 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

fn sample_dense<ElT, R, F>(
    shape: &[usize],
    rng: &mut R,
    sample: F,
) -> Result<Dense<ElT>, LinalgError>
where
    ElT: Scalar,
    R: Rng,
    F: Fn(&mut R) -> ElT,
{
    let mut dense = Dense::try_zeros(checked_len(shape)?)?;
    for x in dense.as_mut_slice() {
        *x = sample(rng);
    }
    Ok(dense)
}

impl<ElT: RandomUniform> Vector<ElT> {
    /// Create a vector with uniform random values in [0, 1).
    ///
    /// # Example
    ///
    /// ```
    /// use lams::Vector;
    ///
    /// let v: Vector = Vector::random(4).unwrap();
    /// assert!(v.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random(len: usize) -> Result<Self, LinalgError> {
        Self::random_with_rng(len, &mut rand::rng())
    }

    /// Create a vector with uniform random values using a specific RNG.
    pub fn random_with_rng<R: Rng>(len: usize, rng: &mut R) -> Result<Self, LinalgError> {
        sample_dense(&[len], rng, ElT::sample_uniform).map(Self::from_storage)
    }
}

impl<ElT: RandomNormal> Vector<ElT> {
    /// Create a vector with standard normal random values.
    pub fn randn(len: usize) -> Result<Self, LinalgError> {
        Self::randn_with_rng(len, &mut rand::rng())
    }

    /// Create a vector with standard normal random values using a specific RNG.
    pub fn randn_with_rng<R: Rng>(len: usize, rng: &mut R) -> Result<Self, LinalgError> {
        sample_dense(&[len], rng, ElT::sample_normal).map(Self::from_storage)
    }
}

impl<ElT: RandomUniform> Matrix<ElT> {
    /// Create a `rows × cols` matrix with uniform random values in [0, 1).
    pub fn random(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        Self::random_with_rng(rows, cols, &mut rand::rng())
    }

    /// Create a matrix with uniform random values using a specific RNG.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if `rows * cols` overflows or
    /// the storage cannot be obtained.
    ///
    /// # Example
    ///
    /// ```
    /// use lams::Matrix;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let a: Matrix = Matrix::random_with_rng(2, 3, &mut rng).unwrap();
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let b: Matrix = Matrix::random_with_rng(2, 3, &mut rng).unwrap();
    ///
    /// assert_eq!(a, b);
    /// ```
    pub fn random_with_rng<R: Rng>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        let dense = sample_dense(&[rows, cols], rng, ElT::sample_uniform)?;
        Ok(Self::from_storage(dense, rows, cols))
    }
}

impl<ElT: RandomNormal> Matrix<ElT> {
    /// Create a `rows × cols` matrix with standard normal random values.
    pub fn randn(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        Self::randn_with_rng(rows, cols, &mut rand::rng())
    }

    /// Create a matrix with standard normal random values using a specific RNG.
    pub fn randn_with_rng<R: Rng>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        let dense = sample_dense(&[rows, cols], rng, ElT::sample_normal)?;
        Ok(Self::from_storage(dense, rows, cols))
    }
}

impl<ElT: RandomUniform> Tensor<ElT> {
    /// Create a tensor with uniform random values in [0, 1).
    pub fn random(rows: usize, cols: usize, rank: usize) -> Result<Self, LinalgError> {
        Self::random_with_rng(rows, cols, rank, &mut rand::rng())
    }

    /// Create a tensor with uniform random values using a specific RNG.
    pub fn random_with_rng<R: Rng>(
        rows: usize,
        cols: usize,
        rank: usize,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        let dense = sample_dense(&[rank, rows, cols], rng, ElT::sample_uniform)?;
        Ok(Self::from_storage(dense, rows, cols, rank))
    }
}

impl<ElT: RandomNormal> Tensor<ElT> {
    /// Create a tensor with standard normal random values.
    pub fn randn(rows: usize, cols: usize, rank: usize) -> Result<Self, LinalgError> {
        Self::randn_with_rng(rows, cols, rank, &mut rand::rng())
    }

    /// Create a tensor with standard normal random values using a specific RNG.
    pub fn randn_with_rng<R: Rng>(
        rows: usize,
        cols: usize,
        rank: usize,
        rng: &mut R,
    ) -> Result<Self, LinalgError> {
        let dense = sample_dense(&[rank, rows, cols], rng, ElT::sample_normal)?;
        Ok(Self::from_storage(dense, rows, cols, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_vector_range() {
        let v: Vector = Vector::random(50).unwrap();
        assert_eq!(v.len(), 50);
        for &x in v.as_slice() {
            assert!((0.0..1.0).contains(&x), "value {} not in [0, 1)", x);
        }
    }

    #[test]
    fn test_random_matrix_f32() {
        let m: Matrix<f32> = Matrix::random(3, 4).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_random_tensor_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(12345);
        let t1: Tensor = Tensor::random_with_rng(2, 3, 4, &mut rng1).unwrap();

        let mut rng2 = StdRng::seed_from_u64(12345);
        let t2: Tensor = Tensor::random_with_rng(2, 3, 4, &mut rng2).unwrap();

        assert_eq!(t1.shape(), [4, 2, 3]);
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_randn_vector_moments() {
        let mut rng = StdRng::seed_from_u64(54321);
        let v: Vector = Vector::randn_with_rng(400, &mut rng).unwrap();
        let mean = v.as_slice().iter().sum::<f64>() / 400.0;
        assert!(mean.abs() < 0.3, "mean {} too far from 0", mean);

        let var = v.as_slice().iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 400.0;
        assert!(var > 0.5 && var < 1.5, "variance {} too far from 1", var);
    }

    #[test]
    fn test_randn_shapes() {
        let m: Matrix = Matrix::randn(2, 5).unwrap();
        assert_eq!(m.len(), 10);
        let t: Tensor<f32> = Tensor::randn(2, 2, 3).unwrap();
        assert_eq!(t.len(), 12);
    }

    #[test]
    fn test_random_overflowing_shape_is_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            Matrix::<f64>::random_with_rng(usize::MAX, 2, &mut rng),
            Err(LinalgError::AllocationFailure { len: usize::MAX })
        ));
        assert!(matches!(
            Tensor::<f64>::randn_with_rng(2, usize::MAX, 2, &mut rng),
            Err(LinalgError::AllocationFailure { len: usize::MAX })
        ));
        assert!(matches!(
            Vector::<f64>::random_with_rng(usize::MAX, &mut rng),
            Err(LinalgError::AllocationFailure { .. })
        ));
    }
}
