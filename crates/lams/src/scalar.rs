//! Scalar trait for container element types.

use num_traits::Float;
use std::fmt::Debug;
use std::iter::Sum;

/// Trait for the real scalar types stored in vectors, matrices and tensors.
///
/// This wraps `num_traits::Float` with the extra bounds the containers need.
/// Implemented for `f64` (the default element type) and `f32`.
pub trait Scalar: Float + Sum + Copy + Debug + Default + Send + Sync + 'static {}

impl Scalar for f64 {}

impl Scalar for f32 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_one<T: Scalar>() -> (T, T) {
        (T::zero(), T::one())
    }

    #[test]
    fn test_zero_one() {
        assert_eq!(zero_one::<f64>(), (0.0, 1.0));
        assert_eq!(zero_one::<f32>(), (0.0, 1.0));
    }

    fn root_of_sum<T: Scalar>(values: &[T]) -> T {
        values.iter().copied().sum::<T>().sqrt()
    }

    #[test]
    fn test_sum_and_sqrt() {
        assert_eq!(root_of_sum(&[1.0_f32, 2.0, 6.0]), 3.0);
        assert_eq!(root_of_sum(&[16.0_f64]), 4.0);
    }
}
