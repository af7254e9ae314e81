//! Stride computation utilities.
//!
//! Uses row-major (C) order: the last index varies fastest. A matrix element
//! `(r, c)` lives at `r * cols + c`, a tensor element `(s, r, c)` at
//! `s * rows * cols + r * cols + c`.

use crate::error::LinalgError;

/// Number of elements a `shape` holds.
///
/// # Errors
///
/// Returns `LinalgError::AllocationFailure` if the product overflows `usize`.
///
/// ```
/// use lams::strides::checked_len;
///
/// assert_eq!(checked_len(&[2, 3, 4]).unwrap(), 24);
/// assert!(checked_len(&[usize::MAX, 2]).is_err());
/// ```
pub fn checked_len(shape: &[usize]) -> Result<usize, LinalgError> {
    shape
        .iter()
        .try_fold(1usize, |len, &dim| len.checked_mul(dim))
        .ok_or(LinalgError::AllocationFailure { len: usize::MAX })
}

/// Compute row-major strides from shape.
///
/// For shape [d0, d1, d2], returns strides [d1*d2, d2, 1].
///
/// # Examples
///
/// ```
/// use lams::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![20, 5, 1]);
/// assert_eq!(compute_strides(&[2, 3]), vec![3, 1]);
/// assert_eq!(compute_strides(&[5]), vec![1]);
/// assert_eq!(compute_strides(&[]), Vec::<usize>::new());
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride = 1;

    for (slot, &dim) in strides.iter_mut().zip(shape.iter()).rev() {
        *slot = stride;
        stride *= dim;
    }

    strides
}

/// Convert cartesian indices to a linear offset.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Check every index against its dimension.
///
/// Returns the first offending `(index, dim)` pair, if any.
#[inline]
pub fn first_out_of_bounds(indices: &[usize], shape: &[usize]) -> Option<(usize, usize)> {
    indices
        .iter()
        .zip(shape.iter())
        .find(|&(&idx, &dim)| idx >= dim)
        .map(|(&idx, &dim)| (idx, dim))
}
