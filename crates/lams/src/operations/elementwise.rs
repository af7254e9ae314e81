//! Element-wise kernels shared by vectors, matrices and tensors.
//!
//! Shape validation is the caller's job: each container checks its own
//! notion of shape (length, `rows × cols`, `rank × rows × cols`) and then
//! hands the flat buffers to these kernels.

use crate::error::LinalgError;
use crate::scalar::Scalar;
use crate::storage::Dense;

/// Combine two equally long buffers element-wise into fresh storage.
///
/// # Errors
///
/// Returns `LinalgError::AllocationFailure` if the result cannot be allocated.
///
/// # Example
///
/// ```
/// use lams::operations::zip_with;
///
/// let c = zip_with(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], |x, y| x + y).unwrap();
/// assert_eq!(c.as_slice(), &[5.0, 7.0, 9.0]);
/// ```
pub fn zip_with<ElT: Scalar, F>(a: &[ElT], b: &[ElT], f: F) -> Result<Dense<ElT>, LinalgError>
where
    F: Fn(ElT, ElT) -> ElT,
{
    debug_assert_eq!(a.len(), b.len(), "zip_with: caller must check shapes");
    let mut out = Dense::try_zeros(a.len())?;
    for ((o, &x), &y) in out.as_mut_slice().iter_mut().zip(a).zip(b) {
        *o = f(x, y);
    }
    Ok(out)
}

/// Apply a function to each element, returning fresh storage.
///
/// # Errors
///
/// Returns `LinalgError::AllocationFailure` if the result cannot be allocated.
///
/// # Example
///
/// ```
/// use lams::operations::map;
///
/// let d = map(&[1.0, 4.0, 9.0], |x: f64| x.sqrt()).unwrap();
/// assert_eq!(d.as_slice(), &[1.0, 2.0, 3.0]);
/// ```
pub fn map<ElT: Scalar, F>(a: &[ElT], f: F) -> Result<Dense<ElT>, LinalgError>
where
    F: Fn(ElT) -> ElT,
{
    let mut out = Dense::try_zeros(a.len())?;
    for (o, &x) in out.as_mut_slice().iter_mut().zip(a) {
        *o = f(x);
    }
    Ok(out)
}

/// Multiply every element by `alpha`, returning fresh storage.
///
/// # Errors
///
/// Returns `LinalgError::AllocationFailure` if the result cannot be allocated.
pub fn scale<ElT: Scalar>(a: &[ElT], alpha: ElT) -> Result<Dense<ElT>, LinalgError> {
    map(a, |x| x * alpha)
}

/// Copy `src` into `dest`; both must have the same length.
///
/// # Errors
///
/// Returns `LinalgError::ShapeMismatch` if the lengths differ.
pub fn copy_into<ElT: Scalar>(dest: &mut [ElT], src: &[ElT]) -> Result<(), LinalgError> {
    if dest.len() != src.len() {
        return Err(LinalgError::shape_mismatch(
            "copy",
            &[dest.len()],
            &[src.len()],
        ));
    }
    dest.copy_from_slice(src);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zip_with_sub() {
        let c = zip_with(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], |x, y| x - y).unwrap();
        assert_eq!(c.as_slice(), &[-3.0, -3.0, -3.0]);
    }

    #[test]
    fn test_zip_with_empty() {
        let c = zip_with::<f64, _>(&[], &[], |x, y| x + y).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_map() {
        let d = map(&[1.0, 4.0, 9.0], |x: f64| x.sqrt()).unwrap();
        assert_relative_eq!(d[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(d[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(d[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scale() {
        let d = scale(&[1.0_f32, 2.0, 3.0], 2.0).unwrap();
        assert_eq!(d.as_slice(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_copy_into() {
        let mut dst = [0.0; 3];
        copy_into(&mut dst, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(dst, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_copy_into_shape_mismatch() {
        let mut dst = [0.0; 2];
        let result = copy_into(&mut dst, &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(LinalgError::ShapeMismatch { .. })));
        assert_eq!(dst, [0.0, 0.0]);
    }
}
