//! Error types for lams containers.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur in vector, matrix and tensor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the requested operation.
    ///
    /// Shapes are reported as `[len]` for vectors, `[rows, cols]` for
    /// matrices and `[rank, rows, cols]` for tensors.
    #[error("shape mismatch in {op}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Index out of bounds.
    #[error("index out of bounds: index {index} is out of range for dimension {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },

    /// Backing storage could not be allocated.
    #[error("failed to allocate storage for {len} elements")]
    AllocationFailure { len: usize },

    /// Input is well-shaped but the operation is undefined for it.
    #[error("degenerate input to {op}: {reason}")]
    DegenerateInput {
        op: &'static str,
        reason: &'static str,
    },
}

impl LinalgError {
    pub(crate) fn shape_mismatch(op: &'static str, expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            op,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    pub(crate) fn allocation(len: usize, _source: TryReserveError) -> Self {
        Self::AllocationFailure { len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = LinalgError::shape_mismatch("matrix add", &[2, 3], &[3, 2]);
        assert_eq!(
            err.to_string(),
            "shape mismatch in matrix add: expected [2, 3], got [3, 2]"
        );
    }

    #[test]
    fn test_degenerate_display() {
        let err = LinalgError::DegenerateInput {
            op: "vector normalize",
            reason: "zero norm",
        };
        assert_eq!(
            err.to_string(),
            "degenerate input to vector normalize: zero norm"
        );
    }
}
