//! Rank-N stack of equally shaped matrices.
//!
//! A tensor holds `rank` slices, each a `rows × cols` block, in one buffer:
//! ```text
//! Tensor { rank, rows, cols }
//! ├── slice 0: rows × cols  (offsets 0 .. rows*cols)
//! ├── slice 1: rows × cols  (offsets rows*cols .. 2*rows*cols)
//! └── ...
//! ```
//! Slices move in and out as owned [`Matrix`] copies; the tensor never
//! borrows or wraps a caller's matrix.

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::operations;
use crate::scalar::Scalar;
use crate::storage::Dense;
use crate::strides::{cartesian_to_linear, checked_len, compute_strides, first_out_of_bounds};

/// A 3-D container of `rank` slices, each shaped `rows × cols`.
///
/// # Examples
///
/// ```
/// use lams::{Matrix, Tensor};
///
/// let mut t: Tensor = Tensor::new(3, 3, 3).unwrap();
/// let mut ones = Matrix::new(3, 3).unwrap();
/// ones.fill(1.0);
/// t.insert(&ones, 0).unwrap();
///
/// let doubled = t.add(&t.clone()).unwrap();
/// assert_eq!(doubled.get(0, 2, 2), Some(&2.0));
/// assert_eq!(doubled.get(1, 0, 0), Some(&0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TensorParts<ElT>"))]
pub struct Tensor<ElT: Scalar = f64> {
    storage: Dense<ElT>,
    rank: usize,
    rows: usize,
    cols: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    strides: Vec<usize>,
}

/// Unchecked serialized form of a [`Tensor`]; strides are derived, not stored.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TensorParts<ElT> {
    storage: Vec<ElT>,
    rank: usize,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<ElT: Scalar> TryFrom<TensorParts<ElT>> for Tensor<ElT> {
    type Error = LinalgError;

    fn try_from(parts: TensorParts<ElT>) -> Result<Self, LinalgError> {
        let TensorParts {
            storage,
            rank,
            rows,
            cols,
        } = parts;
        if checked_len(&[rank, rows, cols]).ok() != Some(storage.len()) {
            return Err(LinalgError::shape_mismatch(
                "tensor deserialize",
                &[rank, rows, cols],
                &[storage.len()],
            ));
        }
        Ok(Self::from_storage(Dense::from_vec(storage), rows, cols, rank))
    }
}

impl<ElT: Scalar> Tensor<ElT> {
    /// Create a zero-filled tensor of `rank` slices, each `rows × cols`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if the storage cannot be obtained
    /// (including when `rank * rows * cols` overflows).
    pub fn new(rows: usize, cols: usize, rank: usize) -> Result<Self, LinalgError> {
        let storage = Dense::try_zeros(checked_len(&[rank, rows, cols])?)?;
        Ok(Self::from_storage(storage, rows, cols, rank))
    }

    pub(crate) fn from_storage(storage: Dense<ElT>, rows: usize, cols: usize, rank: usize) -> Self {
        debug_assert_eq!(storage.len(), rank * rows * cols);
        Self {
            storage,
            rank,
            rows,
            cols,
            strides: compute_strides(&[rank, rows, cols]),
        }
    }

    /// Stack equally shaped matrices into a tensor, one slice per matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::DegenerateInput` if `matrices` is empty and
    /// `LinalgError::ShapeMismatch` if any matrix differs in shape from the first.
    pub fn from_matrices(matrices: &[Matrix<ElT>]) -> Result<Self, LinalgError> {
        let first = matrices.first().ok_or(LinalgError::DegenerateInput {
            op: "tensor from_matrices",
            reason: "no slices given",
        })?;
        let (rows, cols) = first.shape();
        let mut tensor = Self::new(rows, cols, matrices.len())?;
        for (index, m) in matrices.iter().enumerate() {
            tensor.insert(m, index)?;
        }
        Ok(tensor)
    }

    /// Number of slices.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Shape as `[rank, rows, cols]`, the order of the memory layout.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        [self.rank, self.rows, self.cols]
    }

    /// Shape of a single slice as `(rows, cols)`.
    #[inline]
    pub fn slice_shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    #[inline]
    pub fn as_slice(&self) -> &[ElT] {
        self.storage.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ElT] {
        self.storage.as_mut_slice()
    }

    fn check_slice_index(&self, index: usize) -> Result<(), LinalgError> {
        if index >= self.rank {
            return Err(LinalgError::IndexOutOfBounds {
                index,
                dim_size: self.rank,
            });
        }
        Ok(())
    }

    fn slice_range(&self, index: usize) -> std::ops::Range<usize> {
        let start = cartesian_to_linear(&[index, 0, 0], &self.strides);
        start..start + self.rows * self.cols
    }

    /// Get element `(slice, row, col)`, or `None` if out of bounds.
    pub fn get(&self, slice: usize, row: usize, col: usize) -> Option<&ElT> {
        let indices = [slice, row, col];
        if first_out_of_bounds(&indices, &self.shape()).is_some() {
            return None;
        }
        self.storage
            .as_slice()
            .get(cartesian_to_linear(&indices, &self.strides))
    }

    /// Set element `(slice, row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if any index is out of range.
    pub fn set_at(
        &mut self,
        slice: usize,
        row: usize,
        col: usize,
        value: ElT,
    ) -> Result<(), LinalgError> {
        let indices = [slice, row, col];
        if let Some((index, dim_size)) = first_out_of_bounds(&indices, &self.shape()) {
            return Err(LinalgError::IndexOutOfBounds { index, dim_size });
        }
        let linear = cartesian_to_linear(&indices, &self.strides);
        self.storage[linear] = value;
        Ok(())
    }

    /// Set every element of every slice to `value`.
    pub fn fill(&mut self, value: ElT) {
        self.storage.fill(value);
    }

    /// Copy `m` element-wise into slice `index`.
    ///
    /// The matrix keeps its own storage. On error the tensor is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if `index >= rank` and
    /// `LinalgError::ShapeMismatch` if `m` is not `rows × cols`.
    pub fn insert(&mut self, m: &Matrix<ElT>, index: usize) -> Result<(), LinalgError> {
        self.check_slice_index(index)?;
        if m.shape() != self.slice_shape() {
            return Err(LinalgError::shape_mismatch(
                "tensor insert",
                &[self.rows, self.cols],
                &[m.n_rows(), m.n_cols()],
            ));
        }
        let range = self.slice_range(index);
        operations::copy_into(&mut self.storage.as_mut_slice()[range], m.as_slice())
    }

    /// Copy slice `index` out as an owned matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if `index >= rank`.
    pub fn slice(&self, index: usize) -> Result<Matrix<ElT>, LinalgError> {
        self.check_slice_index(index)?;
        let mut m = Matrix::new(self.rows, self.cols)?;
        m.set(&self.as_slice()[self.slice_range(index)])?;
        Ok(m)
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<(), LinalgError> {
        if self.shape() != other.shape() {
            return Err(LinalgError::shape_mismatch(
                op,
                &self.shape(),
                &other.shape(),
            ));
        }
        Ok(())
    }

    /// Slice-by-slice element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` unless rank, rows and cols all match.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other, "tensor add")?;
        let storage = operations::zip_with(self.as_slice(), other.as_slice(), |a, b| a + b)?;
        Ok(Self::from_storage(storage, self.rows, self.cols, self.rank))
    }

    /// Slice-by-slice element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` unless rank, rows and cols all match.
    pub fn sub(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other, "tensor sub")?;
        let storage = operations::zip_with(self.as_slice(), other.as_slice(), |a, b| a - b)?;
        Ok(Self::from_storage(storage, self.rows, self.cols, self.rank))
    }
}
