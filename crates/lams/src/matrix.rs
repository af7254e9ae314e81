//! Matrix type for 2-D real data.

use crate::error::LinalgError;
use crate::operations;
use crate::scalar::Scalar;
use crate::storage::Dense;
use crate::strides::{checked_len, first_out_of_bounds};
use crate::vector::Vector;

/// A 2-D matrix of real values (row-major, one contiguous buffer).
///
/// Element `(row, col)` is stored at `row * cols + col`.
///
/// # Examples
///
/// ```
/// use lams::Matrix;
///
/// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let b = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let c = a.multiply(&b).unwrap();
/// assert_eq!(c.shape(), (2, 2));
/// assert_eq!(c.as_slice(), &[22.0, 28.0, 49.0, 64.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixParts<ElT>"))]
pub struct Matrix<ElT: Scalar = f64> {
    storage: Dense<ElT>,
    rows: usize,
    cols: usize,
}

/// Unchecked serialized form of a [`Matrix`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MatrixParts<ElT> {
    storage: Vec<ElT>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<ElT: Scalar> TryFrom<MatrixParts<ElT>> for Matrix<ElT> {
    type Error = LinalgError;

    fn try_from(parts: MatrixParts<ElT>) -> Result<Self, LinalgError> {
        Self::from_vec(parts.rows, parts.cols, parts.storage)
    }
}

impl<ElT: Scalar> Matrix<ElT> {
    /// Create a zero-filled `rows × cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if the storage cannot be obtained
    /// (including when `rows * cols` overflows).
    pub fn new(rows: usize, cols: usize) -> Result<Self, LinalgError> {
        Ok(Self {
            storage: Dense::try_zeros(checked_len(&[rows, cols])?)?,
            rows,
            cols,
        })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<ElT>) -> Result<Self, LinalgError> {
        if Some(data.len()) != rows.checked_mul(cols) {
            return Err(LinalgError::shape_mismatch(
                "matrix from_vec",
                &[rows, cols],
                &[data.len()],
            ));
        }
        Ok(Self {
            storage: Dense::from_vec(data),
            rows,
            cols,
        })
    }

    pub(crate) fn from_storage(storage: Dense<ElT>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(storage.len(), rows * cols);
        Self {
            storage,
            rows,
            cols,
        }
    }

    /// Create the `n × n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if the storage cannot be obtained.
    pub fn identity(n: usize) -> Result<Self, LinalgError> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.storage[i * n + i] = ElT::one();
        }
        Ok(m)
    }

    /// Returns the shape as (rows, cols).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Underlying row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[ElT] {
        self.storage.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ElT] {
        self.storage.as_mut_slice()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get element at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&ElT> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.storage.as_slice().get(self.offset(row, col))
    }

    /// Set element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfBounds` if either index is out of range.
    pub fn set_at(&mut self, row: usize, col: usize, value: ElT) -> Result<(), LinalgError> {
        if let Some((index, dim_size)) = first_out_of_bounds(&[row, col], &[self.rows, self.cols])
        {
            return Err(LinalgError::IndexOutOfBounds { index, dim_size });
        }
        let offset = self.offset(row, col);
        self.storage[offset] = value;
        Ok(())
    }

    /// Overwrite every element from row-major `data`.
    ///
    /// `data[i]` lands at `(i / cols, i % cols)`. On error the matrix is left
    /// unmodified.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if `data.len() != rows * cols`.
    pub fn set(&mut self, data: &[ElT]) -> Result<(), LinalgError> {
        if data.len() != self.len() {
            return Err(LinalgError::shape_mismatch(
                "matrix set",
                &[self.len()],
                &[data.len()],
            ));
        }
        operations::copy_into(self.storage.as_mut_slice(), data)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: ElT) {
        self.storage.fill(value);
    }

    /// Copy of row `row_idx`, or `None` if out of bounds.
    pub fn row(&self, row_idx: usize) -> Option<Vector<ElT>> {
        if row_idx >= self.rows {
            return None;
        }
        let start = row_idx * self.cols;
        Some(Vector::from_slice(
            &self.as_slice()[start..start + self.cols],
        ))
    }

    /// Copy of column `col_idx`, or `None` if out of bounds.
    pub fn column(&self, col_idx: usize) -> Option<Vector<ElT>> {
        if col_idx >= self.cols {
            return None;
        }
        let data = (0..self.rows)
            .map(|row| self.storage[row * self.cols + col_idx])
            .collect();
        Some(Vector::from_vec(data))
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<(), LinalgError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LinalgError::shape_mismatch(
                op,
                &[self.rows, self.cols],
                &[other.rows, other.cols],
            ));
        }
        Ok(())
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if rows or cols differ.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other, "matrix add")?;
        let storage = operations::zip_with(self.as_slice(), other.as_slice(), |a, b| a + b)?;
        Ok(Self::from_storage(storage, self.rows, self.cols))
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if rows or cols differ.
    pub fn sub(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other, "matrix sub")?;
        let storage = operations::zip_with(self.as_slice(), other.as_slice(), |a, b| a - b)?;
        Ok(Self::from_storage(storage, self.rows, self.cols))
    }

    /// Multiply every element by `alpha`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if the result cannot be allocated.
    pub fn scale(&self, alpha: ElT) -> Result<Self, LinalgError> {
        let storage = operations::scale(self.as_slice(), alpha)?;
        Ok(Self::from_storage(storage, self.rows, self.cols))
    }

    /// Matrix-matrix product `self · other`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if `self.cols != other.rows`.
    pub fn multiply(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.cols != other.rows {
            return Err(LinalgError::shape_mismatch(
                "matrix multiply",
                &[self.rows, self.cols],
                &[other.rows, other.cols],
            ));
        }
        let mut result = Self::new(self.rows, other.cols)?;
        operations::gemm(
            self.rows,
            self.cols,
            other.cols,
            self.as_slice(),
            other.as_slice(),
            result.as_mut_slice(),
        );
        Ok(result)
    }

    /// Matrix-vector product, returned as a `rows × 1` column matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::ShapeMismatch` if `self.cols != v.len()`.
    pub fn multiply_vector(&self, v: &Vector<ElT>) -> Result<Self, LinalgError> {
        if self.cols != v.len() {
            return Err(LinalgError::shape_mismatch(
                "matrix multiply_vector",
                &[self.cols],
                &[v.len()],
            ));
        }
        let mut result = Self::new(self.rows, 1)?;
        operations::gemv(
            self.rows,
            self.cols,
            self.as_slice(),
            v.as_slice(),
            result.as_mut_slice(),
        );
        Ok(result)
    }

    /// Transpose into a new `cols × rows` matrix.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if the result cannot be allocated.
    pub fn transpose(&self) -> Result<Self, LinalgError> {
        let mut result = Self::new(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.storage[j * self.rows + i] = self.storage[i * self.cols + j];
            }
        }
        Ok(result)
    }
}

impl<ElT: Scalar> std::ops::Index<(usize, usize)> for Matrix<ElT> {
    type Output = ElT;

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &ElT {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.storage[self.offset(row, col)]
    }
}

impl<ElT: Scalar> std::ops::IndexMut<(usize, usize)> for Matrix<ElT> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut ElT {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        let offset = self.offset(row, col);
        &mut self.storage[offset]
    }
}
