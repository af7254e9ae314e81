//! Dense storage for container data.

use crate::error::LinalgError;
use crate::scalar::Scalar;

/// Dense storage - one contiguous, exclusively owned array of elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dense<ElT: Scalar> {
    data: Vec<ElT>,
}

impl<ElT: Scalar> Dense<ElT> {
    /// Create dense storage with given length, zero-initialized.
    ///
    /// The buffer is reserved up front, so a failed allocation is reported
    /// instead of aborting and no partially built storage is left behind.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::AllocationFailure` if the memory cannot be obtained.
    pub fn try_zeros(len: usize) -> Result<Self, LinalgError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            tracing::warn!(len, error = %e, "dense storage allocation failed");
            LinalgError::allocation(len, e)
        })?;
        data.resize(len, ElT::zero());
        Ok(Self { data })
    }

    /// Create dense storage from existing vector (takes ownership).
    pub fn from_vec(data: Vec<ElT>) -> Self {
        Self { data }
    }

    /// Length of storage.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if storage is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ElT] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [ElT] {
        &mut self.data
    }

    /// Consume the storage, returning the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<ElT> {
        self.data
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: ElT) {
        self.data.fill(value);
    }
}

impl<ElT: Scalar> std::ops::Index<usize> for Dense<ElT> {
    type Output = ElT;

    #[inline]
    fn index(&self, i: usize) -> &ElT {
        &self.data[i]
    }
}

impl<ElT: Scalar> std::ops::IndexMut<usize> for Dense<ElT> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut ElT {
        &mut self.data[i]
    }
}
