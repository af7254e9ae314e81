//! lams - dense linear-algebra containers and probability distributions
//!
//! This crate provides owned, contiguous `Vector`, `Matrix` and `Tensor`
//! containers over real scalars, plus a small set of discrete and continuous
//! distributions in [`stats`].
//!
//! # Architecture
//!
//! ```text
//! Level 1: Containers (vector, matrix, tensor modules)
//!     → shape checks, allocation, element access
//!
//! Level 2: Kernels (operations module)
//!     → element-wise zip/map/scale, dot/gemv/gemm over flat slices
//!
//! Level 3: Storage (storage module)
//!     → Dense<T>: one row-major buffer per container
//! ```
//!
//! Every operation returns a fresh container; inputs are never modified.
//! Failures are reported as [`LinalgError`] values, never as null results or
//! sentinel zeros.
//!
//! # Example
//!
//! ```
//! use lams::{Matrix, Vector};
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//!
//! let x = Vector::from_slice(&[1.0, 1.0]);
//! let y = a.multiply_vector(&x).unwrap();
//! assert_eq!(y.shape(), (2, 1));
//! assert_eq!(y.as_slice(), &[3.0, 7.0]);
//! ```

pub mod error;
pub mod matrix;
pub mod operations;
pub mod random;
pub mod scalar;
pub mod stats;
pub mod storage;
pub mod strides;
pub mod tensor;
pub mod vector;

pub use error::LinalgError;
pub use matrix::Matrix;
pub use random::{RandomNormal, RandomUniform};
pub use scalar::Scalar;
pub use storage::Dense;
pub use tensor::Tensor;
pub use vector::Vector;
