//! Flat-buffer kernels behind the container operations.
//!
//! ```text
//! Level 1: container API (Vector::add, Matrix::multiply, Tensor::sub, ...)
//!     → validate shapes
//!     → allocate result storage
//!
//! Level 2: kernels (this module)
//!     → zip_with / map / scale      element-wise
//!     → dot / gemv / gemm           inner products
//! ```

mod elementwise;
mod product;

pub use elementwise::{copy_into, map, scale, zip_with};
pub use product::{dot, gemm, gemv};
