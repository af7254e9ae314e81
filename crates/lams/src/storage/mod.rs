//! Storage for container data.
//!
//! Every container owns exactly one [`Dense`] buffer; shape and strides live
//! on the container itself:
//!
//! ```text
//! Vector<T>  → Dense<T> of len
//! Matrix<T>  → Dense<T> of rows * cols        (row-major)
//! Tensor<T>  → Dense<T> of rank * rows * cols (slice-major, then row-major)
//! ```

mod dense;

pub use dense::Dense;
