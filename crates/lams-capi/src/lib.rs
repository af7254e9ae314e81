//! C API for lams
//!
//! This crate provides a C-compatible interface to the lams containers with
//! `double` elements, allowing them to be called from C and other languages.
//!
//! The probability distributions are exposed as plain functions of their
//! parameters (`lams_<distribution>_moments`, `_pmf`/`_pdf`, `_cdf`); no
//! handle is involved and parameters outside a distribution's domain give
//! `LAMS_INVALID_ARGUMENT`.
//!
//! Containers are handed out as opaque heap handles (`lams_vector`,
//! `lams_matrix`, `lams_tensor`) and must be released with the matching
//! `*_free` function. Functions that create a handle report through a
//! `status` out-pointer (which may be null) and return null on error; all
//! other fallible functions return a status code directly. Inputs are never
//! modified unless the function is documented to write into its first
//! argument.
//!
//! All extern "C" functions are inherently unsafe as they work with raw pointers
//! from foreign code. The `#[unsafe(no_mangle)]` attribute marks the entire
//! function signature as unsafe at the FFI boundary.

#![allow(clippy::not_unsafe_ptr_arg_deref)]
#![allow(non_camel_case_types)]

use lams::stats::{
    Bernoulli, Binomial, ContinuousDistribution, ContinuousUniform, DiscreteDistribution,
    DiscreteUniform, DistributionError, Geometric, Hypergeometric, Moments, NegativeBinomial,
    Normal, Poisson,
};
use lams::strides::first_out_of_bounds;
use lams::{LinalgError, Matrix, Tensor, Vector};
use libc::{c_double, c_int, size_t};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr;
use tracing::debug;

// Status codes
pub type StatusCode = c_int;

pub const LAMS_SUCCESS: StatusCode = 0;
pub const LAMS_INVALID_ARGUMENT: StatusCode = -1;
pub const LAMS_SHAPE_MISMATCH: StatusCode = -2;
pub const LAMS_INDEX_OUT_OF_BOUNDS: StatusCode = -3;
pub const LAMS_INTERNAL_ERROR: StatusCode = -4;
pub const LAMS_ALLOCATION_FAILURE: StatusCode = -5;
pub const LAMS_DEGENERATE_INPUT: StatusCode = -6;

/// Opaque vector handle.
pub struct lams_vector(Vector<f64>);

/// Opaque matrix handle.
pub struct lams_matrix(Matrix<f64>);

/// Opaque tensor handle.
pub struct lams_tensor(Tensor<f64>);

/// Map a library error onto its C status code.
pub fn status_of(err: &LinalgError) -> StatusCode {
    match err {
        LinalgError::ShapeMismatch { .. } => LAMS_SHAPE_MISMATCH,
        LinalgError::IndexOutOfBounds { .. } => LAMS_INDEX_OUT_OF_BOUNDS,
        LinalgError::AllocationFailure { .. } => LAMS_ALLOCATION_FAILURE,
        LinalgError::DegenerateInput { .. } => LAMS_DEGENERATE_INPUT,
    }
}

enum Failure {
    InvalidArgument,
    Linalg(LinalgError),
    Distribution(DistributionError),
}

impl From<LinalgError> for Failure {
    fn from(err: LinalgError) -> Self {
        Failure::Linalg(err)
    }
}

impl From<DistributionError> for Failure {
    fn from(err: DistributionError) -> Self {
        Failure::Distribution(err)
    }
}

impl Failure {
    fn status(&self, op: &'static str) -> StatusCode {
        match self {
            Failure::InvalidArgument => {
                debug!(op, "null or invalid argument");
                LAMS_INVALID_ARGUMENT
            }
            Failure::Linalg(err) => {
                let code = status_of(err);
                debug!(op, error = %err, code, "mapped error to status");
                code
            }
            Failure::Distribution(err) => {
                debug!(op, error = %err, "rejected distribution parameters");
                LAMS_INVALID_ARGUMENT
            }
        }
    }
}

/// Borrow the value behind a handle.
///
/// # Safety
/// `handle` must be null or a live pointer returned by this crate.
unsafe fn borrow<'a, H>(handle: *const H) -> Result<&'a H, Failure> {
    unsafe { handle.as_ref() }.ok_or(Failure::InvalidArgument)
}

/// Mutably borrow the value behind a handle.
///
/// # Safety
/// `handle` must be null or a live, unaliased pointer returned by this crate.
unsafe fn borrow_mut<'a, H>(handle: *mut H) -> Result<&'a mut H, Failure> {
    unsafe { handle.as_mut() }.ok_or(Failure::InvalidArgument)
}

/// View `len` doubles at `data`; null is accepted only when `len` is zero.
///
/// # Safety
/// A non-null `data` must point at `len` readable doubles.
unsafe fn borrow_array<'a>(data: *const c_double, len: size_t) -> Result<&'a [f64], Failure> {
    if data.is_null() {
        return if len == 0 {
            Ok(&[])
        } else {
            Err(Failure::InvalidArgument)
        };
    }
    Ok(unsafe { std::slice::from_raw_parts(data, len) })
}

fn write_status(status: *mut StatusCode, code: StatusCode) {
    if !status.is_null() {
        unsafe {
            *status = code;
        }
    }
}

/// Run `f`, boxing its result into a new handle.
fn new_handle<H>(
    op: &'static str,
    status: *mut StatusCode,
    f: impl FnOnce() -> Result<H, Failure>,
) -> *mut H {
    let (handle, code) = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => (Box::into_raw(Box::new(value)), LAMS_SUCCESS),
        Ok(Err(failure)) => (ptr::null_mut(), failure.status(op)),
        Err(_) => (ptr::null_mut(), LAMS_INTERNAL_ERROR),
    };
    write_status(status, code);
    handle
}

/// Run `f`, returning its status code.
fn run(op: &'static str, f: impl FnOnce() -> Result<(), Failure>) -> StatusCode {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => LAMS_SUCCESS,
        Ok(Err(failure)) => failure.status(op),
        Err(_) => LAMS_INTERNAL_ERROR,
    }
}

fn write_out<T>(out: *mut T, value: T) -> Result<(), Failure> {
    let slot = unsafe { out.as_mut() }.ok_or(Failure::InvalidArgument)?;
    *slot = value;
    Ok(())
}

fn free_handle<H>(handle: *mut H) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

// ============================================================================
// Vector functions
// ============================================================================

/// Create a zero-filled vector of `size` elements.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_new(size: size_t, status: *mut StatusCode) -> *mut lams_vector {
    new_handle("lams_vector_new", status, || {
        Ok(lams_vector(Vector::new(size)?))
    })
}

/// Create a vector by copying `len` doubles from `data`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_from_array(
    data: *const c_double,
    len: size_t,
    status: *mut StatusCode,
) -> *mut lams_vector {
    new_handle("lams_vector_from_array", status, || {
        let values = unsafe { borrow_array(data, len)? };
        Ok(lams_vector(Vector::from_slice(values)))
    })
}

/// Release a vector. Null is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_free(v: *mut lams_vector) {
    free_handle(v);
}

/// Deep copy of a vector.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_copy(
    v: *const lams_vector,
    status: *mut StatusCode,
) -> *mut lams_vector {
    new_handle("lams_vector_copy", status, || {
        let v = unsafe { borrow(v)? };
        Ok(lams_vector(v.0.clone()))
    })
}

/// Number of elements, or 0 for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_len(v: *const lams_vector) -> size_t {
    unsafe { v.as_ref() }.map_or(0, |v| v.0.len())
}

/// Read element `index` into `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_get(
    v: *const lams_vector,
    index: size_t,
    out: *mut c_double,
) -> StatusCode {
    run("lams_vector_get", || {
        let v = unsafe { borrow(v)? };
        let value = v.0.get(index).ok_or(LinalgError::IndexOutOfBounds {
            index,
            dim_size: v.0.len(),
        })?;
        write_out(out, *value)
    })
}

/// Write `value` at element `index`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_set(
    v: *mut lams_vector,
    index: size_t,
    value: c_double,
) -> StatusCode {
    run("lams_vector_set", || {
        let v = unsafe { borrow_mut(v)? };
        Ok(v.0.set_at(index, value)?)
    })
}

/// Element-wise `a + b`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_add(
    a: *const lams_vector,
    b: *const lams_vector,
    status: *mut StatusCode,
) -> *mut lams_vector {
    new_handle("lams_vector_add", status, || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        Ok(lams_vector(a.0.add(&b.0)?))
    })
}

/// Element-wise `a - b`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_sub(
    a: *const lams_vector,
    b: *const lams_vector,
    status: *mut StatusCode,
) -> *mut lams_vector {
    new_handle("lams_vector_sub", status, || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        Ok(lams_vector(a.0.sub(&b.0)?))
    })
}

/// `alpha * v`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_scale(
    v: *const lams_vector,
    alpha: c_double,
    status: *mut StatusCode,
) -> *mut lams_vector {
    new_handle("lams_vector_scale", status, || {
        let v = unsafe { borrow(v)? };
        Ok(lams_vector(v.0.scale(alpha)?))
    })
}

/// Dot product of `a` and `b` written into `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_dot(
    a: *const lams_vector,
    b: *const lams_vector,
    out: *mut c_double,
) -> StatusCode {
    run("lams_vector_dot", || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        write_out(out, a.0.dot(&b.0)?)
    })
}

/// Euclidean norm of `v` written into `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_norm(v: *const lams_vector, out: *mut c_double) -> StatusCode {
    run("lams_vector_norm", || {
        let v = unsafe { borrow(v)? };
        write_out(out, v.0.norm())
    })
}

/// Unit vector along `v`; fails with `LAMS_DEGENERATE_INPUT` for a zero vector.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_normalize(
    v: *const lams_vector,
    status: *mut StatusCode,
) -> *mut lams_vector {
    new_handle("lams_vector_normalize", status, || {
        let v = unsafe { borrow(v)? };
        Ok(lams_vector(v.0.normalize()?))
    })
}

/// Cross product of two 3-element vectors.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_cross(
    a: *const lams_vector,
    b: *const lams_vector,
    status: *mut StatusCode,
) -> *mut lams_vector {
    new_handle("lams_vector_cross", status, || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        Ok(lams_vector(a.0.cross(&b.0)?))
    })
}

/// Copy the elements of `v` into a new array of `lams_vector_len(v)` doubles.
///
/// The array must be released with [`lams_array_free`]. An empty vector
/// yields null with `LAMS_SUCCESS`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_vector_to_array(
    v: *const lams_vector,
    status: *mut StatusCode,
) -> *mut c_double {
    let result = catch_unwind(AssertUnwindSafe(|| -> Result<*mut c_double, Failure> {
        let v = unsafe { borrow(v)? };
        if v.0.is_empty() {
            return Ok(ptr::null_mut());
        }
        let boxed: Box<[f64]> = v.0.to_vec().into_boxed_slice();
        Ok(Box::into_raw(boxed).cast::<c_double>())
    }));
    let (array, code) = match result {
        Ok(Ok(array)) => (array, LAMS_SUCCESS),
        Ok(Err(failure)) => (ptr::null_mut(), failure.status("lams_vector_to_array")),
        Err(_) => (ptr::null_mut(), LAMS_INTERNAL_ERROR),
    };
    write_status(status, code);
    array
}

/// Release an array returned by [`lams_vector_to_array`]. Null is ignored.
///
/// `len` must be the length of the vector the array was copied from.
#[unsafe(no_mangle)]
pub extern "C" fn lams_array_free(data: *mut c_double, len: size_t) {
    if !data.is_null() {
        unsafe {
            let _ = Box::from_raw(ptr::slice_from_raw_parts_mut(data, len));
        }
    }
}

// ============================================================================
// Matrix functions
// ============================================================================

/// Create a zero-filled `rows × cols` matrix.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_new(
    rows: size_t,
    cols: size_t,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_matrix_new", status, || {
        Ok(lams_matrix(Matrix::new(rows, cols)?))
    })
}

/// Create the `n × n` identity matrix.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_identity(n: size_t, status: *mut StatusCode) -> *mut lams_matrix {
    new_handle("lams_matrix_identity", status, || {
        Ok(lams_matrix(Matrix::identity(n)?))
    })
}

/// Release a matrix. Null is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_free(m: *mut lams_matrix) {
    free_handle(m);
}

/// Deep copy of a matrix.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_copy(
    m: *const lams_matrix,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_matrix_copy", status, || {
        let m = unsafe { borrow(m)? };
        Ok(lams_matrix(m.0.clone()))
    })
}

/// Number of rows, or 0 for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_rows(m: *const lams_matrix) -> size_t {
    unsafe { m.as_ref() }.map_or(0, |m| m.0.n_rows())
}

/// Number of columns, or 0 for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_cols(m: *const lams_matrix) -> size_t {
    unsafe { m.as_ref() }.map_or(0, |m| m.0.n_cols())
}

/// Read element `(row, col)` into `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_get(
    m: *const lams_matrix,
    row: size_t,
    col: size_t,
    out: *mut c_double,
) -> StatusCode {
    run("lams_matrix_get", || {
        let m = unsafe { borrow(m)? };
        let (rows, cols) = m.0.shape();
        if let Some((index, dim_size)) = first_out_of_bounds(&[row, col], &[rows, cols]) {
            return Err(LinalgError::IndexOutOfBounds { index, dim_size }.into());
        }
        write_out(out, m.0[(row, col)])
    })
}

/// Write `value` at element `(row, col)`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_set_at(
    m: *mut lams_matrix,
    row: size_t,
    col: size_t,
    value: c_double,
) -> StatusCode {
    run("lams_matrix_set_at", || {
        let m = unsafe { borrow_mut(m)? };
        Ok(m.0.set_at(row, col, value)?)
    })
}

/// Overwrite every element of `m` with `value`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_fill(m: *mut lams_matrix, value: c_double) -> StatusCode {
    run("lams_matrix_fill", || {
        let m = unsafe { borrow_mut(m)? };
        m.0.fill(value);
        Ok(())
    })
}

/// Overwrite `m` with `len` row-major values; `len` must equal `rows * cols`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_set(
    m: *mut lams_matrix,
    data: *const c_double,
    len: size_t,
) -> StatusCode {
    run("lams_matrix_set", || {
        let m = unsafe { borrow_mut(m)? };
        let values = unsafe { borrow_array(data, len)? };
        Ok(m.0.set(values)?)
    })
}

/// Element-wise `a + b`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_add(
    a: *const lams_matrix,
    b: *const lams_matrix,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_matrix_add", status, || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        Ok(lams_matrix(a.0.add(&b.0)?))
    })
}

/// Element-wise `a - b`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_sub(
    a: *const lams_matrix,
    b: *const lams_matrix,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_matrix_sub", status, || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        Ok(lams_matrix(a.0.sub(&b.0)?))
    })
}

/// `alpha * m`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_scale(
    m: *const lams_matrix,
    alpha: c_double,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_matrix_scale", status, || {
        let m = unsafe { borrow(m)? };
        Ok(lams_matrix(m.0.scale(alpha)?))
    })
}

/// Matrix product `a · b`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_multiply(
    a: *const lams_matrix,
    b: *const lams_matrix,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_matrix_multiply", status, || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        Ok(lams_matrix(a.0.multiply(&b.0)?))
    })
}

/// Product `m · v` as a `rows × 1` matrix.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_multiply_vector(
    m: *const lams_matrix,
    v: *const lams_vector,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_matrix_multiply_vector", status, || {
        let (m, v) = unsafe { (borrow(m)?, borrow(v)?) };
        Ok(lams_matrix(m.0.multiply_vector(&v.0)?))
    })
}

/// Transpose of `m`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_matrix_transpose(
    m: *const lams_matrix,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_matrix_transpose", status, || {
        let m = unsafe { borrow(m)? };
        Ok(lams_matrix(m.0.transpose()?))
    })
}

// ============================================================================
// Tensor functions
// ============================================================================

/// Create a zero-filled tensor of `rank` slices, each `rows × cols`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_new(
    rows: size_t,
    cols: size_t,
    rank: size_t,
    status: *mut StatusCode,
) -> *mut lams_tensor {
    new_handle("lams_tensor_new", status, || {
        Ok(lams_tensor(Tensor::new(rows, cols, rank)?))
    })
}

/// Release a tensor. Null is ignored.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_free(t: *mut lams_tensor) {
    free_handle(t);
}

/// Deep copy of a tensor.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_copy(
    t: *const lams_tensor,
    status: *mut StatusCode,
) -> *mut lams_tensor {
    new_handle("lams_tensor_copy", status, || {
        let t = unsafe { borrow(t)? };
        Ok(lams_tensor(t.0.clone()))
    })
}

/// Write the shape `[rank, rows, cols]` into `out`, which must hold 3 values.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_shape(t: *const lams_tensor, out: *mut size_t) -> StatusCode {
    run("lams_tensor_shape", || {
        let t = unsafe { borrow(t)? };
        if out.is_null() {
            return Err(Failure::InvalidArgument);
        }
        for (i, &dim) in t.0.shape().iter().enumerate() {
            unsafe {
                *out.add(i) = dim;
            }
        }
        Ok(())
    })
}

/// Copy matrix `m` into slice `index` of `t`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_insert(
    t: *mut lams_tensor,
    m: *const lams_matrix,
    index: size_t,
) -> StatusCode {
    run("lams_tensor_insert", || {
        let m = unsafe { borrow(m)? };
        let t = unsafe { borrow_mut(t)? };
        Ok(t.0.insert(&m.0, index)?)
    })
}

/// Copy slice `index` of `t` out as a new matrix.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_slice(
    t: *const lams_tensor,
    index: size_t,
    status: *mut StatusCode,
) -> *mut lams_matrix {
    new_handle("lams_tensor_slice", status, || {
        let t = unsafe { borrow(t)? };
        Ok(lams_matrix(t.0.slice(index)?))
    })
}

/// Read element `(slice, row, col)` into `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_get(
    t: *const lams_tensor,
    slice: size_t,
    row: size_t,
    col: size_t,
    out: *mut c_double,
) -> StatusCode {
    run("lams_tensor_get", || {
        let t = unsafe { borrow(t)? };
        if let Some((index, dim_size)) = first_out_of_bounds(&[slice, row, col], &t.0.shape()) {
            return Err(LinalgError::IndexOutOfBounds { index, dim_size }.into());
        }
        let value = t.0.get(slice, row, col).ok_or(Failure::InvalidArgument)?;
        write_out(out, *value)
    })
}

/// Slice-by-slice `a + b`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_add(
    a: *const lams_tensor,
    b: *const lams_tensor,
    status: *mut StatusCode,
) -> *mut lams_tensor {
    new_handle("lams_tensor_add", status, || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        Ok(lams_tensor(a.0.add(&b.0)?))
    })
}

/// Slice-by-slice `a - b`.
#[unsafe(no_mangle)]
pub extern "C" fn lams_tensor_sub(
    a: *const lams_tensor,
    b: *const lams_tensor,
    status: *mut StatusCode,
) -> *mut lams_tensor {
    new_handle("lams_tensor_sub", status, || {
        let (a, b) = unsafe { (borrow(a)?, borrow(b)?) };
        Ok(lams_tensor(a.0.sub(&b.0)?))
    })
}

// ============================================================================
// Distribution functions
// ============================================================================

/// Summary statistics of a distribution.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct lams_moments {
    pub mean: c_double,
    pub variance: c_double,
    pub std_dev: c_double,
    pub skewness: c_double,
    pub median: c_double,
}

impl lams_moments {
    fn of<D: Moments>(dist: &D) -> Self {
        Self {
            mean: dist.mean(),
            variance: dist.variance(),
            std_dev: dist.std_dev(),
            skewness: dist.skewness(),
            median: dist.median(),
        }
    }
}

/// Emits `<name>_moments`, `<name>_pmf` and `<name>_cdf` for a discrete
/// distribution built by `$ctor` from the listed parameters.
macro_rules! discrete_fns {
    ($ctor:path, [$($param:ident: $ty:ty),*], $moments:ident, $pmf:ident, $cdf:ident) => {
        /// Write the summary statistics into `out`.
        #[unsafe(no_mangle)]
        pub extern "C" fn $moments($($param: $ty,)* out: *mut lams_moments) -> StatusCode {
            run(stringify!($moments), || {
                write_out(out, lams_moments::of(&$ctor($($param),*)?))
            })
        }

        /// Write `P(X = k)` into `out`.
        #[unsafe(no_mangle)]
        pub extern "C" fn $pmf($($param: $ty,)* k: u64, out: *mut c_double) -> StatusCode {
            run(stringify!($pmf), || write_out(out, $ctor($($param),*)?.pmf(k)))
        }

        /// Write `P(X <= k)` into `out`.
        #[unsafe(no_mangle)]
        pub extern "C" fn $cdf($($param: $ty,)* k: u64, out: *mut c_double) -> StatusCode {
            run(stringify!($cdf), || {
                write_out(out, DiscreteDistribution::cdf(&$ctor($($param),*)?, k))
            })
        }
    };
}

/// Continuous counterpart of [`discrete_fns`], with a density instead of a mass.
macro_rules! continuous_fns {
    ($ctor:path, [$($param:ident: $ty:ty),*], $moments:ident, $pdf:ident, $cdf:ident) => {
        /// Write the summary statistics into `out`.
        #[unsafe(no_mangle)]
        pub extern "C" fn $moments($($param: $ty,)* out: *mut lams_moments) -> StatusCode {
            run(stringify!($moments), || {
                write_out(out, lams_moments::of(&$ctor($($param),*)?))
            })
        }

        /// Write the density at `x` into `out`.
        #[unsafe(no_mangle)]
        pub extern "C" fn $pdf($($param: $ty,)* x: c_double, out: *mut c_double) -> StatusCode {
            run(stringify!($pdf), || write_out(out, $ctor($($param),*)?.pdf(x)))
        }

        /// Write `P(X <= x)` into `out`.
        #[unsafe(no_mangle)]
        pub extern "C" fn $cdf($($param: $ty,)* x: c_double, out: *mut c_double) -> StatusCode {
            run(stringify!($cdf), || {
                write_out(out, ContinuousDistribution::cdf(&$ctor($($param),*)?, x))
            })
        }
    };
}

discrete_fns!(
    Bernoulli::new,
    [p: c_double],
    lams_bernoulli_moments,
    lams_bernoulli_pmf,
    lams_bernoulli_cdf
);
discrete_fns!(
    Binomial::new,
    [n: u64, p: c_double],
    lams_binomial_moments,
    lams_binomial_pmf,
    lams_binomial_cdf
);
discrete_fns!(
    DiscreteUniform::new,
    [a: u64, b: u64],
    lams_discrete_uniform_moments,
    lams_discrete_uniform_pmf,
    lams_discrete_uniform_cdf
);
discrete_fns!(
    Geometric::new,
    [p: c_double],
    lams_geometric_moments,
    lams_geometric_pmf,
    lams_geometric_cdf
);
discrete_fns!(
    Hypergeometric::new,
    [population: u64, successes: u64, draws: u64],
    lams_hypergeometric_moments,
    lams_hypergeometric_pmf,
    lams_hypergeometric_cdf
);
discrete_fns!(
    NegativeBinomial::new,
    [r: u64, p: c_double],
    lams_negative_binomial_moments,
    lams_negative_binomial_pmf,
    lams_negative_binomial_cdf
);
discrete_fns!(
    Poisson::new,
    [lambda: c_double],
    lams_poisson_moments,
    lams_poisson_pmf,
    lams_poisson_cdf
);
continuous_fns!(
    ContinuousUniform::new,
    [a: c_double, b: c_double],
    lams_continuous_uniform_moments,
    lams_continuous_uniform_pdf,
    lams_continuous_uniform_cdf
);
continuous_fns!(
    Normal::new,
    [mu: c_double, sigma: c_double],
    lams_normal_moments,
    lams_normal_pdf,
    lams_normal_cdf
);
