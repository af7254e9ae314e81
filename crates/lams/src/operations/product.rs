//! Inner-product kernels: dot, matrix-vector and matrix-matrix products.
//!
//! All buffers are row-major. Accumulation is plain real arithmetic; partial
//! products are never rounded.

use crate::scalar::Scalar;

/// Sum of element-wise products of two equally long slices.
///
/// # Example
///
/// ```
/// use lams::operations::dot;
///
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
#[inline]
pub fn dot<ElT: Scalar>(a: &[ElT], b: &[ElT]) -> ElT {
    debug_assert_eq!(a.len(), b.len(), "dot: caller must check shapes");
    a.iter()
        .zip(b.iter())
        .fold(ElT::zero(), |acc, (&x, &y)| acc + x * y)
}

/// `out = A · x` for an `m × k` matrix `A` and a length-`k` vector `x`.
pub fn gemv<ElT: Scalar>(m: usize, k: usize, a: &[ElT], x: &[ElT], out: &mut [ElT]) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(x.len(), k);
    debug_assert_eq!(out.len(), m);

    if k == 0 {
        out.fill(ElT::zero());
        return;
    }
    for (o, row) in out.iter_mut().zip(a.chunks_exact(k)) {
        *o = dot(row, x);
    }
}

/// `out = A · B` for an `m × k` matrix `A` and a `k × n` matrix `B`.
///
/// Uses the i-k-j loop order so the inner loop walks both `B` and `out`
/// contiguously.
pub fn gemm<ElT: Scalar>(m: usize, k: usize, n: usize, a: &[ElT], b: &[ElT], out: &mut [ElT]) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    out.fill(ElT::zero());
    for i in 0..m {
        let out_row = &mut out[i * n..(i + 1) * n];
        for p in 0..k {
            let a_ip = a[i * k + p];
            let b_row = &b[p * n..(p + 1) * n];
            for (o, &b_pj) in out_row.iter_mut().zip(b_row) {
                *o = *o + a_ip * b_pj;
            }
        }
    }
}
