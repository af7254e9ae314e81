//! End-to-end tests for vectors, matrices and tensors.
//!
//! Covers the container lifecycle (create, copy, fill, set), the arithmetic
//! on each container, and the shape checks that guard them.

use approx::assert_relative_eq;
use lams::{LinalgError, Matrix, Tensor, Vector};

fn m23() -> Matrix {
    Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
}

fn m32() -> Matrix {
    Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
}

// ============================================================================
// Vector
// ============================================================================

#[test]
fn test_vector_elementwise() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let b = Vector::from_slice(&[4.0, 5.0, 6.0]);

    let sum = a.add(&b).unwrap();
    let diff = a.sub(&b).unwrap();
    let scaled = a.scale(2.0).unwrap();
    for i in 0..3 {
        assert_eq!(sum[i], a[i] + b[i]);
        assert_eq!(diff[i], a[i] - b[i]);
        assert_eq!(scaled[i], a[i] * 2.0);
    }

    // inputs are untouched
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(b.as_slice(), &[4.0, 5.0, 6.0]);
}

#[test]
fn test_vector_products() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let b = Vector::from_slice(&[4.0, 5.0, 6.0]);

    assert_eq!(a.dot(&b).unwrap(), 32.0);
    assert_eq!(a.norm(), 14.0_f64.sqrt());
    assert_eq!(a.cross(&b).unwrap().as_slice(), &[-3.0, 6.0, -3.0]);

    let unit = a.normalize().unwrap();
    assert_eq!(unit[0], 1.0 / 14.0_f64.sqrt());
    assert_eq!(unit[1], 2.0 / 14.0_f64.sqrt());
    assert_eq!(unit[2], 3.0 / 14.0_f64.sqrt());
}

#[test]
fn test_vector_copy_and_roundtrip() {
    let data = vec![1.0, 2.0, 3.0];
    let v = Vector::from_slice(&data);
    assert_eq!(v.to_vec(), data);

    let mut copy = v.clone();
    copy.fill(0.0);
    assert_eq!(v.to_vec(), data);
    assert_eq!(copy.to_vec(), vec![0.0; 3]);
}

#[test]
fn test_vector_mismatch_is_reported() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let b = Vector::from_slice(&[1.0, 2.0]);
    assert!(matches!(a.add(&b), Err(LinalgError::ShapeMismatch { .. })));
    assert!(matches!(a.sub(&b), Err(LinalgError::ShapeMismatch { .. })));
    assert!(matches!(a.dot(&b), Err(LinalgError::ShapeMismatch { .. })));
    assert!(matches!(a.cross(&b), Err(LinalgError::ShapeMismatch { .. })));
}

// ============================================================================
// Matrix
// ============================================================================

#[test]
fn test_matrix_new_is_zeroed() {
    let m: Matrix = Matrix::new(2, 3).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_matrix_set_and_fill() {
    let mut m: Matrix = Matrix::new(2, 2).unwrap();
    m.set(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m[(1, 0)], 3.0);

    m.fill(7.5);
    assert!(m.as_slice().iter().all(|&x| x == 7.5));

    assert!(matches!(
        m.set(&[1.0, 2.0, 3.0]),
        Err(LinalgError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_matrix_add_sub_scale() {
    let a = m23();
    let b = Matrix::from_vec(2, 3, vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();

    let sum = a.add(&b).unwrap();
    assert!(sum.as_slice().iter().all(|&x| x == 7.0));

    let diff = a.sub(&a).unwrap();
    assert!(diff.as_slice().iter().all(|&x| x == 0.0));

    let scaled = a.scale(0.5).unwrap();
    assert_eq!(scaled[(1, 2)], 3.0);
}

#[test]
fn test_matrix_add_rejects_transposed_shape() {
    let a = m23();
    let b = m32();
    assert_eq!(
        a.add(&b).unwrap_err(),
        LinalgError::ShapeMismatch {
            op: "matrix add",
            expected: vec![2, 3],
            actual: vec![3, 2],
        }
    );
    assert!(matches!(a.sub(&b), Err(LinalgError::ShapeMismatch { .. })));
}

#[test]
fn test_matrix_multiply() {
    let c = m23().multiply(&m32()).unwrap();
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[22.0, 28.0, 49.0, 64.0]);
}

#[test]
fn test_matrix_multiply_inner_mismatch() {
    assert!(matches!(
        m23().multiply(&m23()),
        Err(LinalgError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_matrix_multiply_keeps_fractions() {
    let a = Matrix::from_vec(1, 2, vec![0.25, 0.25]).unwrap();
    let b = Matrix::from_vec(2, 1, vec![1.0, 1.0]).unwrap();
    assert_eq!(a.multiply(&b).unwrap()[(0, 0)], 0.5);
}

#[test]
fn test_matrix_multiply_vector() {
    let y = m23()
        .multiply_vector(&Vector::from_slice(&[1.0, 2.0, 3.0]))
        .unwrap();
    assert_eq!(y.shape(), (2, 1));
    assert_eq!(y.as_slice(), &[14.0, 32.0]);

    assert!(matches!(
        m23().multiply_vector(&Vector::from_slice(&[1.0, 2.0])),
        Err(LinalgError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_matrix_transpose_and_identity() {
    let m = m23();
    let t = m.transpose().unwrap();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t[(2, 1)], m[(1, 2)]);
    assert_eq!(t.transpose().unwrap(), m);

    let eye: Matrix = Matrix::identity(2).unwrap();
    assert_eq!(eye.multiply(&m).unwrap(), m);
}

#[test]
fn test_matrix_rows_and_columns() {
    let m = m23();
    assert_eq!(m.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
    assert_eq!(m.column(2).unwrap().as_slice(), &[3.0, 6.0]);
    assert!(m.row(2).is_none());
    assert!(m.column(3).is_none());
}

// ============================================================================
// Tensor
// ============================================================================

#[test]
fn test_tensor_insert_add_sub() {
    let mut t: Tensor = Tensor::new(3, 3, 3).unwrap();
    let mut ones = Matrix::new(3, 3).unwrap();
    ones.fill(1.0);
    t.insert(&ones, 0).unwrap();

    let copy = t.clone();
    let doubled = t.add(&copy).unwrap();
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(doubled.get(0, row, col), Some(&2.0));
            assert_eq!(doubled.get(1, row, col), Some(&0.0));
            assert_eq!(doubled.get(2, row, col), Some(&0.0));
        }
    }

    let zeros = t.sub(&copy).unwrap();
    assert!(zeros.as_slice().iter().all(|&x| x == 0.0));

    // the inserted matrix is still independently owned
    ones.fill(5.0);
    assert_eq!(t.get(0, 0, 0), Some(&1.0));
}

#[test]
fn test_tensor_insert_checks() {
    let mut t: Tensor = Tensor::new(2, 2, 2).unwrap();
    let wrong = Matrix::new(3, 2).unwrap();
    assert!(matches!(
        t.insert(&wrong, 0),
        Err(LinalgError::ShapeMismatch { .. })
    ));
    let right = Matrix::new(2, 2).unwrap();
    assert_eq!(
        t.insert(&right, 2).unwrap_err(),
        LinalgError::IndexOutOfBounds {
            index: 2,
            dim_size: 2
        }
    );
}

#[test]
fn test_tensor_non_square_slices() {
    let mut t: Tensor = Tensor::new(2, 3, 2).unwrap();
    t.insert(&m23(), 1).unwrap();
    assert_eq!(t.shape(), [2, 2, 3]);
    assert_eq!(t.slice(1).unwrap(), m23());
    assert_eq!(t.get(1, 1, 2), Some(&6.0));

    let sum = t.add(&t).unwrap();
    assert_eq!(sum.slice(1).unwrap(), m23().scale(2.0).unwrap());
}

#[test]
fn test_tensor_add_shape_mismatch() {
    let a: Tensor = Tensor::new(2, 3, 2).unwrap();
    let b: Tensor = Tensor::new(3, 2, 2).unwrap();
    let c: Tensor = Tensor::new(2, 3, 1).unwrap();
    assert!(matches!(a.add(&b), Err(LinalgError::ShapeMismatch { .. })));
    assert!(matches!(a.sub(&c), Err(LinalgError::ShapeMismatch { .. })));
}

#[test]
fn test_tensor_from_matrices() {
    let t = Tensor::from_matrices(&[m23(), m23().scale(-1.0).unwrap()]).unwrap();
    assert_eq!(t.rank(), 2);
    assert_relative_eq!(t.get(1, 0, 0).copied().unwrap(), -1.0);
    assert!(matches!(
        Tensor::<f64>::from_matrices(&[]),
        Err(LinalgError::DegenerateInput { .. })
    ));
}

#[test]
fn test_allocation_failure_is_an_error() {
    assert!(matches!(
        Matrix::<f64>::new(usize::MAX, 2),
        Err(LinalgError::AllocationFailure { .. })
    ));
    assert!(matches!(
        Tensor::<f64>::new(usize::MAX, usize::MAX, 2),
        Err(LinalgError::AllocationFailure { .. })
    ));
}
