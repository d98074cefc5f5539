//! Tests for core dense operations: matrix-vector multiplication, dot product, norm and
//! the algebraic laws of the elementwise and product operations.
//!
//! These tests verify the MatVec and InnerProduct trait implementations and the
//! `Matrix` arithmetic on random and fixed data.

use approx::assert_abs_diff_eq;
use matlite::core::traits::{InnerProduct, MatVec};
use matlite::{Complex64, Matrix, Orientation, Vector};
use rand::Rng;

/// Test matrix-vector multiplication for a small random dense matrix.
///
/// This test constructs a random 5x5 matrix and a random vector, computes the matrix-vector
/// product using the MatVec trait, and checks the result against a manual computation.
#[test]
fn matvec_random_small() {
    let n = 5;
    let mut rng = rand::thread_rng();
    let vals: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    let a = Matrix::from_row_major(n, n, vals.clone()).unwrap();
    let x = Vector::column((0..n).map(|_| rng.r#gen()).collect()).unwrap();
    let mut y = Vector::column(vec![0.0; n]).unwrap();
    a.matvec(&x, &mut y);

    // check y[i] == sum_j A[i,j]*x[j]
    for i in 0..n {
        let expected = (0..n).map(|j| vals[i * n + j] * x.as_slice()[j]).sum::<f64>();
        assert_abs_diff_eq!(y.as_slice()[i], expected, epsilon = 1e-12);
    }
}

/// Test dot product and Euclidean norm for small vectors.
#[test]
fn dot_and_norm() {
    let x = Vector::row(vec![1.0, 2.0, 3.0]).unwrap();
    let y = Vector::row(vec![4.0, -5.0, 6.0]).unwrap();
    let ip = ();
    let dot = ip.dot(&x, &y);
    assert_abs_diff_eq!(dot, 1.0 * 4.0 + 2.0 * (-5.0) + 3.0 * 6.0, epsilon = 1e-12);
    let norm_x = ip.norm(&x);
    let expected_norm = ((1.0f64).powi(2) + 2.0f64.powi(2) + 3.0f64.powi(2)).sqrt();
    assert_abs_diff_eq!(norm_x, expected_norm, epsilon = 1e-12);
    assert_abs_diff_eq!(x.dot(&y).unwrap(), dot, epsilon = 1e-12);
}

/// Row vectors are 1×n and column vectors n×1, for any length.
#[test]
fn vector_shapes_follow_orientation() {
    for n in 1..8 {
        let v: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let row = Vector::row(v.clone()).unwrap();
        assert_eq!((row.rows(), row.columns()), (1, n));
        let nested = v.iter().map(|&x| vec![x]).collect();
        let col = Vector::from_nested(nested).unwrap();
        assert_eq!((col.rows(), col.columns()), (n, 1));
        assert_eq!(col.size(), n);
    }
}

/// transpose(transpose(M)) == M, including the orientation.
#[test]
fn transpose_round_trip() {
    for (r, c) in [(1, 1), (2, 5), (4, 3), (6, 6)] {
        let a = Matrix::<f64>::random(r, c).unwrap();
        let t = a.transpose();
        assert_eq!(t.orientation(), Orientation::Column);
        assert_eq!((t.rows(), t.columns()), (c, r));
        let tt = t.transpose();
        assert_eq!(tt, a);
        assert_eq!(tt.orientation(), a.orientation());
    }
}

/// A · I == A for any shape.
#[test]
fn identity_is_right_neutral() {
    for (r, c) in [(1, 4), (3, 3), (5, 2)] {
        let a = Matrix::<f64>::random(r, c).unwrap();
        let i = Matrix::identity(a.columns()).unwrap();
        assert_eq!(a.naive_multiply(&i).unwrap(), a);
    }
}

/// add is commutative and subtract is anti-commutative.
#[test]
fn add_and_subtract_laws() {
    let a = Matrix::<f64>::random(3, 4).unwrap();
    let b = Matrix::<f64>::random(3, 4).unwrap();
    assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    assert_eq!(
        a.subtract(&b).unwrap(),
        b.subtract(&a).unwrap().scale(-1.0).unwrap()
    );
    assert_eq!(a.scale(f64::NAN).unwrap_err().code(), 400);
}

/// The same laws hold over complex scalars.
#[test]
fn complex_algebra_laws() {
    let z = |re, im| Complex64::new(re, im);
    let a = Matrix::new(vec![vec![z(1.0, 2.0), z(0.0, -1.0)], vec![z(3.0, 0.5), z(-2.0, 1.0)]]).unwrap();
    let b = Matrix::new(vec![vec![z(0.5, 0.0), z(1.0, 1.0)], vec![z(0.0, 0.0), z(4.0, -3.0)]]).unwrap();
    assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    assert_eq!(
        a.subtract(&b).unwrap(),
        b.subtract(&a).unwrap().scale(z(-1.0, 0.0)).unwrap()
    );
    let i = Matrix::identity(2).unwrap();
    assert_eq!(a.naive_multiply(&i).unwrap(), a);
    assert_eq!(a.transpose().transpose(), a);
}

/// Ragged input is rejected rather than padded or truncated.
#[test]
fn ragged_matrix_is_a_validation_error() {
    let err = Matrix::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(err.code() / 100, 1);
}

/// Entries can only be written through the checked mutators, which refuse non-finite values.
#[test]
fn public_mutators_keep_entries_finite() {
    let mut a = Matrix::new(vec![vec![1.0, 2.0]]).unwrap();
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(a.set_element(0, 0, bad).is_err());
    }
    assert_eq!(a.as_slice(), &[1.0, 2.0]);

    let mut v = Vector::column(vec![1.0, 2.0]).unwrap();
    assert!(v.set(1, f64::NAN).is_err());
    assert_eq!(v.as_slice(), &[1.0, 2.0]);

    let huge = Vector::row(vec![1e300]).unwrap();
    assert!(huge.scale(1e300).is_err());
    let one = Matrix::new(vec![vec![1.0]]).unwrap();
    assert!(one.scale(f64::MAX).unwrap().scale(2.0).is_err());
}
