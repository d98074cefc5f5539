//! QR decomposition by Gram-Schmidt orthogonalization.
//!
//! Each column of `A` has its projection onto every previously accepted
//! orthonormal column removed (modified Gram-Schmidt, with a second
//! re-orthogonalization pass), and is then normalized. The projection
//! coefficients form `R = Qᴴ A`, which is upper triangular by construction.
//!
//! A column whose orthogonalized norm falls to [`DELTA`] or below is linearly
//! dependent on the columns before it; this is reported as
//! [`ErrorKind::LinearDependence`] instead of being skipped.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §5.2.8

use crate::config::options::DELTA;
use crate::core::traits::Numerical;
use crate::error::{ErrorKind, Result};
use crate::matrix::vector::{dot_slices, norm_slice};
use crate::matrix::{Matrix, Orientation, Vector};

/// Thin factorization `A = Q R` of an `m × n` matrix with `m >= n`.
#[derive(Clone, Debug)]
pub struct QrDecomposition<T> {
    /// `m × n`, orthonormal columns
    pub q: Matrix<T>,
    /// `n × n`, upper triangular
    pub r: Matrix<T>,
}

impl<T: Numerical> Matrix<T> {
    /// Thin QR factorization.
    ///
    /// The dependence test compares each orthogonalized column norm against
    /// the absolute [`DELTA`]; it does not scale with the input, so a
    /// full-rank matrix whose columns all have norm below `1e-10` is reported
    /// as dependent.
    pub fn qr_decomposition(&self) -> Result<QrDecomposition<T>> {
        let (m, n) = (self.rows(), self.columns());
        if self.is_wide() {
            // at most m independent columns in an m-dimensional space
            return Err(ErrorKind::LinearDependence { column: m }.into());
        }
        let mut basis: Vec<Vec<T>> = Vec::with_capacity(n);
        let mut r = Matrix::from_fn(n, n, |_, _| T::zero_value());
        for j in 0..n {
            let mut v = self.get_column(j)?.into_inner();
            for _pass in 0..2 {
                for (i, q) in basis.iter().enumerate() {
                    let coeff = dot_slices(q, &v);
                    *r.entry_mut(i, j) = r[(i, j)] + coeff;
                    for (vk, &qk) in v.iter_mut().zip(q) {
                        *vk = *vk - coeff * qk;
                    }
                }
            }
            let norm = norm_slice(&v);
            if norm.is_near_zero(DELTA) {
                log::debug!("qr: column {j} has residual norm {norm}, rejecting");
                return Err(ErrorKind::LinearDependence { column: j }.into());
            }
            *r.entry_mut(j, j) = norm;
            basis.push(v.into_iter().map(|x| x / norm).collect());
        }
        let q = Matrix::from_fn(m, n, |i, j| basis[j][i]).checked("qr_decomposition")?;
        let r = r.checked("qr_decomposition")?;
        log::debug!("qr: factored {} matrix", self.shape());
        Ok(QrDecomposition { q, r })
    }
}

impl<T: Numerical> QrDecomposition<T> {
    /// Least-squares solution of `A x = b`: `R x = Qᴴ b`.
    ///
    /// Exact when `A` is square and nonsingular.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        if b.size() != self.q.rows() {
            return Err(ErrorKind::DimensionMismatch {
                op: "qr_solve",
                left: self.q.shape(),
                right: b.shape(),
            }
            .into());
        }
        let qhb = (0..self.q.columns())
            .map(|j| {
                let col = self.q.get_column(j)?;
                Ok(dot_slices(col.as_slice(), b.as_slice()))
            })
            .collect::<Result<Vec<T>>>()?;
        self.r.back_substitution(&Vector::from_parts(qhb, Orientation::Column))
    }

    /// `Q R`, for checking the factorization.
    pub fn reconstruct(&self) -> Result<Matrix<T>> {
        self.q.naive_multiply(&self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Complex64;

    #[test]
    fn orthogonal_input_is_a_fixed_point() {
        let a = Matrix::new(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
        let QrDecomposition { q, r } = a.qr_decomposition().unwrap();
        assert_eq!(q, Matrix::identity(2).unwrap());
        assert_eq!(r, Matrix::new(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap());
    }

    #[test]
    fn tall_matrix_has_orthonormal_columns() {
        let a = Matrix::new(vec![
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0, 7.0],
        ])
        .unwrap();
        let qr = a.qr_decomposition().unwrap();
        assert_eq!(qr.q.shape(), "(3,2)");
        assert_eq!(qr.r.shape(), "(2,2)");
        assert!(qr.r.is_upper_triangular());
        let qtq = qr.q.transpose().naive_multiply(&qr.q).unwrap();
        assert!(qtq.approx_eq(&Matrix::identity(2).unwrap(), 1e-12));
        assert!(qr.reconstruct().unwrap().approx_eq(&a, 1e-12));
    }

    #[test]
    fn dependent_columns_are_reported() {
        let a = Matrix::new(vec![
            vec![1.0, 2.0, 0.0],
            vec![2.0, 4.0, 1.0],
            vec![3.0, 6.0, 0.0],
        ])
        .unwrap();
        let err = a.qr_decomposition().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::LinearDependence { column: 1 }));
    }

    #[test]
    fn large_magnitude_columns_stay_finite() {
        let a = Matrix::new(vec![vec![1e200, 0.0], vec![1e200, 1.0]]).unwrap();
        let qr = a.qr_decomposition().unwrap();
        let qtq = qr.q.transpose().naive_multiply(&qr.q).unwrap();
        assert!(qtq.approx_eq(&Matrix::identity(2).unwrap(), 1e-12));
        let r00 = qr.r[(0, 0)];
        assert!((r00 / (2f64.sqrt() * 1e200) - 1.0).abs() < 1e-12);
        assert!((qr.r[(1, 1)] - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn threshold_is_absolute() {
        let tiny = Matrix::<f64>::identity(2).unwrap().scale(1e-11).unwrap();
        assert!(matches!(
            tiny.qr_decomposition().unwrap_err().kind,
            ErrorKind::LinearDependence { column: 0 }
        ));
    }

        #[test]
    fn wide_matrix_cannot_have_independent_columns() {
        let a = Matrix::new(vec![vec![1.0, 2.0, 3.0], vec![0.0, 1.0, 4.0]]).unwrap();
        assert_eq!(a.qr_decomposition().unwrap_err().code(), 302);
    }

    #[test]
    fn complex_qr_is_unitary() {
        let z = |re, im| Complex64::new(re, im);
        let a = Matrix::new(vec![
            vec![z(1.0, 1.0), z(2.0, 0.0)],
            vec![z(0.0, -1.0), z(1.0, 3.0)],
        ])
        .unwrap();
        let qr = a.qr_decomposition().unwrap();
        let qhq = qr.q.conjugate_transpose().naive_multiply(&qr.q).unwrap();
        assert!(qhq.approx_eq(&Matrix::identity(2).unwrap(), 1e-12));
        assert!(qr.reconstruct().unwrap().approx_eq(&a, 1e-12));
    }

    #[test]
    fn least_squares_solve() {
        // fit y = c0 + c1 t through (0,1), (1,3), (2,5): exact line 1 + 2t
        let a = Matrix::new(vec![vec![1.0, 0.0], vec![1.0, 1.0], vec![1.0, 2.0]]).unwrap();
        let b = Vector::column(vec![1.0, 3.0, 5.0]).unwrap();
        let x = a.qr_decomposition().unwrap().solve(&b).unwrap();
        assert!(x.approx_eq(&Vector::column(vec![1.0, 2.0]).unwrap(), 1e-12));
    }
}
