//! Direct dense solvers: Gauss-Jordan, QR and triangular substitution.
//!
//! This module wraps the elimination and factorization routines behind the
//! common `LinearSolver` interface.
//!
//! # Usage
//! - Use `GaussJordanSolver` for general square systems.
//! - Use `QrSolver` for square or tall full-column-rank systems (least squares when tall).
//! - Use `TriangularSolver` when the matrix is already upper or lower triangular.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations

use crate::config::options::EliminationOptions;
use crate::core::traits::Numerical;
use crate::error::{ErrorKind, LinalgError};
use crate::matrix::{Matrix, Vector};
use crate::solver::LinearSolver;
use crate::solver::qr::QrDecomposition;

/// Gauss-Jordan solver with configurable pivoting and tolerance.
#[derive(Clone, Debug, Default)]
pub struct GaussJordanSolver {
    pub options: EliminationOptions,
}

impl GaussJordanSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EliminationOptions) -> Self {
        Self { options }
    }
}

impl<T: Numerical> LinearSolver<Matrix<T>, Vector<T>> for GaussJordanSolver {
    type Error = LinalgError;

    fn solve(&mut self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        a.gauss_jordan_solve(b, &self.options)
    }
}

/// QR solver. Stores the factorization for reuse.
#[derive(Clone, Debug)]
pub struct QrSolver<T> {
    /// Cached QR factorization (if computed)
    factor: Option<QrDecomposition<T>>,
}

impl<T: Numerical> QrSolver<T> {
    /// Create a new QR solver (no factorization yet).
    pub fn new() -> Self {
        QrSolver { factor: None }
    }

    /// Solve using the cached factorization.
    ///
    /// Fails with `InvalidArgument` if nothing has been factored yet.
    pub fn solve_cached(&self, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        match &self.factor {
            Some(factor) => factor.solve(b),
            None => Err(ErrorKind::InvalidArgument(
                "QrSolver: solve_cached called before factorization".into(),
            )
            .into()),
        }
    }

    pub fn factorization(&self) -> Option<&QrDecomposition<T>> {
        self.factor.as_ref()
    }
}

impl<T: Numerical> Default for QrSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numerical> LinearSolver<Matrix<T>, Vector<T>> for QrSolver<T> {
    type Error = LinalgError;

    /// Factor `a` (overwriting any previous factor) and solve `R x = Qᴴ b`.
    fn solve(&mut self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        let factor = self.factor.insert(a.qr_decomposition()?);
        factor.solve(b)
    }
}

/// Substitution solver for triangular matrices.
#[derive(Copy, Clone, Debug, Default)]
pub struct TriangularSolver;

impl TriangularSolver {
    pub fn new() -> Self {
        TriangularSolver
    }
}

impl<T: Numerical> LinearSolver<Matrix<T>, Vector<T>> for TriangularSolver {
    type Error = LinalgError;

    /// Back substitution for upper-triangular `a`, forward substitution for lower.
    fn solve(&mut self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        if a.is_upper_triangular() {
            a.back_substitution(b)
        } else if a.is_lower_triangular() {
            a.forward_substitution(b)
        } else {
            a.check_triangular_system(b, "triangular_solve")?;
            Err(ErrorKind::NotTriangular {
                expected: "upper or lower",
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> (Matrix<f64>, Vector<f64>) {
        // 3x3 system: [[2,1,1],[1,3,2],[1,0,0]] x = [4,5,6]
        // True solution: [6,15,-23]
        let a = Matrix::new(vec![
            vec![2.0, 1.0, 1.0],
            vec![1.0, 3.0, 2.0],
            vec![1.0, 0.0, 0.0],
        ])
        .unwrap();
        (a, Vector::column(vec![4.0, 5.0, 6.0]).unwrap())
    }

    #[test]
    fn gauss_jordan_solver_solves_dense_system() {
        let (a, b) = system();
        let mut solver = GaussJordanSolver::new();
        let x = solver.solve(&a, &b).unwrap();
        let expected = [6.0, 15.0, -23.0];
        for (xi, ei) in x.iter().zip(expected.iter()) {
            assert!((xi - ei).abs() < 1e-10, "xi = {}, expected = {}", xi, ei);
        }
    }

    #[test]
    fn qr_solver_caches_factorization() {
        let (a, b) = system();
        let mut solver = QrSolver::new();
        assert!(solver.solve_cached(&b).is_err());
        let x = solver.solve(&a, &b).unwrap();
        let again = solver.solve_cached(&b).unwrap();
        assert!(x.approx_eq(&again, 0.0));
        let expected = Vector::column(vec![6.0, 15.0, -23.0]).unwrap();
        assert!(x.approx_eq(&expected, 1e-9));
        assert!(solver.factorization().is_some());
    }

    #[test]
    fn triangular_solver_dispatches_on_structure() {
        let l = Matrix::new(vec![vec![1.0, 0.0], vec![2.0, 1.0]]).unwrap();
        let b = Vector::column(vec![1.0, 4.0]).unwrap();
        let mut solver = TriangularSolver::new();
        assert_eq!(solver.solve(&l, &b).unwrap().as_slice(), &[1.0, 2.0]);
        assert_eq!(solver.solve(&l.transpose(), &b).unwrap().as_slice(), &[-7.0, 4.0]);
        let (a, b3) = system();
        assert_eq!(solver.solve(&a, &b3).unwrap_err().code(), 301);
    }
}
