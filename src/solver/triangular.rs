//! Triangular structure checks and substitution solves.
//!
//! Both solves verify the triangular structure explicitly rather than assuming
//! it, and reject a diagonal entry whose modulus is at or below [`DELTA`].

use crate::config::options::DELTA;
use crate::core::traits::Numerical;
use crate::error::{ErrorKind, Result};
use crate::matrix::{Matrix, Orientation, Vector};

impl<T: Numerical> Matrix<T> {
    /// Every entry below the diagonal has modulus at most [`DELTA`].
    pub fn is_upper_triangular(&self) -> bool {
        self.is_upper_triangular_tol(DELTA)
    }

    pub fn is_upper_triangular_tol(&self, tol: f64) -> bool {
        (1..self.rows()).all(|i| {
            self.row_slice(i)[..i.min(self.columns())]
                .iter()
                .all(|x| x.is_near_zero(tol))
        })
    }

    /// Every entry above the diagonal has modulus at most [`DELTA`].
    pub fn is_lower_triangular(&self) -> bool {
        self.is_lower_triangular_tol(DELTA)
    }

    pub fn is_lower_triangular_tol(&self, tol: f64) -> bool {
        (0..self.rows()).all(|i| {
            self.row_slice(i)
                .iter()
                .skip(i + 1)
                .all(|x| x.is_near_zero(tol))
        })
    }

    /// Solve `U x = b` for upper-triangular `U`, from the last row upward.
    pub fn back_substitution(&self, b: &Vector<T>) -> Result<Vector<T>> {
        self.check_triangular_system(b, "back_substitution")?;
        if !self.is_upper_triangular() {
            return Err(ErrorKind::NotTriangular { expected: "upper" }.into());
        }
        let n = self.rows();
        let rhs = b.as_slice();
        let mut x = vec![T::zero_value(); n];
        for i in (0..n).rev() {
            let row = self.row_slice(i);
            let mut acc = rhs[i];
            for j in (i + 1)..n {
                acc = acc - row[j] * x[j];
            }
            x[i] = divide_by_pivot(acc, row[i], i)?;
        }
        Ok(Vector::from_parts(x, Orientation::Column))
    }

    /// Solve `L x = b` for lower-triangular `L`, from the first row downward.
    pub fn forward_substitution(&self, b: &Vector<T>) -> Result<Vector<T>> {
        self.check_triangular_system(b, "forward_substitution")?;
        if !self.is_lower_triangular() {
            return Err(ErrorKind::NotTriangular { expected: "lower" }.into());
        }
        let n = self.rows();
        let rhs = b.as_slice();
        let mut x = vec![T::zero_value(); n];
        for i in 0..n {
            let row = self.row_slice(i);
            let mut acc = rhs[i];
            for j in 0..i {
                acc = acc - row[j] * x[j];
            }
            x[i] = divide_by_pivot(acc, row[i], i)?;
        }
        Ok(Vector::from_parts(x, Orientation::Column))
    }

    pub(crate) fn check_triangular_system(&self, b: &Vector<T>, op: &'static str) -> Result<()> {
        if !self.is_square() || b.size() != self.rows() {
            return Err(ErrorKind::DimensionMismatch {
                op,
                left: self.shape(),
                right: b.shape(),
            }
            .into());
        }
        Ok(())
    }
}

fn divide_by_pivot<T: Numerical>(acc: T, pivot: T, i: usize) -> Result<T> {
    if pivot.is_near_zero(DELTA) {
        return Err(ErrorKind::SingularSystem { pivot: i }.into());
    }
    Ok(acc / pivot)
}
