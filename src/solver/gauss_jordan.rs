//! Gaussian and Gauss-Jordan elimination.
//!
//! `gaussian_elimination` returns the row-echelon form (or the reduced form
//! when `EliminationFlags::REDUCED` is set). `gauss_jordan_solve` augments the
//! matrix with the right-hand side, reduces it and reads the solution off the
//! last column. `inverse` does the same with the identity as right-hand side.

use crate::config::options::{EliminationFlags, EliminationOptions};
use crate::core::traits::Numerical;
use crate::error::{ErrorKind, Result};
use crate::matrix::{Matrix, Orientation, Vector};

impl<T: Numerical> Matrix<T> {
    /// Row-reduce a copy of the matrix.
    ///
    /// Fails with `MatrixValidation { status: NonNumeric }` when a row
    /// operation overflows, which can happen without pivoting and a tolerance
    /// that admits tiny pivots.
    pub fn gaussian_elimination(&self, options: &EliminationOptions) -> Result<Matrix<T>> {
        let mut work = self.clone();
        let pivots = eliminate(&mut work, self.columns(), options);
        log::debug!("elimination of {}: rank {}", self.shape(), pivots.len());
        work.checked("gaussian_elimination")
    }

    /// Number of pivots found by elimination with the given tolerance.
    pub fn rank(&self, options: &EliminationOptions) -> usize {
        let mut work = self.clone();
        eliminate(&mut work, self.columns(), options).len()
    }

    /// Solve `A x = b` by Gauss-Jordan reduction of `[A | b]`.
    ///
    /// The reduction always runs to normalized reduced row-echelon form; the
    /// pivoting flag and tolerance are taken from `options`.
    pub fn gauss_jordan_solve(&self, b: &Vector<T>, options: &EliminationOptions) -> Result<Vector<T>> {
        if !self.is_square() || b.size() != self.rows() {
            return Err(ErrorKind::DimensionMismatch {
                op: "gauss_jordan_solve",
                left: self.shape(),
                right: b.shape(),
            }
            .into());
        }
        let n = self.rows();
        let rhs = b.as_slice();
        let mut aug = Matrix::from_fn(n, n + 1, |i, j| if j < n { self[(i, j)] } else { rhs[i] });
        let opts = full_reduction(options);
        let pivots = eliminate(&mut aug, n, &opts);
        let aug = aug.checked("gauss_jordan_solve")?;
        if pivots.len() < n {
            if let Some(row) = (pivots.len()..n).find(|&i| !aug[(i, n)].is_near_zero(opts.tol)) {
                return Err(ErrorKind::InconsistentSystem { row }.into());
            }
            return Err(ErrorKind::SingularSystem {
                pivot: first_missing(&pivots),
            }
            .into());
        }
        let x = (0..n).map(|i| aug[(i, n)]).collect();
        Ok(Vector::from_parts(x, Orientation::Column))
    }

    /// Inverse by Gauss-Jordan reduction of `[A | I]`.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(ErrorKind::DimensionMismatch {
                op: "inverse",
                left: self.shape(),
                right: self.transpose().shape(),
            }
            .into());
        }
        let n = self.rows();
        let mut aug = Matrix::from_fn(n, 2 * n, |i, j| {
            if j < n {
                self[(i, j)]
            } else if j - n == i {
                T::one_value()
            } else {
                T::zero_value()
            }
        });
        let opts = EliminationOptions::reduced();
        let pivots = eliminate(&mut aug, n, &opts);
        let aug = aug.checked("inverse")?;
        if pivots.len() < n {
            return Err(ErrorKind::SingularSystem {
                pivot: first_missing(&pivots),
            }
            .into());
        }
        Ok(Matrix::from_fn(n, n, |i, j| aug[(i, n + j)]).with_orientation(self.orientation()))
    }
}

fn full_reduction(options: &EliminationOptions) -> EliminationOptions {
    let mut opts = *options;
    opts.flags |= EliminationFlags::REDUCED | EliminationFlags::NORMALIZE;
    opts
}

/// First column index without a pivot, given pivot columns in increasing order.
fn first_missing(pivots: &[usize]) -> usize {
    pivots
        .iter()
        .enumerate()
        .find(|&(i, &c)| i != c)
        .map_or(pivots.len(), |(i, _)| i)
}

/// Row-reduce `m` in place over its first `pivot_cols` columns.
///
/// Returns the pivot column of each pivot row, in order.
fn eliminate<T: Numerical>(m: &mut Matrix<T>, pivot_cols: usize, options: &EliminationOptions) -> Vec<usize> {
    let rows = m.rows();
    let tol = options.tol;
    let mut pivots = Vec::with_capacity(rows.min(pivot_cols));
    let mut r = 0;
    for c in 0..pivot_cols {
        if r == rows {
            break;
        }
        let candidate = if options.pivoting() {
            (r..rows).max_by(|&a, &b| m[(a, c)].modulus().total_cmp(&m[(b, c)].modulus()))
        } else {
            (r..rows).find(|&i| !m[(i, c)].is_near_zero(tol))
        };
        let Some(p) = candidate.filter(|&p| !m[(p, c)].is_near_zero(tol)) else {
            continue;
        };
        if p != r {
            log::trace!("elimination: swap rows {r} and {p} for column {c}");
            m.swap_rows(r, p);
        }
        if options.normalize() {
            let inv = T::one_value() / m[(r, c)];
            m.scale_row(r, inv);
            *m.entry_mut(r, c) = T::one_value();
        }
        let pivot = m[(r, c)];
        let targets = if options.reduce() { 0..rows } else { (r + 1)..rows };
        for i in targets {
            if i == r {
                continue;
            }
            let factor = m[(i, c)] / pivot;
            if factor.is_near_zero(0.0) {
                continue;
            }
            m.sub_row_multiple(i, r, factor);
            *m.entry_mut(i, c) = T::zero_value();
        }
        pivots.push(c);
        r += 1;
    }
    pivots
}
