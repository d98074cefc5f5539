//! Trait implementations for matlite types and conversions to and from faer.
//!
//! This module implements the core algebra traits for `Matrix` and `Vector`,
//! so generic code written against `MatVec`/`InnerProduct` runs on them, and
//! provides `faer::Mat` conversions so results can be checked against faer's
//! factorizations.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::{Indexing, InnerProduct, MatVec, Numerical};
use crate::error::Result;
use crate::matrix::{Matrix, Vector};
use crate::matrix::vector::norm_slice;
use faer::Mat;

/// Implements matrix-vector multiplication for `Matrix`.
///
/// Computes `y = A * x`.
impl<T: Numerical> MatVec<Vector<T>> for Matrix<T> {
    fn matvec(&self, x: &Vector<T>, y: &mut Vector<T>) {
        assert_eq!(self.rows(), y.size(), "Output vector y has incorrect length");
        assert_eq!(self.columns(), x.size(), "Input vector x has incorrect length");
        let xs = x.as_slice();
        for (i, yi) in y.as_mut_slice().iter_mut().enumerate() {
            *yi = self
                .row_slice(i)
                .iter()
                .zip(xs)
                .fold(T::zero_value(), |acc, (&a, &b)| acc + a * b);
        }
    }
}

/// Implements inner product and norm for vectors, with optional Rayon parallelism.
impl<T: Numerical> InnerProduct<Vector<T>> for () {
    type Scalar = T;
    /// Computes `x^H y`.
    fn dot(&self, x: &Vector<T>, y: &Vector<T>) -> T {
        assert_eq!(x.size(), y.size(), "Vectors must have the same length");
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            x.as_slice()
                .par_iter()
                .zip(y.as_slice().par_iter())
                .map(|(xi, yi)| xi.conj() * *yi)
                .reduce(T::zero_value, |acc, v| acc + v)
        }
        #[cfg(not(feature = "rayon"))]
        {
            crate::matrix::vector::dot_slices(x.as_slice(), y.as_slice())
        }
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vector<T>) -> T {
        norm_slice(x.as_slice())
    }
}

impl<T> Indexing for Vector<T>
where
    T: Numerical,
{
    /// Number of rows: the length for a column vector, 1 for a row vector.
    fn nrows(&self) -> usize {
        self.rows()
    }
}

impl<T: Numerical> Indexing for Matrix<T> {
    fn nrows(&self) -> usize {
        self.rows()
    }
}

impl<T: Numerical> Matrix<T> {
    /// Copy a faer matrix, validating its entries like any other constructor.
    pub fn from_faer(m: &Mat<T>) -> Result<Self> {
        let (rows, cols) = (m.nrows(), m.ncols());
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| m[(i, j)]))
            .collect();
        Self::from_row_major(rows, cols, data)
    }

    /// Copy into a faer matrix.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.rows(), self.columns(), |i, j| self[(i, j)])
    }
}
