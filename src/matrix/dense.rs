//! Dense matrices over any [`Numerical`] scalar.
//!
//! Storage is a single row-major buffer (`index = row * columns + column`).
//! A matrix also carries an [`Orientation`] tag telling whether it is viewed as
//! a stack of row vectors or as a sequence of column vectors; the vector view
//! returned by [`Matrix::vectors`] is always derived from the flat buffer.

use crate::core::traits::Numerical;
use crate::error::{ErrorKind, LinalgError, MatrixStatus, Result};
use crate::matrix::vector::{Orientation, Vector};
use std::fmt;
use std::ops::Index;

/// Square, tall (more rows than columns) or wide (more columns than rows).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeClass {
    Square,
    Tall,
    Wide,
}

#[derive(Clone, Debug)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    orientation: Orientation,
}

fn validation(status: MatrixStatus, reason: String) -> LinalgError {
    ErrorKind::MatrixValidation { status, reason }.into()
}

impl<T: Numerical> Matrix<T> {
    /// Build a row-matrix from nested rows.
    ///
    /// Fails on an empty input, on rows of differing length and on non-finite entries.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(validation(MatrixStatus::Empty, "matrix has no entries".into()));
        }
        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(validation(
                MatrixStatus::Ragged,
                format!("row {i} has length {}, expected {n_cols}", r.len()),
            ));
        }
        Self::from_row_major(n_rows, n_cols, rows.into_iter().flatten().collect())
    }

    /// Build a row-matrix from a row-major buffer of length `rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(validation(MatrixStatus::Empty, format!("shape ({rows},{cols})")));
        }
        if data.len() != rows * cols {
            return Err(validation(
                MatrixStatus::Ragged,
                format!("buffer of length {} for shape ({rows},{cols})", data.len()),
            ));
        }
        if let Some(i) = data.iter().position(|x| !x.is_finite()) {
            return Err(validation(
                MatrixStatus::NonNumeric,
                format!("entry ({}, {}) is {}", i / cols, i % cols, data[i]),
            ));
        }
        Ok(Self::from_raw(rows, cols, data, Orientation::Row))
    }

    /// Build a matrix from row vectors (a row-matrix) or column vectors (a column-matrix).
    pub fn from_vectors(vectors: Vec<Vector<T>>) -> Result<Self> {
        let first = vectors
            .first()
            .ok_or_else(|| validation(MatrixStatus::Empty, "no vectors".into()))?;
        let orientation = first.orientation();
        let len = first.size();
        for v in &vectors {
            if v.orientation() != orientation {
                return Err(ErrorKind::TypeMismatch {
                    expected: orientation.name(),
                    found: v.orientation().name(),
                }
                .into());
            }
            if v.size() != len {
                return Err(validation(
                    MatrixStatus::Ragged,
                    format!("vector of size {} among vectors of size {len}", v.size()),
                ));
            }
        }
        let count = vectors.len();
        let m = match orientation {
            Orientation::Row => Self::from_row_major(
                count,
                len,
                vectors.into_iter().flat_map(Vector::into_inner).collect(),
            )?,
            Orientation::Column => {
                let data = (0..len)
                    .flat_map(|i| vectors.iter().map(move |v| v.as_slice()[i]))
                    .collect();
                Self::from_row_major(len, count, data)?
            }
        };
        Ok(m.with_orientation(orientation))
    }

    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>, orientation: Orientation) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            data,
            rows,
            cols,
            orientation,
        }
    }

    pub(crate) fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self::from_raw(rows, cols, data, Orientation::Row)
    }

    /// Unchecked write access for the elimination and factorization kernels.
    pub(crate) fn entry_mut(&mut self, i: usize, j: usize) -> &mut T {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.cols + j]
    }

    /// Reject a computed result whose entries overflowed.
    pub(crate) fn checked(self, op: &'static str) -> Result<Self> {
        match self.data.iter().position(|x| !x.is_finite()) {
            Some(i) => Err(validation(
                MatrixStatus::NonNumeric,
                format!(
                    "{op} produced {} at entry ({}, {})",
                    self.data[i],
                    i / self.cols,
                    i % self.cols
                ),
            )),
            None => Ok(self),
        }
    }

    pub(crate) fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// `"(rows,columns)"`.
    pub fn shape(&self) -> String {
        format!("({},{})", self.rows, self.cols)
    }

    pub fn classification(&self) -> ShapeClass {
        use std::cmp::Ordering;
        match self.rows.cmp(&self.cols) {
            Ordering::Equal => ShapeClass::Square,
            Ordering::Greater => ShapeClass::Tall,
            Ordering::Less => ShapeClass::Wide,
        }
    }

    pub fn is_square(&self) -> bool {
        self.classification() == ShapeClass::Square
    }

    pub fn is_tall(&self) -> bool {
        self.classification() == ShapeClass::Tall
    }

    pub fn is_wide(&self) -> bool {
        self.classification() == ShapeClass::Wide
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> LinalgError {
        ErrorKind::IndexOutOfBounds {
            row,
            col,
            shape: self.shape(),
        }
        .into()
    }

    pub(crate) fn mismatch(&self, op: &'static str, other: &Self) -> LinalgError {
        ErrorKind::DimensionMismatch {
            op,
            left: self.shape(),
            right: other.shape(),
        }
        .into()
    }

    pub fn get_element(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_bounds(row, col));
        }
        Ok(self.data[row * self.cols + col])
    }

    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_bounds(row, col));
        }
        if !value.is_finite() {
            return Err(ErrorKind::InvalidArgument(format!("cannot store {value}")).into());
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Copy of row `index` as a row vector.
    pub fn get_row(&self, index: usize) -> Result<Vector<T>> {
        if index >= self.rows {
            return Err(self.out_of_bounds(index, 0));
        }
        Ok(Vector::from_parts(self.row_slice(index).to_vec(), Orientation::Row))
    }

    /// Copy of column `index` as a column vector.
    pub fn get_column(&self, index: usize) -> Result<Vector<T>> {
        if index >= self.cols {
            return Err(self.out_of_bounds(0, index));
        }
        let col = self.data.iter().skip(index).step_by(self.cols).copied().collect();
        Ok(Vector::from_parts(col, Orientation::Column))
    }

    /// The constituent vectors: rows for a row-matrix, columns for a column-matrix.
    pub fn vectors(&self) -> Vec<Vector<T>> {
        match self.orientation {
            Orientation::Row => (0..self.rows)
                .map(|i| Vector::from_parts(self.row_slice(i).to_vec(), Orientation::Row))
                .collect(),
            Orientation::Column => (0..self.cols)
                .map(|j| {
                    let col = self.data.iter().skip(j).step_by(self.cols).copied().collect();
                    Vector::from_parts(col, Orientation::Column)
                })
                .collect(),
        }
    }

    fn zip_with(&self, other: &Self, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(self.mismatch(op, other));
        }
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        Self::from_raw(self.rows, self.cols, data, self.orientation).checked(op)
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    pub fn scale(&self, scalar: T) -> Result<Self> {
        if !scalar.is_finite() {
            return Err(ErrorKind::InvalidArgument(format!("cannot scale by {scalar}")).into());
        }
        let data = self.data.iter().map(|&x| x * scalar).collect();
        Self::from_raw(self.rows, self.cols, data, self.orientation).checked("scale")
    }

    /// Textbook O(m·n·p) product. Output rows are computed in parallel with the `rayon` feature.
    pub fn naive_multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(self.mismatch("naive_multiply", other));
        }
        let (n, p) = (self.cols, other.cols);
        let mut out = vec![T::zero_value(); self.rows * p];
        let kernel = |(i, out_row): (usize, &mut [T])| {
            for k in 0..n {
                let a = self.data[i * n + k];
                for (o, &b) in out_row.iter_mut().zip(other.row_slice(k)) {
                    *o = *o + a * b;
                }
            }
        };
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            out.par_chunks_mut(p).enumerate().for_each(kernel);
        }
        #[cfg(not(feature = "rayon"))]
        {
            out.chunks_mut(p).enumerate().for_each(kernel);
        }
        Self::from_raw(self.rows, p, out, self.orientation).checked("naive_multiply")
    }

    /// Swap rows and columns; a row-matrix becomes a column-matrix and vice versa.
    pub fn transpose(&self) -> Self {
        let t = Self::from_fn(self.cols, self.rows, |i, j| self.data[j * self.cols + i]);
        t.with_orientation(self.orientation.flip())
    }

    /// Transpose and conjugate every entry. Same as `transpose` for real scalars.
    pub fn conjugate_transpose(&self) -> Self {
        let t = Self::from_fn(self.cols, self.rows, |i, j| self.data[j * self.cols + i].conj());
        t.with_orientation(self.orientation.flip())
    }

    /// View a column-matrix as a row-matrix. Fails if it already is one.
    pub fn to_row_matrix(&self) -> Result<Self> {
        if self.orientation == Orientation::Row {
            return Err(ErrorKind::TypeMismatch {
                expected: "column-matrix",
                found: "row-matrix",
            }
            .into());
        }
        Ok(self.clone().with_orientation(Orientation::Row))
    }

    /// View a row-matrix as a column-matrix. Fails if it already is one.
    pub fn to_column_matrix(&self) -> Result<Self> {
        if self.orientation == Orientation::Column {
            return Err(ErrorKind::TypeMismatch {
                expected: "row-matrix",
                found: "column-matrix",
            }
            .into());
        }
        Ok(self.clone().with_orientation(Orientation::Column))
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    pub(crate) fn scale_row(&mut self, row: usize, factor: T) {
        let cols = self.cols;
        for x in &mut self.data[row * cols..(row + 1) * cols] {
            *x = *x * factor;
        }
    }

    /// `row[target] -= factor * row[source]`.
    pub(crate) fn sub_row_multiple(&mut self, target: usize, source: usize, factor: T) {
        let cols = self.cols;
        for j in 0..cols {
            let s = self.data[source * cols + j];
            let t = &mut self.data[target * cols + j];
            *t = *t - factor * s;
        }
    }

    /// Round every entry in place.
    pub fn round_elements(&mut self, decimals: u32) {
        for x in self.data.iter_mut() {
            *x = x.round_to(decimals);
        }
    }

    /// Same shape and every difference has modulus at most `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| (a - b).modulus() <= tol)
    }

    /// Largest entry modulus.
    pub fn max_modulus(&self) -> f64 {
        self.data.iter().map(|x| x.modulus()).fold(0.0, f64::max)
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    /// Shape and entries; orientation is a view and is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl<T: Numerical> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            f.write_str("[")?;
            for (j, x) in self.row_slice(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{x}")?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}
