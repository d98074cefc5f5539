//! Strassen multiplication.
//!
//! Both operands are embedded in the smallest power-of-two square that holds
//! them, multiplied with Strassen's seven-product recursion, and the product is
//! cropped back to `rows × other.columns`. Blocks at or below the leaf size use
//! the naive kernel.

use crate::core::traits::Numerical;
use crate::error::{ErrorKind, Result};
use crate::matrix::dense::Matrix;
use crate::utils::pow2::next_power_of_two;

/// Default block size below which recursion stops.
pub const STRASSEN_LEAF: usize = 64;

impl<T: Numerical> Matrix<T> {
    /// Product via Strassen's algorithm. Same contract as [`Matrix::naive_multiply`].
    pub fn strassen_multiply(&self, other: &Self) -> Result<Self> {
        self.strassen_multiply_with_leaf(other, STRASSEN_LEAF)
    }

    /// Strassen product with an explicit leaf size (at least 1).
    pub fn strassen_multiply_with_leaf(&self, other: &Self, leaf: usize) -> Result<Self> {
        if self.columns() != other.rows() {
            return Err(self.mismatch("strassen_multiply", other));
        }
        let side = self.rows().max(self.columns()).max(other.columns());
        let n = next_power_of_two(side).ok_or_else(|| {
            ErrorKind::InvalidArgument(format!("no power-of-two square holds side {side}"))
        })?;
        log::debug!(
            "strassen {} x {} embedded in ({n},{n}), leaf {leaf}",
            self.shape(),
            other.shape()
        );
        let a = self.embed(n);
        let b = other.embed(n);
        let c = strassen(&a, &b, leaf.max(1))?;
        Ok(c.crop(self.rows(), other.columns())?.with_orientation(self.orientation()))
    }

    fn embed(&self, n: usize) -> Self {
        Self::from_fn(n, n, |i, j| {
            if i < self.rows() && j < self.columns() {
                self[(i, j)]
            } else {
                T::zero_value()
            }
        })
    }

    fn quadrants(&self) -> [Self; 4] {
        let h = self.rows() / 2;
        let block = |r0: usize, c0: usize| Self::from_fn(h, h, |i, j| self[(r0 + i, c0 + j)]);
        [block(0, 0), block(0, h), block(h, 0), block(h, h)]
    }

    fn join(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> Self {
        let h = c11.rows();
        Self::from_fn(2 * h, 2 * h, |i, j| match (i < h, j < h) {
            (true, true) => c11[(i, j)],
            (true, false) => c12[(i, j - h)],
            (false, true) => c21[(i - h, j)],
            (false, false) => c22[(i - h, j - h)],
        })
    }
}

fn strassen<T: Numerical>(a: &Matrix<T>, b: &Matrix<T>, leaf: usize) -> Result<Matrix<T>> {
    let n = a.rows();
    if n <= leaf || n % 2 == 1 {
        return a.naive_multiply(b);
    }
    let [a11, a12, a21, a22] = a.quadrants();
    let [b11, b12, b21, b22] = b.quadrants();

    let m1 = strassen(&a11.add(&a22)?, &b11.add(&b22)?, leaf)?;
    let m2 = strassen(&a21.add(&a22)?, &b11, leaf)?;
    let m3 = strassen(&a11, &b12.subtract(&b22)?, leaf)?;
    let m4 = strassen(&a22, &b21.subtract(&b11)?, leaf)?;
    let m5 = strassen(&a11.add(&a12)?, &b22, leaf)?;
    let m6 = strassen(&a21.subtract(&a11)?, &b11.add(&b12)?, leaf)?;
    let m7 = strassen(&a12.subtract(&a22)?, &b21.add(&b22)?, leaf)?;

    let c11 = m1.add(&m4)?.subtract(&m5)?.add(&m7)?;
    let c12 = m3.add(&m5)?;
    let c21 = m2.add(&m4)?;
    let c22 = m1.subtract(&m2)?.add(&m3)?.add(&m6)?;
    Ok(Matrix::join(&c11, &c12, &c21, &c22))
}
