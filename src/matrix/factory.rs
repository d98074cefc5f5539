//! Matrix builders and in-place padding.

use crate::core::traits::Numerical;
use crate::error::{ErrorKind, Result};
use crate::matrix::dense::Matrix;
use crate::utils::pow2::{is_power_of_two, next_power_of_two};
use rand::Rng;

fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(ErrorKind::InvalidArgument(format!(
            "dimensions must be positive, got ({rows},{cols})"
        ))
        .into());
    }
    Ok(())
}

impl<T: Numerical> Matrix<T> {
    /// `n × n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        check_dims(n, n)?;
        Ok(Self::from_fn(n, n, |i, j| {
            if i == j { T::one_value() } else { T::zero_value() }
        }))
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::zero_value())
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::one_value())
    }

    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        check_dims(rows, cols)?;
        if !value.is_finite() {
            return Err(ErrorKind::InvalidArgument(format!("cannot fill with {value}")).into());
        }
        Ok(Self::from_fn(rows, cols, |_, _| value))
    }

    /// Entries drawn uniformly from `[0, 1)` with the thread-local generator.
    pub fn random(rows: usize, cols: usize) -> Result<Self> {
        Self::random_with(rows, cols, &mut rand::thread_rng())
    }

    /// Entries drawn uniformly from `[0, 1)` with the given generator.
    pub fn random_with<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        check_dims(rows, cols)?;
        Ok(Self::from_fn(rows, cols, |_, _| T::from_integral(rng.r#gen::<f64>())))
    }

    /// Grow to the smallest power-of-two square that holds the matrix, filling with zeros.
    ///
    /// Mutates in place; a matrix that is already a power-of-two square is left alone.
    /// Fails with `InvalidArgument` when the padded side would not fit in a `usize`.
    pub fn pad_to_power_of_two(&mut self) -> Result<()> {
        if self.is_square() && is_power_of_two(self.rows()) {
            return Ok(());
        }
        let side = self.rows().max(self.columns());
        let n = next_power_of_two(side).ok_or_else(|| {
            ErrorKind::InvalidArgument(format!("no power-of-two square holds side {side}"))
        })?;
        log::trace!("padding {} matrix to ({n},{n})", self.shape());
        let padded = Self::from_fn(n, n, |i, j| {
            if i < self.rows() && j < self.columns() {
                self[(i, j)]
            } else {
                T::zero_value()
            }
        });
        *self = padded.with_orientation(self.orientation());
        Ok(())
    }

    /// Top-left `rows × cols` block.
    pub fn crop(&self, rows: usize, cols: usize) -> Result<Self> {
        check_dims(rows, cols)?;
        if rows > self.rows() || cols > self.columns() {
            return Err(ErrorKind::IndexOutOfBounds {
                row: rows - 1,
                col: cols - 1,
                shape: self.shape(),
            }
            .into());
        }
        Ok(Self::from_fn(rows, cols, |i, j| self[(i, j)]).with_orientation(self.orientation()))
    }
}
