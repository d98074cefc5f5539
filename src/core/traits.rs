//! Core scalar and linear-algebra traits for matlite.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Field operations every scalar stored in a [`crate::Vector`] or [`crate::Matrix`] supplies.
///
/// `add`, `subtract`, `multiply` and `divide` are the closed `+ - * /` operators.
/// None of the operations mutate their operands.
pub trait Numerical:
    Copy
    + PartialEq
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero_value() -> Self;
    /// Multiplicative identity.
    fn one_value() -> Self;
    /// Principal square root.
    fn sqrt(self) -> Self;
    /// Lift a plain number into the scalar type.
    fn from_integral(n: f64) -> Self;
    /// Project the scalar to a plain number.
    ///
    /// Lossy for complex scalars: only the real component survives.
    fn to_integral(self) -> f64;
    /// `-1`, `0` or `+1` taken from the directional (real) component.
    fn sign_operator(self) -> Self;
    /// Absolute value, used for every tolerance comparison.
    fn modulus(self) -> f64;
    /// Complex conjugate; identity on reals.
    fn conj(self) -> Self;
    /// False for NaN or infinite components.
    fn is_finite(self) -> bool;
    /// Round every component to `decimals` fractional digits.
    fn round_to(self, decimals: u32) -> Self;

    /// True when `modulus() <= tol`.
    fn is_near_zero(self, tol: f64) -> bool {
        self.modulus() <= tol
    }
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Numerical;
    /// Compute dot(x, y), conjugating `x`.
    fn dot(&self, x: &V, y: &V) -> Self::Scalar;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Uniform row count for vectors and matrices.
pub trait Indexing {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
}
