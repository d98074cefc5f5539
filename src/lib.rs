//! matlite: dense vectors and matrices over real and complex scalars
//!
//! This crate provides row/column-oriented vectors and flat-storage matrices
//! generic over a [`Numerical`] scalar, with shape validation, elementwise
//! algebra, naive and Strassen multiplication, Gram-Schmidt QR, triangular
//! substitution and Gauss-Jordan elimination. Every fallible operation returns a
//! structured [`LinalgError`] carrying a stable status code.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use crate::config::{DELTA, EliminationFlags, EliminationOptions};
pub use crate::core::{Indexing, InnerProduct, MatVec, Numerical};
pub use crate::error::{ErrorKind, LinalgError, MatrixStatus, Result};
pub use crate::matrix::{Entry, Matrix, Orientation, ShapeClass, Vector};
pub use crate::scalar::{Complex, Complex32, Complex64};
pub use crate::solver::{GaussJordanSolver, LinearSolver, QrDecomposition, QrSolver, TriangularSolver};
pub use crate::utils::{is_power_of_two, next_power_of_two};
