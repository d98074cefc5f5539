//! Scalar types implementing [`Numerical`](crate::core::traits::Numerical).

pub mod complex;
pub mod real;

pub use complex::{Complex, Complex32, Complex64};
