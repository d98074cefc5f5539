//! Decompositions and direct solver interfaces.

/// Common interface for any direct solver.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b, returning x.
    fn solve(&mut self, a: &M, b: &V) -> Result<V, Self::Error>;
}

pub mod gauss_jordan;
pub mod qr;
pub mod triangular;

pub use qr::QrDecomposition;

pub mod direct;
pub use direct::{GaussJordanSolver, QrSolver, TriangularSolver};
