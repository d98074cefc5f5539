//! Matrix module: dense matrices, oriented vectors and their builders.

pub mod dense;
pub mod factory;
pub mod strassen;
pub mod vector;

pub use dense::{Matrix, ShapeClass};
pub use strassen::STRASSEN_LEAF;
pub use vector::{Entry, Orientation, Vector};
