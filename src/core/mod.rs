//! Core traits and adapters.

pub mod traits;
pub mod wrappers;

pub use traits::{Indexing, InnerProduct, MatVec, Numerical};
