//! Crate-wide tolerances and algorithm options.

pub mod options;

pub use options::{DELTA, EliminationFlags, EliminationOptions};
