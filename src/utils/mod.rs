//! Sizing helpers.

pub mod pow2;

pub use pow2::{is_power_of_two, next_power_of_two};
