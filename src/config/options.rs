//! Tolerances and elimination options.
//!
//! This module provides the `DELTA` tolerance shared by every near-zero check
//! (triangularity, singular pivots, linear dependence) and the
//! `EliminationOptions` struct used to select between row-echelon and reduced
//! row-echelon output and to toggle partial pivoting.

use bitflags::bitflags;

/// Moduli at or below this value are treated as zero.
pub const DELTA: f64 = 1e-10;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct EliminationFlags: u32 {
        /// Pick the largest-modulus pivot in each column.
        const PARTIAL_PIVOT = 0b0001;
        /// Continue to reduced row-echelon form (Gauss-Jordan).
        const REDUCED       = 0b0010;
        /// Scale each pivot row so its leading entry is one.
        const NORMALIZE     = 0b0100;
        const GAUSS_JORDAN  = Self::PARTIAL_PIVOT.bits() | Self::REDUCED.bits() | Self::NORMALIZE.bits();
    }
}

/// Elimination mode & tolerance.
#[derive(Copy, Clone, Debug)]
pub struct EliminationOptions {
    pub flags: EliminationFlags,

    /// Pivots with modulus at or below `tol` are treated as zero
    pub tol: f64,
}

impl EliminationOptions {
    pub fn new(flags: EliminationFlags) -> Self {
        Self { flags, tol: DELTA }
    }

    /// Plain Gaussian elimination to row-echelon form with partial pivoting.
    pub fn row_echelon() -> Self {
        Self::new(EliminationFlags::PARTIAL_PIVOT)
    }

    /// Full Gauss-Jordan reduction to reduced row-echelon form.
    pub fn reduced() -> Self {
        Self::new(EliminationFlags::GAUSS_JORDAN)
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn pivoting(&self) -> bool {
        self.flags.contains(EliminationFlags::PARTIAL_PIVOT)
    }

    pub fn reduce(&self) -> bool {
        self.flags.contains(EliminationFlags::REDUCED)
    }

    pub fn normalize(&self) -> bool {
        self.flags.contains(EliminationFlags::NORMALIZE)
    }
}

impl Default for EliminationOptions {
    fn default() -> Self {
        Self::reduced()
    }
}
