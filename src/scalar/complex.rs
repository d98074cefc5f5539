//! Complex scalars.
//!
//! Arithmetic follows the usual component-wise definitions:
//! - Addition: `(a+bi) + (c+di) = (a+c) + (b+d)i`
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
//! - Division: `(a+bi)/(c+di) = (a+bi)*conj(c+di)/|c+di|²`
//!
//! The square root is the principal branch computed from the modulus,
//! `re = sqrt((A+|z|)/2)`, `im = sign(B)*sqrt((-A+|z|)/2)`, where a zero
//! imaginary part counts as positive so that `sqrt(-4) = 2i`.

use crate::core::traits::Numerical;
use num_traits::Float;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A complex number with real and imaginary parts of type `F`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex<F> {
    /// Real part
    pub re: F,
    /// Imaginary part
    pub im: F,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<F: Float> Complex<F> {
    #[inline]
    pub const fn new(re: F, im: F) -> Self {
        Self { re, im }
    }

    /// The imaginary unit.
    #[inline]
    pub fn i() -> Self {
        Self::new(F::zero(), F::one())
    }

    /// |z| = sqrt(re² + im²), via `hypot` to avoid overflow.
    #[inline]
    pub fn magnitude(self) -> F {
        self.re.hypot(self.im)
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.re * self.re + self.im * self.im
    }
}

impl<F: Float> Add for Complex<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<F: Float> Sub for Complex<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<F: Float> Mul for Complex<F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<F: Float> Div for Complex<F> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.magnitude_squared();
        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

impl<F: Float> Neg for Complex<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Complex<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < F::zero() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl<F> Numerical for Complex<F>
where
    F: Float + Numerical,
{
    #[inline]
    fn zero_value() -> Self {
        Self::new(F::zero(), F::zero())
    }

    #[inline]
    fn one_value() -> Self {
        Self::new(F::one(), F::zero())
    }

    fn sqrt(self) -> Self {
        let two = F::one() + F::one();
        let abs = self.magnitude();
        let re = Float::sqrt((self.re + abs) / two);
        let im = Float::sqrt((abs - self.re) / two);
        if self.im < F::zero() {
            Self::new(re, -im)
        } else {
            Self::new(re, im)
        }
    }

    #[inline]
    fn from_integral(n: f64) -> Self {
        Self::new(F::from_integral(n), F::zero())
    }

    /// Returns the real component; the imaginary part is discarded.
    #[inline]
    fn to_integral(self) -> f64 {
        self.re.to_integral()
    }

    #[inline]
    fn sign_operator(self) -> Self {
        Self::new(self.re.sign_operator(), F::zero())
    }

    #[inline]
    fn modulus(self) -> f64 {
        self.magnitude().to_integral()
    }

    #[inline]
    fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Float::is_finite(self.re) && Float::is_finite(self.im)
    }

    fn round_to(self, decimals: u32) -> Self {
        Self::new(self.re.round_to(decimals), self.im.round_to(decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn arithmetic_matches_definitions() {
        let z = Complex64::new(3.0, 4.0);
        let w = Complex64::new(1.0, 2.0);
        assert_eq!(z + w, Complex64::new(4.0, 6.0));
        assert_eq!(z - w, Complex64::new(2.0, 2.0));
        assert_eq!(z * w, Complex64::new(-5.0, 10.0));
        let q = (z * w) / w;
        assert_abs_diff_eq!(q.re, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.im, 4.0, epsilon = 1e-12);
        assert_eq!(z.modulus(), 5.0);
    }

    #[test]
    fn sqrt_is_principal_branch() {
        let r = Complex64::new(-4.0, 0.0).sqrt();
        assert_abs_diff_eq!(r.re, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.im, 2.0, epsilon = 1e-12);

        let z = Complex64::new(3.0, -4.0);
        let s = z.sqrt();
        assert_abs_diff_eq!(s.re, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.im, -1.0, epsilon = 1e-12);
        let back = s * s;
        assert_abs_diff_eq!(back.re, z.re, epsilon = 1e-12);
        assert_abs_diff_eq!(back.im, z.im, epsilon = 1e-12);
    }

    #[test]
    fn round_to_keeps_components_at_large_precision() {
        let z = Complex64::new(1.25, -0.5);
        assert_eq!(z.round_to(1), Complex64::new(1.3, -0.5));
        assert_eq!(z.round_to(500), z);
    }

    #[test]
    fn to_integral_projects_real_part() {
        assert_eq!(Complex64::new(2.5, -7.0).to_integral(), 2.5);
        assert_eq!(Complex64::from_integral(3.0), Complex64::new(3.0, 0.0));
        assert_eq!(Complex64::new(-1.0, 9.0).sign_operator(), Complex64::new(-1.0, 0.0));
    }

    #[test]
    fn display_shows_sign_of_imaginary_part() {
        assert_eq!(Complex64::new(1.0, -2.0).to_string(), "1-2i");
        assert_eq!(Complex64::new(1.0, 2.0).to_string(), "1+2i");
    }
}
