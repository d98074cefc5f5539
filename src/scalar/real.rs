//! `Numerical` for the primitive floats.

use crate::core::traits::Numerical;
use num_traits::Float;

macro_rules! impl_real {
    ($float:ty) => {
        impl Numerical for $float {
            #[inline]
            fn zero_value() -> Self {
                0.0
            }

            #[inline]
            fn one_value() -> Self {
                1.0
            }

            #[inline]
            fn sqrt(self) -> Self {
                Float::sqrt(self)
            }

            #[inline]
            fn from_integral(n: f64) -> Self {
                n as $float
            }

            #[inline]
            fn to_integral(self) -> f64 {
                self as f64
            }

            #[inline]
            fn sign_operator(self) -> Self {
                if self > 0.0 {
                    1.0
                } else if self < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }

            #[inline]
            fn modulus(self) -> f64 {
                Float::abs(self) as f64
            }

            #[inline]
            fn conj(self) -> Self {
                self
            }

            #[inline]
            fn is_finite(self) -> bool {
                Float::is_finite(self)
            }

            /// Values already exact at `decimals` digits, where `10^decimals` or the
            /// scaled value overflows, come back unchanged.
            fn round_to(self, decimals: u32) -> Self {
                let Ok(exp) = i32::try_from(decimals) else {
                    return self;
                };
                let factor = <$float as Float>::powi(10.0, exp);
                let scaled = self * factor;
                if !Float::is_finite(factor) || !Float::is_finite(scaled) {
                    return self;
                }
                Float::round(scaled) / factor
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_operator_has_three_values() {
        assert_eq!((-3.5f64).sign_operator(), -1.0);
        assert_eq!(0.0f64.sign_operator(), 0.0);
        assert_eq!(2.0f32.sign_operator(), 1.0);
    }

    #[test]
    fn round_to_keeps_requested_digits() {
        assert_eq!(1.23456f64.round_to(2), 1.23);
        assert_eq!((-0.5f64).round_to(0), -1.0);
    }

    #[test]
    fn round_to_saturates_at_large_precision() {
        assert_eq!(1.5f64.round_to(400), 1.5);
        assert_eq!(0.25f32.round_to(39), 0.25);
        assert_eq!(1e300f64.round_to(20), 1e300);
        assert_eq!((-2.75f64).round_to(u32::MAX), -2.75);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(!Numerical::is_finite(f64::NAN));
        assert!(!Numerical::is_finite(f64::INFINITY));
        assert!(Numerical::is_finite(1.0f64));
    }
}
