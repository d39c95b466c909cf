//! floating point utilities

use crate::RealScalar;

/// Real cube root that keeps the sign of its argument.
///
/// Computed as `|x|^(1/3)` with the sign of `x` restored, so negative inputs
/// stay on the real branch instead of going through the principal complex
/// cube root.
pub(crate) fn cbrt_real<T: RealScalar>(x: T) -> T {
    let third = T::one() / T::from_u8_const(3);
    if x >= T::zero() {
        x.powf(third)
    } else {
        -(x.abs().powf(third))
    }
}

/// Key used to compare floats after rounding them to `decimals` digits.
///
/// Negative zero maps to the same key as positive zero. NaN maps to the key of
/// NaN, which is only equal to itself.
pub(crate) fn rounded_key<T: RealScalar>(x: T, decimals: i32) -> u64 {
    let scale = T::from_u8_const(10).powi(decimals);
    // adding zero turns -0.0 into 0.0
    let rounded = (x * scale).round() + T::zero();
    rounded.to_f64().map_or(u64::MAX, f64::to_bits)
}

/// Makes a degenerate float normal again by either clamping it or replacing
/// NaN with zero.
pub(crate) fn f64_make_normal(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }

    if x.is_infinite() && x.is_sign_positive() {
        return f64::MAX;
    }

    if x.is_infinite() && x.is_sign_negative() {
        return f64::MIN;
    }

    if x.is_subnormal() {
        return 0.0;
    }

    x
}

#[cfg(test)]
mod test {
    use super::{cbrt_real, rounded_key};

    #[test]
    fn cbrt_negative() {
        assert!((cbrt_real(-8.0f64) - -2.0).abs() < 1E-12);
        assert!((cbrt_real(27.0f64) - 3.0).abs() < 1E-12);
        assert!(cbrt_real(0.0f64).abs() < f64::EPSILON);
    }

    #[test]
    fn rounding_key() {
        assert_eq!(rounded_key(1.000_01f64, 4), rounded_key(1.0, 4));
        assert_eq!(rounded_key(-0.000_01f64, 4), rounded_key(0.0, 4));
        assert_ne!(rounded_key(1.0001f64, 4), rounded_key(1.0, 4));
    }
}
