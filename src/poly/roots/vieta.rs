use num::Complex;

use super::Root;
use crate::{
    util::doc_macros::{panic_t_from_int, precondition_leading_nonzero},
    RealScalar,
};

/// Solve `c x^2 + d x + k = 0` with the quadratic formula.
///
/// Both roots are real when the discriminant `d^2 - 4ck` is non-negative
/// (a zero discriminant gives the same root twice), otherwise they are a
/// complex conjugate pair. The root with `+sqrt(discriminant)` comes first.
///
/// # Examples
/// ```
/// use rust_solve::{vieta, Root};
///
/// assert_eq!(vieta(1.0, 0.0, -4.0), [Root::Real(2.0), Root::Real(-2.0)]);
///
/// let [z1, z2] = vieta(1.0_f64, 0.0, 1.0);
/// assert!((z1.im() - 1.0).abs() < 1E-9);
/// assert!((z2.im() + 1.0).abs() < 1E-9);
/// ```
///
/// # Panics
#[doc = precondition_leading_nonzero!("c")]
#[doc = panic_t_from_int!("u8")]
#[must_use]
pub fn vieta<T: RealScalar>(c: T, d: T, k: T) -> [Root<T>; 2] {
    debug_assert!(
        !c.is_zero(),
        "leading coefficient of a quadratic must be non-zero"
    );

    let two = T::from_u8_const(2);
    let four = T::from_u8_const(4);
    let discriminant = d * d - four * c * k;
    let denom = two * c;

    if discriminant < T::zero() {
        let sqrt_disc = Complex::new(discriminant, T::zero()).sqrt();
        let x1 = (sqrt_disc - d) / denom;
        let x2 = (-sqrt_disc - d) / denom;
        return [Root::Complex(x1), Root::Complex(x2)];
    }

    let sqrt_disc = discriminant.sqrt();
    [
        Root::Real((sqrt_disc - d) / denom),
        Root::Real((-sqrt_disc - d) / denom),
    ]
}
