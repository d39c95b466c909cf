use num::Complex;

use super::Root;
use crate::{
    util::{
        doc_macros::{panic_t_from_f64, precondition_leading_nonzero},
        float::cbrt_real,
    },
    Cubic, RealScalar,
};

/// Threshold below which the discriminant and `R` count as zero
const ZERO_THRESHOLD: f64 = 1E-10;

/// Solve `b x^3 + c x^2 + d x + k = 0` with Cardano's formula.
///
/// The cubic is made monic and depressed with `x = t - c / (3b)`, which
/// gives `t^3 + p t + q = 0`. With `Q = p / 3`, `R = q / 2` and the
/// discriminant `D = Q^3 + R^2`:
/// - `|D| < 1E-10`: repeated roots. If `|R| < 1E-10` as well, a triple root,
///   otherwise a simple root and a double root (both real);
/// - `D > 0`: one real root followed by a complex conjugate pair, positive
///   imaginary part first;
/// - `D < 0`: three distinct real roots, from the trigonometric form.
///
/// Cube roots of negative numbers are taken on the real branch.
///
/// # Examples
/// ```
/// use rust_solve::{cardano, Cubic};
///
/// let roots = cardano(Cubic::new(1.0_f64, 0.0, 0.0, -8.0));
/// assert!(roots[0].is_real());
/// assert!((roots[0].re() - 2.0).abs() < 1E-12);
/// assert!(roots[1].im() > 0.0);
/// assert!(roots[2].im() < 0.0);
/// ```
///
/// # Panics
#[doc = precondition_leading_nonzero!("b")]
#[doc = panic_t_from_f64!()]
#[must_use]
pub fn cardano<T: RealScalar>(cubic: Cubic<T>) -> [Root<T>; 3] {
    debug_assert!(
        !cubic.b.is_zero(),
        "leading coefficient of a cubic must be non-zero"
    );

    let two = T::from_u8_const(2);
    let three = T::from_u8_const(3);
    let twenty_seven = T::from_u8_const(27);
    let threshold = T::from_f64_const(ZERO_THRESHOLD);

    // monic form x^3 + a2 x^2 + a1 x + a0
    let a2 = cubic.c / cubic.b;
    let a1 = cubic.d / cubic.b;
    let a0 = cubic.k / cubic.b;

    // depressed form t^3 + p t + q, with x = t - a2 / 3
    let shift = a2 / three;
    let p = a1 - a2 * a2 / three;
    let q = two * a2.powi(3) / twenty_seven - a1 * a2 / three + a0;

    let big_q = p / three;
    let big_r = q / two;
    let discriminant = big_q.powi(3) + big_r * big_r;

    if discriminant.abs() < threshold {
        if big_r.abs() < threshold {
            log::debug!("triple root {{discriminant: {discriminant}}}");
            let root = Root::Real(-shift);
            return [root, root, root];
        }
        log::debug!("double root {{discriminant: {discriminant}}}");
        let s = cbrt_real(-big_r);
        let double = Root::Real(-s - shift);
        return [Root::Real(two * s - shift), double, double];
    }

    if discriminant > T::zero() {
        log::debug!("one real root and a complex pair {{discriminant: {discriminant}}}");
        let sqrt_d = discriminant.sqrt();
        let s = cbrt_real(-big_r + sqrt_d);
        let t = cbrt_real(-big_r - sqrt_d);
        let re = -(s + t) / two - shift;
        let im = three.sqrt() * (s - t) / two;
        return [
            Root::Real(s + t - shift),
            Root::Complex(Complex::new(re, im)),
            Root::Complex(Complex::new(re, -im)),
        ];
    }

    log::debug!("three real roots {{discriminant: {discriminant}}}");
    let theta = (-big_r / (-big_q.powi(3)).sqrt()).acos();
    let amplitude = two * (-big_q).sqrt();
    let third_turn = two * T::PI();
    [T::zero(), third_turn, two * third_turn]
        .map(|offset| Root::Real(amplitude * ((theta + offset) / three).cos() - shift))
}

#[cfg(test)]
mod test {
    use super::cardano;
    use crate::{Cubic, Root, __testing::check_roots};

    fn assert_roots_of(cubic: Cubic<f64>, roots: &[Root<f64>], tol: f64) {
        for r in roots {
            let z = r.to_complex();
            assert!(cubic.eval_complex(z).norm() < tol, "{r} is not a root of {cubic}");
        }
    }

    #[test]
    fn x3_minus_1() {
        let roots = cardano(Cubic::new(1.0_f64, 0.0, 0.0, -1.0));
        assert!(roots.iter().any(|r| r.is_real() && (r.re() - 1.0).abs() < 1E-9));
        assert_roots_of(Cubic::new(1.0_f64, 0.0, 0.0, -1.0), &roots, 1E-9);
    }

    #[test]
    fn three_real_roots() {
        let roots = cardano(Cubic::new(1.0_f64, -6.0, 11.0, -6.0));
        assert!(roots.iter().all(Root::is_real));
        assert!(check_roots(
            roots.iter().map(Root::to_complex).collect(),
            vec![complex!(1.0), complex!(2.0), complex!(3.0)],
            1E-6
        ));
    }

    #[test]
    fn x3_minus_8() {
        let roots = cardano(Cubic::new(1.0_f64, 0.0, 0.0, -8.0));
        assert!((roots[0].re() - 2.0).abs() < 1E-9);
        assert!(roots[0].is_real());
        assert!(roots[1].im().abs() > 0.0);
        assert!((roots[1].im() + roots[2].im()).abs() < 1E-12);
        assert!((roots[1].re() - roots[2].re()).abs() < 1E-12);
        assert_roots_of(Cubic::new(1.0_f64, 0.0, 0.0, -8.0), &roots, 1E-9);
    }

    #[test]
    fn x3_plus_1() {
        let roots = cardano(Cubic::new(1.0_f64, 0.0, 0.0, 1.0));
        assert!(roots
            .iter()
            .any(|r| r.is_real() && (r.re() - -1.0).abs() < 1E-9));
        assert_roots_of(Cubic::new(1.0_f64, 0.0, 0.0, 1.0), &roots, 1E-9);
    }

    #[test]
    fn triple_root() {
        // (x - 2)^3
        let roots = cardano(Cubic::new(1.0_f64, -6.0, 12.0, -8.0));
        for r in roots {
            assert!(r.is_real());
            assert!((r.re() - 2.0).abs() < 1E-9);
        }
    }

    #[test]
    fn double_root() {
        // (x - 1)^2 (x + 2)
        let roots = cardano(Cubic::new(1.0_f64, 0.0, -3.0, 2.0));
        assert!(roots.iter().all(Root::is_real));
        assert!((roots[0].re() - -2.0).abs() < 1E-9);
        assert!((roots[1].re() - 1.0).abs() < 1E-9);
        assert_eq!(roots[1], roots[2]);
    }

    #[test]
    fn non_monic() {
        // -2 (x - 0.5)(x + 1)(x - 4)
        let cubic = Cubic::new(-2.0_f64, 7.0, 5.0, -4.0);
        let roots = cardano(cubic);
        assert!(check_roots(
            roots.iter().map(Root::to_complex).collect(),
            vec![complex!(0.5), complex!(-1.0), complex!(4.0)],
            1E-9
        ));
    }

    #[test]
    fn zero_roots() {
        // x^3 + x^2 = x^2 (x + 1)
        let roots = cardano(Cubic::new(1.0_f64, 1.0, 0.0, 0.0));
        assert_roots_of(Cubic::new(1.0_f64, 1.0, 0.0, 0.0), &roots, 1E-9);
        assert!(check_roots(
            roots.iter().map(Root::to_complex).collect(),
            vec![complex!(0.0), complex!(0.0), complex!(-1.0)],
            1E-9
        ));
    }

    #[test]
    fn single_precision() {
        let roots = cardano(Cubic::new(1.0f32, -6.0, 11.0, -6.0));
        let mut re: Vec<f32> = roots.iter().map(Root::re).collect();
        re.sort_by(f32::total_cmp);
        for (got, expected) in re.into_iter().zip([1.0, 2.0, 3.0]) {
            assert!((got - expected).abs() < 1E-3);
        }
    }
}
