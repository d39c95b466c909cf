use std::fmt::Display;

use itertools::Itertools;
use num::Complex;

use crate::{
    util::{complex::complex_fmt, float::rounded_key},
    Cubic, Quartic, RealScalar,
};

mod cardano;
pub use cardano::cardano;
mod newton;
pub use newton::{newton_single, StartPoints};
mod vieta;
pub use vieta::vieta;

/// Number of decimal digits roots are rounded to by [`dedup_roots`]
const DEDUP_DECIMALS: i32 = 4;

/// A root of a real polynomial, either real or complex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Root<T: RealScalar> {
    Real(T),
    Complex(Complex<T>),
}

impl<T: RealScalar> Root<T> {
    /// Real part
    #[must_use]
    pub fn re(&self) -> T {
        match self {
            Self::Real(x) => *x,
            Self::Complex(z) => z.re,
        }
    }

    /// Imaginary part, zero for real roots
    #[must_use]
    pub fn im(&self) -> T {
        match self {
            Self::Real(_) => T::zero(),
            Self::Complex(z) => z.im,
        }
    }

    /// Whether this root was produced as a real root.
    ///
    /// A complex root with a zero imaginary part is still not real, use
    /// [`Root::im`] if you need to check the value instead of the kind.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }

    #[must_use]
    pub fn to_complex(&self) -> Complex<T> {
        match self {
            Self::Real(x) => Complex::new(*x, T::zero()),
            Self::Complex(z) => *z,
        }
    }

    /// Rounded representation used to detect duplicates
    fn dedup_key(&self) -> (u64, Option<u64>) {
        match self {
            Self::Real(x) => (rounded_key(*x, DEDUP_DECIMALS), None),
            Self::Complex(z) => (
                rounded_key(z.re, DEDUP_DECIMALS),
                Some(rounded_key(z.im, DEDUP_DECIMALS)),
            ),
        }
    }
}

impl<T: RealScalar> From<T> for Root<T> {
    fn from(value: T) -> Self {
        Self::Real(value)
    }
}

impl<T: RealScalar> From<Complex<T>> for Root<T> {
    fn from(value: Complex<T>) -> Self {
        Self::Complex(value)
    }
}

impl<T: RealScalar> Display for Root<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(x) => write!(f, "{x}"),
            Self::Complex(z) => write!(f, "{}", complex_fmt(z)),
        }
    }
}

/// Outcome of solving `a x^4 + b x^3 + c x^2 + d x + k = 0`.
#[derive(Clone, Debug, PartialEq)]
pub enum Solutions<T: RealScalar> {
    /// The roots, one per degree of the polynomial (so repeated roots are
    /// repeated), in the order they were found.
    Roots(Vec<Root<T>>),

    /// All coefficients are zero, every real number is a solution.
    AllReals,

    /// All coefficients but the constant term are zero, there is no solution.
    NoSolution,
}

impl<T: RealScalar> Solutions<T> {
    /// The roots, empty for [`Solutions::AllReals`] and [`Solutions::NoSolution`].
    #[must_use]
    pub fn roots(&self) -> &[Root<T>] {
        match self {
            Self::Roots(roots) => roots,
            Self::AllReals | Self::NoSolution => &[],
        }
    }

    /// Collapse repeated roots, see [`dedup_roots`].
    #[must_use]
    pub fn dedup(self) -> Self {
        match self {
            Self::Roots(roots) => Self::Roots(dedup_roots(&roots)),
            other => other,
        }
    }
}

/// Remove duplicate roots, keeping the first occurrence of each.
///
/// Two roots are duplicates if they are of the same kind (real or complex)
/// and are equal after rounding their parts to four decimal places. Use this
/// to report each root once rather than once per multiplicity.
///
/// ```
/// use rust_solve::{dedup_roots, Root};
///
/// let roots = [Root::Real(2.0), Root::Real(-1.0), Root::Real(2.000_01)];
/// assert_eq!(dedup_roots(&roots), vec![Root::Real(2.0), Root::Real(-1.0)]);
/// ```
#[must_use]
pub fn dedup_roots<T: RealScalar>(roots: &[Root<T>]) -> Vec<Root<T>> {
    roots
        .iter()
        .copied()
        .unique_by(Root::dedup_key)
        .collect_vec()
}

/// Solve `a x^4 + b x^3 + c x^2 + d x + k = 0`.
///
/// The degree is detected from the leading non-zero coefficient:
/// - degree 4: one real root is found with [`newton_single`], divided out
///   with [`Quartic::deflate`], and the remaining cubic is solved with
///   [`cardano`];
/// - degree 3: [`cardano`];
/// - degree 2: [`vieta`];
/// - degree 1: `x = -k / d`;
/// - degree 0: [`Solutions::NoSolution`], or [`Solutions::AllReals`] if `k`
///   is zero as well.
///
/// Roots are not de-duplicated, use [`Solutions::dedup`] for that.
///
/// # Panics
#[doc = crate::util::doc_macros::panic_t_from_f64!()]
pub fn solve_quartic<T: RealScalar>(a: T, b: T, c: T, d: T, k: T) -> Solutions<T> {
    let poly = Quartic::new(a, b, c, d, k);
    log::trace!("solving {{poly: \"{poly}\"}}");

    if !a.is_zero() {
        let root = newton_single(poly, None, None, None, None);
        let cubic = poly.deflate(root);
        log::debug!("quartic {{first_root: {root}, deflated: \"{cubic}\"}}");
        let mut roots = vec![Root::Real(root)];
        roots.extend(cardano(cubic));
        return Solutions::Roots(roots);
    }

    if !b.is_zero() {
        log::debug!("cubic, solving with cardano");
        return Solutions::Roots(cardano(Cubic::new(b, c, d, k)).to_vec());
    }

    if !c.is_zero() {
        log::debug!("quadratic, solving with vieta");
        return Solutions::Roots(vieta(c, d, k).to_vec());
    }

    if !d.is_zero() {
        log::debug!("linear");
        return Solutions::Roots(vec![Root::Real(-k / d)]);
    }

    if k.is_zero() {
        log::debug!("all coefficients are zero, any number is a solution");
        Solutions::AllReals
    } else {
        log::debug!("non-zero constant, no solution");
        Solutions::NoSolution
    }
}
