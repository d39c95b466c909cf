use std::fmt::Display;

use num::Complex;

use crate::RealScalar;

mod deflate;
pub mod roots;

/// Coefficients of `a x^4 + b x^3 + c x^2 + d x + k`.
///
/// This is a plain value type, it is copied into every solver call. The
/// leading coefficient may be zero, in which case the polynomial is of lower
/// degree (see [`Quartic::degree`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quartic<T: RealScalar> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub k: T,
}

/// Coefficients of `b x^3 + c x^2 + d x + k`.
///
/// Named after the coefficients they take the place of in a [`Quartic`] with
/// `a == 0`, so that the cubic obtained by deflation lines up with them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic<T: RealScalar> {
    pub b: T,
    pub c: T,
    pub d: T,
    pub k: T,
}

impl<T: RealScalar> Quartic<T> {
    #[must_use]
    pub const fn new(a: T, b: T, c: T, d: T, k: T) -> Self {
        Self { a, b, c, d, k }
    }

    /// Coefficients in descending degree
    #[must_use]
    pub fn coeffs(&self) -> [T; 5] {
        [self.a, self.b, self.c, self.d, self.k]
    }

    /// Evaluate the polynomial at `x` (Horner's scheme)
    #[inline]
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        (((self.a * x + self.b) * x + self.c) * x + self.d) * x + self.k
    }

    /// Evaluate the first derivative at `x`
    #[inline]
    #[must_use]
    pub fn eval_diff(&self, x: T) -> T {
        let two = T::from_u8_const(2);
        let three = T::from_u8_const(3);
        let four = T::from_u8_const(4);
        ((four * self.a * x + three * self.b) * x + two * self.c) * x + self.d
    }

    /// Degree of the polynomial, ignoring leading zero coefficients.
    ///
    /// Returns [`None`] for the zero polynomial, which has no degree.
    ///
    /// # Examples
    /// ```
    /// use rust_solve::Quartic;
    ///
    /// assert_eq!(Quartic::new(1.0, 0.0, 0.0, 0.0, -1.0).degree(), Some(4));
    /// assert_eq!(Quartic::new(0.0, 0.0, 2.0, 1.0, 0.0).degree(), Some(2));
    /// assert_eq!(Quartic::new(0.0, 0.0, 0.0, 0.0, 3.0).degree(), Some(0));
    /// assert_eq!(Quartic::new(0.0, 0.0, 0.0, 0.0, 0.0).degree(), None);
    /// ```
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs()
            .iter()
            .position(|c| !c.is_zero())
            .map(|first| 4 - first)
    }
}

impl<T: RealScalar> Cubic<T> {
    #[must_use]
    pub const fn new(b: T, c: T, d: T, k: T) -> Self {
        Self { b, c, d, k }
    }

    /// Coefficients in descending degree
    #[must_use]
    pub fn coeffs(&self) -> [T; 4] {
        [self.b, self.c, self.d, self.k]
    }

    #[inline]
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        ((self.b * x + self.c) * x + self.d) * x + self.k
    }

    /// Evaluate at a complex point, used to check complex roots.
    #[must_use]
    pub fn eval_complex(&self, z: Complex<T>) -> Complex<T> {
        ((z.scale(self.b) + self.c) * z + self.d) * z + self.k
    }
}

impl<T: RealScalar> Display for Quartic<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}*x^4 + {}*x^3 + {}*x^2 + {}*x + {}",
            self.a, self.b, self.c, self.d, self.k
        )
    }
}

impl<T: RealScalar> Display for Cubic<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}*x^3 + {}*x^2 + {}*x + {}",
            self.b, self.c, self.d, self.k
        )
    }
}
