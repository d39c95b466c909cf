use super::{Cubic, Quartic};
use crate::RealScalar;

impl<T: RealScalar> Quartic<T> {
    /// Divide by `(x - root)` with synthetic division, returning the cubic
    /// quotient.
    ///
    /// The remainder is discarded without being checked, so the quotient is
    /// only as good as the root: if `root` is not a root, the cubic is the
    /// quotient of a division that does not go evenly.
    ///
    /// # Examples
    /// ```
    /// use rust_solve::{Cubic, Quartic};
    ///
    /// // (x - 1)(x^3 + 2x^2 + 3x + 4)
    /// let p = Quartic::new(1.0, 1.0, 1.0, 1.0, -4.0);
    /// assert_eq!(p.deflate(1.0), Cubic::new(1.0, 2.0, 3.0, 4.0));
    /// ```
    #[must_use]
    pub fn deflate(&self, root: T) -> Cubic<T> {
        let b = self.a;
        let c = self.b + b * root;
        let d = self.c + c * root;
        let k = self.d + d * root;
        Cubic { b, c, d, k }
    }

    /// Remainder of the division performed by [`Quartic::deflate`], i.e. the
    /// value of the polynomial at `root`.
    #[must_use]
    pub fn deflate_remainder(&self, root: T) -> T {
        self.k + self.deflate(root).k * root
    }
}

impl<T: RealScalar> Cubic<T> {
    /// Multiply by `(x - root)`, the inverse of [`Quartic::deflate`].
    #[must_use]
    pub fn inflate(&self, root: T) -> Quartic<T> {
        Quartic {
            a: self.b,
            b: self.c - self.b * root,
            c: self.d - self.c * root,
            d: self.k - self.d * root,
            k: -self.k * root,
        }
    }
}
