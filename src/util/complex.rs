//! Display helpers for complex roots

use num::Complex;

use crate::RealScalar;

/// Compact `re+i im` formatting, a zero imaginary part prints as a plain real
pub(crate) fn complex_fmt<T: RealScalar>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if *i < T::zero() {
        format!("({r}-i{})", i.abs())
    } else {
        format!("({r}+i{i})")
    }
}
