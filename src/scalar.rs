use std::fmt::{Debug, Display};

use num::{traits::FloatConst, Float, FromPrimitive};

/// Real floating point numbers the solvers can work with.
///
/// Implemented for [`f32`] and [`f64`]. Tolerances are specified for `f64`
/// and converted with [`FromPrimitive::from_f64`], so the thresholds are
/// effectively looser for `f32`.
pub trait RealScalar: Float + FloatConst + FromPrimitive + Debug + Display + 'static {
    /// Convert an `f64` constant to `Self`.
    ///
    /// # Panics
    #[doc = crate::util::doc_macros::panic_t_from_f64!()]
    #[must_use]
    fn from_f64_const(x: f64) -> Self {
        Self::from_f64(x).expect("overflow")
    }

    /// Convert a small integer constant to `Self`.
    ///
    /// # Panics
    #[doc = crate::util::doc_macros::panic_t_from_int!("u8")]
    #[must_use]
    fn from_u8_const(x: u8) -> Self {
        Self::from_u8(x).expect("overflow")
    }
}

impl RealScalar for f32 {}
impl RealScalar for f64 {}
