//! Macros for reducing doc comment boilerplate.

/// Documents `from_f64` panics.
macro_rules! panic_t_from_f64 {
    () => {
        r"If `T` is any primitive type, this function does not panic. However, if `T` does not implement [`num::FromPrimitive::from_f64`] correctly, this function might panic under certain circumstances (casting of extreme values, usually)

"
    };
}
pub(crate) use panic_t_from_f64;

/// Documents generic [`num::FromPrimitive`] panics.
///
/// You must provide a string containing the integer type with the largest range
/// of values that should be supported.
macro_rules! panic_t_from_int {
    ($ty_str:expr) => {
        concat!(r"If `T` is `f32` or `f64`, this function does not panic. However, if `T` cannot represent all primitive integers smaller than [`", $ty_str, r"::MAX`], this might panic under certain circumstances (casting of extreme values, usually)

")
    };
}
pub(crate) use panic_t_from_int;

/// Documents the best-effort behavior of the iteration-capped solvers.
macro_rules! best_effort_no_converge {
    () => {
        r"Running out of iterations is not an error: the best approximation found so far is returned, and a warning is logged. Check the returned iteration count (or `converged` flag) if you need to tell the two apart.

"
    };
}
pub(crate) use best_effort_no_converge;

/// Documents that a precondition is only checked in debug builds.
macro_rules! precondition_leading_nonzero {
    ($coeff:expr) => {
        concat!(r"The leading coefficient `", $coeff, r"` must be non-zero. This is only checked with a debug assertion, in release builds a zero leading coefficient produces NaN or infinite roots.

")
    };
}
pub(crate) use precondition_leading_nonzero;
