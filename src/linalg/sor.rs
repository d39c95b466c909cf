use super::LinearSolution;
use crate::{
    util::doc_macros::{best_effort_no_converge, panic_t_from_f64},
    RealScalar,
};

/// Default relaxation factor
const DEFAULT_OMEGA: f64 = 1.25;

/// Default stopping tolerance on the change between two sweeps
const DEFAULT_EPSILON: f64 = 1E-6;

/// Default maximum number of sweeps
const DEFAULT_MAX_ITER: usize = 1000;

/// Solve `A x = b` with successive over-relaxation.
///
/// Each sweep updates the unknowns in order, blending the Gauss-Seidel value
/// with the previous one: `x[i] = (1 - omega) x_old[i] + omega x_gs[i]`. The
/// iteration stops once the largest change of an unknown during a sweep is
/// smaller than `epsilon`. The reported iteration count is the number of
/// sweeps performed, including the final one.
///
/// This is an alternative to [`super::relaxation`], with a fixed sweep order
/// instead of a greedy choice of equation. It needs a non-zero diagonal and
/// converges for diagonally dominant systems when `0 < omega < 2`.
///
/// Defaults: `omega = 1.25`, `epsilon = 1E-6`, `max_iter = 1000`.
///
#[doc = best_effort_no_converge!()]
///
/// # Panics
/// If `a` is smaller than `b.len()` in either dimension.
///
#[doc = panic_t_from_f64!()]
pub fn sor<T: RealScalar>(
    a: &[Vec<T>],
    b: &[T],
    omega: Option<T>,
    epsilon: Option<T>,
    max_iter: Option<usize>,
) -> LinearSolution<T> {
    let omega = omega.unwrap_or_else(|| T::from_f64_const(DEFAULT_OMEGA));
    let epsilon = epsilon.unwrap_or_else(|| T::from_f64_const(DEFAULT_EPSILON));
    let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
    let n = b.len();

    log::trace!("starting with arguments: {{size: {n}, omega: {omega}, epsilon: {epsilon}, max_iter: {max_iter}}}");

    let mut x = vec![T::zero(); n];

    for sweep in 1..=max_iter {
        let mut max_change = T::zero();
        for i in 0..n {
            // entries before i were already updated in this sweep
            let sigma = (0..n)
                .filter(|&j| j != i)
                .fold(T::zero(), |acc, j| acc + a[i][j] * x[j]);
            let x_gs = (b[i] - sigma) / a[i][i];
            let x_new = (T::one() - omega) * x[i] + omega * x_gs;
            max_change = max_change.max((x_new - x[i]).abs());
            x[i] = x_new;
        }

        log::trace!("sweep {{index: {sweep}, max_change: {max_change}}}");
        if max_change < epsilon {
            log::debug!("converged {{iterations: {sweep}}}");
            return LinearSolution {
                x,
                iterations: sweep,
                converged: true,
            };
        }
    }

    log::warn!("sor reached the maximum number of iterations {{max_iter: {max_iter}}}");
    LinearSolution {
        x,
        iterations: max_iter,
        converged: false,
    }
}
