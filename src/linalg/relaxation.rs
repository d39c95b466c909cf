use super::LinearSolution;
use crate::{
    util::doc_macros::{best_effort_no_converge, panic_t_from_f64},
    RealScalar,
};

/// Default stopping tolerance on the largest residual
const DEFAULT_EPSILON: f64 = 1E-6;

/// Default maximum number of relaxation steps
const DEFAULT_MAX_ITER: usize = 10_000;

/// Solve `A x = b` with Gauss-Southwell relaxation.
///
/// The system is scaled so that every equation has a diagonal of `-1`,
/// giving the residuals `R = c + P x` with `P[i][j] = -A[i][j] / A[i][i]`
/// for `i != j` and `c[i] = b[i] / A[i][i]`. Starting from `x = 0`, each step
/// picks the equation with the largest residual (the lowest index among
/// ties), adds that residual to the matching unknown, which zeroes it, and
/// updates the other residuals accordingly. The iteration stops once every
/// residual is smaller than `epsilon` in absolute value.
///
/// This converges for strictly diagonally dominant matrices, so the system
/// should be checked with [`super::validate`] first (or solved with
/// [`super::solve`], which does both). Neither `a` nor `b` is modified.
///
/// Defaults: `epsilon = 1E-6`, `max_iter = 10000`.
///
#[doc = best_effort_no_converge!()]
///
/// # Panics
/// If `a` is smaller than `b.len()` in either dimension.
///
#[doc = panic_t_from_f64!()]
pub fn relaxation<T: RealScalar>(
    a: &[Vec<T>],
    b: &[T],
    epsilon: Option<T>,
    max_iter: Option<usize>,
) -> LinearSolution<T> {
    let epsilon = epsilon.unwrap_or_else(|| T::from_f64_const(DEFAULT_EPSILON));
    let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
    let n = b.len();

    log::trace!("starting with arguments: {{size: {n}, epsilon: {epsilon}, max_iter: {max_iter}}}");

    let p: Vec<Vec<T>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { -T::one() } else { -a[i][j] / a[i][i] })
                .collect()
        })
        .collect();
    let c: Vec<T> = (0..n).map(|i| b[i] / a[i][i]).collect();

    let mut x = vec![T::zero(); n];
    let mut residuals = c;

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iter {
        let Some((s, largest)) = largest_residual(&residuals) else {
            // nothing to solve
            converged = true;
            break;
        };

        if largest < epsilon {
            converged = true;
            break;
        }

        let delta = residuals[s];
        x[s] = x[s] + delta;
        for (i, r) in residuals.iter_mut().enumerate() {
            if i != s {
                *r = *r + p[i][s] * delta;
            }
        }
        residuals[s] = T::zero();

        log::trace!("relaxed {{index: {s}, delta: {delta}}}");
        iterations += 1;
    }

    if converged {
        log::debug!("converged {{iterations: {iterations}}}");
    } else {
        log::warn!("relaxation reached the maximum number of iterations {{max_iter: {max_iter}}}");
    }

    LinearSolution {
        x,
        iterations,
        converged,
    }
}

/// Index and absolute value of the largest residual, the first one wins ties.
fn largest_residual<T: RealScalar>(residuals: &[T]) -> Option<(usize, T)> {
    let mut iter = residuals.iter().map(|r| r.abs()).enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, (i, r)| if r > best.1 { (i, r) } else { best }))
}
