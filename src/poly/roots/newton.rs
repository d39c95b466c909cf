use crate::{util::doc_macros::panic_t_from_f64, Quartic, RealScalar};

/// Default initial guess, tried right after zero
const DEFAULT_INITIAL_GUESS: f64 = 1.0;

/// Default stopping tolerance on `|f(x)|` and on the step size
const DEFAULT_EPSILON: f64 = 1E-10;

/// Default number of Newton steps per starting point
const DEFAULT_MAX_ITER: usize = 1000;

/// Derivatives smaller than this make a starting point useless
const FLAT_DERIVATIVE: f64 = 1E-15;

/// Sparse starting points, tried in this order
const SPARSE_POINTS: [f64; 10] = [0.1, -0.1, 0.5, -0.5, 1.0, -1.0, 2.0, -2.0, 10.0, -10.0];

/// Which starting points [`newton_single`] tries after `0` and the initial
/// guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartPoints {
    /// Every multiple of `0.5` in `[-100, 100]`, from left to right (401
    /// points).
    #[default]
    DenseGrid,

    /// `±0.1`, `±0.5`, `±1`, `±2` and `±10`. Much cheaper when there is no
    /// real root, but may miss roots far from the origin.
    Sparse,
}

impl StartPoints {
    fn iter<T: RealScalar>(self) -> Box<dyn Iterator<Item = T>> {
        match self {
            Self::DenseGrid => {
                let half = T::from_f64_const(0.5);
                Box::new((-200_i16..=200).map(move |i| {
                    T::from_i16(i).expect("overflow") * half
                }))
            }
            Self::Sparse => Box::new(SPARSE_POINTS.into_iter().map(T::from_f64_const)),
        }
    }
}

/// Find a single real root of a polynomial of degree up to four with a
/// multi-start Newton iteration.
///
/// Newton's method is run from `0`, then from `initial_guess`, then from each
/// of the `start_points`. A starting point is abandoned when the derivative
/// becomes flatter than `1E-15`, when the step size drops below `epsilon`
/// without `|f(x)|` doing the same, or after `max_iter` steps. The first
/// point where `|f(x)| < epsilon` is returned.
///
/// If no starting point reaches the tolerance, the point with the smallest
/// `|f(x)|` seen at the end of a run is returned. This is always a real
/// number, even when the polynomial has no real roots, so check the residual
/// if that matters to you.
///
/// Defaults: `initial_guess = 1`, `epsilon = 1E-10`, `max_iter = 1000`,
/// [`StartPoints::DenseGrid`].
///
/// # Examples
/// ```
/// use rust_solve::{newton_single, Quartic};
///
/// let p = Quartic::new(1.0_f64, 0.0, 0.0, 0.0, -16.0);
/// let root = newton_single(p, Some(1.5), None, None, None);
/// assert!((root - 2.0).abs() < 1E-9);
/// ```
///
/// # Panics
#[doc = panic_t_from_f64!()]
pub fn newton_single<T: RealScalar>(
    poly: Quartic<T>,
    initial_guess: Option<T>,
    epsilon: Option<T>,
    max_iter: Option<usize>,
    start_points: Option<StartPoints>,
) -> T {
    let x0 = initial_guess.unwrap_or_else(|| T::from_f64_const(DEFAULT_INITIAL_GUESS));
    let epsilon = epsilon.unwrap_or_else(|| T::from_f64_const(DEFAULT_EPSILON));
    let max_iter = max_iter.unwrap_or(DEFAULT_MAX_ITER);
    let start_points = start_points.unwrap_or_default();
    let flat = T::from_f64_const(FLAT_DERIVATIVE);

    log::trace!("starting with arguments: {{poly: \"{poly}\", initial_guess: {x0}, epsilon: {epsilon}, max_iter: {max_iter}, start_points: {start_points:?}}}");

    let mut best_guess = x0;
    let mut best_px_abs = poly.eval(x0).abs();

    let starts = [T::zero(), x0].into_iter().chain(start_points.iter());
    for start in starts {
        let mut guess = start;

        for _ in 0..max_iter {
            let px = poly.eval(guess);
            let pdx = poly.eval_diff(guess);

            // stopping criterion 1: converged
            if px.abs() < epsilon {
                log::trace!("converged {{start: {start}, root: {guess}}}");
                return guess;
            }

            // stuck at a local extremum, try the next starting point
            if pdx.abs() < flat {
                log::trace!("derivative vanished {{start: {start}, guess: {guess}}}");
                break;
            }

            let guess_new = guess - px / pdx;

            // stopping criterion 2: step size too small to make progress
            if (guess_new - guess).abs() < epsilon {
                let px_new_abs = poly.eval(guess_new).abs();
                if px_new_abs < best_px_abs {
                    best_guess = guess_new;
                    best_px_abs = px_new_abs;
                }
                if px_new_abs < epsilon {
                    log::trace!("converged {{start: {start}, root: {guess_new}}}");
                    return guess_new;
                }
                break;
            }

            guess = guess_new;
        }

        let px_abs = poly.eval(guess).abs();
        if px_abs < best_px_abs {
            best_guess = guess;
            best_px_abs = px_abs;
        }
    }

    log::debug!("no starting point converged, using best guess {{best_guess: {best_guess}, residual: {best_px_abs}}}");
    best_guess
}
