//! Iterative solvers for diagonally dominant linear systems `A x = b`.
//!
//! Matrices are given as slices of rows and are never modified. Before
//! solving, [`validate`] checks that the system is one the solvers are known
//! to converge on, and [`solve`] refuses to run on anything else.

use crate::RealScalar;

mod matrix;
pub use matrix::{determinant, is_diagonally_dominant, is_square, validate, SINGULARITY_THRESHOLD};
mod relaxation;
pub use relaxation::relaxation;
mod sor;
pub use sor::sor;

/// Why a linear system was rejected by [`validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError<T: RealScalar> {
    #[error("matrix has {rows} rows but the right-hand side has {len} entries")]
    DimensionMismatch { rows: usize, len: usize },

    #[error("matrix entry ({row}, {col}) is not finite")]
    NonFiniteMatrix { row: usize, col: usize },

    #[error("right-hand side entry {index} is not finite")]
    NonFiniteVector { index: usize },

    #[error("diagonal entry ({index}, {index}) is zero")]
    ZeroDiagonal { index: usize },

    #[error("matrix is not diagonally dominant in row {row}")]
    NotDiagonallyDominant { row: usize },

    #[error("matrix is not square")]
    NotSquare,

    #[error("matrix is singular (determinant {determinant})")]
    Singular { determinant: T },
}

/// Approximate solution of a linear system, as returned by the iterative
/// solvers.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSolution<T: RealScalar> {
    /// The solution vector
    pub x: Vec<T>,

    /// Number of iterations performed
    pub iterations: usize,

    /// Whether the stopping tolerance was reached. When this is `false`,
    /// `iterations` equals the iteration limit and `x` is the last
    /// approximation.
    pub converged: bool,
}

/// Validate the system with [`validate`], then solve it with [`relaxation`].
///
/// # Errors
/// The [`ValidationError`] of the first check that failed, see [`validate`].
///
/// # Panics
#[doc = crate::util::doc_macros::panic_t_from_f64!()]
pub fn solve<T: RealScalar>(
    a: &[Vec<T>],
    b: &[T],
    epsilon: Option<T>,
    max_iter: Option<usize>,
) -> Result<LinearSolution<T>, ValidationError<T>> {
    validate(a, b)?;
    Ok(relaxation(a, b, epsilon, max_iter))
}

/// The residual `b - A x`.
///
/// # Panics
/// If the dimensions of `a`, `b` and `x` do not match.
#[must_use]
pub fn residual<T: RealScalar>(a: &[Vec<T>], b: &[T], x: &[T]) -> Vec<T> {
    assert_eq!(a.len(), b.len(), "matrix and right-hand side must agree");
    a.iter()
        .zip(b)
        .map(|(row, bi)| {
            assert_eq!(row.len(), x.len(), "matrix and solution must agree");
            row.iter()
                .zip(x)
                .fold(*bi, |acc, (aij, xj)| acc - *aij * *xj)
        })
        .collect()
}
