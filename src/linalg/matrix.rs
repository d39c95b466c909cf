use super::ValidationError;
use crate::RealScalar;

/// Systems with a determinant smaller than this (in absolute value) are
/// rejected as singular.
pub const SINGULARITY_THRESHOLD: f64 = 1E-12;

/// Whether the matrix has as many columns in every row as it has rows.
///
/// An empty matrix is not square.
#[must_use]
pub fn is_square<T: RealScalar>(a: &[Vec<T>]) -> bool {
    let n = a.len();
    n != 0 && a.iter().all(|row| row.len() == n)
}

/// Determinant by cofactor expansion along the first row.
///
/// This takes `O(n!)` time, which is fine for the handful of unknowns these
/// solvers are meant for, but it should not be used on anything large.
///
/// # Examples
/// ```
/// use rust_solve::linalg::determinant;
///
/// assert_eq!(determinant(&[vec![1.0, 2.0], vec![3.0, 4.0]]), -2.0);
/// ```
///
/// # Panics
/// If the matrix is empty or not square.
#[must_use]
pub fn determinant<T: RealScalar>(a: &[Vec<T>]) -> T {
    assert!(!a.is_empty(), "determinant of an empty matrix is undefined");
    debug_assert!(is_square(a), "determinant of a non-square matrix");

    match a.len() {
        1 => a[0][0],
        2 => a[0][0] * a[1][1] - a[0][1] * a[1][0],
        n => {
            let mut det = T::zero();
            let mut sign = T::one();
            for k in 0..n {
                det = det + sign * a[0][k] * determinant(&minor(a, k));
                sign = -sign;
            }
            det
        }
    }
}

/// The matrix without its first row and its `col`-th column
fn minor<T: RealScalar>(a: &[Vec<T>], col: usize) -> Vec<Vec<T>> {
    a[1..]
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, x)| *x)
                .collect()
        })
        .collect()
}

/// Whether every diagonal entry is larger in absolute value than `tol` plus
/// the sum of the absolute values of the other entries in its row.
///
/// Rows too short to have a diagonal entry are not dominant. The default
/// tolerance used by [`validate`] is zero, i.e. plain strict dominance.
#[must_use]
pub fn is_diagonally_dominant<T: RealScalar>(a: &[Vec<T>], tol: T) -> bool {
    first_non_dominant_row(a, tol).is_none()
}

fn first_non_dominant_row<T: RealScalar>(a: &[Vec<T>], tol: T) -> Option<usize> {
    a.iter().enumerate().position(|(i, row)| {
        row.get(i).map_or(true, |diag| {
            let off_diagonal = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(T::zero(), |acc, (_, x)| acc + x.abs());
            diag.abs() <= tol + off_diagonal
        })
    })
}

/// Check that `A x = b` is a system the iterative solvers can be run on.
///
/// The checks are performed in this order, and the first one that fails is
/// reported:
/// 1. `A` has as many rows as `b` has entries;
/// 2. all entries of `A` and `b` are finite;
/// 3. no diagonal entry of `A` is zero;
/// 4. `A` is strictly diagonally dominant;
/// 5. `A` is square;
/// 6. `|det(A)| >= 1E-12`.
///
/// A row that is too short to contain its diagonal entry is reported as
/// [`ValidationError::NotSquare`] as soon as the diagonal is looked at.
///
/// # Errors
/// The [`ValidationError`] matching the first failed check.
///
/// # Panics
#[doc = crate::util::doc_macros::panic_t_from_f64!()]
pub fn validate<T: RealScalar>(a: &[Vec<T>], b: &[T]) -> Result<(), ValidationError<T>> {
    if a.len() != b.len() {
        return Err(ValidationError::DimensionMismatch {
            rows: a.len(),
            len: b.len(),
        });
    }

    for (row, entries) in a.iter().enumerate() {
        if let Some(col) = entries.iter().position(|x| !x.is_finite()) {
            return Err(ValidationError::NonFiniteMatrix { row, col });
        }
    }
    if let Some(index) = b.iter().position(|x| !x.is_finite()) {
        return Err(ValidationError::NonFiniteVector { index });
    }

    for (index, row) in a.iter().enumerate() {
        match row.get(index) {
            None => return Err(ValidationError::NotSquare),
            Some(x) if x.is_zero() => return Err(ValidationError::ZeroDiagonal { index }),
            Some(_) => {}
        }
    }

    if let Some(row) = first_non_dominant_row(a, T::zero()) {
        return Err(ValidationError::NotDiagonallyDominant { row });
    }

    if !is_square(a) {
        return Err(ValidationError::NotSquare);
    }

    let det = determinant(a);
    if det.abs() < T::from_f64_const(SINGULARITY_THRESHOLD) {
        return Err(ValidationError::Singular { determinant: det });
    }

    log::trace!("validated {{size: {}, determinant: {det}}}", a.len());
    Ok(())
}
