//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::complex::Complex64;

use crate::{util::float::f64_make_normal, Quartic};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(f64_make_normal(self.state.f64()))
    }
}

/// Endless stream of uniformly distributed reals in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        let real_stream = RandStreamF64::new(seed);
        Self {
            real_stream,
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Multiply out `scale (x - r1)(x - r2)(x - r3)(x - r4)`.
///
/// Complex roots must come in conjugate pairs, the imaginary parts of the
/// resulting coefficients are dropped.
#[must_use]
pub fn quartic_from_roots(scale: f64, roots: &[Complex64; 4]) -> Quartic<f64> {
    // descending degree, starting from the constant `scale`
    let mut coeffs = vec![Complex64::new(scale, 0.0)];
    for r in roots {
        let mut next = coeffs.clone();
        next.push(Complex64::new(0.0, 0.0));
        for (i, c) in coeffs.iter().enumerate() {
            next[i + 1] -= c * r;
        }
        coeffs = next;
    }
    let [a, b, c, d, k] = [0, 1, 2, 3, 4].map(|i| coeffs[i].re);
    Quartic::new(a, b, c, d, k)
}

/// Generate one test case where all four roots are real and known
pub fn test_case_real_roots(
    roots_stream: impl Iterator<Item = f64>,
    mut scale_stream: impl Iterator<Item = f64>,
) -> (Quartic<f64>, Vec<Complex64>) {
    let roots: Vec<_> = roots_stream
        .take(4)
        .map(|r| Complex64::new(r, 0.0))
        .collect();
    let scale = scale_stream.next().expect("rng stream should be infinite");
    let poly = quartic_from_roots(scale, &[roots[0], roots[1], roots[2], roots[3]]);
    (poly, roots)
}

/// Generate one test case with two real roots and a complex conjugate pair
pub fn test_case_conj_roots(
    mut roots_stream: impl Iterator<Item = f64>,
    mut scale_stream: impl Iterator<Item = f64>,
) -> (Quartic<f64>, Vec<Complex64>) {
    let mut next = || roots_stream.next().expect("rng stream should be infinite");
    let (r1, r2, re, im) = (next(), next(), next(), next().abs().max(0.1));
    let scale = scale_stream.next().expect("rng stream should be infinite");
    let roots = vec![
        Complex64::new(r1, 0.0),
        Complex64::new(r2, 0.0),
        Complex64::new(re, im),
        Complex64::new(re, -im),
    ];
    let poly = quartic_from_roots(scale, &[roots[0], roots[1], roots[2], roots[3]]);
    (poly, roots)
}

/// A random strictly diagonally dominant system with a known solution
pub struct DominantSystem {
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub x: Vec<f64>,
}

/// Endless stream of [`DominantSystem`]s of the given size
pub struct DominantSystemStream {
    size: usize,
    entries: RandStreamR64,
}

impl DominantSystemStream {
    #[must_use]
    pub fn new(seed: u64, size: usize) -> Self {
        Self {
            size,
            entries: RandStreamR64::new(seed, -1.0, 1.0),
        }
    }
}

impl Iterator for DominantSystemStream {
    type Item = DominantSystem;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.size;
        let mut a = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = self.entries.by_ref().take(n).collect_vec();
            let off_diagonal: f64 = row
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, x)| x.abs())
                .sum();
            // keep the sign, but make it dominate by a margin
            let margin = 1.0 + self.entries.next()?.abs();
            row[i] = (off_diagonal + margin).copysign(row[i]);
            a.push(row);
        }
        let x = self.entries.by_ref().take(n).map(|v| v * 10.0).collect_vec();
        let b = matvec(&a, &x);
        Some(DominantSystem { a, b, x })
    }
}

/// `A x`
#[must_use]
pub fn matvec(a: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    a.iter()
        .map(|row| row.iter().zip(x).map(|(aij, xj)| aij * xj).sum())
        .collect()
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}
