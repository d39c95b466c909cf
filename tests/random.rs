//! Exploratory tests which use randomized test cases

use fastrand::Rng;
use num::complex::Complex64;
use rust_solve::{
    __testing::{
        check_roots, test_case_conj_roots, test_case_real_roots, DominantSystemStream,
        RandStreamR64,
    },
    linalg, solve_quartic, Root,
};

/// Clusters of roots are ill-conditioned, only well separated roots are
/// expected to be found accurately.
fn well_separated(roots: &[Complex64]) -> bool {
    roots
        .iter()
        .enumerate()
        .all(|(i, r1)| roots[i + 1..].iter().all(|r2| (r1 - r2).norm() >= 0.5))
}

#[test]
fn test_uniform_real_roots() {
    let _ = simple_logger::init_with_level(log::Level::Warn);
    let mut seed_stream = Rng::with_seed(1);
    let mut roots_stream = RandStreamR64::new(seed_stream.u64(..), -5.0, 5.0);
    let mut scale_stream = RandStreamR64::new(seed_stream.u64(..), 0.5, 5.0);
    for i in 0..1000 {
        let (poly, expected_roots) = test_case_real_roots(&mut roots_stream, &mut scale_stream);
        if !well_separated(&expected_roots) {
            continue;
        }
        let solutions = solve_quartic(poly.a, poly.b, poly.c, poly.d, poly.k);
        let roots: Vec<_> = solutions.roots().iter().map(Root::to_complex).collect();
        assert!(
            check_roots(roots.clone(), expected_roots.clone(), 1E-5),
            "{roots:?} != {expected_roots:?} @ iter = {i}"
        );
        for r in solutions.roots().iter().filter(|r| r.is_real()) {
            let scale = poly.coeffs().iter().fold(1.0f64, |acc, c| acc.max(c.abs()));
            assert!(
                poly.eval(r.re()).abs() < 1E-5 * scale,
                "{poly} at {r} @ iter = {i}"
            );
        }
    }
}

#[test]
fn test_conj_roots() {
    let _ = simple_logger::init_with_level(log::Level::Warn);
    let mut seed_stream = Rng::with_seed(2);
    let mut roots_stream = RandStreamR64::new(seed_stream.u64(..), -5.0, 5.0);
    let mut scale_stream = RandStreamR64::new(seed_stream.u64(..), 0.5, 5.0);
    for i in 0..1000 {
        let (poly, expected_roots) = test_case_conj_roots(&mut roots_stream, &mut scale_stream);
        if !well_separated(&expected_roots) {
            continue;
        }
        let solutions = solve_quartic(poly.a, poly.b, poly.c, poly.d, poly.k);
        let roots: Vec<_> = solutions.roots().iter().map(Root::to_complex).collect();
        assert!(
            check_roots(roots.clone(), expected_roots.clone(), 1E-5),
            "{roots:?} != {expected_roots:?} @ iter = {i}"
        );
    }
}

#[test]
fn test_dominant_systems() {
    let _ = simple_logger::init_with_level(log::Level::Warn);
    for size in 1..=6 {
        for (i, system) in DominantSystemStream::new(size as u64, size)
            .take(200)
            .enumerate()
        {
            let solution = linalg::solve(&system.a, &system.b, Some(1E-10), None)
                .unwrap_or_else(|e| panic!("size {size} @ iter = {i}: {e}"));
            assert!(solution.converged, "size {size} @ iter = {i}");
            for (got, expected) in solution.x.iter().zip(&system.x) {
                assert!(
                    (got - expected).abs() < 1E-7,
                    "size {size} @ iter = {i}: {:?} != {:?}",
                    solution.x,
                    system.x
                );
            }
        }
    }
}
