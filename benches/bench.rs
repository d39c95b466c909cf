use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_solve::{
    __testing::{test_case_real_roots, DominantSystemStream, RandStreamR64},
    cardano, linalg, newton_single, solve_quartic, Cubic, Quartic, StartPoints,
};

criterion_main!(micro_benches, realistic_benches);
criterion_group!(micro_benches, newton, closed_forms, determinant);

pub fn newton(c: &mut Criterion) {
    let mut group = c.benchmark_group("newton_single");
    // x^4 + 1 has no real root, so every starting point is tried
    let polys = [
        ("four real roots", Quartic::new(1.0, -10.0, 35.0, -50.0, 24.0)),
        ("no real root", Quartic::new(1.0, 0.0, 0.0, 0.0, 1.0)),
    ];
    for (name, poly) in polys {
        for start_points in [StartPoints::DenseGrid, StartPoints::Sparse] {
            group.bench_function(BenchmarkId::new(name, format!("{start_points:?}")), |b| {
                b.iter(|| {
                    black_box(newton_single(
                        black_box(poly),
                        None,
                        None,
                        None,
                        Some(start_points),
                    ))
                });
            });
        }
    }
    group.finish();
}

pub fn closed_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("cardano");
    let cubics = [
        ("three real", Cubic::new(1.0, -6.0, 11.0, -6.0)),
        ("complex pair", Cubic::new(1.0, 0.0, 0.0, -8.0)),
        ("triple", Cubic::new(1.0, -3.0, 3.0, -1.0)),
    ];
    for (name, cubic) in cubics {
        group.bench_function(name, |b| b.iter(|| black_box(cardano(black_box(cubic)))));
    }
    group.finish();
}

pub fn determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");
    for n in [2, 3, 4, 5, 6, 7] {
        let system = DominantSystemStream::new(n as u64, n)
            .next()
            .expect("rng stream should be infinite");
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(linalg::determinant(black_box(&system.a))))
        });
    }
    group.finish();
}

criterion_group!(realistic_benches, quartic, relaxation);

pub fn quartic(c: &mut Criterion) {
    let mut roots_stream = RandStreamR64::new(1, -10.0, 10.0);
    let mut scale_stream = RandStreamR64::new(2, 0.1, 10.0);
    let polys: Vec<_> = (0..100)
        .map(|_| test_case_real_roots(&mut roots_stream, &mut scale_stream).0)
        .collect();
    c.bench_function("solve_quartic x100", |b| {
        b.iter(|| {
            for p in &polys {
                black_box(solve_quartic(p.a, p.b, p.c, p.d, p.k));
            }
        });
    });
}

pub fn relaxation(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear solvers");
    for n in [2, 3, 4, 5, 6] {
        let system = DominantSystemStream::new(n as u64, n)
            .next()
            .expect("rng stream should be infinite");
        group.bench_function(BenchmarkId::new("solve", n), |b| {
            b.iter(|| {
                black_box(linalg::solve(
                    black_box(&system.a),
                    black_box(&system.b),
                    None,
                    None,
                ))
            });
        });
        group.bench_function(BenchmarkId::new("relaxation", n), |b| {
            b.iter(|| {
                black_box(linalg::relaxation(
                    black_box(&system.a),
                    black_box(&system.b),
                    None,
                    None,
                ))
            });
        });
        group.bench_function(BenchmarkId::new("sor", n), |b| {
            b.iter(|| {
                black_box(linalg::sor(
                    black_box(&system.a),
                    black_box(&system.b),
                    None,
                    None,
                    None,
                ))
            });
        });
    }
    group.finish();
}
