//! Criterion benchmarks for pricer_core root finders and quadrature.
//!
//! Compares the open methods against bisection on the same equation and
//! measures how Simpson's rule scales with the partition count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::interpolators::{Interpolator, LinearInterpolator};
use pricer_core::math::quadrature::{simpson, SimpsonIntegrator};
use pricer_core::math::solvers::{
    BisectionSolver, NewtonRaphsonSolver, RootFinder, SecantSolver, SolverConfig,
};

/// Kepler-style equation with a single root in [0, 2].
fn kepler(x: f64) -> f64 {
    x - 0.5 * x.sin() - 1.0
}

fn kepler_prime(x: f64) -> f64 {
    1.0 - 0.5 * x.cos()
}

/// Benchmark each root finder on the same equation.
fn bench_root_finders(c: &mut Criterion) {
    let mut group = c.benchmark_group("root_finders");
    let config = SolverConfig::default();

    let newton = NewtonRaphsonSolver::new(config);
    group.bench_function("newton", |b| {
        b.iter(|| newton.find_root(kepler, kepler_prime, black_box(1.0)).unwrap())
    });

    let secant = SecantSolver::new(config);
    group.bench_function("secant", |b| {
        b.iter(|| secant.find_root_from(kepler, black_box(1.0)).unwrap())
    });

    let bisection = BisectionSolver::new(config);
    group.bench_function("bisection", |b| {
        b.iter(|| bisection.find_root(kepler, black_box(0.0), black_box(2.0)).unwrap())
    });

    // Newton stalls at x0 = 0 for this cubic, so this measures the fallback path
    let finder = RootFinder::new(config);
    group.bench_function("hybrid_fallback", |b| {
        b.iter(|| {
            finder
                .find_root_with_derivative(
                    |x: f64| x * x * x - 8.0,
                    |x: f64| 3.0 * x * x,
                    black_box(0.0),
                    Some((0.0, 5.0)),
                )
                .unwrap()
        })
    });

    group.finish();
}

/// Benchmark composite Simpson against partition count.
fn bench_simpson(c: &mut Criterion) {
    let mut group = c.benchmark_group("simpson");
    let density = |x: f64| (-0.5 * x * x).exp();

    for n in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("fixed", n), &n, |b, &n| {
            b.iter(|| simpson(density, black_box(-6.0), black_box(6.0), n).unwrap())
        });
    }

    let integrator = SimpsonIntegrator::default();
    group.bench_function("adaptive", |b| {
        b.iter(|| integrator.integrate(density, black_box(-6.0), black_box(6.0)).unwrap())
    });

    group.finish();
}

/// Benchmark zero-rate lookup on a bootstrapped-size curve.
fn bench_linear_lookup(c: &mut Criterion) {
    let tenors: Vec<f64> = (0..=60).map(|i| i as f64 * 0.5).collect();
    let rates: Vec<f64> = tenors.iter().map(|t| 0.01 + 0.03 * (1.0 - (-t / 5.0).exp())).collect();
    let interp = LinearInterpolator::new(&tenors, &rates).unwrap();

    c.bench_function("linear_lookup", |b| {
        b.iter(|| interp.interpolate(black_box(12.3)).unwrap())
    });
}

criterion_group!(benches, bench_root_finders, bench_simpson, bench_linear_lookup);
criterion_main!(benches);
