//! Criterion benchmarks for pricer_models.
//!
//! Covers closed-form pricing against the inversions layered on top of it.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{implied_volatility, BlackScholes};
use pricer_models::config::InversionConfig;
use pricer_models::instruments::{Bond, OptionType};

/// Black-Scholes price and the full Greek set.
fn bench_black_scholes(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes");
    let bs = BlackScholes::new(100.0_f64, 0.05, 0.2)
        .unwrap()
        .with_dividend_yield(0.01);

    group.bench_function("price", |b| {
        b.iter(|| bs.price(black_box(105.0), black_box(1.0), OptionType::Call))
    });
    group.bench_function("greeks", |b| {
        b.iter(|| bs.greeks(black_box(105.0), black_box(1.0), OptionType::Put))
    });

    group.finish();
}

/// Implied volatility across moneyness.
fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");
    let config = InversionConfig::implied_volatility();
    let bs = BlackScholes::new(100.0_f64, 0.03, 0.25).unwrap();

    for strike in [70.0, 100.0, 130.0] {
        let premium = bs.price(strike, 1.0, OptionType::Call);
        group.bench_with_input(BenchmarkId::from_parameter(strike), &strike, |b, &k| {
            b.iter(|| {
                implied_volatility(
                    black_box(premium),
                    100.0,
                    k,
                    1.0,
                    0.03,
                    0.0,
                    OptionType::Call,
                    &config,
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

/// Bond pricing and yield inversion by maturity.
fn bench_bond(c: &mut Criterion) {
    let mut group = c.benchmark_group("bond");

    for maturity in [2.0, 10.0, 30.0] {
        let bond = Bond::new(maturity, 5.0, 2, 0.04).unwrap();
        let price = bond.price();
        group.bench_with_input(BenchmarkId::new("price", maturity), &bond, |b, bond| {
            b.iter(|| black_box(bond).price())
        });
        group.bench_with_input(BenchmarkId::new("yield", maturity), &price, |b, &p| {
            b.iter(|| Bond::from_price(maturity, 5.0, 2, 100.0, black_box(p)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_black_scholes,
    bench_implied_volatility,
    bench_bond
);
criterion_main!(benches);
