//! Benchmarks for weight tables and column resampling.
//!
//! Run with: `cargo bench --bench weight_table`
//!
//! Compares building a table against applying it, which is the trade-off
//! that makes precomputed weights worthwhile.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use regrid::{ColumnDomain, ColumnResampler, Policy, WeightTable};

/// An irregular input grid and a denser, unsorted output grid.
fn setup_grids(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let input: Vec<f64> = (0..n)
        .map(|k| {
            let s = k as f64 / n as f64;
            1000.0 * s * (1.0 + 0.25 * s)
        })
        .collect();
    let values: Vec<f64> = input.iter().map(|x| (x / 50.0).sin()).collect();
    let output: Vec<f64> = (0..4 * n)
        .map(|k| ((k * 37) % (4 * n)) as f64 * 1250.0 / (4 * n) as f64)
        .collect();
    (input, output, values)
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_table_new");

    for n in [64, 512, 4096] {
        let (input, output, _) = setup_grids(n);
        for policy in [
            Policy::Linear,
            Policy::NearestNeighbor,
            Policy::PiecewiseConstant,
            Policy::LinearPeriodic { period: 2000.0 },
        ] {
            group.bench_with_input(BenchmarkId::new(policy.name(), n), &n, |b, _| {
                b.iter(|| WeightTable::new(policy, black_box(&input), black_box(&output)));
            });
        }
    }

    group.finish();
}

fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_table_interpolate");

    for n in [64, 512, 4096] {
        let (input, output, values) = setup_grids(n);
        let Ok(table) = WeightTable::linear(&input, &output) else {
            continue;
        };
        let mut result = vec![0.0; output.len()];

        group.bench_with_input(BenchmarkId::new("linear", n), &n, |b, _| {
            b.iter(|| table.interpolate_into(black_box(&values), black_box(&mut result)));
        });
    }

    group.finish();
}

fn bench_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_get");

    for count in [51, 201, 1001] {
        let Ok(domain) = ColumnDomain::equally_spaced_ice(4000.0, count) else {
            continue;
        };
        let column: Vec<f64> = domain.levels().iter().map(|z| 263.0 - z / 400.0).collect();
        let queries: Vec<f64> = (0..400).map(|k| k as f64 * 12.5).collect();
        let mut values = vec![0.0; queries.len()];
        let resampler = ColumnResampler::new(&domain, "temp");

        group.bench_with_input(BenchmarkId::new("pl", count), &count, |b, _| {
            b.iter(|| resampler.get_column_pl(black_box(&column), &queries, &mut values));
        });
        group.bench_with_input(BenchmarkId::new("quad", count), &count, |b, _| {
            b.iter(|| resampler.get_column_quad(black_box(&column), &queries, &mut values));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_interpolate, bench_column);
criterion_main!(benches);
