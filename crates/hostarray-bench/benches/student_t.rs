//! Criterion benchmarks for the Student's t CDF.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hostarray_bench::cdf_grid;
use hostarray_numeric::{normal, student_t};

fn bench_cdf_grid(c: &mut Criterion) {
    let grid = cdf_grid(64);
    let mut group = c.benchmark_group("student_t");
    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("cdf_grid", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &(t, nu) in &grid {
                acc += student_t::cdf(black_box(t), black_box(nu)).unwrap();
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_cdf_by_nu(c: &mut Criterion) {
    let mut group = c.benchmark_group("student_t_by_nu");
    for nu in [1.0, 30.0, 10_000.0] {
        group.bench_with_input(BenchmarkId::from_parameter(nu), &nu, |b, &nu| {
            b.iter(|| student_t::cdf(black_box(1.7), nu).unwrap());
        });
    }
    group.bench_function("normal", |b| b.iter(|| normal::cdf(black_box(1.7))));
    group.finish();
}

criterion_group!(benches, bench_cdf_grid, bench_cdf_by_nu);
criterion_main!(benches);
