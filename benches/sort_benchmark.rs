//! Criterion benchmarks for quicksort vs slice::sort_unstable.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate reproducible random test data of given size
fn generate_random_data(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    (0..size).map(|_| rng.gen()).collect()
}

/// Benchmark both sorts on random input
fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random");

    for size_exp in [10, 12, 14, 16, 18, 20] {
        let size = 1usize << size_exp;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("quicksort", size), &size, |b, &size| {
            b.iter_batched(
                || generate_random_data(size),
                |mut data| {
                    quicksort::sort(black_box(&mut data));
                    data
                },
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sort_unstable", size), &size, |b, &size| {
            b.iter_batched(
                || generate_random_data(size),
                |mut data| {
                    black_box(&mut data).sort_unstable();
                    data
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Benchmark the quadratic case: already-ordered input
fn bench_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ordered");
    group.sample_size(10);

    for size_exp in [8, 10, 12] {
        let size = 1usize << size_exp;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ascending", size), &size, |b, &size| {
            b.iter_batched(
                || (0..size as i32).collect::<Vec<i32>>(),
                |mut data| {
                    quicksort::sort(black_box(&mut data));
                    data
                },
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("descending", size), &size, |b, &size| {
            b.iter_batched(
                || (0..size as i32).rev().collect::<Vec<i32>>(),
                |mut data| {
                    quicksort::sort(black_box(&mut data));
                    data
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random, bench_ordered);
criterion_main!(benches);
