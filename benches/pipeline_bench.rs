//! Benchmark for view pipelines: construction versus traversal.
//!
//! Construction of a pipeline must cost nothing beyond moving a few
//! words; traversal pays for every stage exactly once per element.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqview::prelude::*;
use std::hint::black_box;

fn benchmark_construction(criterion: &mut Criterion) {
    let values: Vec<i64> = (0..10_000).collect();

    criterion.bench_function("pipeline_construction", |bencher| {
        bencher.iter(|| {
            let pipeline = view(black_box(&values))
                | map_with(|value: i64| value * 2)
                | filter_with(|value: &i64| value % 3 == 0)
                | take_n(1_000);
            black_box(pipeline)
        });
    });
}

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline_traversal");

    for size in [100usize, 1_000, 10_000] {
        let values: Vec<i64> = (0..size as i64).collect();

        group.bench_with_input(BenchmarkId::new("map_filter", size), &values, |bencher, values| {
            bencher.iter(|| {
                let sum: i64 = (view(values)
                    | map_with(|value: i64| value * 2)
                    | filter_with(|value: &i64| value % 3 == 0))
                    .items()
                    .sum();
                black_box(sum)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("infinite_take", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let sum: i64 = take(infinite_sequence(0i64, 1), size).items().sum();
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_construction, benchmark_traversal);
criterion_main!(benches);
