//! Benchmark for MinHeap vs the standard `BinaryHeap`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linear_collections::heap::MinHeap;
use std::cmp::Reverse;
use std::hint::black_box;

fn scrambled(size: u64) -> Vec<u64> {
    (0..size)
        .map(|index| index.wrapping_mul(2_654_435_761) % 100_003)
        .collect()
}

// =============================================================================
// push Benchmark
// =============================================================================

fn benchmark_push(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("heap_push");

    for size in [100, 1000, 10000] {
        let values = scrambled(size);

        group.bench_with_input(BenchmarkId::new("MinHeap", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut heap = MinHeap::new();
                for value in values {
                    heap.push(black_box(*value));
                }
                black_box(heap)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("std::collections::BinaryHeap", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut heap = std::collections::BinaryHeap::new();
                    for value in values {
                        heap.push(Reverse(black_box(*value)));
                    }
                    black_box(heap)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// pop Benchmark
// =============================================================================

fn benchmark_drain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("heap_drain");

    for size in [100, 1000, 10000] {
        let values = scrambled(size);
        let heap = MinHeap::from(values.clone());
        let std_heap: std::collections::BinaryHeap<Reverse<u64>> =
            values.iter().copied().map(Reverse).collect();

        group.bench_with_input(BenchmarkId::new("MinHeap", size), &heap, |bencher, heap| {
            bencher.iter(|| {
                let mut heap = heap.clone();
                let mut last = 0;
                while let Ok(value) = heap.pop() {
                    last = value;
                }
                black_box(last)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("std::collections::BinaryHeap", size),
            &std_heap,
            |bencher, std_heap| {
                bencher.iter(|| {
                    let mut heap = std_heap.clone();
                    let mut last = 0;
                    while let Some(Reverse(value)) = heap.pop() {
                        last = value;
                    }
                    black_box(last)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// heapify Benchmark
// =============================================================================

fn benchmark_heapify(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("heapify");

    for size in [100, 1000, 10000] {
        let values = scrambled(size);

        group.bench_with_input(
            BenchmarkId::new("from_vec", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(MinHeap::from(black_box(values.clone()))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("repeated_push", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut heap = MinHeap::new();
                    heap.extend(black_box(values.iter().copied()));
                    black_box(heap)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_push, benchmark_drain, benchmark_heapify);

criterion_main!(benches);
