//! Push/pop benchmarks
//!
//! Compares the comparator-driven heap against `std::collections::BinaryHeap`
//! on the same shuffled inputs.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//!
//! # Only one size
//! cargo bench --bench heap_bench -- '2\^16'
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap as StdBinaryHeap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rust_comparator_heaps::{BinaryHeap, MinOrder, PriorityQueue, Queue};

const SIZES: [u32; 3] = [8, 12, 16];

fn shuffled(n: usize, seed: u64) -> Vec<u64> {
    let mut values: Vec<u64> = (0..n as u64).collect();
    values.shuffle(&mut StdRng::seed_from_u64(seed));
    values
}

fn less(a: &u64, b: &u64) -> bool {
    a < b
}

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.sample_size(20);

    for exp in SIZES {
        let n = 1usize << exp;
        let values = shuffled(n, 12345);
        let label = format!("2^{}", exp);

        group.bench_with_input(BenchmarkId::new("min_order", &label), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(MinOrder, values.len());
                for &value in values {
                    heap.push(value);
                }
                let mut sum = 0u64;
                while let Ok(value) = heap.pop() {
                    sum = sum.wrapping_add(value);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("fn_comparator", &label), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(less, values.len());
                for &value in values {
                    heap.push(value);
                }
                let mut sum = 0u64;
                while let Ok(value) = heap.pop() {
                    sum = sum.wrapping_add(value);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("priority_queue", &label), &values, |b, values| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_capacity(MinOrder, values.len());
                for &value in values {
                    queue.enqueue(value);
                }
                let mut sum = 0u64;
                while let Ok(value) = queue.dequeue() {
                    sum = sum.wrapping_add(value);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", &label), &values, |b, values| {
            b.iter(|| {
                let mut heap = StdBinaryHeap::with_capacity(values.len());
                for &value in values {
                    heap.push(Reverse(value));
                }
                let mut sum = 0u64;
                while let Some(Reverse(value)) = heap.pop() {
                    sum = sum.wrapping_add(value);
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn benchmark_interleaved(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleaved");
    group.sample_size(20);

    let values = shuffled(1 << 14, 54321);
    group.bench_function("push2_pop1", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new(MinOrder);
            for pair in values.chunks(2) {
                heap.extend(pair.iter().copied());
                black_box(heap.pop().ok());
            }
            heap.len()
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_push_pop, benchmark_interleaved);
criterion_main!(benches);
