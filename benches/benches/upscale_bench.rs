//! # Upscaling Benchmarks
//!
//! Measures operator upscaling and gate application for growing registers.
//! Both are O(4^n): the dense 2^n × 2^n operator is materialized.
//!
//! Run: `cargo bench --bench upscale_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ket_core::prelude::*;

/// Benchmark upscale_gate by register size
fn bench_upscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("upscale_gate");
    let hadamard = Gate::Hadamard.matrix();

    for size in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("hadamard", size), &size, |b, &size| {
            b.iter(|| black_box(upscale_gate(&hadamard, size / 2, size)))
        });
    }

    let cnot = Gate::Cnot.matrix();
    for size in [2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::new("cnot", size), &size, |b, &size| {
            b.iter(|| black_box(upscale_gate(&cnot, 0, size)))
        });
    }

    group.finish();
}

/// Benchmark Register::execute_gate
fn bench_execute_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_gate");

    for size in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("hadamard", size), &size, |b, &size| {
            let mut reg = Register::new(size).expect("valid size");
            b.iter(|| {
                reg.execute_gate(&Gate::Hadamard, 0).expect("in range");
                black_box(reg.norm())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_upscale, bench_execute_gate);
criterion_main!(benches);
