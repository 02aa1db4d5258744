//! # Circuit Benchmarks
//!
//! Measures full QFT runs on a register and basis-state readout.
//!
//! Run: `cargo bench --bench circuit_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ket_core::prelude::*;

/// Benchmark QFT on |0…0⟩
fn bench_qft(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft_run");

    for n in [2usize, 3, 4, 5, 6] {
        let circuit = Circuit::qft(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut reg = Register::new(n).expect("valid size");
                circuit.run(&mut reg).expect("circuit fits");
                black_box(reg)
            })
        });
    }

    group.finish();
}

/// Benchmark read_basis_states on a uniform superposition
fn bench_readout(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_basis_states");

    for n in [2usize, 4, 6, 8] {
        let mut reg = Register::new(n).expect("valid size");
        for q in 0..n {
            reg.execute_gate(&Gate::Hadamard, q).expect("in range");
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &reg, |b, reg| {
            b.iter(|| black_box(reg.read_basis_states()))
        });
    }

    group.finish();
}

/// Benchmark circuit JSON round trip
fn bench_serialization(c: &mut Criterion) {
    let circuit = Circuit::qft(6);
    let json = circuit.to_json().expect("serializable");

    c.bench_function("circuit_to_json", |b| {
        b.iter(|| black_box(circuit.to_json()))
    });
    c.bench_function("circuit_from_json", |b| {
        b.iter(|| black_box(Circuit::from_json(&json)))
    });
}

criterion_group!(benches, bench_qft, bench_readout, bench_serialization);
criterion_main!(benches);
