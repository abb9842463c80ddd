//! Benchmarks for theta evaluation and circuit synthesis
//!
//! Run with: cargo bench -p gausskit-synth

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gausskit_synth::{GaussianState, jacobi_theta3, rotation_angle};

/// Benchmark the theta series at increasing working precision
fn bench_theta(c: &mut Criterion) {
    let mut group = c.benchmark_group("theta");

    for &precision in &[64u32, 128, 256, 1024] {
        group.bench_with_input(
            BenchmarkId::new("standard_normal", precision),
            &precision,
            |b, &precision| {
                b.iter(|| jacobi_theta3(black_box(0.0), black_box(1.0), precision).unwrap());
            },
        );
    }

    // Wide lattices converge slowly (term count grows with var).
    group.bench_function("wide_lattice", |b| {
        b.iter(|| jacobi_theta3(black_box(0.0), black_box(50.0), 128).unwrap());
    });

    group.finish();
}

/// Benchmark the full quotient-and-acos angle computation
fn bench_angle(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_angle");

    group.bench_function("standard_normal", |b| {
        b.iter(|| rotation_angle(black_box(0.0), black_box(1.0), 128).unwrap());
    });

    // Parameters whose thetas overflow f64 entirely.
    group.bench_function("narrow_offset", |b| {
        b.iter(|| rotation_angle(black_box(3.0), black_box(0.1), 256).unwrap());
    });

    group.finish();
}

/// Benchmark recursive circuit synthesis by width
fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_circuit");

    for n_qubits in &[2u32, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("build", n_qubits), n_qubits, |b, &n| {
            b.iter(|| {
                GaussianState::new(black_box(0.0), black_box(1.0), n)
                    .circuit()
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_theta, bench_angle, bench_synthesis);
criterion_main!(benches);
