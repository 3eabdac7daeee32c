//! Criterion benchmarks for the reaction-diffusion step.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tessera_bench::{rd_reference, rd_stress};
use tessera_core::{EdgeBehavior, GridDims};
use tessera_rd::laplacian;

fn bench_step_64k(c: &mut Criterion) {
    let mut rd = rd_reference(42).unwrap();
    c.bench_function("rd_step_64k", |b| {
        b.iter(|| {
            rd.step();
            black_box(rd.b_state());
        });
    });
}

fn bench_step_1m(c: &mut Criterion) {
    let mut rd = rd_stress(42).unwrap();
    c.bench_function("rd_step_1m", |b| {
        b.iter(|| {
            rd.step();
            black_box(rd.b_state());
        });
    });
}

fn bench_laplacian(c: &mut Criterion) {
    let dims = GridDims::new(256, 256).unwrap();
    let rd = rd_reference(42).unwrap();
    let mut out = vec![0.0f32; dims.cell_count()];
    for edge in [EdgeBehavior::Wrap, EdgeBehavior::Clamp] {
        c.bench_function(&format!("laplacian_64k_{edge}"), |b| {
            b.iter(|| {
                laplacian(black_box(rd.b_state()), dims, edge, &mut out);
                black_box(&out);
            });
        });
    }
}

criterion_group!(benches, bench_step_64k, bench_step_1m, bench_laplacian);
criterion_main!(benches);
