//! Criterion benchmarks for whole-schematic routing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use schemroute_bench::{reference_profile, stress_profile};
use schemroute_engine::{EngineConfig, WireRouter};
use schemroute_library::ComponentLibrary;

fn router(worker_count: Option<usize>) -> WireRouter {
    let config = EngineConfig {
        worker_count,
        ..Default::default()
    };
    WireRouter::new(config, ComponentLibrary::builtin()).unwrap()
}

/// Benchmark: reference board (48 parts, 64 wires), sequential vs pooled.
fn bench_reference_board(c: &mut Criterion) {
    let doc = reference_profile(42);
    let sequential = router(Some(1));
    let pooled = router(Some(4));

    let mut group = c.benchmark_group("reference_board");
    group.bench_function("route_all", |b| {
        b.iter(|| black_box(sequential.route_all(&doc)));
    });
    group.bench_function("route_all_parallel_4", |b| {
        b.iter(|| black_box(pooled.route_all_parallel(&doc)));
    });
    group.finish();
}

/// Benchmark: stress board (400 parts, 600 wires) on the pool.
fn bench_stress_board(c: &mut Criterion) {
    let doc = stress_profile(42);
    let pooled = router(None);

    let mut group = c.benchmark_group("stress_board");
    group.sample_size(10);
    group.bench_function("obstacles", |b| {
        b.iter(|| black_box(pooled.obstacles(&doc.nodes).len()));
    });
    group.bench_function("route_all_parallel", |b| {
        b.iter(|| black_box(pooled.route_all_parallel(&doc)));
    });
    group.finish();
}

criterion_group!(benches, bench_reference_board, bench_stress_board);
criterion_main!(benches);
