//! Criterion micro-benchmarks for obstacle-map building and single routes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use schemroute_core::{Endpoint, GridCoord, RouteConfig};
use schemroute_grid::{build, ObstacleSet};
use schemroute_path::Pathfinder;
use schemroute_test_utils::{enclosure, facing_pins, random_scene, resistor_pair, straddling_body};

/// Benchmark: rasterize 50 / 200 / 800 random bodies at pitch 10.
fn bench_build_obstacles(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_obstacles");
    for bodies in [50usize, 200, 800] {
        let scene = random_scene(42, bodies, 0, 400, 200);
        group.bench_with_input(BenchmarkId::from_parameter(bodies), &scene, |b, scene| {
            b.iter(|| {
                let map = build(scene.obstacles.iter().copied(), 10.0);
                black_box(map.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: straight run between facing pins in open space.
fn bench_route_open(c: &mut Criterion) {
    let pf = Pathfinder::default();
    let (start, end) = facing_pins();
    let empty = ObstacleSet::new();
    c.bench_function("route_open_space", |b| {
        b.iter(|| black_box(pf.plan(&start, &end, &empty)));
    });
}

/// Benchmark: detour around a body sitting across the straight line.
fn bench_route_detour(c: &mut Criterion) {
    let pf = Pathfinder::default();
    let (start, end) = facing_pins();
    let map = build([straddling_body()], 10.0);
    c.bench_function("route_detour", |b| {
        b.iter(|| black_box(pf.plan(&start, &end, &map)));
    });

    let (bodies, start, end) = resistor_pair();
    let map = build(bodies, 10.0);
    c.bench_function("route_resistor_pair", |b| {
        b.iter(|| black_box(pf.plan(&start, &end, &map)));
    });
}

/// Benchmark: target sealed in a ring, so the search burns its full bound
/// before the elbow fallback.
fn bench_route_fallback(c: &mut Criterion) {
    let (start, _) = facing_pins();
    let end = Endpoint::free(300.0, 100.0);
    let map = enclosure(GridCoord::new(30, 10), 3);

    let mut group = c.benchmark_group("route_fallback");
    for max_expansions in [500u32, 3000, 20_000] {
        let pf = Pathfinder::new(RouteConfig {
            max_expansions,
            ..Default::default()
        })
        .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(max_expansions),
            &pf,
            |b, pf| {
                b.iter(|| black_box(pf.plan(&start, &end, &map)));
            },
        );
    }
    group.finish();
}

/// Benchmark: every wire of a dense random scene, one after another.
fn bench_route_random_scene(c: &mut Criterion) {
    let pf = Pathfinder::default();
    let scene = random_scene(7, 60, 100, 120, 80);
    let map = scene.obstacle_set();
    c.bench_function("route_random_scene_100", |b| {
        b.iter(|| {
            for (start, end) in &scene.wires {
                black_box(pf.route(start, end, &map));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_obstacles,
    bench_route_open,
    bench_route_detour,
    bench_route_fallback,
    bench_route_random_scene
);
criterion_main!(benches);
