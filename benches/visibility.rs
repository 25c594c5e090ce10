//! Benchmarks for hidden-line visibility computation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hiddenline::{clip_edge, Polygon, Segment2, VisibilityEngine};

/// A ring of `count` overlapping squares around the origin.
fn ring_scene(count: usize) -> Vec<Polygon<f64>> {
    (0..count)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / count as f64;
            let cx = angle.cos() * 2.0;
            let cy = angle.sin() * 2.0;
            Polygon::from_coords(&[
                (cx - 1.5, cy - 1.5),
                (cx + 1.5, cy - 1.5),
                (cx + 1.5, cy + 1.5),
                (cx - 1.5, cy + 1.5),
            ])
        })
        .collect()
}

fn bench_clip_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_edge");

    let occluders = ring_scene(7);
    let edge: Segment2<f64> = Segment2::from_coords(-4.0, 0.1, 4.0, 0.1);

    group.bench_function("ring_7", |b| {
        b.iter(|| clip_edge(black_box(edge), black_box(&occluders)))
    });

    group.finish();
}

fn bench_compute_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_visibility");

    // The two-triangle sample scene
    let triangles: Vec<Polygon<f64>> = vec![
        Polygon::from_coords(&[(3.0, 3.0), (7.0, 3.0), (5.0, 7.0)]),
        Polygon::from_coords(&[(1.0, 5.0), (5.0, 5.0), (3.0, 9.0)]),
    ];
    let engine = VisibilityEngine::new();

    group.bench_function("two_triangles", |b| {
        b.iter(|| engine.compute(black_box(&triangles)))
    });

    for count in [2, 4, 8] {
        let scene = ring_scene(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("ring", count), &scene, |b, scene| {
            b.iter(|| engine.compute(black_box(scene)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clip_edge, bench_compute_visibility);
criterion_main!(benches);
