//! Criterion benchmarks for the cutting hot path.
//! Focus sizes: n in {3, 6, 12, 48} vertices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use cutshape::cuts::apply_cuts;
use cutshape::geom2::{generate_polygon, split_polygon, Cut, Polygon, TaskSeed};
use nalgebra::Vector2;
use rand::Rng;

fn jittered(n: usize, seed: u64) -> Polygon {
    let mut rng = TaskSeed { seed, index: n as u64 }.to_std_rng();
    generate_polygon(n, Vector2::new(400.0, 300.0), 160.0, &mut rng).unwrap()
}

fn random_center_cut(seed: u64) -> Cut {
    let mut rng = TaskSeed { seed, index: 0 }.to_std_rng();
    let a: f64 = rng.gen::<f64>() * std::f64::consts::PI;
    let d = Vector2::new(a.cos(), a.sin()) * 40.0;
    let c = Vector2::new(400.0, 300.0);
    Cut::new(c - d, c + d)
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    for &n in &[3usize, 6, 12, 48] {
        group.bench_with_input(BenchmarkId::new("split_polygon", n), &n, |b, &n| {
            let poly = jittered(n, 11);
            let mut k = 0u64;
            b.iter_batched(
                || {
                    k = k.wrapping_add(1);
                    random_center_cut(k)
                },
                |cut| {
                    let _ = split_polygon(&poly, cut);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("apply_star_cuts", n), &n, |b, &n| {
            let poly = jittered(n, 12);
            let cuts: Vec<Cut> = (0..3).map(|k| random_center_cut(100 + k)).collect();
            b.iter(|| apply_cuts(&poly, &cuts))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
