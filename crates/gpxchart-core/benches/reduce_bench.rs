
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use gpxchart_core::geometry::ONE_DEGREE;
use gpxchart_core::sampler;
use gpxchart_core::{Track, TrackPoint};

fn gen_track(n: usize) -> Track {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // ~3 m steps heading north-east over rolling terrain
        let d = i as f64 * 3.0;
        let ele = (i as f64 * 0.01).sin() * 80.0 + 400.0 + (i as f64 * 0.0001);
        v.push(TrackPoint::new(45.0 + d / ONE_DEGREE, 13.0 + d / ONE_DEGREE).with_elevation(ele));
    }
    Track::from_points(v)
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_points");
    for &n in &[50_000usize, 100_000usize] {
        let track = gen_track(n);
        for &max in &[1_000usize, 5_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_max{max}")), &max, |b, &m| {
                b.iter_batched(
                    || track.clone(),
                    |mut t| { t.reduce_points(m, 50.0); black_box(t); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_steepness(c: &mut Criterion) {
    let mut group = c.benchmark_group("steepness");
    for &n in &[10_000usize, 100_000usize] {
        let track = gen_track(n);
        group.bench_function(format!("n{n}"), |b| {
            b.iter(|| black_box(sampler::steepness(&track)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reduce, bench_steepness);
criterion_main!(benches);
