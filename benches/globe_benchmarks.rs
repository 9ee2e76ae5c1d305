use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use globe_lookup::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(count: usize) -> Vec<GeoPoint> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..count)
        .map(|_| {
            let z: f64 = rng.gen_range(-1.0..1.0);
            GeoPoint::new(z.asin().to_degrees(), rng.gen_range(-180.0..180.0))
        })
        .collect()
}

fn populated_globe(points: &[GeoPoint], lat_divisions: usize, lon_divisions: usize) -> Globe<GeoPoint> {
    let mut globe = Globe::with_divisions(EARTH_RADIUS_METERS, lat_divisions, lon_divisions).unwrap();
    for p in points {
        globe.add(*p).unwrap();
    }
    globe
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let points = random_points(10_000);

    for (lat_divisions, lon_divisions) in [(10, 10), (10, 18), (90, 180)] {
        group.bench_with_input(
            BenchmarkId::new("insert_10k", format!("{}x{}", lat_divisions, lon_divisions)),
            &(lat_divisions, lon_divisions),
            |b, &(lat_divisions, lon_divisions)| {
                b.iter(|| black_box(populated_globe(&points, lat_divisions, lon_divisions)))
            },
        );
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let points = random_points(100_000);

    for (lat_divisions, lon_divisions) in [(10, 18), (90, 180)] {
        let globe = populated_globe(&points, lat_divisions, lon_divisions);

        for range in [10_000.0, 100_000.0, 1_000_000.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("{}x{}", lat_divisions, lon_divisions), range),
                &range,
                |b, &range| {
                    b.iter(|| black_box(globe.search(black_box(40.7128), black_box(-74.0060), range)))
                },
            );
        }
    }

    group.finish();
}

fn benchmark_subdivided_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivided_search");
    let points = random_points(100_000);
    let mut globe = populated_globe(&points, 10, 18);

    group.bench_function("flat", |b| {
        b.iter(|| black_box(globe.search(48.8566, 2.3522, 50_000.0)))
    });

    globe.subdivide_at(48.8566, 2.3522, 16, 16).unwrap();
    globe.subdivide_at(48.8566, 2.3522, 16, 16).unwrap();

    group.bench_function("two_levels", |b| {
        b.iter(|| black_box(globe.search(48.8566, 2.3522, 50_000.0)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_search,
    benchmark_subdivided_search
);
criterion_main!(benches);
