use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use trajectory_hash::{Coordinate, EncodeParams, Encoder, Layout, TimeWindow, TrajectoryPoint};

const WINDOW: TimeWindow = TimeWindow::new(1_597_849_200, 1_599_058_800);

fn generate_fixed_points(size: usize, seed: u64) -> Vec<TrajectoryPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed); // シード固定
    let mut points = Vec::with_capacity(size);

    for _ in 0..size {
        let time = rng.random_range(WINDOW.start()..=WINDOW.end());
        let coordinate = Coordinate::random_using(&mut rng);
        points.push(TrajectoryPoint { time, coordinate });
    }
    points
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode");

    let points = generate_fixed_points(1_000, 12345);

    for theta_l in [8u8, 16, 30] {
        for layout in [Layout::Interleaved, Layout::Separated] {
            let params = EncodeParams::new(23, theta_l).with_layout(layout);
            let encoder = Encoder::new(params, WINDOW).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", layout), theta_l),
                &points,
                |b, points| {
                    b.iter(|| {
                        for point in points {
                            black_box(encoder.encode(point.time, &point.coordinate));
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_to_bytes(c: &mut Criterion) {
    let points = generate_fixed_points(1_000, 67890);
    let encoder = Encoder::new(EncodeParams::default(), WINDOW).unwrap();
    let hashes: Vec<_> = encoder.encode_all(points).collect();

    c.bench_function("ToBytes", |b| {
        b.iter(|| {
            for hash in &hashes {
                black_box(hash.to_bytes());
            }
        });
    });
}

criterion_group!(benches, bench_encode, bench_to_bytes);
criterion_main!(benches);
