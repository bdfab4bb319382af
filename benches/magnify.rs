//! Criterion benchmarks for hqscale hot paths
//!
//! - Classifier: edge pattern computation per neighborhood
//! - Magnify: full 3x/4x passes, sequential and parallel
//! - YUV cache: table construction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hqscale::{yuv, Classifier, Magnifier, MagnifyConfig, Neighborhood, Scale, Thresholds};

// =============================================================================
// Test Data Generators
// =============================================================================

const PALETTE: [u32; 8] = [
    0xFF000000, 0xFFFFFFFF, 0xFFE03030, 0xFF3050C0, 0xFF30C050, 0xFF7F7F7F, 0x80FFFFFF, 0xFFF0D000,
];

/// Generate a sprite with runs of color, closer to real pixel art than noise.
fn make_sprite(width: usize, height: usize) -> Vec<u32> {
    let mut state = 0x2545F4914F6CDD1Du64;
    let mut color = PALETTE[0];
    (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            if state % 4 == 0 {
                color = PALETTE[(state >> 32) as usize % PALETTE.len()];
            }
            color
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::new(yuv::init(), Thresholds::default());
    let sprite = make_sprite(3, 64);
    let neighborhoods: Vec<Neighborhood> = sprite
        .chunks_exact(9)
        .map(|chunk| {
            let mut w = [0; 9];
            w.copy_from_slice(chunk);
            w
        })
        .collect();

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(neighborhoods.len() as u64));
    group.bench_function("classify", |b| {
        b.iter(|| {
            neighborhoods
                .iter()
                .map(|w| classifier.classify(black_box(w)) as u32)
                .sum::<u32>()
        })
    });
    group.finish();
}

fn bench_magnify(c: &mut Criterion) {
    yuv::init();
    let mut group = c.benchmark_group("magnify");

    for size in [32usize, 128, 256] {
        let sprite = make_sprite(size, size);
        group.throughput(Throughput::Elements((size * size) as u64));

        for scale in [Scale::Hq3x, Scale::Hq4x] {
            for parallel in [false, true] {
                let config = MagnifyConfig { scale, parallel, ..Default::default() };
                let magnifier = Magnifier::new(&config).expect("cache is initialized");
                let n = scale.factor();
                let mut dst = vec![0u32; size * size * n * n];
                let label = if parallel { "par" } else { "seq" };

                group.bench_with_input(
                    BenchmarkId::new(format!("{}_{}", scale, label), size),
                    &sprite,
                    |b, sprite| {
                        b.iter(|| magnifier.magnify(black_box(sprite), &mut dst, size, size))
                    },
                );
            }
        }
    }
    group.finish();
}

fn bench_yuv_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("yuv");
    group.sample_size(10);
    group.bench_function("build_table", |b| b.iter(yuv::YuvTable::build));
    group.finish();
}

criterion_group!(benches, bench_classify, bench_magnify, bench_yuv_build);
criterion_main!(benches);
