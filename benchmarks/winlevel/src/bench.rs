//! Window/level benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (64x64 to 2048x2048 frames)
//! - Lookup table versus direct evaluation
//! - VOI functions (Linear, LinearExact, Sigmoid)
//! - Streaming in row bands
//!
//! For serial execution, use `WINLEVEL_BACKEND=serial cargo bench`.
//! For parallel execution, use `WINLEVEL_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use std::env;
use std::hint::black_box;
use winlevel::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn parallel_enabled() -> (bool, &'static str) {
    match env::var("WINLEVEL_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

/// Generate a 12-bit CT-like frame with reproducible noise.
fn generate_frame(side: usize, seed: u64) -> Vec<u16> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..side * side)
        .map(|i| {
            let (r, c) = (i / side, i % side);
            let dr = r as f64 - side as f64 / 2.0;
            let dc = c as f64 - side as f64 / 2.0;
            let body = if (dr * dr + dc * dc).sqrt() < side as f64 * 0.4 {
                1064.0
            } else {
                24.0
            };
            (body + rng.random_range(-40.0..40.0)).clamp(0.0, 4095.0) as u16
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (parallel, label) = parallel_enabled();
    let mut group = c.benchmark_group(format!("scalability_{label}"));

    for side in [64usize, 256, 512, 1024, 2048] {
        let samples = generate_frame(side, 42);
        let model = Windowing::new()
            .window(400.0, 40.0)
            .rescale(1.0, -1024.0)
            .parallel(parallel)
            .adapter(Batch)
            .build()
            .unwrap();

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &samples, |b, s| {
            b.iter(|| model.apply(black_box(s)).unwrap())
        });
    }

    group.finish();
}

fn bench_lut_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_policy");
    let samples = generate_frame(512, 7);

    for (name, policy) in [("always", Always), ("never", Never), ("auto", Auto)] {
        let model = Windowing::new()
            .window(400.0, 40.0)
            .rescale(1.0, -1024.0)
            .bits_stored(12)
            .lut_policy(policy)
            .adapter(Batch)
            .build()
            .unwrap();

        group.bench_function(name, |b| b.iter(|| model.apply(black_box(&samples)).unwrap()));
    }

    group.finish();
}

fn bench_voi_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("voi_function");
    let samples = generate_frame(512, 11);

    for (name, function) in [
        ("linear", Linear),
        ("linear_exact", LinearExact),
        ("sigmoid", Sigmoid),
    ] {
        let model = Windowing::new()
            .window(1500.0, -600.0)
            .rescale(1.0, -1024.0)
            .voi_function(function)
            .lut_policy(Never)
            .adapter(Batch)
            .build()
            .unwrap();

        group.bench_function(name, |b| b.iter(|| model.apply(black_box(&samples)).unwrap()));
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let side = 1024;
    let samples = generate_frame(side, 3);

    for band in [16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::new("rows_per_chunk", band), &band, |b, &band| {
            let mut stream = Windowing::new()
                .window(400.0, 40.0)
                .rescale(1.0, -1024.0)
                .adapter(Streaming)
                .build()
                .unwrap();
            let mut out = vec![0u8; band * side * 4];

            b.iter(|| {
                stream.new_frame(side, side).unwrap();
                for chunk in samples.chunks(band * side) {
                    stream
                        .process_chunk_into(chunk, &mut out[..chunk.len() * 4])
                        .unwrap();
                }
                black_box(stream.finish().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_lut_policy,
    bench_voi_functions,
    bench_streaming
);
criterion_main!(benches);
