//! Benchmarks for the DCT kernel and separable transforms
//!
//! Run with: cargo bench --bench transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use freq_core::Dimensions;
use freq_transform::{dct_1d, forward_2d, idct_1d, inverse_2d, MinMaxTracker, TileExecutor};

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 1D");

    for len in [64usize, 256, 1024] {
        let input: Vec<f64> = (0..len).map(|i| ((i * 31) % 255) as f64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("forward", len), &input, |b, input| {
            b.iter(|| dct_1d(black_box(input)));
        });

        let coeffs = dct_1d(&input);
        group.bench_with_input(BenchmarkId::new("inverse", len), &coeffs, |b, coeffs| {
            b.iter(|| idct_1d(black_box(coeffs)));
        });
    }

    group.finish();
}

fn bench_separable(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 2D");
    let executor = TileExecutor::new().unwrap();

    for size in [32usize, 64, 128] {
        let dims = Dimensions::new(size, size);
        let image: Vec<f64> = (0..dims.cell_count()).map(|i| (i % 256) as f64).collect();
        group.throughput(Throughput::Elements(dims.cell_count() as u64));

        group.bench_with_input(BenchmarkId::new("forward", size), &image, |b, image| {
            b.iter(|| forward_2d(&executor, dims, |c| image[dims.index(c)], None, "bench"));
        });

        let id = BenchmarkId::new("forward_tracked", size);
        group.bench_with_input(id, &image, |b, image| {
            b.iter(|| {
                let tracker = MinMaxTracker::new();
                let sample = |c| image[dims.index(c)];
                forward_2d(&executor, dims, sample, Some(&tracker), "bench")
            });
        });

        let sample = |c| image[dims.index(c)];
        let grid = forward_2d(&executor, dims, sample, None, "bench").unwrap();
        group.bench_function(BenchmarkId::new("inverse", size), |b| {
            b.iter(|| inverse_2d(&executor, black_box(&grid)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_separable);
criterion_main!(benches);
