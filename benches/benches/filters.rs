//! Benchmarks for frequency-domain filters
//!
//! Run with: cargo bench --bench filters

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use freq_core::{CoefficientGrid, Dimensions};
use freq_transform::{
    apply_butterworth, cull, histogram_expand, radial_distance, MinMax, TileExecutor,
};

fn grid(size: usize) -> CoefficientGrid {
    let dims = Dimensions::new(size, size);
    let data = (0..dims.cell_count())
        .map(|i| ((i * 7919) % 1000) as f64 - 500.0)
        .collect();
    CoefficientGrid::from_vec(dims, data, "bench").unwrap()
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters 256x256");
    let executor = TileExecutor::new().unwrap();
    let source = grid(256);

    group.bench_function("butterworth", |b| {
        b.iter_batched(
            || source.clone(),
            |mut g| apply_butterworth(&executor, &mut g, 40, 2, radial_distance).unwrap(),
            BatchSize::LargeInput,
        );
    });

    group.bench_function("cull", |b| {
        b.iter_batched(
            || source.clone(),
            |mut g| cull(&executor, &mut g, 1000).unwrap(),
            BatchSize::LargeInput,
        );
    });

    group.bench_function("histogram_expand", |b| {
        b.iter_batched(
            || source.clone(),
            |mut g| histogram_expand(&executor, &mut g, MinMax::new(-500.0, 499.0)),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
