//! Integration tests for frequency-domain filters

use freq::*;

fn checkerboard(size: u32, cell: u32) -> ImageSignal {
    let data = (0..size * size)
        .map(|i| {
            let (x, y) = (i % size, i / size);
            if ((x / cell) + (y / cell)) % 2 == 0 {
                230
            } else {
                20
            }
        })
        .collect();
    ImageSignal::from_raw(size, size, data, "board").unwrap()
}

#[test]
fn test_butterworth_attenuation_monotonic_in_radius() {
    let image = checkerboard(16, 2);
    let plain = image.forward(&TransformOptions::new()).unwrap();
    let filtered = image
        .forward(&TransformOptions::new().cut_frequency(6).order(2))
        .unwrap();

    let mut gains: Vec<(f64, f64)> = Vec::new();
    for y in 0..16 {
        for x in 0..16 {
            let c = Coord::new(x, y);
            let p = plain.get(c);
            if p.abs() > 1e-6 {
                let d = ((x * x + y * y) as f64).sqrt();
                gains.push((d, filtered.get(c) / p));
            }
        }
    }

    gains.sort_by(|a, b| a.0.total_cmp(&b.0));
    for w in gains.windows(2) {
        assert!(w[0].1 >= w[1].1 - 1e-12, "gain rose from {:?} to {:?}", w[0], w[1]);
    }
    assert_eq!(filtered.label(), "board_DCT_BUTTERWORTH_[6,2]");
}

#[test]
fn test_butterworth_smooths_image() {
    let mut image = checkerboard(16, 1);
    let original = image.pixels().as_raw().clone();

    let grid = image
        .forward(&TransformOptions::new().cut_frequency(4).order(3))
        .unwrap();
    image.inverse(grid).unwrap();

    let contrast = |p: &[u8]| -> i32 {
        let max = p.iter().map(|v| *v as i32).max().unwrap();
        let min = p.iter().map(|v| *v as i32).min().unwrap();
        max - min
    };
    assert!(contrast(image.pixels().as_raw()) < contrast(&original));
    assert_eq!(image.name(), "board_DCT_BUTTERWORTH_[4,3]");
}

#[test]
fn test_butterworth_engine_matches_signal_path() {
    let image = checkerboard(8, 2);
    let executor = TileExecutor::with_workers(2).unwrap();
    let mut grid = image.forward(&TransformOptions::new()).unwrap();
    apply_butterworth(&executor, &mut grid, 3, 2, radial_distance).unwrap();

    let filtered = image
        .forward(&TransformOptions::new().cut_frequency(3).order(2))
        .unwrap();
    for (a, b) in grid.as_slice().iter().zip(filtered.as_slice()) {
        assert!((a - b).abs() < 1e-9);
    }

    let c = Coord::new(3, 4);
    assert_eq!(radial_distance(c), 5.0);
    assert_eq!(linear_distance(c), 3.0);
}

#[test]
fn test_culling_retains_count_plus_one() {
    let image = checkerboard(16, 3);
    let plain = image.forward(&TransformOptions::new()).unwrap();

    for retain in [0usize, 5, 31] {
        let culled = image
            .forward(&TransformOptions::new().cut_frequency(retain))
            .unwrap();
        assert!(culled.nonzero_count() <= retain + 1);

        let min_kept = culled
            .as_slice()
            .iter()
            .filter(|v| **v != 0.0)
            .map(|v| v.abs())
            .fold(f64::MAX, f64::min);
        let max_zeroed = plain
            .as_slice()
            .iter()
            .zip(culled.as_slice())
            .filter(|(_, k)| **k == 0.0)
            .map(|(p, _)| p.abs())
            .fold(0.0, f64::max);
        assert!(min_kept >= max_zeroed);
    }
}

#[test]
fn test_culling_exact_count_on_distinct_magnitudes() {
    let executor = TileExecutor::with_workers(4).unwrap();
    let dims = Dimensions::new(10, 10);
    let data: Vec<f64> = (0..100)
        .map(|i| (i as f64 + 1.0) * if i % 3 == 0 { -1.0 } else { 1.0 })
        .collect();
    let mut grid = CoefficientGrid::from_vec(dims, data, "g").unwrap();

    let zeroed = cull(&executor, &mut grid, 24).unwrap();
    assert_eq!(zeroed, 75);
    assert_eq!(grid.nonzero_count(), 25);
    assert!(grid.as_slice()[75..].iter().all(|v| *v != 0.0));
}

#[test]
fn test_compression_error_shrinks_with_retain_count() {
    let original = checkerboard(16, 8);
    let pixels = original.pixels().as_raw().clone();

    let mean_abs_error = |retain: usize| -> f64 {
        let mut image = checkerboard(16, 8);
        let grid = image
            .forward(&TransformOptions::new().cut_frequency(retain))
            .unwrap();
        assert_eq!(grid.label(), format!("board_DCT_CF_[{retain}]"));
        image.inverse(grid).unwrap();

        let total: i32 = pixels
            .iter()
            .zip(image.pixels().as_raw())
            .map(|(a, b)| (*a as i32 - *b as i32).abs())
            .sum();
        total as f64 / pixels.len() as f64
    };

    // DC alone flattens the board to its mean
    let dc_only = mean_abs_error(0);
    assert!((dc_only - 105.0).abs() < 1.0, "dc-only error {dc_only}");

    let partial = mean_abs_error(40);
    let full = mean_abs_error(255);
    assert!(partial < dc_only / 2.0, "partial error {partial}");
    assert!(full <= 0.5);
}

#[test]
fn test_histogram_expansion_range() {
    let image = checkerboard(16, 2);
    let grid = image.forward(&TransformOptions::new().histogram(true)).unwrap();

    let rest = &grid.as_slice()[1..];
    assert_eq!(rest.iter().cloned().fold(f64::MAX, f64::min), 0.0);
    assert_eq!(rest.iter().cloned().fold(f64::MIN, f64::max), 255.0);
    assert!(rest.iter().all(|v| v.fract() == 0.0));
}

#[test]
fn test_histogram_expansion_monotonic() {
    let executor = TileExecutor::with_workers(2).unwrap();
    let data = vec![0.5, 3.0, 1.0, 7.25, 2.0, 9.0];
    let dims = Dimensions::new(3, 2);
    let mut grid = CoefficientGrid::from_vec(dims, data.clone(), "h").unwrap();

    histogram_expand(&executor, &mut grid, MinMax::new(0.5, 9.0));

    let out = grid.as_slice();
    assert_eq!(out[0], 0.0);
    assert_eq!(out[5], 255.0);
    for i in 0..data.len() {
        for j in 0..data.len() {
            if data[i] < data[j] {
                assert!(out[i] <= out[j]);
            }
        }
    }
}
