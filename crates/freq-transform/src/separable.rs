//! Separable DCT over 2D grids and 1D sequences
//!
//! The 2D forward transform runs the 1D kernel along every row into an
//! intermediate grid, then along every column of that grid. The inverse
//! mirrors the same two passes. When a [`MinMaxTracker`] is supplied the
//! forward transform produces coefficient magnitudes and records their
//! bounds, skipping the DC cell.

use crate::executor::TileExecutor;
use crate::kernel::{dct_coefficient, idct_sample, NoObserver};
use crate::tracker::MinMaxTracker;
use freq_core::{CoefficientGrid, Coord, Dimensions, FreqError, FreqResult, TransformRange};
use log::debug;

fn check_dimensions(dims: Dimensions) -> FreqResult<()> {
    if dims.is_empty() {
        return Err(FreqError::InvalidDimensions {
            width: dims.width,
            height: dims.height,
        });
    }
    Ok(())
}

/// Second-pass coefficient with optional magnitude tracking
fn finish_coefficient<A>(
    index: usize,
    len: usize,
    access: A,
    is_dc: bool,
    tracker: Option<&MinMaxTracker>,
) -> f64
where
    A: Fn(usize) -> f64,
{
    let range = TransformRange::full(len);
    match tracker {
        // DC never feeds the bounds
        Some(_) if is_dc => dct_coefficient(index, len, range, access, &NoObserver).abs(),
        Some(t) => dct_coefficient(index, len, range, access, t).abs(),
        None => dct_coefficient(index, len, range, access, &NoObserver),
    }
}

/// Forward 2D DCT of a sample grid
///
/// `sample(coord)` yields the input value at each coordinate.
pub fn forward_2d<S>(
    executor: &TileExecutor,
    dims: Dimensions,
    sample: S,
    tracker: Option<&MinMaxTracker>,
    label: impl Into<String>,
) -> FreqResult<CoefficientGrid>
where
    S: Fn(Coord) -> f64 + Send + Sync,
{
    check_dimensions(dims)?;
    let (width, height) = (dims.width, dims.height);

    debug!("forward DCT {width}x{height}: row pass");
    let partial = executor.map(dims, |c| {
        dct_coefficient(
            c.x,
            width,
            TransformRange::full(width),
            |i| sample(Coord::new(i, c.y)),
            &NoObserver,
        )
    });

    debug!("forward DCT {width}x{height}: column pass");
    let coefficients = executor.map(dims, |c| {
        let column = |i: usize| partial[i * width + c.x];
        finish_coefficient(c.y, height, column, c.is_dc(), tracker)
    });

    CoefficientGrid::from_vec(dims, coefficients, label)
}

/// Inverse 2D DCT, returning unquantized samples in row-major order
pub fn inverse_2d(executor: &TileExecutor, grid: &CoefficientGrid) -> Vec<f64> {
    let dims = grid.dimensions();
    let (width, height) = (dims.width, dims.height);

    debug!("inverse DCT {width}x{height}: row pass");
    let partial = executor.map(dims, |c| {
        idct_sample(
            c.x,
            width,
            TransformRange::full(width),
            |k| grid.get(Coord::new(k, c.y)),
            &NoObserver,
        )
    });

    debug!("inverse DCT {width}x{height}: column pass");
    executor.map(dims, |c| {
        idct_sample(
            c.y,
            height,
            TransformRange::full(height),
            |k| partial[k * width + c.x],
            &NoObserver,
        )
    })
}

/// Forward DCT of a sequence, stored as a single-row grid
pub fn forward_1d(
    executor: &TileExecutor,
    samples: &[f64],
    tracker: Option<&MinMaxTracker>,
    label: impl Into<String>,
) -> FreqResult<CoefficientGrid> {
    let dims = Dimensions::row(samples.len());
    check_dimensions(dims)?;

    debug!("forward DCT over {} samples", samples.len());
    let coefficients = executor.map(dims, |c| {
        finish_coefficient(c.x, samples.len(), |n| samples[n], c.is_dc(), tracker)
    });

    CoefficientGrid::from_vec(dims, coefficients, label)
}

/// Inverse DCT of a single-row grid, returning unquantized samples
pub fn inverse_1d(executor: &TileExecutor, grid: &CoefficientGrid) -> FreqResult<Vec<f64>> {
    if grid.height() != 1 {
        return Err(FreqError::InvalidDimensions {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let len = grid.width();
    let coefficients = grid.as_slice();
    debug!("inverse DCT over {len} samples");

    Ok(executor.map(grid.dimensions(), |c| {
        idct_sample(
            c.x,
            len,
            TransformRange::full(len),
            |k| coefficients[k],
            &NoObserver,
        )
    }))
}
