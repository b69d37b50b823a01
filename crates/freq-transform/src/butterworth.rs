//! Butterworth low-pass attenuation in the DCT domain

use crate::executor::TileExecutor;
use freq_core::consts::{MIN_BUTTERWORTH_CUTOFF, MIN_ORDER};
use freq_core::{CoefficientGrid, Coord, FreqError, FreqResult};
use log::info;

/// Gain `1 / sqrt(1 + (d / cutoff)^(2 * order))` at distance `d`
#[inline]
pub fn butterworth_gain(distance: f64, cutoff: f64, order: u32) -> f64 {
    1.0 / (1.0 + (distance / cutoff).powf(2.0 * order as f64)).sqrt()
}

/// Euclidean distance of a cell from the DC origin
#[inline]
pub fn radial_distance(c: Coord) -> f64 {
    ((c.x * c.x + c.y * c.y) as f64).sqrt()
}

/// Index distance along a single-row grid
#[inline]
pub fn linear_distance(c: Coord) -> f64 {
    c.x as f64
}

/// Scale every coefficient by the Butterworth gain at its distance
///
/// A zero cutoff or order is rejected before the grid is touched.
pub fn apply_butterworth<D>(
    executor: &TileExecutor,
    grid: &mut CoefficientGrid,
    cutoff: usize,
    order: u32,
    distance: D,
) -> FreqResult<()>
where
    D: Fn(Coord) -> f64 + Send + Sync,
{
    if cutoff < MIN_BUTTERWORTH_CUTOFF {
        return Err(FreqError::CutoffOutOfRange {
            cutoff,
            min: MIN_BUTTERWORTH_CUTOFF,
            max: usize::MAX,
        });
    }
    if order < MIN_ORDER {
        return Err(FreqError::InvalidOrder(order));
    }

    let dims = grid.dimensions();
    let cutoff = cutoff as f64;

    executor.update(dims, grid.as_mut_slice(), |c, v| {
        v * butterworth_gain(distance(c), cutoff, order)
    });

    info!("butterworth filter applied (cutoff {cutoff}, order {order})");
    Ok(())
}
