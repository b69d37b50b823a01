//! Dispatch of a resolved [`Operation`] onto a coefficient grid

use crate::butterworth::apply_butterworth;
use crate::culling::cull;
use crate::executor::TileExecutor;
use crate::histogram::histogram_expand;
use crate::tracker::MinMax;
use freq_core::{CoefficientGrid, Coord, FreqResult, Operation};

/// Apply `operation` to a forward-transformed grid
///
/// `bounds` are the magnitudes captured by the forward pass and are only
/// read for [`Operation::Histogram`]. `distance` measures how far a cell is
/// from the DC origin for Butterworth attenuation.
pub fn apply_operation<D>(
    executor: &TileExecutor,
    grid: &mut CoefficientGrid,
    operation: Operation,
    bounds: MinMax,
    distance: D,
) -> FreqResult<()>
where
    D: Fn(Coord) -> f64 + Send + Sync,
{
    match operation {
        Operation::Identity => {}
        Operation::Histogram => histogram_expand(executor, grid, bounds),
        Operation::Cull { retain } => {
            cull(executor, grid, retain)?;
        }
        Operation::Butterworth { cutoff, order } => {
            apply_butterworth(executor, grid, cutoff, order, distance)?;
        }
    }

    if let Some(suffix) = operation.label_suffix() {
        grid.push_label(&suffix);
    }

    Ok(())
}
