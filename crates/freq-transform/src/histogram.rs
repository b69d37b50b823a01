//! Histogram expansion of coefficient magnitudes into the display range

use crate::executor::TileExecutor;
use crate::tracker::MinMax;
use freq_core::consts::HISTOGRAM_RANGE;
use freq_core::CoefficientGrid;
use log::{debug, warn};

/// Linearly map `bounds` onto `0..=255`, rounding to the nearest integer
///
/// A flat field (`max <= min`, including bounds that never observed a
/// value) has no dynamic range to expand and maps every cell to zero.
pub fn histogram_expand(executor: &TileExecutor, grid: &mut CoefficientGrid, bounds: MinMax) {
    let span = bounds.span();
    let dims = grid.dimensions();

    if !(span > 0.0 && span.is_finite()) {
        warn!("flat coefficient field ({:?}), nothing to expand", bounds);
        executor.update(dims, grid.as_mut_slice(), |_, _| 0.0);
        return;
    }

    debug!("expanding [{}, {}] into [0, {HISTOGRAM_RANGE}]", bounds.min, bounds.max);
    let min = bounds.min;
    executor.update(dims, grid.as_mut_slice(), |_, v| {
        ((v - min) * HISTOGRAM_RANGE / span).round()
    });
}
