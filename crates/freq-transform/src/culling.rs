//! Magnitude-ranked coefficient culling
//!
//! All coefficients are ranked by absolute value before any cell is touched;
//! only then are the cells outside the retained set zeroed in parallel.

use crate::executor::TileExecutor;
use freq_core::{CoefficientGrid, FreqError, FreqResult};
use log::info;
use rayon::prelude::*;

/// Magnitude of one coefficient paired with its row-major position
#[derive(Debug, Clone, Copy)]
struct Ranked {
    magnitude: f64,
    index: usize,
}

/// Rank every coefficient by magnitude, largest first
///
/// Ties come out in unspecified order.
fn rank(grid: &CoefficientGrid) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = grid
        .as_slice()
        .par_iter()
        .enumerate()
        .map(|(index, v)| Ranked {
            magnitude: v.abs(),
            index,
        })
        .collect();

    ranked.par_sort_unstable_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    ranked
}

/// Keep the `retain + 1` largest-magnitude coefficients and zero the rest
///
/// Returns the number of coefficients that were zeroed.
pub fn cull(
    executor: &TileExecutor,
    grid: &mut CoefficientGrid,
    retain: usize,
) -> FreqResult<usize> {
    if retain >= grid.len() {
        return Err(FreqError::CutoffOutOfRange {
            cutoff: retain,
            min: 0,
            max: grid.len() - 1,
        });
    }
    let keep = retain + 1;

    let ranked = {
        let grid: &CoefficientGrid = grid;
        executor.install(|| rank(grid))
    };

    let mut retained = vec![false; grid.len()];
    for r in &ranked[..keep] {
        retained[r.index] = true;
    }

    let dims = grid.dimensions();
    executor.update(dims, grid.as_mut_slice(), |c, v| {
        if retained[dims.index(c)] {
            v
        } else {
            0.0
        }
    });

    let culled = grid.len() - keep;
    info!("culled {culled} of {} coefficients", grid.len());
    Ok(culled)
}
