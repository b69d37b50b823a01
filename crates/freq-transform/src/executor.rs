//! Parallel tile executor
//!
//! Every pass of the engine visits each coordinate of a rectangle (or each
//! index of a range) exactly once on a fixed pool of worker threads and
//! returns only once all visits have completed. No ordering between visits
//! is guaranteed.

use freq_core::consts::WORKERS_PER_CORE;
use freq_core::{Coord, Dimensions, FreqError, FreqResult};
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::thread;

/// Fixed-size worker pool for per-coordinate work
pub struct TileExecutor {
    pool: ThreadPool,
}

impl TileExecutor {
    /// Create an executor sized at `WORKERS_PER_CORE` workers per available core
    pub fn new() -> FreqResult<Self> {
        let cores = thread::available_parallelism().map_or(1, |n| n.get());
        Self::with_workers(cores * WORKERS_PER_CORE)
    }

    /// Create an executor with an explicit worker count
    pub fn with_workers(workers: usize) -> FreqResult<Self> {
        if workers == 0 {
            return Err(FreqError::InvalidParameter(
                "executor needs at least one worker".into(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("freq-worker-{i}"))
            .build()
            .map_err(|e| FreqError::ThreadPool(e.to_string()))?;

        debug!("tile executor started with {workers} workers");
        Ok(Self { pool })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` inside the pool so nested rayon work uses its workers
    pub fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Invoke `f` once for every coordinate of `dims`
    pub fn for_each<F>(&self, dims: Dimensions, f: F)
    where
        F: Fn(Coord) + Send + Sync,
    {
        self.pool.install(|| {
            (0..dims.cell_count())
                .into_par_iter()
                .for_each(|i| f(dims.coord(i)));
        });
    }

    /// Compute one value per coordinate, returned in row-major order
    pub fn map<F>(&self, dims: Dimensions, f: F) -> Vec<f64>
    where
        F: Fn(Coord) -> f64 + Send + Sync,
    {
        self.pool.install(|| {
            (0..dims.cell_count())
                .into_par_iter()
                .map(|i| f(dims.coord(i)))
                .collect()
        })
    }

    /// Rewrite every cell of a row-major buffer in place
    ///
    /// `f` receives the coordinate and current value of a cell and returns its
    /// replacement. Each worker owns the cell it writes.
    pub fn update<F>(&self, dims: Dimensions, data: &mut [f64], f: F)
    where
        F: Fn(Coord, f64) -> f64 + Send + Sync,
    {
        debug_assert_eq!(data.len(), dims.cell_count());
        self.pool.install(|| {
            data.par_iter_mut()
                .enumerate()
                .for_each(|(i, v)| *v = f(dims.coord(i), *v));
        });
    }
}
