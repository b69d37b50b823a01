//! Running min/max of coefficient magnitudes

use crate::kernel::MagnitudeObserver;
use std::sync::Mutex;

/// Magnitude bounds captured during a forward pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Bounds before anything has been observed
    pub const EMPTY: MinMax = MinMax {
        min: f64::MAX,
        max: -f64::MAX,
    };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn include(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Width of the captured range, zero or negative for a flat field
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Mutex-guarded accumulator shared by every worker of a pass
#[derive(Debug, Default)]
pub struct MinMaxTracker {
    bounds: Mutex<MinMax>,
}

impl MinMaxTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bounds(self) -> MinMax {
        self.bounds.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl MagnitudeObserver for MinMaxTracker {
    fn observe(&self, magnitude: f64) {
        self.bounds
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .include(magnitude);
    }
}
