//! Typed transform options

use crate::consts::{MIN_BUTTERWORTH_CUTOFF, MIN_ORDER};
use crate::{Dimensions, FreqError, FreqResult};

/// Options controlling what happens between the forward and inverse transform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformOptions {
    /// Track coefficient magnitudes and expand them into a displayable range
    pub histogram: bool,
    /// Butterworth cutoff radius, or culling retain-count when no order is set
    pub cut_frequency: Option<usize>,
    /// Butterworth order
    pub order: Option<u32>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn histogram(mut self, histogram: bool) -> Self {
        self.histogram = histogram;
        self
    }

    pub fn cut_frequency(mut self, cut_frequency: usize) -> Self {
        self.cut_frequency = Some(cut_frequency);
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Resolve the option set into a single operation
    pub fn operation(&self) -> FreqResult<Operation> {
        match (self.cut_frequency, self.order, self.histogram) {
            (Some(_), _, true) => Err(FreqError::InvalidParameter(
                "histogram view cannot be combined with a cutoff".into(),
            )),
            (Some(cutoff), Some(order), false) => Ok(Operation::Butterworth { cutoff, order }),
            (Some(retain), None, false) => Ok(Operation::Cull { retain }),
            (None, Some(_), _) => Err(FreqError::InvalidParameter(
                "order requires a cutoff frequency".into(),
            )),
            (None, None, true) => Ok(Operation::Histogram),
            (None, None, false) => Ok(Operation::Identity),
        }
    }
}

/// Frequency-domain operation applied after the forward transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Leave the coefficients untouched
    Identity,
    /// Magnitude view expanded into `0..=255`
    Histogram,
    /// Keep the `retain + 1` largest coefficients
    Cull { retain: usize },
    /// Butterworth low-pass attenuation
    Butterworth { cutoff: usize, order: u32 },
}

impl Operation {
    /// Whether the forward transform must track min/max magnitudes
    pub fn tracks_magnitudes(&self) -> bool {
        matches!(self, Operation::Histogram)
    }

    /// Reject cutoffs outside the signal's coefficient range
    pub fn validate(&self, limits: CutoffLimits) -> FreqResult<()> {
        match *self {
            Operation::Identity | Operation::Histogram => Ok(()),
            Operation::Cull { retain } => {
                if retain > limits.max_retain {
                    return Err(FreqError::CutoffOutOfRange {
                        cutoff: retain,
                        min: 0,
                        max: limits.max_retain,
                    });
                }
                Ok(())
            }
            Operation::Butterworth { cutoff, order } => {
                if !(MIN_BUTTERWORTH_CUTOFF..=limits.max_radius).contains(&cutoff) {
                    return Err(FreqError::CutoffOutOfRange {
                        cutoff,
                        min: MIN_BUTTERWORTH_CUTOFF,
                        max: limits.max_radius,
                    });
                }
                if order < MIN_ORDER {
                    return Err(FreqError::InvalidOrder(order));
                }
                Ok(())
            }
        }
    }

    /// Suffix appended to the grid label once the operation has been applied
    pub fn label_suffix(&self) -> Option<String> {
        match *self {
            Operation::Cull { retain } => Some(format!("CF_[{retain}]")),
            Operation::Butterworth { cutoff, order } => {
                Some(format!("BUTTERWORTH_[{cutoff},{order}]"))
            }
            Operation::Identity | Operation::Histogram => None,
        }
    }
}

/// Valid cutoff range for one signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoffLimits {
    /// Largest Butterworth cutoff radius
    pub max_radius: usize,
    /// Largest culling retain-count
    pub max_retain: usize,
}

impl CutoffLimits {
    /// Limits for a 2D grid: the diagonal radius and the last cell index
    pub fn for_grid(dims: Dimensions) -> Self {
        let diagonal = ((dims.width * dims.width + dims.height * dims.height) as f64).sqrt();
        Self {
            max_radius: diagonal.floor() as usize,
            max_retain: dims.cell_count().saturating_sub(1),
        }
    }

    /// Limits for a 1D sequence of `len` samples
    pub fn for_sequence(len: usize) -> Self {
        Self {
            max_radius: len,
            max_retain: len.saturating_sub(1),
        }
    }
}
