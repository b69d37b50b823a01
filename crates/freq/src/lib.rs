//! # Frequency Editor
//!
//! Moves gray images and mono audio into the orthonormal DCT domain, edits
//! the coefficients and reconstructs the signal.
//!
//! ## Quick Start
//!
//! ### Low-pass filtering an image
//!
//! ```no_run
//! use freq::{ImageSignal, Signal, TransformOptions};
//! use std::path::Path;
//!
//! let mut image = ImageSignal::open("input.png").unwrap();
//! let options = TransformOptions::new().cut_frequency(40).order(2);
//!
//! let grid = image.forward(&options).unwrap();
//! image.inverse(grid).unwrap();
//! image.save(Path::new(".")).unwrap();
//! ```
//!
//! ### Viewing the spectrum
//!
//! ```no_run
//! use freq::{open_signal, Signal, TransformOptions};
//! use std::path::Path;
//!
//! let mut signal = open_signal(Path::new("input.jpg")).unwrap();
//! let grid = signal.forward(&TransformOptions::new().histogram(true)).unwrap();
//! signal.visualize(grid).unwrap();
//! signal.save(Path::new(".")).unwrap();
//! ```
//!
//! ## Operations
//!
//! - Butterworth low-pass attenuation by radial (images) or linear (audio) distance
//! - Compression by keeping only the largest-magnitude coefficients
//! - Histogram-expanded magnitude view of the spectrum
//!
//! All passes run on a fixed worker pool and block until complete.

// Re-export core types
pub use freq_core::{
    CoefficientGrid, Coord, CutoffLimits, Dimensions, FreqError, FreqResult, Operation, Sample,
    TransformOptions, TransformRange,
};

// Re-export the engine
pub use freq_transform::{
    apply_butterworth, apply_operation, cull, dct_1d, forward_1d, forward_2d, histogram_expand,
    idct_1d, inverse_1d, inverse_2d, linear_distance, radial_distance, MinMax, MinMaxTracker,
    TileExecutor,
};

// Re-export signal adapters
pub use freq_media::{open_signal, AudioSignal, ImageSignal, Signal, SignalKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
