//! Error types for frequency editor operations

use thiserror::Error;

/// Result type for frequency editor operations
pub type FreqResult<T> = Result<T, FreqError>;

/// Errors that can occur while transforming, filtering or persisting a signal
#[derive(Error, Debug)]
pub enum FreqError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Cutoff {cutoff} out of range: expected {min}..={max}")]
    CutoffOutOfRange { cutoff: usize, min: usize, max: usize },

    #[error("Invalid Butterworth order: {0}")]
    InvalidOrder(u32),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Codec error: {0}")]
    Codec(String),

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
