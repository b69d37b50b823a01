//! Core types and utilities for the frequency editor
//!
//! This crate provides the fundamental data structures shared by the transform
//! engine and the signal adapters, including the coefficient grid, typed
//! transform options, sample quantization and error types.

pub mod consts;
pub mod error;
pub mod grid;
pub mod options;
pub mod types;

pub use error::{FreqError, FreqResult};
pub use grid::*;
pub use options::*;
pub use types::*;
