//! Transform operations for the frequency editor
//!
//! This crate implements the orthonormal DCT-II/DCT-III kernel, its separable
//! application over 2D grids and 1D sequences, the parallel tile executor that
//! drives every pass, and the frequency-domain filters built on top of it:
//! Butterworth attenuation, magnitude-ranked culling and histogram expansion.

pub mod butterworth;
pub mod culling;
pub mod executor;
pub mod histogram;
pub mod kernel;
pub mod operation;
pub mod separable;
pub mod tracker;

pub use butterworth::*;
pub use culling::*;
pub use executor::*;
pub use histogram::*;
pub use kernel::*;
pub use operation::*;
pub use separable::*;
pub use tracker::*;
