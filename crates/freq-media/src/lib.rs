//! Signal adapters for the frequency editor
//!
//! Wires gray images and mono audio streams into the transform engine and
//! persists the reconstructed result.

pub mod audio_signal;
pub mod image_signal;
pub mod signal;

pub use audio_signal::AudioSignal;
pub use image_signal::ImageSignal;
pub use signal::*;
