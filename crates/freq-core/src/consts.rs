//! Constants used throughout the frequency editor

/// Upper bound of the display range used by histogram expansion
pub const HISTOGRAM_RANGE: f64 = 255.0;

/// Brightness of the DC cell in a rendered spectrum
pub const DC_DISPLAY_VALUE: u8 = 0xff;

/// Worker threads spawned per unit of hardware parallelism
pub const WORKERS_PER_CORE: usize = 2;

/// Minimum Butterworth order
pub const MIN_ORDER: u32 = 1;

/// Minimum Butterworth cutoff radius
pub const MIN_BUTTERWORTH_CUTOFF: usize = 1;

/// Suffix appended to a signal name by the forward transform
pub const DCT_LABEL_SUFFIX: &str = "_DCT_";

/// Bit depth of reconstructed audio
pub const AUDIO_BITS_PER_SAMPLE: u16 = 16;

/// Scale applied to floating point audio samples
pub const AUDIO_FLOAT_SCALE: f64 = 32767.0;
