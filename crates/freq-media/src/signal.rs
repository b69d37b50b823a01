//! The signal capability set shared by every variant

use crate::audio_signal::AudioSignal;
use crate::image_signal::ImageSignal;
use freq_core::{
    CoefficientGrid, CutoffLimits, FreqError, FreqResult, Operation, TransformOptions,
};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// A signal that can be moved into the DCT domain and back
pub trait Signal {
    /// Name used to derive output file names
    fn name(&self) -> &str;

    /// Valid cutoff range for this signal
    fn cutoff_limits(&self) -> CutoffLimits;

    /// Forward transform followed by the operation selected by `options`
    ///
    /// Options are validated before any transform work starts.
    fn forward(&self, options: &TransformOptions) -> FreqResult<CoefficientGrid>;

    /// Reconstruct the signal from `grid`, replacing the current samples
    fn inverse(&mut self, grid: CoefficientGrid) -> FreqResult<()>;

    /// Whether [`Signal::visualize`] can render this signal's coefficients
    fn supports_spectrum(&self) -> bool {
        true
    }

    /// Replace the signal with a displayable rendering of `grid`
    fn visualize(&mut self, grid: CoefficientGrid) -> FreqResult<()>;

    /// Persist the signal in `dir`, returning the written path
    fn save(&self, dir: &Path) -> FreqResult<PathBuf>;
}

/// Signal variant selected from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Image,
    Audio,
}

impl SignalKind {
    pub fn from_path(path: &Path) -> FreqResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "tif" | "tiff" => Ok(SignalKind::Image),
            "wav" => Ok(SignalKind::Audio),
            _ => Err(FreqError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Open the signal stored at `path`
pub fn open_signal(path: &Path) -> FreqResult<Box<dyn Signal>> {
    Ok(match SignalKind::from_path(path)? {
        SignalKind::Image => Box::new(ImageSignal::open(path)?),
        SignalKind::Audio => Box::new(AudioSignal::open(path)?),
    })
}

/// Resolve `options` and check them against `limits`
pub fn resolve_operation(
    options: &TransformOptions,
    limits: CutoffLimits,
) -> FreqResult<Operation> {
    let operation = options.operation()?;
    operation.validate(limits)?;
    Ok(operation)
}

/// File name up to its first dot
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or_default()
        .to_string()
}

/// `<dir>/<name>_<unix seconds>.<ext>`
pub(crate) fn timestamped_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    dir.join(format!("{name}_{secs}.{ext}"))
}

pub(crate) fn codec_error(e: impl std::fmt::Display) -> FreqError {
    FreqError::Codec(e.to_string())
}
