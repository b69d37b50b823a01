//! Mono audio adapter

use crate::signal::{base_name, codec_error, resolve_operation, timestamped_path, Signal};
use freq_core::consts::{AUDIO_BITS_PER_SAMPLE, AUDIO_FLOAT_SCALE, DCT_LABEL_SUFFIX};
use freq_core::{
    CoefficientGrid, CutoffLimits, FreqError, FreqResult, Operation, Sample, TransformOptions,
};
use freq_transform::{
    apply_operation, forward_1d, inverse_1d, linear_distance, MinMaxTracker, TileExecutor,
};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Mono sample buffer on the 16-bit scale, with its sample rate
pub struct AudioSignal {
    samples: Vec<f64>,
    sample_rate: u32,
    name: String,
    executor: Arc<TileExecutor>,
}

impl AudioSignal {
    /// Decode a WAV file, mixing multiple channels down to mono
    pub fn open<P: AsRef<Path>>(path: P) -> FreqResult<Self> {
        let path = path.as_ref();
        let is_wav = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("wav"));
        if !is_wav {
            return Err(FreqError::UnsupportedFormat(path.display().to_string()));
        }

        let mut reader = WavReader::open(path).map_err(codec_error)?;
        let spec = reader.spec();
        let interleaved: Vec<f64> = match spec.sample_format {
            SampleFormat::Int => {
                let shift = AUDIO_BITS_PER_SAMPLE as i32 - spec.bits_per_sample as i32;
                let scale = 2f64.powi(shift);
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f64 * scale))
                    .collect::<Result<_, _>>()
                    .map_err(codec_error)?
            }
            SampleFormat::Float => reader
                .samples::<f32>()
                .map(|s| s.map(|v| v as f64 * AUDIO_FLOAT_SCALE))
                .collect::<Result<_, _>>()
                .map_err(codec_error)?,
        };

        let channels = usize::from(spec.channels.max(1));
        let samples: Vec<f64> = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
            .collect();

        info!(
            "opened {} ({} samples at {} Hz, {} channel(s))",
            path.display(),
            samples.len(),
            spec.sample_rate,
            channels
        );

        Self::from_samples(samples, spec.sample_rate, base_name(path))
    }

    /// Wrap mono samples on the 16-bit scale
    pub fn from_samples(
        samples: Vec<f64>,
        sample_rate: u32,
        name: impl Into<String>,
    ) -> FreqResult<Self> {
        if samples.is_empty() {
            return Err(FreqError::InvalidDimensions {
                width: 0,
                height: 1,
            });
        }

        Ok(Self {
            samples,
            sample_rate,
            name: name.into(),
            executor: Arc::new(TileExecutor::new()?),
        })
    }

    /// Share an executor with other signals
    pub fn with_executor(mut self, executor: Arc<TileExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl Signal for AudioSignal {
    fn name(&self) -> &str {
        &self.name
    }

    fn cutoff_limits(&self) -> CutoffLimits {
        CutoffLimits::for_sequence(self.samples.len())
    }

    fn forward(&self, options: &TransformOptions) -> FreqResult<CoefficientGrid> {
        let operation = resolve_operation(options, self.cutoff_limits())?;
        if operation == Operation::Histogram {
            return Err(spectrum_unavailable());
        }
        let tracker = operation.tracks_magnitudes().then(MinMaxTracker::new);

        let mut grid = forward_1d(
            &self.executor,
            &self.samples,
            tracker.as_ref(),
            format!("{}{DCT_LABEL_SUFFIX}", self.name),
        )?;

        let bounds = tracker.map(MinMaxTracker::into_bounds).unwrap_or_default();
        apply_operation(&self.executor, &mut grid, operation, bounds, linear_distance)?;
        Ok(grid)
    }

    fn inverse(&mut self, grid: CoefficientGrid) -> FreqResult<()> {
        if grid.len() != self.samples.len() {
            return Err(FreqError::BufferSizeMismatch {
                expected: self.samples.len(),
                actual: grid.len(),
            });
        }

        self.samples = inverse_1d(&self.executor, &grid)?
            .into_iter()
            .map(|v| i16::quantize(v).as_f64())
            .collect();
        self.name = grid.label().to_string();
        Ok(())
    }

    fn supports_spectrum(&self) -> bool {
        false
    }

    fn visualize(&mut self, _grid: CoefficientGrid) -> FreqResult<()> {
        Err(spectrum_unavailable())
    }

    fn save(&self, dir: &Path) -> FreqResult<PathBuf> {
        let path = timestamped_path(dir, &self.name, "wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: AUDIO_BITS_PER_SAMPLE,
            sample_format: SampleFormat::Int,
        };

        let mut writer = WavWriter::create(&path, spec).map_err(codec_error)?;
        for s in &self.samples {
            writer.write_sample(i16::quantize(*s)).map_err(codec_error)?;
        }
        writer.finalize().map_err(codec_error)?;

        info!("saved {}", path.display());
        Ok(path)
    }
}

fn spectrum_unavailable() -> FreqError {
    FreqError::InvalidParameter("spectrum view is only available for images".into())
}
