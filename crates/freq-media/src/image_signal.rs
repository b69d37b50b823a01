//! Gray image adapter

use crate::signal::{base_name, codec_error, resolve_operation, timestamped_path, Signal};
use freq_core::consts::DCT_LABEL_SUFFIX;
use freq_core::{
    CoefficientGrid, CutoffLimits, Dimensions, FreqError, FreqResult, Sample, TransformOptions,
};
use freq_transform::{
    apply_operation, forward_2d, inverse_2d, radial_distance, MinMaxTracker, TileExecutor,
};
use image::{GrayImage, ImageFormat};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 8-bit single-channel image
pub struct ImageSignal {
    pixels: GrayImage,
    name: String,
    executor: Arc<TileExecutor>,
}

impl ImageSignal {
    /// Decode a PNG, JPEG or TIFF file and convert it to gray
    pub fn open<P: AsRef<Path>>(path: P) -> FreqResult<Self> {
        let path = path.as_ref();
        let format = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("png") => ImageFormat::Png,
            Some("jpg" | "jpeg") => ImageFormat::Jpeg,
            Some("tif" | "tiff") => ImageFormat::Tiff,
            _ => return Err(FreqError::UnsupportedFormat(path.display().to_string())),
        };

        let reader = std::io::BufReader::new(std::fs::File::open(path)?);
        let decoded = image::load(reader, format).map_err(codec_error)?;
        info!(
            "opened {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );

        Self::from_gray(decoded.to_luma8(), base_name(path))
    }

    /// Wrap an existing gray image
    pub fn from_gray(pixels: GrayImage, name: impl Into<String>) -> FreqResult<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(FreqError::InvalidDimensions {
                width: pixels.width() as usize,
                height: pixels.height() as usize,
            });
        }

        Ok(Self {
            pixels,
            name: name.into(),
            executor: Arc::new(TileExecutor::new()?),
        })
    }

    /// Wrap row-major intensities
    pub fn from_raw(
        width: u32,
        height: u32,
        data: Vec<u8>,
        name: impl Into<String>,
    ) -> FreqResult<Self> {
        let expected = width as usize * height as usize;
        let actual = data.len();
        let pixels = GrayImage::from_raw(width, height, data)
            .ok_or(FreqError::BufferSizeMismatch { expected, actual })?;
        Self::from_gray(pixels, name)
    }

    /// Share an executor with other signals
    pub fn with_executor(mut self, executor: Arc<TileExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.pixels.width() as usize, self.pixels.height() as usize)
    }

    pub fn pixels(&self) -> &GrayImage {
        &self.pixels
    }

    fn replace_pixels(&mut self, dims: Dimensions, data: Vec<u8>) -> FreqResult<()> {
        let actual = data.len();
        self.pixels = GrayImage::from_raw(dims.width as u32, dims.height as u32, data).ok_or(
            FreqError::BufferSizeMismatch {
                expected: dims.cell_count(),
                actual,
            },
        )?;
        Ok(())
    }
}

impl Signal for ImageSignal {
    fn name(&self) -> &str {
        &self.name
    }

    fn cutoff_limits(&self) -> CutoffLimits {
        CutoffLimits::for_grid(self.dimensions())
    }

    fn forward(&self, options: &TransformOptions) -> FreqResult<CoefficientGrid> {
        let operation = resolve_operation(options, self.cutoff_limits())?;
        let dims = self.dimensions();
        let raw = self.pixels.as_raw();
        let tracker = operation.tracks_magnitudes().then(MinMaxTracker::new);

        let mut grid = forward_2d(
            &self.executor,
            dims,
            |c| raw[dims.index(c)].as_f64(),
            tracker.as_ref(),
            format!("{}{DCT_LABEL_SUFFIX}", self.name),
        )?;

        let bounds = tracker.map(MinMaxTracker::into_bounds).unwrap_or_default();
        apply_operation(&self.executor, &mut grid, operation, bounds, radial_distance)?;
        Ok(grid)
    }

    fn inverse(&mut self, grid: CoefficientGrid) -> FreqResult<()> {
        let dims = self.dimensions();
        if grid.dimensions() != dims {
            return Err(FreqError::BufferSizeMismatch {
                expected: dims.cell_count(),
                actual: grid.len(),
            });
        }

        let samples = inverse_2d(&self.executor, &grid);
        let bytes = samples.into_iter().map(u8::quantize).collect();
        self.replace_pixels(dims, bytes)?;
        self.name = grid.label().to_string();
        Ok(())
    }

    fn visualize(&mut self, grid: CoefficientGrid) -> FreqResult<()> {
        self.replace_pixels(grid.dimensions(), grid.to_display_bytes())?;
        self.name = grid.label().to_string();
        Ok(())
    }

    fn save(&self, dir: &Path) -> FreqResult<PathBuf> {
        let path = timestamped_path(dir, &self.name, "png");
        self.pixels
            .save_with_format(&path, ImageFormat::Png)
            .map_err(codec_error)?;
        info!("saved {}", path.display());
        Ok(path)
    }
}
