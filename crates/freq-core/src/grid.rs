//! Coefficient grid container

use crate::consts::DC_DISPLAY_VALUE;
use crate::{Coord, Dimensions, FreqError, FreqResult};

/// Row-major grid of real-valued transform coefficients
///
/// The dimensions are fixed at creation. A 1D sequence is stored as a grid
/// with a single row. The label is used to derive output file names.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientGrid {
    dimensions: Dimensions,
    data: Vec<f64>,
    label: String,
}

impl CoefficientGrid {
    /// Create a zero-filled grid
    pub fn new(dimensions: Dimensions, label: impl Into<String>) -> FreqResult<Self> {
        Self::from_vec(dimensions, vec![0.0; dimensions.cell_count()], label)
    }

    /// Wrap existing row-major data
    pub fn from_vec(
        dimensions: Dimensions,
        data: Vec<f64>,
        label: impl Into<String>,
    ) -> FreqResult<Self> {
        if dimensions.is_empty() {
            return Err(FreqError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        if data.len() != dimensions.cell_count() {
            return Err(FreqError::BufferSizeMismatch {
                expected: dimensions.cell_count(),
                actual: data.len(),
            });
        }

        Ok(Self {
            dimensions,
            data,
            label: label.into(),
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, coord: Coord) -> f64 {
        self.data[self.dimensions.index(coord)]
    }

    pub fn set(&mut self, coord: Coord, value: f64) {
        let idx = self.dimensions.index(coord);
        self.data[idx] = value;
    }

    /// Zero-frequency coefficient
    pub fn dc(&self) -> f64 {
        self.data[0]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn push_label(&mut self, suffix: &str) {
        self.label.push_str(suffix);
    }

    /// Number of coefficients that are not exactly zero
    pub fn nonzero_count(&self) -> usize {
        self.data.iter().filter(|v| **v != 0.0).count()
    }

    /// Render the grid as 8-bit gray pixels
    ///
    /// Values saturate into `0..=255` and the DC cell is drawn at full
    /// brightness.
    pub fn to_display_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.data.iter().map(|v| *v as u8).collect();
        bytes[0] = DC_DISPLAY_VALUE;
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = CoefficientGrid::new(Dimensions::new(4, 3), "lena").unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.label(), "lena");
        assert_eq!(grid.nonzero_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        let result = CoefficientGrid::new(Dimensions::new(0, 8), "");
        assert!(matches!(
            result,
            Err(FreqError::InvalidDimensions {
                width: 0,
                height: 8
            })
        ));
    }

    #[test]
    fn test_size_mismatch() {
        let result = CoefficientGrid::from_vec(Dimensions::new(2, 2), vec![1.0; 3], "");
        assert!(matches!(
            result,
            Err(FreqError::BufferSizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_get_set() {
        let mut grid = CoefficientGrid::new(Dimensions::new(3, 2), "").unwrap();
        grid.set(Coord::new(2, 1), 7.5);
        assert_eq!(grid.get(Coord::new(2, 1)), 7.5);
        assert_eq!(grid.as_slice()[5], 7.5);
    }

    #[test]
    fn test_display_bytes() {
        let data = vec![1000.0, -4.0, 12.7, 300.0];
        let grid = CoefficientGrid::from_vec(Dimensions::new(2, 2), data, "").unwrap();
        assert_eq!(grid.to_display_bytes(), vec![255, 0, 12, 255]);
    }
}
