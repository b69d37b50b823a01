//! Core types for the frequency editor

use num_traits::{Bounded, NumCast, ToPrimitive};

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Dimensions of a 1D sequence stored as a single row
    pub fn row(len: usize) -> Self {
        Self::new(len, 1)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Row-major index of a coordinate
    pub fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord), "{coord:?} outside {self:?}");
        coord.y * self.width + coord.x
    }

    /// Coordinate of a row-major index
    pub fn coord(&self, index: usize) -> Coord {
        debug_assert!(index < self.cell_count());
        Coord::new(index % self.width, index / self.width)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }
}

/// Position of a cell: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether this is the zero-frequency cell
    pub fn is_dc(&self) -> bool {
        *self == Self::ORIGIN
    }
}

/// Half-open summation interval `[low, high)` for one kernel application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformRange {
    pub low: usize,
    pub high: usize,
}

impl TransformRange {
    pub fn new(low: usize, high: usize) -> Self {
        debug_assert!(low <= high, "inverted range {low}..{high}");
        Self { low, high }
    }

    /// The whole axis `[0, len)`
    pub fn full(len: usize) -> Self {
        Self::new(0, len)
    }

    pub fn len(&self) -> usize {
        self.high - self.low
    }

    pub fn is_empty(&self) -> bool {
        self.low == self.high
    }

    pub fn iter(&self) -> std::ops::Range<usize> {
        self.low..self.high
    }
}

/// Integer sample type produced by the inverse transform
pub trait Sample: Copy + NumCast + Bounded {
    /// Round to the nearest integer and clamp into the representable range
    fn quantize(value: f64) -> Self {
        let lo = ToPrimitive::to_f64(&Self::min_value()).unwrap_or(f64::MIN);
        let hi = ToPrimitive::to_f64(&Self::max_value()).unwrap_or(f64::MAX);
        let v = value.round();
        let v = if v.is_nan() { 0.0 } else { v.clamp(lo, hi) };
        NumCast::from(v).unwrap_or_else(Self::min_value)
    }

    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(0.0)
    }
}

impl Sample for u8 {}

impl Sample for i16 {}
