//! 1D DCT kernel
//!
//! Orthonormal DCT-II (forward) and DCT-III (inverse) computed by direct
//! summation. Element access is supplied by the caller so the same kernel
//! drives row passes, column passes and plain sequences.

use freq_core::TransformRange;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Receives the magnitude of each coefficient produced by a pass
pub trait MagnitudeObserver: Sync {
    fn observe(&self, magnitude: f64);
}

/// Observer that discards every magnitude
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl MagnitudeObserver for NoObserver {
    #[inline]
    fn observe(&self, _magnitude: f64) {}
}

/// Normalization factor `sqrt(2 / N)` for an axis of length `len`
#[inline]
pub fn axis_scale(len: usize) -> f64 {
    (2.0 / len as f64).sqrt()
}

/// Weight `C(k)`: `1/sqrt(2)` for the DC term, `1` otherwise
#[inline]
pub fn dc_weight(k: usize) -> f64 {
    if k == 0 {
        FRAC_1_SQRT_2
    } else {
        1.0
    }
}

#[inline]
fn basis(len: usize, n: usize, k: usize) -> f64 {
    (PI / len as f64 * (n as f64 + 0.5) * k as f64).cos()
}

/// Forward coefficient `X[k]` of an axis of length `len`
///
/// `access(n)` yields the sample at index `n` for every `n` in `range`.
pub fn dct_coefficient<A, O>(
    k: usize,
    len: usize,
    range: TransformRange,
    access: A,
    observer: &O,
) -> f64
where
    A: Fn(usize) -> f64,
    O: MagnitudeObserver + ?Sized,
{
    debug_assert!(range.high <= len, "range {range:?} exceeds axis {len}");

    let sum: f64 = range.iter().map(|n| access(n) * basis(len, n, k)).sum();
    let value = axis_scale(len) * dc_weight(k) * sum;

    observer.observe(value.abs());
    value
}

/// Reconstructed sample `x[n]` of an axis of length `len`
///
/// `access(k)` yields the coefficient at index `k` for every `k` in `range`.
pub fn idct_sample<A, O>(
    n: usize,
    len: usize,
    range: TransformRange,
    access: A,
    observer: &O,
) -> f64
where
    A: Fn(usize) -> f64,
    O: MagnitudeObserver + ?Sized,
{
    debug_assert!(range.high <= len, "range {range:?} exceeds axis {len}");

    let sum: f64 = range
        .iter()
        .map(|k| access(k) * dc_weight(k) * basis(len, n, k))
        .sum();
    let value = axis_scale(len) * sum;

    observer.observe(value.abs());
    value
}

/// Forward transform of a whole sequence
pub fn dct_1d(input: &[f64]) -> Vec<f64> {
    let len = input.len();
    let range = TransformRange::full(len);
    (0..len)
        .map(|k| dct_coefficient(k, len, range, |n| input[n], &NoObserver))
        .collect()
}

/// Inverse transform of a whole sequence
pub fn idct_1d(input: &[f64]) -> Vec<f64> {
    let len = input.len();
    let range = TransformRange::full(len);
    (0..len)
        .map(|n| idct_sample(n, len, range, |k| input[k], &NoObserver))
        .collect()
}
