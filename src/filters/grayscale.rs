//! Luminance-weighted grayscale conversion

use crate::io::configuration::LUMINANCE_WEIGHTS;
use ndarray::{Array2, Array3};

/// Collapse a 3-channel tile to normalized luminance in [0, 1]
///
/// Applies the standard red/green/blue luminance weights to each pixel and
/// scales by the 8-bit range, matching the grayscale conversion the rest of
/// the suppression chain is calibrated against.
pub fn luminance(tile: &Array3<u8>) -> Array2<f64> {
    weighted_collapse(tile).mapv(|value| value / 255.0)
}

/// Collapse a 3-channel tile to quantized gray levels in [0, 255]
///
/// The luminance-weighted sum of the raw channel values is rounded to the
/// nearest integer level. Pixels zeroed by background suppression collapse
/// to level 0.
pub fn gray_levels(tile: &Array3<u8>) -> Array2<u8> {
    weighted_collapse(tile).mapv(|value| value.round() as u8)
}

fn weighted_collapse(tile: &Array3<u8>) -> Array2<f64> {
    let (rows, cols, _channels) = tile.dim();
    let mut gray = Array2::zeros((rows, cols));
    for ((i, j), cell) in gray.indexed_iter_mut() {
        let mut sum = 0.0;
        for (c, weight) in LUMINANCE_WEIGHTS.iter().enumerate() {
            let value = tile.get((i, j, c)).copied().unwrap_or(0);
            sum = weight.mul_add(f64::from(value), sum);
        }
        *cell = sum;
    }
    gray
}
