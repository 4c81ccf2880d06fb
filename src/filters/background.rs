//! Edge-density background masking
//!
//! Scanner background is smooth: after a wide blur of the edge-magnitude
//! map its local activity stays near zero, while specimen regions keep
//! texture. Pixels at or below the activity threshold are zeroed across all
//! channels. The decision is per-pixel; isolated smooth specimen pixels are
//! an accepted loss.

use crate::filters::gaussian::gaussian_blur;
use crate::filters::grayscale::luminance;
use crate::filters::sobel::sobel_magnitude;
use crate::io::configuration::{BACKGROUND_SIGMA, BACKGROUND_THRESHOLD};
use ndarray::{Array2, Array3};

/// Tuning for background suppression
#[derive(Debug, Clone, Copy)]
pub struct BackgroundConfig {
    /// Gaussian sigma applied to the edge-magnitude field
    pub sigma: f64,
    /// Activity value at or below which a pixel counts as background
    pub threshold: f64,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            sigma: BACKGROUND_SIGMA,
            threshold: BACKGROUND_THRESHOLD,
        }
    }
}

/// Compute the smoothed edge-activity field of a tile
///
/// Grayscale conversion, Sobel magnitude and a wide Gaussian blur, in that
/// order. Background regions come out near zero; textured regions stay
/// above the suppression threshold.
pub fn activity_field(tile: &Array3<u8>, config: &BackgroundConfig) -> Array2<f64> {
    let gray = luminance(tile);
    let edges = sobel_magnitude(&gray);
    gaussian_blur(&edges, config.sigma)
}

/// Zero background pixels of a tile, returning a new tile
///
/// Every pixel whose smoothed activity is at or below the threshold has all
/// three channels set to zero; foreground pixels are copied unchanged. The
/// source tile is never mutated.
pub fn suppress_background(tile: &Array3<u8>, config: &BackgroundConfig) -> Array3<u8> {
    let activity = activity_field(tile, config);

    let mut suppressed = tile.clone();
    for ((i, j), &value) in activity.indexed_iter() {
        if value <= config.threshold {
            for c in 0..suppressed.len_of(ndarray::Axis(2)) {
                if let Some(channel) = suppressed.get_mut((i, j, c)) {
                    *channel = 0;
                }
            }
        }
    }
    suppressed
}
