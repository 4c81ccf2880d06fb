//! Texture statistics and feature vector extraction
//!
//! Reduces a background-stripped co-occurrence matrix to six scalar
//! statistics per (distance, angle) plane and concatenates them into one
//! fixed-length, always-finite feature vector per tile.

use crate::analysis::glcm::{Angle, cooccurrence_matrix, strip_background_level};
use crate::filters::grayscale::gray_levels;
use crate::io::configuration::{GLCM_DISTANCE, GRAY_LEVELS};
use crate::io::error::{PipelineError, Result};
use ndarray::{Array1, Array2, Array3, Array4, ArrayView2, Axis};

/// Co-occurrence texture statistic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    /// Intensity contrast, weighting pairs by squared level difference
    Contrast,
    /// Absolute level difference weighting
    Dissimilarity,
    /// Inverse difference moment; 1.0 for a single populated level
    Homogeneity,
    /// Angular second moment, the sum of squared pair probabilities
    Asm,
    /// Square root of the angular second moment
    Energy,
    /// Linear dependency of paired gray levels
    Correlation,
}

impl Statistic {
    /// All statistics in feature-vector order
    pub const ALL: [Self; 6] = [
        Self::Contrast,
        Self::Dissimilarity,
        Self::Homogeneity,
        Self::Asm,
        Self::Energy,
        Self::Correlation,
    ];
}

/// Length of every extracted feature vector
pub const FEATURE_COUNT: usize = Statistic::ALL.len() * Angle::ALL.len();

/// Texture extraction parameters
#[derive(Debug, Clone, Copy)]
pub struct TextureConfig {
    /// Pixel offset distance for co-occurrence pairs
    pub distance: usize,
    /// Number of quantized gray levels
    pub levels: usize,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            distance: GLCM_DISTANCE,
            levels: GRAY_LEVELS,
        }
    }
}

/// Compute one statistic for every (distance, angle) plane of a matrix
///
/// Each plane is normalized to pair probabilities before the statistic is
/// evaluated. A plane with no counts yields NaN, which the feature
/// extractor later replaces with zero.
pub fn texture_property(glcm: &Array4<u64>, statistic: Statistic) -> Array2<f64> {
    let (_levels, _cols, n_distances, n_angles) = glcm.dim();
    let mut out = Array2::zeros((n_distances, n_angles));
    for ((d, a), cell) in out.indexed_iter_mut() {
        let plane = glcm.index_axis(Axis(3), a).index_axis_move(Axis(2), d);
        *cell = plane_statistic(&plane, statistic);
    }
    out
}

/// Extract the texture feature vector of a background-suppressed tile
///
/// Quantizes the tile to gray levels, builds the symmetric co-occurrence
/// matrix, strips the background level and concatenates all statistics in
/// statistic-major, angle-minor order. Non-finite values are replaced with
/// zero so vectors stay comparable across tiles, including fully background
/// ones.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidTileShape`] if the tile does not have
/// exactly three channels
pub fn extract_features(tile: &Array3<u8>, config: &TextureConfig) -> Result<Array1<f64>> {
    let shape = tile.dim();
    if shape.2 != 3 {
        return Err(PipelineError::InvalidTileShape { shape });
    }

    let gray = gray_levels(tile);
    let glcm = cooccurrence_matrix(&gray, &[config.distance], config.levels);
    let reduced = strip_background_level(&glcm);

    let mut values = Vec::with_capacity(FEATURE_COUNT);
    for statistic in Statistic::ALL {
        let props = texture_property(&reduced, statistic);
        values.extend(props.iter().map(|&v| if v.is_finite() { v } else { 0.0 }));
    }
    Ok(Array1::from(values))
}

fn plane_statistic(plane: &ArrayView2<'_, u64>, statistic: Statistic) -> f64 {
    let total: u64 = plane.iter().sum();
    if total == 0 {
        return f64::NAN;
    }
    let norm = total as f64;

    match statistic {
        Statistic::Contrast => weighted_sum(plane, norm, |i, j| (i - j).powi(2)),
        Statistic::Dissimilarity => weighted_sum(plane, norm, |i, j| (i - j).abs()),
        Statistic::Homogeneity => weighted_sum(plane, norm, |i, j| 1.0 / (1.0 + (i - j).powi(2))),
        Statistic::Asm => angular_second_moment(plane, norm),
        Statistic::Energy => angular_second_moment(plane, norm).sqrt(),
        Statistic::Correlation => correlation(plane, norm),
    }
}

fn weighted_sum(plane: &ArrayView2<'_, u64>, norm: f64, weight: impl Fn(f64, f64) -> f64) -> f64 {
    plane
        .indexed_iter()
        .map(|((i, j), &count)| (count as f64 / norm) * weight(i as f64, j as f64))
        .sum()
}

fn angular_second_moment(plane: &ArrayView2<'_, u64>, norm: f64) -> f64 {
    plane
        .iter()
        .map(|&count| (count as f64 / norm).powi(2))
        .sum()
}

fn correlation(plane: &ArrayView2<'_, u64>, norm: f64) -> f64 {
    let mut mean_i = 0.0;
    let mut mean_j = 0.0;
    for ((i, j), &count) in plane.indexed_iter() {
        let p = count as f64 / norm;
        mean_i = (i as f64).mul_add(p, mean_i);
        mean_j = (j as f64).mul_add(p, mean_j);
    }

    let mut var_i = 0.0;
    let mut var_j = 0.0;
    let mut covariance = 0.0;
    for ((i, j), &count) in plane.indexed_iter() {
        let p = count as f64 / norm;
        let di = i as f64 - mean_i;
        let dj = j as f64 - mean_j;
        var_i = (di * di).mul_add(p, var_i);
        var_j = (dj * dj).mul_add(p, var_j);
        covariance = (di * dj).mul_add(p, covariance);
    }

    let (std_i, std_j) = (var_i.sqrt(), var_j.sqrt());
    // Zero-variance marginals carry no linear structure to measure; the
    // statistic is defined as full correlation in that case
    if std_i < 1e-15 || std_j < 1e-15 {
        return 1.0;
    }
    covariance / (std_i * std_j)
}
