//! Separable Gaussian smoothing

use crate::io::configuration::GAUSSIAN_TRUNCATE;
use ndarray::Array2;

/// Blur a field with a normalized Gaussian kernel
///
/// The blur runs as two separable passes (rows, then columns) with a kernel
/// truncated at [`GAUSSIAN_TRUNCATE`] standard deviations and a replicated
/// edge boundary. A non-positive sigma returns the field unchanged.
pub fn gaussian_blur(field: &Array2<f64>, sigma: f64) -> Array2<f64> {
    if sigma <= 0.0 {
        return field.clone();
    }

    let kernel = gaussian_kernel(sigma);
    let horizontal = convolve_axis(field, &kernel, false);
    convolve_axis(&horizontal, &kernel, true)
}

/// Build the normalized symmetric Gaussian tap table for a sigma
///
/// The returned taps cover offsets `-radius..=radius` where the radius is
/// `truncate * sigma` rounded to the nearest pixel; taps sum to 1.
pub fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = GAUSSIAN_TRUNCATE.mul_add(sigma, 0.5) as usize;
    let taps: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let offset = i as f64 - radius as f64;
            (-0.5 * (offset / sigma).powi(2)).exp()
        })
        .collect();
    let total: f64 = taps.iter().sum();
    taps.into_iter().map(|tap| tap / total).collect()
}

fn convolve_axis(field: &Array2<f64>, kernel: &[f64], vertical: bool) -> Array2<f64> {
    let (rows, cols) = field.dim();
    let radius = kernel.len() / 2;
    let mut out = Array2::zeros((rows, cols));

    for ((i, j), cell) in out.indexed_iter_mut() {
        let mut sum = 0.0;
        for (k, &weight) in kernel.iter().enumerate() {
            let offset = k as isize - radius as isize;
            let (si, sj) = if vertical {
                (clamp_index(i as isize + offset, rows), j)
            } else {
                (i, clamp_index(j as isize + offset, cols))
            };
            let value = field.get((si, sj)).copied().unwrap_or(0.0);
            sum = weight.mul_add(value, sum);
        }
        *cell = sum;
    }
    out
}

// Replicated edge boundary: out-of-range indices take the nearest border
// pixel
fn clamp_index(index: isize, len: usize) -> usize {
    index.clamp(0, len as isize - 1) as usize
}
