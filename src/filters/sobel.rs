//! Sobel gradient-magnitude edge maps

use ndarray::Array2;

// Row-gradient weights; the column kernel is its transpose. The 1/4 scale
// keeps responses within the unit range of the input field, which the
// background threshold presumes.
const ROW_KERNEL: [[f64; 3]; 3] = [
    [0.25, 0.5, 0.25],
    [0.0, 0.0, 0.0],
    [-0.25, -0.5, -0.25],
];

/// Compute the Sobel edge magnitude of a unit-range field
///
/// Convolves with the 3x3 Sobel pair under a reflected boundary and returns
/// `sqrt(gx^2 + gy^2) / sqrt(2)` per pixel, so a full-swing step edge maps
/// to at most 1.0.
pub fn sobel_magnitude(field: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = field.dim();
    let mut magnitude = Array2::zeros((rows, cols));

    for ((i, j), out) in magnitude.indexed_iter_mut() {
        let mut row_grad = 0.0;
        let mut col_grad = 0.0;
        for (ki, kernel_row) in ROW_KERNEL.iter().enumerate() {
            for (kj, &weight) in kernel_row.iter().enumerate() {
                let si = reflect(i as isize + ki as isize - 1, rows);
                let sj = reflect(j as isize + kj as isize - 1, cols);
                let value = field.get((si, sj)).copied().unwrap_or(0.0);
                row_grad = weight.mul_add(value, row_grad);
                // Transposed tap for the column gradient
                let ti = reflect(i as isize + kj as isize - 1, rows);
                let tj = reflect(j as isize + ki as isize - 1, cols);
                let tvalue = field.get((ti, tj)).copied().unwrap_or(0.0);
                col_grad = weight.mul_add(tvalue, col_grad);
            }
        }
        *out = row_grad.hypot(col_grad) / std::f64::consts::SQRT_2;
    }
    magnitude
}

// Half-sample symmetric reflection: indices just outside the field mirror
// the border pixels
fn reflect(index: isize, len: usize) -> usize {
    let last = len as isize - 1;
    let reflected = if index < 0 {
        -index - 1
    } else if index > last {
        2 * len as isize - index - 1
    } else {
        index
    };
    reflected.clamp(0, last) as usize
}
