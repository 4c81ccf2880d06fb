//! Row-major flattening of 2-D tile stacks
//!
//! Reshapes a stack of 2-D tiles into one flat row per tile so downstream
//! matrix consumers (for example cluster-center post-processing) can treat
//! each tile as a vector. The reshape is lossless and invertible given the
//! original tile extent.

use crate::io::error::{Result, computation_error};
use ndarray::{Array2, Array3, ArrayView1};
use num_traits::Zero;

/// Flatten each 2-D tile of a stack into one row-major row
///
/// The input axes are (stack index, rows, cols); the output axes are
/// (stack index, rows * cols). Row `i` of the output is the row-major
/// flattening of tile `i`.
pub fn flatten_stack<T>(stack: &Array3<T>) -> Array2<T>
where
    T: Copy + Zero,
{
    let (count, rows, cols) = stack.dim();
    let mut flat = Array2::zeros((count, rows * cols));
    for ((n, i, j), &value) in stack.indexed_iter() {
        if let Some(cell) = flat.get_mut((n, i * cols + j)) {
            *cell = value;
        }
    }
    flat
}

/// Flatten a 3-channel tile into a (pixel, channel) table
///
/// Row `i * cols + j` of the output is the channel triple of pixel
/// `(i, j)`, the layout color-clustering consumers expect.
pub fn flatten_pixels<T>(tile: &Array3<T>) -> Array2<T>
where
    T: Copy + Zero,
{
    let (rows, cols, channels) = tile.dim();
    let mut table = Array2::zeros((rows * cols, channels));
    for ((i, j, c), &value) in tile.indexed_iter() {
        if let Some(cell) = table.get_mut((i * cols + j, c)) {
            *cell = value;
        }
    }
    table
}

/// Rebuild a 2-D tile from its row-major flattening
///
/// Inverse of [`flatten_stack`] for a single row, given the original tile
/// extent.
///
/// # Errors
///
/// Returns a computation error if the row length does not equal
/// `rows * cols`
pub fn reshape_row<T>(row: ArrayView1<'_, T>, rows: usize, cols: usize) -> Result<Array2<T>>
where
    T: Copy + Zero,
{
    if row.len() != rows * cols {
        return Err(computation_error(
            "tile reshape",
            &format!(
                "row of {} elements cannot form a {rows}x{cols} tile",
                row.len()
            ),
        ));
    }

    let mut tile = Array2::zeros((rows, cols));
    for ((i, j), cell) in tile.indexed_iter_mut() {
        if let Some(&value) = row.get(i * cols + j) {
            *cell = value;
        }
    }
    Ok(tile)
}
