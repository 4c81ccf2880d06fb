//! Image partitioning into equal-extent tile grids
//!
//! Splits a scanned sheet into `rows * cols` tiles of identical shape in
//! row-major order. Split points sit at multiples of the integer-divided
//! extent; when a dimension does not divide evenly the remainder pixels at
//! the tail of the last piece are dropped so every tile matches the common
//! extent.

use crate::io::error::{PipelineError, Result};
use ndarray::{Array3, ArrayView3, Axis};

/// Split an image into a row-major grid of equal tiles
///
/// Tiles are returned in row-major order: all column tiles of the first tile
/// row, then the second tile row, and so on. Every returned tile has shape
/// `(height / rows, width / cols, channels)`.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidPartition`] if either count is zero or
/// exceeds the corresponding image dimension
pub fn partition(image: &Array3<u8>, rows: usize, cols: usize) -> Result<Vec<Array3<u8>>> {
    let (height, width, _channels) = image.dim();
    if rows == 0 || cols == 0 || rows > height || cols > width {
        return Err(PipelineError::InvalidPartition {
            rows,
            cols,
            height,
            width,
        });
    }

    let mut tiles = Vec::with_capacity(rows * cols);
    for row_piece in split_equal(image.view(), Axis(0), rows) {
        for tile in split_equal(row_piece, Axis(1), cols) {
            tiles.push(tile.to_owned());
        }
    }
    Ok(tiles)
}

/// Split a view into `count` pieces of equal extent along an axis
///
/// The extent of each piece is the integer quotient; remainder pixels stay
/// in the tail of the final piece and are cut off so all pieces match.
fn split_equal(view: ArrayView3<'_, u8>, axis: Axis, count: usize) -> Vec<ArrayView3<'_, u8>> {
    let extent = view.len_of(axis) / count;
    let mut pieces = Vec::with_capacity(count);
    let mut rest = view;
    for _ in 1..count {
        let (piece, tail) = rest.split_at(axis, extent);
        pieces.push(piece);
        rest = tail;
    }
    // The last piece keeps only the leading extent; tail remainder is dropped
    let (last, _remainder) = rest.split_at(axis, extent);
    pieces.push(last);
    pieces
}
