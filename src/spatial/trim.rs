//! Positional trimming of scanner-bed artifact bands
//!
//! The scanner leaves a leftover background band along specific tile
//! positions: the top physical row of each sheet and the rightmost grid
//! column. Which positions are affected is a property of the scan geometry,
//! so the rule is injected as configuration rather than hard-coded.

use crate::io::configuration::{
    DEFAULT_BAND_WIDTH, RIGHT_BAND_MODULUS, RIGHT_BAND_REMAINDER, TOP_BAND_MODULUS,
    TOP_BAND_REMAINDER_MAX,
};
use ndarray::{Array3, Axis};

/// Border band selected for trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimBand {
    /// Leading rows of the tile
    Top,
    /// Trailing columns of the tile
    Right,
}

/// Positional trimming rule for one scan geometry
///
/// A tile's linear grid index is reduced modulo the sheet size and the grid
/// column count to decide whether it touches an artifact band. At most one
/// band is trimmed per tile; the top-band branch takes precedence. A
/// modulus of zero disables its branch.
#[derive(Debug, Clone, Copy)]
pub struct TrimPolicy {
    /// Width in pixels of the zeroed band
    pub band_width: usize,
    /// Tile count per physical sheet (top-band modulus)
    pub top_modulus: usize,
    /// Largest index remainder that falls in the top sheet row
    pub top_remainder_max: usize,
    /// Grid column count (right-band modulus)
    pub right_modulus: usize,
    /// Index remainder identifying the rightmost grid column
    pub right_remainder: usize,
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self {
            band_width: DEFAULT_BAND_WIDTH,
            top_modulus: TOP_BAND_MODULUS,
            top_remainder_max: TOP_BAND_REMAINDER_MAX,
            right_modulus: RIGHT_BAND_MODULUS,
            right_remainder: RIGHT_BAND_REMAINDER,
        }
    }
}

impl TrimPolicy {
    /// Decide which band, if any, the tile at a linear grid index touches
    pub const fn band_for(&self, index: usize) -> Option<TrimBand> {
        if self.top_modulus > 0 && index % self.top_modulus <= self.top_remainder_max {
            Some(TrimBand::Top)
        } else if self.right_modulus > 0 && index % self.right_modulus == self.right_remainder {
            Some(TrimBand::Right)
        } else {
            None
        }
    }

    /// Zero the artifact band of the tile at a linear grid index
    ///
    /// The band width is clamped to the tile extent. Tiles whose index
    /// matches neither branch are left untouched.
    pub fn apply(&self, tile: &mut Array3<u8>, index: usize) {
        match self.band_for(index) {
            Some(TrimBand::Top) => {
                let rows = self.band_width.min(tile.len_of(Axis(0)));
                let (mut band, _rest) = tile.view_mut().split_at(Axis(0), rows);
                band.fill(0);
            }
            Some(TrimBand::Right) => {
                let cols = tile.len_of(Axis(1));
                let keep = cols - self.band_width.min(cols);
                let (_rest, mut band) = tile.view_mut().split_at(Axis(1), keep);
                band.fill(0);
            }
            None => {}
        }
    }
}
