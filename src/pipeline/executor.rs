//! Pipeline configuration and the per-image executor
//!
//! Wires the spatial, filter and analysis stages together: partition a
//! scanned sheet, trim the scanner band per grid position, suppress
//! background and extract one feature vector per tile. Tile order is
//! row-major throughout, so feature vector `i` always belongs to tile `i`.

use crate::analysis::texture::{TextureConfig, extract_features};
use crate::filters::background::{BackgroundConfig, suppress_background};
use crate::io::configuration::{DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
use crate::io::error::Result;
use crate::spatial::partition::partition;
use crate::spatial::trim::TrimPolicy;
use ndarray::{Array1, Array2, Array3};

/// Parameters controlling the full per-image pipeline
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Number of tile rows in the scan grid
    pub grid_rows: usize,
    /// Number of tile columns in the scan grid
    pub grid_cols: usize,
    /// Scanner-band trimming rule
    pub trim: TrimPolicy,
    /// Background suppression tuning
    pub background: BackgroundConfig,
    /// Texture extraction parameters
    pub texture: TextureConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            grid_rows: DEFAULT_GRID_ROWS,
            grid_cols: DEFAULT_GRID_COLS,
            trim: TrimPolicy::default(),
            background: BackgroundConfig::default(),
            texture: TextureConfig::default(),
        }
    }
}

/// Executes the tile pipeline over whole scanned sheets
#[derive(Debug, Clone, Copy, Default)]
pub struct TexturePipeline {
    config: PipelineConfig,
}

impl TexturePipeline {
    /// Create a pipeline with the given configuration
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Partition a sheet image into its row-major tile sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid does not fit the image
    pub fn partition_sheet(&self, image: &Array3<u8>) -> Result<Vec<Array3<u8>>> {
        partition(image, self.config.grid_rows, self.config.grid_cols)
    }

    /// Process a single tile at its linear grid index
    ///
    /// Trims the scanner band, suppresses background and extracts the
    /// texture feature vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is not a 3-channel image
    pub fn process_tile(&self, mut tile: Array3<u8>, index: usize) -> Result<Array1<f64>> {
        self.config.trim.apply(&mut tile, index);
        let suppressed = suppress_background(&tile, &self.config.background);
        extract_features(&suppressed, &self.config.texture)
    }

    /// Process a whole sheet into one feature vector per tile
    ///
    /// Feature vectors come back in the partition's row-major tile order.
    ///
    /// # Errors
    ///
    /// Returns an error if partitioning fails or any tile is malformed
    pub fn process_image(&self, image: &Array3<u8>) -> Result<Vec<Array1<f64>>> {
        let tiles = self.partition_sheet(image)?;
        let mut features = Vec::with_capacity(tiles.len());
        for (index, tile) in tiles.into_iter().enumerate() {
            features.push(self.process_tile(tile, index)?);
        }
        Ok(features)
    }
}

/// Stack per-tile feature vectors into a (tile, feature) matrix
///
/// Row `i` of the result is feature vector `i`; ragged inputs are truncated
/// or zero-padded to the first vector's length, which all pipeline outputs
/// share.
pub fn feature_matrix(features: &[Array1<f64>]) -> Array2<f64> {
    let width = features.first().map_or(0, |vector| vector.len());
    let mut matrix = Array2::zeros((features.len(), width));
    for (row, vector) in features.iter().enumerate() {
        for (col, &value) in vector.iter().enumerate().take(width) {
            if let Some(cell) = matrix.get_mut((row, col)) {
                *cell = value;
            }
        }
    }
    matrix
}
