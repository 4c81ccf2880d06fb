//! Tests for pipeline configuration and the per-image executor

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use scantex::PipelineError;
    use scantex::analysis::texture::FEATURE_COUNT;
    use scantex::pipeline::executor::{PipelineConfig, TexturePipeline, feature_matrix};

    fn test_sheet() -> Array3<u8> {
        Array3::from_shape_fn((60, 40, 3), |(i, j, _c)| {
            if (i / 5 + j / 5) % 2 == 0 { 30 } else { 220 }
        })
    }

    fn small_grid_config() -> PipelineConfig {
        PipelineConfig {
            grid_rows: 3,
            grid_cols: 2,
            ..PipelineConfig::default()
        }
    }

    // Tests the scan geometry defaults
    // Verified by changing the default grid shape
    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.grid_rows, 5);
        assert_eq!(config.grid_cols, 4);
        assert_eq!(config.trim.band_width, 28);
    }

    // Tests that a sheet produces one feature vector per tile
    // Verified by dropping the last tile row
    #[test]
    fn test_process_image_vector_count() {
        let pipeline = TexturePipeline::new(small_grid_config());
        let features = pipeline.process_image(&test_sheet()).unwrap();

        assert_eq!(features.len(), 6);
        for vector in &features {
            assert_eq!(vector.len(), FEATURE_COUNT);
            assert!(vector.iter().all(|v| v.is_finite()));
        }
    }

    // Tests that batch processing equals the manual per-tile loop, tile
    // order included
    // Verified by reversing the tile order in the batch path
    #[test]
    fn test_process_image_preserves_tile_order() {
        let pipeline = TexturePipeline::new(small_grid_config());
        let sheet = test_sheet();

        let batch = pipeline.process_image(&sheet).unwrap();

        let tiles = pipeline.partition_sheet(&sheet).unwrap();
        for (index, tile) in tiles.into_iter().enumerate() {
            let single = pipeline.process_tile(tile, index).unwrap();
            assert_eq!(batch[index], single, "Vector {index} belongs to tile {index}");
        }
    }

    // Tests error propagation from an impossible grid
    // Verified by clamping the grid to the image size
    #[test]
    fn test_process_image_invalid_grid() {
        let config = PipelineConfig {
            grid_rows: 100,
            grid_cols: 2,
            ..PipelineConfig::default()
        };
        let pipeline = TexturePipeline::new(config);
        let result = pipeline.process_image(&test_sheet());

        assert!(matches!(
            result,
            Err(PipelineError::InvalidPartition { .. })
        ));
    }

    // Tests feature matrix assembly keeps the row-to-tile association
    // Verified by transposing the matrix
    #[test]
    fn test_feature_matrix_rows() {
        let pipeline = TexturePipeline::new(small_grid_config());
        let features = pipeline.process_image(&test_sheet()).unwrap();
        let matrix = feature_matrix(&features);

        assert_eq!(matrix.dim(), (6, FEATURE_COUNT));
        for (row, vector) in features.iter().enumerate() {
            assert_eq!(matrix.row(row).to_vec(), vector.to_vec());
        }
    }

    // Tests the empty input corner of matrix assembly
    // Verified by panicking on an empty feature list
    #[test]
    fn test_feature_matrix_empty() {
        let matrix = feature_matrix(&[]);
        assert_eq!(matrix.dim(), (0, 0));
    }
}
