//! Tests for image partitioning into equal-extent tile grids

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use scantex::PipelineError;
    use scantex::spatial::partition::partition;

    fn numbered_image(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(i, j, c)| {
            ((i * width * 3 + j * 3 + c) % 251) as u8
        })
    }

    // Tests exact coverage for an evenly divisible partition
    // Verified by removing a tile from the expected count
    #[test]
    fn test_partition_even_coverage() {
        let image = numbered_image(100, 100);
        let tiles = partition(&image, 2, 2).unwrap();

        assert_eq!(tiles.len(), 4);
        for tile in &tiles {
            assert_eq!(tile.dim(), (50, 50, 3));
        }

        let covered: usize = tiles.iter().map(|tile| tile.len()).sum();
        assert_eq!(covered, image.len(), "Tiles must cover every pixel");
    }

    // Tests row-major tile ordering against known source offsets
    // Verified by swapping the row and column split order
    #[test]
    fn test_partition_row_major_order() {
        let image = numbered_image(100, 100);
        let tiles = partition(&image, 2, 2).unwrap();

        // Tile 1 is the top-right quadrant, tile 2 the bottom-left
        assert_eq!(tiles[1][[0, 0, 0]], image[[0, 50, 0]]);
        assert_eq!(tiles[2][[0, 0, 0]], image[[50, 0, 0]]);
        assert_eq!(tiles[3][[10, 20, 1]], image[[60, 70, 1]]);
    }

    // Tests that an odd extent drops its tail pixels, as the scan geometry
    // expects: 101 rows with two tile rows yields two 50-row pieces and the
    // final image row is not covered by any tile
    // Verified by adding the remainder back onto the last piece
    #[test]
    fn test_partition_uneven_trims_tail() {
        let image = numbered_image(101, 100);
        let tiles = partition(&image, 2, 2).unwrap();

        assert_eq!(tiles.len(), 4);
        for tile in &tiles {
            assert_eq!(tile.dim(), (50, 50, 3), "All tiles share one extent");
        }

        // The second tile row still starts at the split point, row 50
        assert_eq!(tiles[2][[0, 0, 0]], image[[50, 0, 0]]);

        let covered: usize = tiles.iter().map(|tile| tile.len()).sum();
        assert_eq!(covered, 100 * 100 * 3, "One source row is dropped");
    }

    // Tests bitwise determinism across repeated calls
    // Verified by perturbing the split-point computation
    #[test]
    fn test_partition_deterministic() {
        let image = numbered_image(90, 120);
        let first = partition(&image, 3, 4).unwrap();
        let second = partition(&image, 3, 4).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a, b);
        }
    }

    // Tests shape uniformity for several grid configurations
    // Verified by letting the last piece keep its remainder
    #[test]
    fn test_partition_uniform_shapes() {
        let image = numbered_image(97, 53);
        for (rows, cols) in [(1, 1), (2, 3), (5, 4), (7, 7)] {
            let tiles = partition(&image, rows, cols).unwrap();
            assert_eq!(tiles.len(), rows * cols);
            let expected = (97 / rows, 53 / cols, 3);
            for tile in &tiles {
                assert_eq!(tile.dim(), expected);
            }
        }
    }

    // Tests rejection of degenerate and oversized grid requests
    // Verified by skipping the dimension validation
    #[test]
    fn test_partition_invalid_grids() {
        let image = numbered_image(10, 10);

        for (rows, cols) in [(0, 2), (2, 0), (11, 2), (2, 11)] {
            let result = partition(&image, rows, cols);
            assert!(matches!(
                result,
                Err(PipelineError::InvalidPartition { .. })
            ));
        }
    }
}
