//! Image listing, decoding and set-index selection
//!
//! Implements the collaborator boundary of the pipeline: enumerating scanned
//! image files in a directory, decoding one into a 3-channel pixel array,
//! and resolving a logical set index to its file via the `_Set{k}_` naming
//! convention used by the scanning workflow.

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{PipelineError, Result};
use ndarray::Array3;
use std::path::{Path, PathBuf};

/// List scanned image files in a directory in sorted order
///
/// Only paths whose extension matches a recognized image format are
/// returned. Sorting makes set-index resolution deterministic.
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn list_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory).map_err(|e| PipelineError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| PipelineError::FileSystem {
                path: directory.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        if is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Check whether a path carries a recognized image extension
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.iter().any(|known| *known == lowered)
        })
}

/// Decode an image file into a (rows, cols, 3) pixel array
///
/// # Errors
///
/// Returns [`PipelineError::ImageLoad`] if the file cannot be opened or
/// decoded
pub fn load_image(path: &Path) -> Result<Array3<u8>> {
    let decoded = image::open(path).map_err(|e| PipelineError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb = decoded.to_rgb8();

    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let mut pixels = Array3::zeros((height, width, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for (c, &value) in pixel.0.iter().enumerate() {
            if let Some(cell) = pixels.get_mut((y as usize, x as usize, c)) {
                *cell = value;
            }
        }
    }
    Ok(pixels)
}

/// Find the image path for a logical set index
///
/// The scanning workflow names files with a `_Set{k}_` infix or `_Set{k}.`
/// suffix before the extension. The first match in the given order wins.
pub fn find_set_image(paths: &[PathBuf], index: usize) -> Option<&PathBuf> {
    let infix = format!("_Set{index}_");
    let suffix = format!("_Set{index}.");
    paths.iter().find(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains(&infix) || name.contains(&suffix))
    })
}

/// Load the image for a logical set index from a directory
///
/// # Errors
///
/// Returns [`PipelineError::ImageNotFound`] if no listed file matches the
/// naming convention for the index, or an error from listing or decoding
pub fn load_set_image(directory: &Path, index: usize) -> Result<Array3<u8>> {
    let paths = list_images(directory)?;
    let path = find_set_image(&paths, index).ok_or_else(|| PipelineError::ImageNotFound {
        index,
        directory: directory.to_path_buf(),
    })?;
    load_image(path)
}
