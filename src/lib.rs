//! Texture descriptor extraction from scanned specimen tile grids
//!
//! The system partitions a scanned sheet image into a regular tile grid,
//! removes scanner background and edge artifacts from each tile, and reduces
//! every tile to a fixed-length gray-level co-occurrence feature vector for
//! downstream classification or clustering.

#![forbid(unsafe_code)]

/// Gray-level co-occurrence matrices and texture statistics
pub mod analysis;
/// Grayscale, edge and smoothing filters for background suppression
pub mod filters;
/// Input/output operations and error handling
pub mod io;
/// Per-image orchestration of the tile processing pipeline
pub mod pipeline;
/// Tile partitioning, artifact trimming and array reshaping utilities
pub mod spatial;

pub use io::error::{PipelineError, Result};
