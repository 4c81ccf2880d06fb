//! Gray-level co-occurrence analysis
//!
//! Builds symmetric multi-angle co-occurrence matrices from quantized tiles
//! and reduces them to fixed-length texture feature vectors.

/// Co-occurrence matrix construction and background-level reduction
pub mod glcm;
/// Texture statistics and feature vector extraction
pub mod texture;

pub use glcm::Angle;
pub use texture::{Statistic, TextureConfig, extract_features};
