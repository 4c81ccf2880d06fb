//! Per-image orchestration of the tile processing pipeline

/// Pipeline configuration and the per-image executor
pub mod executor;

pub use executor::{PipelineConfig, TexturePipeline};
