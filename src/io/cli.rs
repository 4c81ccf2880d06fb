//! Command-line interface for batch texture extraction from scanned sheets

use crate::io::configuration::{DEFAULT_BAND_WIDTH, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
use crate::io::error::Result;
use crate::io::image::{find_set_image, is_image_path, list_images, load_image};
use crate::io::progress::ProgressManager;
use crate::pipeline::executor::{PipelineConfig, TexturePipeline};
use crate::spatial::trim::TrimPolicy;
use clap::Parser;
use ndarray::Array1;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "scantex")]
#[command(
    author,
    version,
    about = "Extract per-tile texture feature vectors from scanned sheets"
)]
/// Command-line arguments for the texture extraction tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of tile rows in the scan grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Number of tile columns in the scan grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_COLS)]
    pub cols: usize,

    /// Width in pixels of the trimmed scanner band
    #[arg(short, long, default_value_t = DEFAULT_BAND_WIDTH)]
    pub band_width: usize,

    /// Process only the sheet with this logical set index
    #[arg(short, long)]
    pub set: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the pipeline configuration selected by the arguments
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            grid_rows: self.rows,
            grid_cols: self.cols,
            trim: TrimPolicy {
                band_width: self.band_width,
                ..TrimPolicy::default()
            },
            ..PipelineConfig::default()
        }
    }
}

/// Orchestrates batch processing of scanned sheets with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process sheets according to the CLI arguments
    ///
    /// Emits one comma-separated line per tile on stdout: the file name,
    /// the tile's linear grid index and its 24 feature values.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading or processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let pipeline = TexturePipeline::new(self.cli.pipeline_config());
        for (index, file) in files.iter().enumerate() {
            Self::process_file(&pipeline, &mut self.progress_manager, file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_image_path(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a recognized image format",
                ))
            }
        } else if self.cli.target.is_dir() {
            let files = list_images(&self.cli.target)?;
            match self.cli.set {
                Some(index) => {
                    let path = find_set_image(&files, index).ok_or_else(|| {
                        crate::io::error::PipelineError::ImageNotFound {
                            index,
                            directory: self.cli.target.clone(),
                        }
                    })?;
                    Ok(vec![path.clone()])
                }
                None => Ok(files),
            }
        } else {
            Err(crate::io::error::io_error(
                "Target must be an image file or directory",
            ))
        }
    }

    fn process_file(
        pipeline: &TexturePipeline,
        progress_manager: &mut Option<ProgressManager>,
        input_path: &Path,
        index: usize,
    ) -> Result<()> {
        let image = load_image(input_path)?;
        let tiles = pipeline.partition_sheet(&image)?;

        if let Some(pm) = progress_manager {
            pm.start_file(index, input_path, tiles.len());
        }

        let name = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        for (tile_index, tile) in tiles.into_iter().enumerate() {
            let features = pipeline.process_tile(tile, tile_index)?;
            emit_features(&name, tile_index, &features);
            if let Some(pm) = progress_manager {
                pm.update_tile(index, tile_index + 1);
            }
        }

        if let Some(pm) = progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }
}

// Feature vectors are the program's output; stdout is the interface
#[allow(clippy::print_stdout)]
fn emit_features(name: &str, tile_index: usize, features: &Array1<f64>) {
    let values = features
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    println!("{name},{tile_index},{values}");
}
