//! Progress display for batch processing
//!
//! Shows one bar per image for small batches and a single batch bar for
//! large ones. Per-image bars advance tile by tile as the pipeline walks
//! the partition grid.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch feature extraction
///
/// Automatically switches between per-image tile bars (small batches) and a
/// single batch bar (large batches) based on the input file count.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
        }
    }

    /// Initialize progress bars based on the number of input images
    pub fn initialize(&mut self, file_count: usize) {
        // Batch mode for large input sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..file_count {
            let bar = ProgressBar::new(0);
            bar.set_style(TILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Configure the bar for a new image and its tile count
    pub fn start_file(&mut self, index: usize, path: &Path, tile_count: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if let Some(bar) = self.file_bars.get(index) {
            bar.set_length(tile_count as u64);
            bar.set_position(0);
            bar.set_prefix(display_name);
            bar.set_message(format!("0/{tile_count}"));
        }
    }

    /// Report that a tile of the given image has been processed
    pub fn update_tile(&mut self, file_index: usize, tile: usize) {
        if let Some(bar) = self.file_bars.get(file_index) {
            bar.set_position(tile as u64);
            let total = bar.length().unwrap_or(0);
            bar.set_message(format!("{tile}/{total}"));
        }
    }

    /// Mark an image as completed and advance the batch bar
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.file_bars.get(index) {
            if let Some(total) = bar.length() {
                bar.set_position(total);
                bar.set_message(format!("{total}/{total}"));
            }
            bar.finish();
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        let _ = self.multi_progress.clear();
    }
}
