//! CLI entry point for scanned-sheet texture feature extraction

use clap::Parser;
use scantex::io::cli::{Cli, FileProcessor};

fn main() -> scantex::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
