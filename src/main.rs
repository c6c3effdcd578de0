//! CLI entry point for quadtree split-and-merge segmentation

use clap::Parser;
use quadseg::io::cli::{Cli, FileProcessor};

fn main() -> quadseg::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
