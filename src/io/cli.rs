//! Command-line interface for batch segmentation of PNG files

use crate::algorithm::pipeline::{self, SegmentationConfig};
use crate::io::configuration::{
    BOUNDARY_SUFFIX, DEFAULT_MERGE_THRESHOLD, DEFAULT_MIN_REGION_SIZE, DEFAULT_SPLIT_THRESHOLD,
    OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{export_raster_as_png, load_grayscale};
use crate::io::progress::ProgressManager;
use crate::io::visualization::draw_partition;
use crate::spatial::framing;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "quadseg")]
#[command(
    author,
    version,
    about = "Segment grayscale images with quadtree split-and-merge"
)]
/// Command-line arguments for the segmentation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Standard deviation ceiling below which a region counts as homogeneous
    #[arg(short = 't', long, default_value_t = DEFAULT_SPLIT_THRESHOLD)]
    pub split_threshold: f64,

    /// Maximum mean intensity difference for merging adjacent quadrants
    #[arg(short = 'm', long, default_value_t = DEFAULT_MERGE_THRESHOLD)]
    pub merge_threshold: f64,

    /// Minimum side length below which regions are never subdivided
    #[arg(short = 's', long, default_value_t = DEFAULT_MIN_REGION_SIZE)]
    pub min_region_size: usize,

    /// Export the quadtree partition overlay alongside the segmented image
    #[arg(short, long)]
    pub boundaries: bool,

    /// Apply 3x3 Gaussian smoothing before framing and segmentation
    #[arg(short = 'g', long)]
    pub smooth: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Segmentation configuration assembled from the flags
    pub const fn config(&self) -> SegmentationConfig {
        SegmentationConfig {
            split_threshold: self.split_threshold,
            merge_threshold: self.merge_threshold,
            min_region_size: self.min_region_size,
        }
    }
}

/// Orchestrates batch segmentation of PNG files with progress tracking
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

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, segmentation, or file export
    /// fails for any input.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::invalid_target(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::invalid_target(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let mut raster = load_grayscale(input_path)?;
        if self.cli.smooth {
            raster = framing::smooth(&raster);
        }

        let square = framing::crop_to_square(&raster)?;

        let config = self.cli.config();
        let segmentation = pipeline::run(&square, &config)?;

        export_raster_as_png(&segmentation.raster, &output_path)?;

        if self.cli.boundaries {
            let overlay = draw_partition(&segmentation.tree, &square);
            export_raster_as_png(&overlay, &Self::boundary_path(input_path))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    fn suffixed_path(input_path: &Path, suffix: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            suffix,
            extension.to_string_lossy()
        );

        input_path.parent().map_or_else(
            || PathBuf::from(&output_name),
            |parent| parent.join(&output_name),
        )
    }

    fn output_path(input_path: &Path) -> PathBuf {
        Self::suffixed_path(input_path, OUTPUT_SUFFIX)
    }

    fn boundary_path(input_path: &Path) -> PathBuf {
        Self::suffixed_path(input_path, BOUNDARY_SUFFIX)
    }
}
