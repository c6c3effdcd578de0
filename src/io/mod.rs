//! Input/output operations and error handling
//!
//! Everything with a surface beyond the segmentation core lives here:
//! - Error types shared across the crate
//! - PNG import and export for grayscale rasters
//! - The batch CLI driver and its progress display
//! - The partition-boundary overlay side channel

/// Command-line interface and batch file processing
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and the crate-wide `Result` alias
pub mod error;
/// Grayscale PNG import and export
pub mod image;
/// Batch progress display
pub mod progress;
/// Quadtree partition-boundary overlays
pub mod visualization;
