//! Quadtree split-and-merge segmentation for grayscale rasters
//!
//! The engine recursively partitions a power-of-two square raster into
//! statistically homogeneous regions, greedily coalesces adjacent homogeneous
//! sibling quadrants, and paints each resulting region with a single
//! representative intensity, producing a piecewise-constant approximation of
//! the input.

#![deny(unsafe_code)]

/// Split, merge, and segment phases of the quadtree pipeline
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Rectangles, quadtree storage, and raster framing
pub mod spatial;

pub use algorithm::pipeline::{Segmentation, SegmentationConfig, run};
pub use io::error::{Result, SegmentationError};
