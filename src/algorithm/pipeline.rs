//! Configuration, validation, and split-merge-segment orchestration

use crate::algorithm::{merger, segmenter, splitter};
use crate::io::configuration::{
    DEFAULT_MERGE_THRESHOLD, DEFAULT_MIN_REGION_SIZE, DEFAULT_SPLIT_THRESHOLD,
};
use crate::io::error::{Result, SegmentationError, invalid_parameter};
use crate::spatial::rect::Rect;
use crate::spatial::tree::QuadTree;
use ndarray::Array2;

/// Thresholds controlling subdivision and grouping
///
/// An explicit configuration value passed through every phase; there is no
/// process-wide threshold state.
#[derive(Clone, Copy, Debug)]
pub struct SegmentationConfig {
    /// Standard-deviation ceiling at or below which a region is homogeneous
    pub split_threshold: f64,
    /// Maximum mean-intensity difference between quadrants joined by merge
    pub merge_threshold: f64,
    /// Side length at or below which a region is never subdivided
    pub min_region_size: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
            merge_threshold: DEFAULT_MERGE_THRESHOLD,
            min_region_size: DEFAULT_MIN_REGION_SIZE,
        }
    }
}

impl SegmentationConfig {
    /// Homogeneity predicate shared by the split and merge phases
    pub const fn is_homogeneous(&self, std_dev: f64) -> bool {
        std_dev <= self.split_threshold
    }

    /// Divisibility predicate of the split phase
    pub const fn is_divisible(&self, rect: Rect) -> bool {
        rect.width > self.min_region_size && rect.height > self.min_region_size
    }

    /// Mean-compatibility predicate of the merge phase
    pub const fn means_compatible(&self, mean_a: f64, mean_b: f64) -> bool {
        (mean_a - mean_b).abs() <= self.merge_threshold
    }

    /// Check the configuration for usable values
    ///
    /// # Errors
    ///
    /// Returns [`SegmentationError::InvalidParameter`] when a threshold is
    /// negative or non-finite, or when the minimum region size is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.split_threshold.is_finite() || self.split_threshold < 0.0 {
            return Err(invalid_parameter(
                "split_threshold",
                &self.split_threshold,
                &"must be a non-negative finite number",
            ));
        }

        if !self.merge_threshold.is_finite() || self.merge_threshold < 0.0 {
            return Err(invalid_parameter(
                "merge_threshold",
                &self.merge_threshold,
                &"must be a non-negative finite number",
            ));
        }

        if self.min_region_size == 0 {
            return Err(invalid_parameter(
                "min_region_size",
                &self.min_region_size,
                &"must be at least one pixel",
            ));
        }

        Ok(())
    }
}

/// Completed segmentation over one working square
#[derive(Debug)]
pub struct Segmentation {
    /// Piecewise-constant raster with the extent of the working square
    pub raster: Array2<u8>,
    /// The split-and-merged quadtree behind the raster
    ///
    /// Kept for callers that want leaf counts or a partition-boundary
    /// overlay; it is discarded with the `Segmentation`.
    pub tree: QuadTree,
}

impl Segmentation {
    /// Number of undivided regions produced by the split phase
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }
}

/// Run split, merge, and segment over a framed working square
///
/// The input must already be framed: a non-empty square raster whose side is
/// a power of two (see [`crate::spatial::framing`]). The three phases run
/// strictly in sequence over one tree; the output raster starts as a copy of
/// the input, so every pixel not covered by a painted region keeps its
/// source intensity.
///
/// # Errors
///
/// Returns [`SegmentationError::InvalidParameter`] for an unusable
/// configuration, and [`SegmentationError::InvalidRegionShape`] when the
/// raster is empty, non-square, or its side is not a power of two. Shape
/// violations fail fast here instead of silently truncating quadrants.
pub fn run(raster: &Array2<u8>, config: &SegmentationConfig) -> Result<Segmentation> {
    config.validate()?;

    let (rows, cols) = raster.dim();
    if rows != cols || !rows.is_power_of_two() {
        return Err(SegmentationError::InvalidRegionShape {
            width: cols,
            height: rows,
        });
    }

    let mut tree = QuadTree::new();
    let root = splitter::split(raster, Rect::new(0, 0, cols, rows), config, &mut tree);
    merger::merge(&mut tree, root, config);

    let mut output = raster.clone();
    segmenter::segment(&tree, root, &mut output);

    Ok(Segmentation {
        raster: output,
        tree,
    })
}
