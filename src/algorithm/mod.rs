//! The three-phase segmentation engine
//!
//! Phases run in dependency order over one shared quadtree:
//! - Split builds the tree top-down until regions are homogeneous or minimal
//! - Merge greedily groups adjacent homogeneous sibling quadrants
//! - Segment paints every merged group with its representative intensity

/// Greedy clockwise grouping of homogeneous sibling quadrants
pub mod merger;
/// Configuration, validation, and split-merge-segment orchestration
pub mod pipeline;
/// Piecewise-constant painting of merged regions
pub mod segmenter;
/// Recursive quadrant subdivision driven by the homogeneity predicate
pub mod splitter;
/// Mean and standard deviation of rectangular raster regions
pub mod stats;
