//! Spatial data structures for the quadtree
//!
//! This module contains spatial-related functionality including:
//! - Axis-aligned rectangles and quadrant subdivision
//! - Arena-backed quadtree storage
//! - Fitting arbitrary rasters into the power-of-two working square

/// Raster framing and optional pre-smoothing
pub mod framing;
/// Axis-aligned rectangles and the clockwise quadrant convention
pub mod rect;
/// Arena-backed quadtree node storage
pub mod tree;

pub use rect::{Quadrant, Rect};
pub use tree::{NodeId, QuadNode, QuadTree};
