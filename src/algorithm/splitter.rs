//! Recursive quadrant subdivision driven by the homogeneity predicate

use crate::algorithm::pipeline::SegmentationConfig;
use crate::algorithm::stats::RegionStats;
use crate::spatial::rect::{Quadrant, Rect};
use crate::spatial::tree::{NodeId, QuadNode, QuadTree};
use ndarray::Array2;

/// Recursively split a region into the quadtree arena
///
/// Measures the region, then subdivides into four clockwise quadrants when
/// the region is divisible (both sides above the minimum) and not homogeneous
/// (deviation above the split threshold). Every region yields exactly one
/// node; recursion terminates because the minimum size bounds divisibility.
///
/// Odd region dimensions truncate on halving (see [`Rect::quadrant`]), so a
/// caller that bypasses the pipeline's shape validation gets the reference
/// truncation behavior rather than an error.
pub fn split(
    raster: &Array2<u8>,
    rect: Rect,
    config: &SegmentationConfig,
    tree: &mut QuadTree,
) -> NodeId {
    let stats = RegionStats::measure(raster, rect);
    let id = tree.push(QuadNode::new(rect, stats.mean, stats.std_dev));

    if config.is_divisible(rect) && !config.is_homogeneous(stats.std_dev) {
        let children =
            Quadrant::CLOCKWISE.map(|quadrant| split(raster, rect.quadrant(quadrant), config, tree));

        if let Some(node) = tree.get_mut(id) {
            node.children = Some(children);
        }
    }

    id
}
