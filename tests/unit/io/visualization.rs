//! Tests for the partition-boundary overlay

use ndarray::Array2;
use quadseg::io::visualization::draw_partition;
use quadseg::spatial::rect::Rect;
use quadseg::spatial::tree::{QuadNode, QuadTree};

#[test]
fn test_overlay_outlines_the_region_and_keeps_the_interior() {
    let base = Array2::from_elem((4, 4), 200u8);
    let mut tree = QuadTree::new();
    tree.push(QuadNode::new(Rect::new(0, 0, 4, 4), 200.0, 0.0));

    let overlay = draw_partition(&tree, &base);

    // Border pixels are painted black, interior pixels stay untouched
    assert_eq!(overlay.get([0, 2]).copied(), Some(0));
    assert_eq!(overlay.get([3, 1]).copied(), Some(0));
    assert_eq!(overlay.get([2, 0]).copied(), Some(0));
    assert_eq!(overlay.get([1, 3]).copied(), Some(0));
    assert_eq!(overlay.get([1, 1]).copied(), Some(200));
    assert_eq!(overlay.get([2, 2]).copied(), Some(200));
}

#[test]
fn test_every_node_is_outlined_not_only_leaves() {
    let base = Array2::from_elem((4, 4), 200u8);
    let mut tree = QuadTree::new();
    tree.push(QuadNode::new(Rect::new(0, 0, 4, 4), 0.0, 90.0));
    tree.push(QuadNode::new(Rect::new(0, 0, 2, 2), 0.0, 0.0));

    let overlay = draw_partition(&tree, &base);

    // The inner quadrant's right edge cuts through the parent's interior
    assert_eq!(overlay.get([1, 1]).copied(), Some(0));
}

#[test]
fn test_overlay_leaves_the_base_raster_untouched() {
    let base = Array2::from_elem((4, 4), 200u8);
    let mut tree = QuadTree::new();
    tree.push(QuadNode::new(Rect::new(0, 0, 4, 4), 200.0, 0.0));

    let _overlay = draw_partition(&tree, &base);

    assert!(base.iter().all(|&value| value == 200));
}
