//! Piecewise-constant painting of merged regions

use crate::spatial::rect::Rect;
use crate::spatial::tree::{NodeId, QuadTree};
use ndarray::Array2;

/// Paint the subtree rooted at `id` into the output raster
///
/// A node with a merged group paints every member's rectangle with the
/// rounded arithmetic mean of the members' split-time means, then recurses
/// into each child that was not absorbed into the group. Merged-group
/// rectangles are disjoint by construction, so each pixel is written by
/// exactly one paint step.
///
/// A node without a merged group recurses into all of its children; after a
/// completed merge pass this only happens for interior nodes whose quadrants
/// all declined to group.
pub fn segment(tree: &QuadTree, id: NodeId, output: &mut Array2<u8>) {
    let Some(node) = tree.get(id) else {
        return;
    };

    if node.merged_group.is_empty() {
        if let Some(children) = node.children {
            for child in children {
                segment(tree, child, output);
            }
        }
        return;
    }

    let mut total = 0.0f64;
    let mut members = 0usize;
    for &member in &node.merged_group {
        if let Some(region) = tree.get(member) {
            total += region.mean;
            members += 1;
        }
    }

    if members > 0 {
        let value = (total / members as f64).round().clamp(0.0, 255.0) as u8;
        for &member in &node.merged_group {
            if let Some(region) = tree.get(member) {
                fill(output, region.rect, value);
            }
        }
    }

    if let Some(children) = node.children {
        for (index, child) in children.into_iter().enumerate() {
            if !node.absorbed.get(index).copied().unwrap_or(false) {
                segment(tree, child, output);
            }
        }
    }
}

fn fill(output: &mut Array2<u8>, rect: Rect, value: u8) {
    for row in rect.rows() {
        for col in rect.cols() {
            if let Some(pixel) = output.get_mut([row, col]) {
                *pixel = value;
            }
        }
    }
}
