//! Quadtree partition-boundary overlays
//!
//! A debugging side channel: the segmented raster shows the painted
//! regions, while the overlay shows the full partition the split phase
//! produced, each region outlined in black over the source pixels.

use crate::io::configuration::BOUNDARY_INTENSITY;
use crate::spatial::rect::Rect;
use crate::spatial::tree::QuadTree;
use ndarray::Array2;

/// Outline every node's rectangle over a copy of the base raster
///
/// Every node is drawn, not only leaves, so coarser partition levels remain
/// visible as nested frames, matching the reference tool's per-split
/// rectangle drawing.
pub fn draw_partition(tree: &QuadTree, base: &Array2<u8>) -> Array2<u8> {
    let mut canvas = base.clone();

    for node in tree {
        outline(&mut canvas, node.rect);
    }

    canvas
}

fn outline(canvas: &mut Array2<u8>, rect: Rect) {
    if rect.is_empty() {
        return;
    }

    let bottom = rect.y + rect.height - 1;
    let right = rect.x + rect.width - 1;

    for col in rect.cols() {
        if let Some(pixel) = canvas.get_mut([rect.y, col]) {
            *pixel = BOUNDARY_INTENSITY;
        }
        if let Some(pixel) = canvas.get_mut([bottom, col]) {
            *pixel = BOUNDARY_INTENSITY;
        }
    }

    for row in rect.rows() {
        if let Some(pixel) = canvas.get_mut([row, rect.x]) {
            *pixel = BOUNDARY_INTENSITY;
        }
        if let Some(pixel) = canvas.get_mut([row, right]) {
            *pixel = BOUNDARY_INTENSITY;
        }
    }
}
