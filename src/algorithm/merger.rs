//! Greedy clockwise grouping of homogeneous sibling quadrants
//!
//! The merge phase is a deterministic, order-dependent heuristic, not an
//! optimal clustering: sibling pairs are tested in a fixed clockwise order
//! and the first qualifying pair forms the only group at its level. The
//! contract worth preserving is that identical input always produces the
//! identical grouping.

use crate::algorithm::pipeline::SegmentationConfig;
use crate::spatial::tree::{NodeId, QuadTree};

/// Group adjacent homogeneous quadrants below `id`, depth first
///
/// Leaves and already-homogeneous regions record themselves as a singleton
/// group, which lets the segment phase treat every painted region uniformly.
///
/// For an interior node the four clockwise-adjacent pairs (UL,UR), (UR,LR),
/// (LR,LL), (LL,UL) are scanned in order. A pair qualifies when both
/// quadrants are individually homogeneous and their means differ by at most
/// the merge threshold. The first qualifying pair is absorbed into the
/// node's merged group and extended by at most one more quadrant: the one
/// two steps ahead in clockwise order, or failing that the one directly
/// behind the pair. Quadrants left out of the group are merged recursively.
pub fn merge(tree: &mut QuadTree, id: NodeId, config: &SegmentationConfig) {
    let Some(node) = tree.get(id) else {
        return;
    };

    let children = match node.children {
        Some(children)
            if config.is_divisible(node.rect) && !config.is_homogeneous(node.std_dev) =>
        {
            children
        }
        _ => {
            // Base case: the region paints itself as a singleton group.
            if let Some(leaf) = tree.get_mut(id) {
                leaf.merged_group.push(id);
            }
            return;
        }
    };

    let mut quadrants = [(0.0f64, 0.0f64); 4];
    for (slot, child) in quadrants.iter_mut().zip(children) {
        if let Some(child_node) = tree.get(child) {
            *slot = (child_node.mean, child_node.std_dev);
        }
    }

    let qualifies = |a: usize, b: usize| -> bool {
        match (quadrants.get(a % 4), quadrants.get(b % 4)) {
            (Some(&(mean_a, dev_a)), Some(&(mean_b, dev_b))) => {
                config.is_homogeneous(dev_a)
                    && config.is_homogeneous(dev_b)
                    && config.means_compatible(mean_a, mean_b)
            }
            _ => false,
        }
    };

    let mut group: Vec<NodeId> = Vec::new();
    let mut absorbed = [false; 4];

    for first in 0..4 {
        let second = (first + 1) % 4;
        if !qualifies(first, second) {
            continue;
        }

        absorb(&mut group, &mut absorbed, &children, first);
        absorb(&mut group, &mut absorbed, &children, second);

        let ahead = (first + 2) % 4;
        let behind = (first + 3) % 4;
        if qualifies(second, ahead) {
            absorb(&mut group, &mut absorbed, &children, ahead);
        } else if qualifies(behind, first) {
            absorb(&mut group, &mut absorbed, &children, behind);
        }

        // Later pairs are never tested once a group has formed.
        break;
    }

    if let Some(parent) = tree.get_mut(id) {
        parent.merged_group = group;
        parent.absorbed = absorbed;
    }

    for (index, child) in children.into_iter().enumerate() {
        if !absorbed.get(index).copied().unwrap_or(false) {
            merge(tree, child, config);
        }
    }
}

fn absorb(group: &mut Vec<NodeId>, absorbed: &mut [bool; 4], children: &[NodeId; 4], index: usize) {
    if let (Some(&child), Some(flag)) = (children.get(index), absorbed.get_mut(index)) {
        group.push(child);
        *flag = true;
    }
}
