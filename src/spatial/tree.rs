//! Arena-backed quadtree node storage
//!
//! Nodes are owned by a flat arena and addressed by index, which keeps the
//! exclusive parent-child ownership of the tree without reference counting:
//! a child's [`NodeId`] is stored by exactly one parent.

use crate::spatial::rect::{Quadrant, Rect};

/// Handle to a node within a [`QuadTree`] arena
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single quadtree region with its split-time statistics and merge bookkeeping
#[derive(Clone, Debug)]
pub struct QuadNode {
    /// Region of the source raster covered by this node
    pub rect: Rect,
    /// Mean intensity over `rect`, computed once at split time
    pub mean: f64,
    /// Population standard deviation over `rect`, computed once at split time
    pub std_dev: f64,
    /// Child nodes in clockwise order, present all together or not at all
    pub children: Option<[NodeId; 4]>,
    /// Nodes this node has grouped for joint painting (may include itself)
    pub merged_group: Vec<NodeId>,
    /// Per-quadrant flag marking children folded into `merged_group`
    pub absorbed: [bool; 4],
}

impl QuadNode {
    /// Create a leaf node from its region and statistics
    pub const fn new(rect: Rect, mean: f64, std_dev: f64) -> Self {
        Self {
            rect,
            mean,
            std_dev,
            children: None,
            merged_group: Vec::new(),
            absorbed: [false; 4],
        }
    }

    /// Whether the node has no children
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Flat arena owning every node of one quadtree
///
/// The root is always the first node pushed; split builds the tree in a
/// single pre-order pass, so an empty arena only occurs before splitting.
#[derive(Clone, Debug, Default)]
pub struct QuadTree {
    nodes: Vec<QuadNode>,
}

impl QuadTree {
    /// Create an empty tree
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty tree with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node and return its handle
    pub fn push(&mut self, node: QuadNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Borrow a node by handle
    pub fn get(&self, id: NodeId) -> Option<&QuadNode> {
        self.nodes.get(id.0)
    }

    /// Mutably borrow a node by handle
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut QuadNode> {
        self.nodes.get_mut(id.0)
    }

    /// Handle of the root node, if the tree has been built
    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    /// Handle of one child of `id`
    pub fn child(&self, id: NodeId, which: Quadrant) -> Option<NodeId> {
        self.get(id)
            .and_then(|node| node.children)
            .and_then(|children| children.get(which.index()).copied())
    }

    /// Total number of nodes in the arena
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaf nodes
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Iterate over every node in arena order
    pub fn iter(&self) -> impl Iterator<Item = &QuadNode> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a QuadTree {
    type Item = &'a QuadNode;
    type IntoIter = std::slice::Iter<'a, QuadNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
