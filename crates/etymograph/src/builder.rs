//! Graph construction for a single derivation tree.
//!
//! [`GraphBuilder`] walks a [`ContentNode`] tree depth first and produces the
//! positioned nodes and directed edges for one block:
//!
//! - every node gets `id = hash(content)`, so equal labels share an id;
//! - a node's x is the block base plus its index among its siblings times
//!   [`SIBLING_OFFSET`], and each level of depth adds [`DEPTH_OFFSET`] to y;
//! - each non-root node receives one edge from its parent.
//!
//! # Merge marker
//!
//! A child whose label starts with [`MERGE_MARKER`] is not attached to its
//! parent. Instead its subtree (with the marker removed from its label) is
//! built once per id in the current *sibling group*, with that id as the
//! only predecessor. The sibling group is the set of ordinary siblings that
//! precede the marked child. When there are none, it is the group handed down
//! by the parent: the parent's own id, or, when the parent is itself a merge
//! copy, the group that copy was fanned out from.
//!
//! ```text
//!        P                 P
//!      / | \             /   \
//!     A  B  <all> X  =>  A    B
//!                         \  /
//!                          X
//! ```
//!
//! Because ids are content hashes, the copies of `X` all carry the same id and
//! collapse into one node with one incoming edge per sibling.

use indexmap::IndexSet;
use log::trace;

use etymograph_core::{
    content::ContentNode,
    geometry::Point,
    graph::{DerivationGraph, GraphEdge, GraphNode},
    identifier::{ContentHasher, HashError, NodeId},
};

/// Horizontal distance between consecutive blocks.
pub const BLOCK_OFFSET: f32 = 500.0;

/// Horizontal distance between consecutive siblings.
pub const SIBLING_OFFSET: f32 = 300.0;

/// Vertical distance between a node and its children.
pub const DEPTH_OFFSET: f32 = 300.0;

/// Label prefix requesting fan-out from every node in the sibling group.
pub const MERGE_MARKER: &str = "<all>";

/// Returns the label of a merge child without its marker, if it has one.
fn strip_merge_marker(content: &str) -> Option<&str> {
    content.strip_prefix(MERGE_MARKER).map(str::trim)
}

/// Placement and linkage of one node being built.
#[derive(Debug, Clone, Copy)]
struct Slot<'g> {
    sibling_index: usize,
    y: f32,
    predecessor: Option<NodeId>,
    /// Set on merge copies only: the group the copy was fanned out from,
    /// handed down to its own children in place of its id.
    merge_group: Option<&'g [NodeId]>,
}

/// Builds the graph for one content tree.
///
/// # Examples
///
/// ```
/// use etymograph::builder::GraphBuilder;
/// use etymograph_core::{content::ContentNode, identifier::Sha256Hasher};
///
/// let tree = ContentNode::new("Latin problema", vec![ContentNode::leaf("English problem")]);
/// let graph = GraphBuilder::new(&Sha256Hasher, 500.0).build(&tree).unwrap();
///
/// assert_eq!(graph.nodes().len(), 2);
/// assert_eq!(graph.nodes()[1].position().x(), 500.0);
/// assert_eq!(graph.nodes()[1].position().y(), 300.0);
/// assert_eq!(graph.edges().len(), 1);
/// ```
pub struct GraphBuilder<'h, H: ContentHasher + ?Sized> {
    hasher: &'h H,
    x_base: f32,
}

impl<'h, H: ContentHasher + ?Sized> GraphBuilder<'h, H> {
    /// Creates a builder placing the tree at horizontal offset `x_base`.
    pub fn new(hasher: &'h H, x_base: f32) -> Self {
        Self { hasher, x_base }
    }

    /// Builds the tree rooted at `root` with the root at `y = 0`.
    ///
    /// # Errors
    ///
    /// Returns the first [`HashError`] raised by the hasher; no partial graph
    /// is returned.
    pub fn build(&self, root: &ContentNode) -> Result<DerivationGraph, HashError> {
        self.build_at(root, 0.0)
    }

    /// Builds the tree rooted at `root` with the root at `y = y_base`.
    ///
    /// # Errors
    ///
    /// Returns the first [`HashError`] raised by the hasher.
    pub fn build_at(&self, root: &ContentNode, y_base: f32) -> Result<DerivationGraph, HashError> {
        let slot = Slot {
            sibling_index: 0,
            y: y_base,
            predecessor: None,
            merge_group: None,
        };
        self.build_node(root.content(), root.children(), slot)
    }

    fn build_node(
        &self,
        content: &str,
        children: &[ContentNode],
        slot: Slot<'_>,
    ) -> Result<DerivationGraph, HashError> {
        let id = self.hasher.hash(content)?;
        let position = Point::new(
            self.x_base + slot.sibling_index as f32 * SIBLING_OFFSET,
            slot.y,
        );
        trace!(id:% = id, x = position.x(), y = position.y(); "Graph node");

        let mut graph = DerivationGraph::new();
        graph.push_node(GraphNode::new(id, content, position));
        if let Some(predecessor) = slot.predecessor {
            graph.push_edge(GraphEdge::new(predecessor, id));
        }

        let own = [id];
        let handed_down: &[NodeId] = slot.merge_group.unwrap_or(&own);

        let child_y = slot.y + DEPTH_OFFSET;
        let mut preceding = IndexSet::new();

        for (index, child) in children.iter().enumerate() {
            if let Some(merged) = strip_merge_marker(child.content()) {
                let (group, y): (Vec<NodeId>, f32) = if preceding.is_empty() {
                    (handed_down.to_vec(), child_y)
                } else {
                    (preceding.iter().copied().collect(), child_y + DEPTH_OFFSET)
                };
                trace!(content = merged, fan_out = group.len(); "Merge expansion");

                for sibling in &group {
                    let copy = Slot {
                        sibling_index: 0,
                        y,
                        predecessor: Some(*sibling),
                        merge_group: Some(group.as_slice()),
                    };
                    graph.append(self.build_node(merged, child.children(), copy)?);
                }
            } else {
                let slot = Slot {
                    sibling_index: index,
                    y: child_y,
                    predecessor: Some(id),
                    merge_group: None,
                };
                let subgraph = self.build_node(child.content(), child.children(), slot)?;
                if let Some(child_node) = subgraph.nodes().first() {
                    preceding.insert(child_node.id());
                }
                graph.append(subgraph);
            }
        }

        Ok(graph)
    }
}
