//! Positioned derivation graphs.
//!
//! The graph builder turns each parsed [`ContentNode`](crate::content::ContentNode)
//! tree into a flat list of [`GraphNode`]s and [`GraphEdge`]s. Lists are kept
//! exactly as produced: a node reached through several derivation paths, or a
//! node shared by several blocks, appears once per occurrence with the same
//! [`NodeId`]. Consumers collapse occurrences by id.
//!
//! The serialized form matches what interactive graph canvases expect:
//!
//! ```json
//! { "nodes": [{ "id": "…", "position": { "x": 0.0, "y": 0.0 }, "data": { "label": "…" } }],
//!   "edges": [{ "id": "edge-…-…", "source": "…", "target": "…" }] }
//! ```

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    geometry::Point,
    identifier::{EdgeId, NodeId},
};

/// A labeled node placed in graph space.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    id: NodeId,
    label: String,
    position: Point,
}

impl GraphNode {
    pub fn new(id: NodeId, label: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            label: label.into(),
            position,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl Serialize for GraphNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Data<'a> {
            label: &'a str,
        }

        let mut state = serializer.serialize_struct("GraphNode", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("data", &Data { label: &self.label })?;
        state.end()
    }
}

/// A directed edge from an earlier form to a later form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    source: NodeId,
    target: NodeId,
}

impl GraphEdge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Returns the identifier derived from this edge's endpoints.
    pub fn id(&self) -> EdgeId {
        EdgeId::new(self.source, self.target)
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }
}

impl Serialize for GraphEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GraphEdge", 3)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("target", &self.target)?;
        state.end()
    }
}

/// Ordered node and edge lists produced for one block or a whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivationGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl DerivationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from already ordered node and edge lists.
    pub fn from_parts(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn push_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    pub fn push_edge(&mut self, edge: GraphEdge) {
        self.edges.push(edge);
    }

    /// Appends all nodes and edges of `other` after this graph's own.
    pub fn append(&mut self, other: DerivationGraph) {
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn into_parts(self) -> (Vec<GraphNode>, Vec<GraphEdge>) {
        (self.nodes, self.edges)
    }
}

impl FromIterator<DerivationGraph> for DerivationGraph {
    fn from_iter<I: IntoIterator<Item = DerivationGraph>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut acc, graph| {
            acc.append(graph);
            acc
        })
    }
}
