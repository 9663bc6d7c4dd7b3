//! Read-only analysis of an assembled derivation graph.
//!
//! A [`DerivationGraph`] keeps every node and edge occurrence exactly as the
//! builder produced them. [`GraphIndex`] collapses those occurrences by id,
//! which is how a renderer sees the graph:
//!
//! - the first occurrence of a node id wins (label and position);
//! - parallel edges with the same endpoints count once.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use petgraph::{algo, graphmap::DiGraphMap};

use etymograph_core::{
    graph::{DerivationGraph, GraphEdge, GraphNode},
    identifier::NodeId,
};

/// Id-collapsed view over a [`DerivationGraph`].
#[derive(Debug)]
pub struct GraphIndex<'a> {
    nodes: IndexMap<NodeId, &'a GraphNode>,
    edges: IndexSet<GraphEdge>,
    in_degrees: HashMap<NodeId, usize>,
}

impl<'a> GraphIndex<'a> {
    /// Indexes `graph`, preserving document order.
    pub fn new(graph: &'a DerivationGraph) -> Self {
        let mut nodes = IndexMap::new();
        for node in graph.nodes() {
            nodes.entry(node.id()).or_insert(node);
        }

        let edges: IndexSet<GraphEdge> = graph.edges().iter().copied().collect();

        let mut in_degrees = HashMap::new();
        for edge in &edges {
            *in_degrees.entry(edge.target()).or_insert(0) += 1;
        }

        Self {
            nodes,
            edges,
            in_degrees,
        }
    }

    /// Returns the first occurrence of every node id, in document order.
    pub fn unique_nodes(&self) -> impl Iterator<Item = &'a GraphNode> + '_ {
        self.nodes.values().copied()
    }

    /// Returns each distinct edge once, in document order.
    pub fn unique_edges(&self) -> impl Iterator<Item = GraphEdge> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the node displayed for `id`, if any occurrence exists.
    pub fn node(&self, id: NodeId) -> Option<&'a GraphNode> {
        self.nodes.get(&id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of distinct predecessors of `id`.
    pub fn in_degree(&self, id: NodeId) -> usize {
        self.in_degrees.get(&id).copied().unwrap_or(0)
    }

    /// Returns the nodes without predecessors, in document order.
    pub fn roots(&self) -> impl Iterator<Item = &'a GraphNode> + '_ {
        self.unique_nodes()
            .filter(|node| self.in_degree(node.id()) == 0)
    }

    /// Returns `false` when equal labels closed a cycle, self-loops included.
    pub fn is_acyclic(&self) -> bool {
        let mut graph = DiGraphMap::<NodeId, ()>::new();
        for id in self.nodes.keys() {
            graph.add_node(*id);
        }
        for edge in &self.edges {
            graph.add_edge(edge.source(), edge.target(), ());
        }
        !algo::is_cyclic_directed(&graph)
    }
}
