//! JSON export in the node/edge shape used by graph canvases.

use log::debug;

use etymograph_core::graph::DerivationGraph;

use super::{Error, Exporter};

/// Serializes the graph with every node and edge occurrence kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables indented output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Exporter for JsonExporter {
    fn export(&self, graph: &DerivationGraph) -> Result<String, Error> {
        debug!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            pretty = self.pretty;
            "Exporting JSON"
        );
        let json = if self.pretty {
            serde_json::to_string_pretty(graph)?
        } else {
            serde_json::to_string(graph)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use etymograph_core::{
        geometry::Point,
        graph::{GraphEdge, GraphNode},
        identifier::Sha256Hasher,
    };
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_shape() {
        let a = Sha256Hasher::digest("a");
        let b = Sha256Hasher::digest("b");
        let graph = DerivationGraph::from_parts(
            vec![
                GraphNode::new(a, "a", Point::new(0.0, 0.0)),
                GraphNode::new(b, "b", Point::new(500.0, 300.0)),
            ],
            vec![GraphEdge::new(a, b)],
        );

        let out = JsonExporter::new().export(&graph).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            value["nodes"][1],
            json!({
                "id": b.to_string(),
                "position": { "x": 500.0, "y": 300.0 },
                "data": { "label": "b" },
            })
        );
        assert_eq!(
            value["edges"][0],
            json!({
                "id": format!("edge-{a}-{b}"),
                "source": a.to_string(),
                "target": b.to_string(),
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        let out = JsonExporter::new().export(&DerivationGraph::new()).unwrap();
        assert_eq!(out, r#"{"nodes":[],"edges":[]}"#);
    }

    #[test]
    fn test_pretty_is_equivalent() {
        let graph = DerivationGraph::new();
        let compact: Value =
            serde_json::from_str(&JsonExporter::new().export(&graph).unwrap()).unwrap();
        let pretty: Value =
            serde_json::from_str(&JsonExporter::new().pretty(true).export(&graph).unwrap())
                .unwrap();
        assert_eq!(compact, pretty);
    }
}
