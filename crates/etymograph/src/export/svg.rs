//! SVG rendering of derivation graphs.
//!
//! Each distinct node is drawn once as a rounded box whose top-left corner is
//! the node's layout position. Each distinct edge is a straight arrow from the
//! bottom of the source box to the top of the target box.

use log::{debug, info};
use svg::{Document, Node, node::Text as SvgText, node::element as svg_element};

use etymograph_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    graph::{DerivationGraph, GraphNode},
};

use super::{Error, Exporter};
use crate::{config::StyleConfig, structure::GraphIndex};

pub const NODE_WIDTH: f32 = 240.0;
pub const NODE_HEIGHT: f32 = 60.0;

const CANVAS_MARGIN: f32 = 50.0;
const CORNER_RADIUS: f32 = 8.0;
const ARROW_MARKER_ID: &str = "derivation-arrow";
const ELLIPSIS: char = '…';

/// Shortens `label` to at most `max_chars` characters, ending in an ellipsis.
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut short: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    short.push(ELLIPSIS);
    short
}

fn node_size() -> Size {
    Size::new(NODE_WIDTH, NODE_HEIGHT)
}

fn node_bounds(node: &GraphNode) -> Bounds {
    Bounds::new_from_top_left(node.position(), node_size())
}

/// Colors resolved from a [`StyleConfig`] before drawing.
struct Palette {
    background: Option<Color>,
    fill: Color,
    line: Color,
}

impl Palette {
    fn from_style(style: &StyleConfig) -> Result<Self, Error> {
        Ok(Self {
            background: style.background_color().map_err(Error::Style)?,
            fill: style.node_fill_color().map_err(Error::Style)?,
            line: style.line_color().map_err(Error::Style)?,
        })
    }
}

pub struct SvgExporter<'a> {
    style: &'a StyleConfig,
}

impl<'a> SvgExporter<'a> {
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    fn arrow_marker(&self, palette: &Palette) -> svg_element::Definitions {
        let marker = svg_element::Marker::new()
            .set("id", ARROW_MARKER_ID)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", palette.line),
            );
        svg_element::Definitions::new().add(marker)
    }

    fn render_node(&self, node: &GraphNode, palette: &Palette) -> svg_element::Group {
        let position = node.position();
        let center = position.add_point(Point::new(NODE_WIDTH / 2.0, NODE_HEIGHT / 2.0));

        let mut title = svg_element::Element::new("title");
        title.append(SvgText::new(node.label()));

        let frame = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", NODE_WIDTH)
            .set("height", NODE_HEIGHT)
            .set("rx", CORNER_RADIUS)
            .set("fill", palette.fill)
            .set("fill-opacity", palette.fill.alpha())
            .set("stroke", palette.line);

        let label = svg_element::Text::new("")
            .set("x", center.x())
            .set("y", center.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", "sans-serif")
            .set("font-size", self.style.font_size())
            .add(SvgText::new(truncate_label(
                node.label(),
                self.style.max_label_chars(),
            )));

        svg_element::Group::new()
            .set("id", format!("node-{}", node.id()))
            .add(title)
            .add(frame)
            .add(label)
    }

    fn render_edge(
        &self,
        source: &GraphNode,
        target: &GraphNode,
        palette: &Palette,
    ) -> svg_element::Line {
        let start = source
            .position()
            .add_point(Point::new(NODE_WIDTH / 2.0, NODE_HEIGHT));
        let end = target.position().add_point(Point::new(NODE_WIDTH / 2.0, 0.0));

        svg_element::Line::new()
            .set("x1", start.x())
            .set("y1", start.y())
            .set("x2", end.x())
            .set("y2", end.y())
            .set("stroke", palette.line)
            .set("stroke-opacity", palette.line.alpha())
            .set("stroke-width", 1.5)
            .set("marker-end", format!("url(#{ARROW_MARKER_ID})"))
    }
}

impl Exporter for SvgExporter<'_> {
    fn export(&self, graph: &DerivationGraph) -> Result<String, Error> {
        let palette = Palette::from_style(self.style)?;
        let index = GraphIndex::new(graph);
        info!(
            nodes = index.node_count(),
            edges = index.edge_count();
            "Rendering SVG"
        );

        let bounds = index
            .unique_nodes()
            .map(node_bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
            .expand(CANVAS_MARGIN);
        debug!(width = bounds.width(), height = bounds.height(); "SVG canvas");

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        if let Some(background) = palette.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        doc = doc.add(self.arrow_marker(&palette));

        let mut edges = svg_element::Group::new().set("class", "edges");
        for edge in index.unique_edges() {
            let (Some(source), Some(target)) = (index.node(edge.source()), index.node(edge.target()))
            else {
                return Err(Error::Render(format!(
                    "edge {} references a node missing from the graph",
                    edge.id()
                )));
            };
            edges = edges.add(self.render_edge(source, target, &palette));
        }

        let mut nodes = svg_element::Group::new().set("class", "nodes");
        for node in index.unique_nodes() {
            nodes = nodes.add(self.render_node(node, &palette));
        }

        Ok(doc.add(edges).add(nodes).to_string())
    }
}
