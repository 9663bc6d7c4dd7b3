//! Etymograph - turns etymological derivation notation into positioned graphs.
//!
//! A source document lists one or more derivation routes for a word. Each
//! route is an indented tree of language-tagged forms. Etymograph parses the
//! routes, identifies every form by a hash of its label, lays the routes out
//! side by side, and renders the combined graph as SVG or JSON.

pub mod assembler;
pub mod builder;
pub mod config;
pub mod deferred;
pub mod export;
pub mod structure;

mod error;

pub use etymograph_core::{content, geometry, graph, identifier};
pub use etymograph_parser as parser;

pub use error::EtymographError;

use log::{debug, info};

use assembler::GraphAssembler;
use config::AppConfig;
use export::{Exporter, OutputFormat};
use graph::DerivationGraph;

/// Builder for assembling and rendering derivation graphs.
///
/// # Examples
///
/// ```rust
/// use etymograph::{Etymograph, config::AppConfig};
///
/// let source = "\
/// %Partly from
/// @ Classical Latin
///     └── problēma
///         └── <borrow-into> @ English
///             └── problem";
///
/// let etymograph = Etymograph::new(AppConfig::default());
///
/// let graph = etymograph.assemble(source).expect("Failed to assemble");
/// assert_eq!(graph.nodes().len(), 2);
///
/// let svg = etymograph.render_svg(&graph).expect("Failed to render");
/// assert!(svg.contains("English problem"));
/// ```
#[derive(Default)]
pub struct Etymograph {
    config: AppConfig,
    assembler: GraphAssembler,
}

impl Etymograph {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            assembler: GraphAssembler::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a source document and assemble its derivation graph.
    ///
    /// # Errors
    ///
    /// Returns [`EtymographError::Hash`] if a label cannot be identified.
    pub fn assemble(&self, source: &str) -> Result<DerivationGraph, EtymographError> {
        let graph = self.assembler.assemble(source)?;
        debug!(nodes = graph.nodes().len(); "Graph ready");
        Ok(graph)
    }

    /// Render a graph to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`EtymographError::Config`] for unusable style values and
    /// [`EtymographError::Export`] for rendering failures.
    pub fn render_svg(&self, graph: &DerivationGraph) -> Result<String, EtymographError> {
        self.render(graph, OutputFormat::Svg)
    }

    /// Render a graph to its JSON node/edge form.
    ///
    /// # Errors
    ///
    /// Returns [`EtymographError::Export`] if serialization fails.
    pub fn render_json(&self, graph: &DerivationGraph) -> Result<String, EtymographError> {
        self.render(graph, OutputFormat::Json)
    }

    /// Render a graph in the requested format.
    ///
    /// # Errors
    ///
    /// See [`Etymograph::render_svg`] and [`Etymograph::render_json`].
    pub fn render(
        &self,
        graph: &DerivationGraph,
        format: OutputFormat,
    ) -> Result<String, EtymographError> {
        info!(format:? = format; "Rendering graph");
        let output = match format {
            OutputFormat::Svg => export::svg::SvgExporter::new(self.config.style()).export(graph)?,
            OutputFormat::Json => export::json::JsonExporter::new().pretty(true).export(graph)?,
        };
        info!(bytes = output.len(); "Graph rendered");
        Ok(output)
    }
}
