//! Exporters turning an assembled graph into a document.

pub mod json;
pub mod svg;

use std::path::Path;

use thiserror::Error;

use etymograph_core::graph::DerivationGraph;

/// Renders a [`DerivationGraph`] into a textual document.
pub trait Exporter {
    fn export(&self, graph: &DerivationGraph) -> Result<String, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured style value could not be used.
    #[error("{0}")]
    Style(String),
}

/// Output document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl OutputFormat {
    /// Infers the format from a file extension, defaulting to SVG.
    ///
    /// ```
    /// # use etymograph::export::OutputFormat;
    /// assert_eq!(OutputFormat::from_path("graph.JSON"), OutputFormat::Json);
    /// assert_eq!(OutputFormat::from_path("out.svg"), OutputFormat::Svg);
    /// assert_eq!(OutputFormat::from_path("out"), OutputFormat::Svg);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Svg,
        }
    }
}
