//! Configuration types for rendering derivation graphs.
//!
//! Layout constants are fixed; only presentation can be configured. All types
//! implement [`serde::Deserialize`] so they can be loaded from TOML.
//!
//! # Example
//!
//! ```
//! # use etymograph::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.style().max_label_chars(), 32);
//! ```

use serde::Deserialize;

use etymograph_core::color::Color;

const DEFAULT_NODE_FILL: &str = "white";
const DEFAULT_LINE_COLOR: &str = "#444444";
const DEFAULT_FONT_SIZE: f32 = 14.0;
const DEFAULT_MAX_LABEL_CHARS: usize = 32;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given style section.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling for rendered graphs.
///
/// Colors are kept as strings and parsed on use, so an invalid color only
/// fails the renderer that needs it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Canvas background; transparent when unset.
    background_color: Option<String>,
    node_fill_color: String,
    line_color: String,
    font_size: f32,
    /// Labels longer than this are shortened with an ellipsis.
    max_label_chars: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            node_fill_color: DEFAULT_NODE_FILL.to_string(),
            line_color: DEFAULT_LINE_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            max_label_chars: DEFAULT_MAX_LABEL_CHARS,
        }
    }
}

impl StyleConfig {
    /// Returns a copy with the given background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed node fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn node_fill_color(&self) -> Result<Color, String> {
        Color::new(&self.node_fill_color)
            .map_err(|err| format!("Invalid node fill color in config: {err}"))
    }

    /// Returns the parsed edge and border [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn line_color(&self) -> Result<Color, String> {
        Color::new(&self.line_color).map_err(|err| format!("Invalid line color in config: {err}"))
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn max_label_chars(&self) -> usize {
        self.max_label_chars
    }
}
