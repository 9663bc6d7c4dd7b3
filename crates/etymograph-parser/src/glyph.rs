//! Tree-drawing connector glyphs.
//!
//! Content lines may start with a connector glyph purely for readability.
//! Only the two glyphs below are recognised; anything else is content.

/// A tree-drawing connector at the start of a content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `└──`, drawn before the last child of a node.
    Last,
    /// `├──`, drawn before every other child.
    Other,
}

impl Connector {
    const ALL: [Connector; 2] = [Connector::Last, Connector::Other];

    /// Returns the literal glyph text.
    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Last => "└──",
            Connector::Other => "├──",
        }
    }

    /// Removes a leading connector from `text`.
    ///
    /// Surrounding whitespace is trimmed both before and after the glyph. At
    /// most one connector is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use etymograph_parser::glyph::Connector;
    ///
    /// assert_eq!(Connector::strip("    └── problem "), "problem");
    /// assert_eq!(Connector::strip("├── problème"), "problème");
    /// assert_eq!(Connector::strip("  @ English"), "@ English");
    /// ```
    pub fn strip(text: &str) -> &str {
        let text = text.trim();
        Self::ALL
            .iter()
            .find_map(|connector| text.strip_prefix(connector.glyph()).map(str::trim))
            .unwrap_or(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_only_once() {
        assert_eq!(Connector::strip("└── └── x"), "└── x");
    }

    #[test]
    fn test_glyph_must_lead() {
        assert_eq!(Connector::strip("x └── y"), "x └── y");
    }

    #[test]
    fn test_bare_connector() {
        assert_eq!(Connector::strip("├──"), "");
    }

    #[test]
    fn test_other_box_drawing_is_content() {
        assert_eq!(Connector::strip("│   x"), "│   x");
    }
}
