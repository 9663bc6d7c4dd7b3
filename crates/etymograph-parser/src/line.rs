//! Line table for a single block.

/// One non-blank source line and its indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'src> {
    text: &'src str,
    indent: usize,
}

impl<'src> Line<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Self {
            text,
            indent: indentation(text),
        }
    }

    pub(crate) fn text(&self) -> &'src str {
        self.text
    }

    pub(crate) fn indent(&self) -> usize {
        self.indent
    }
}

/// Counts leading whitespace characters.
///
/// Every whitespace character counts as one column, tabs included.
pub(crate) fn indentation(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}

/// Builds the line table for `block`, dropping whitespace-only lines.
pub(crate) fn lines(block: &str) -> Vec<Line<'_>> {
    block
        .split('\n')
        .filter(|text| !text.trim().is_empty())
        .map(Line::new)
        .collect()
}
