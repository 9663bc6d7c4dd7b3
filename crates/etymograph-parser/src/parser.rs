//! Indentation parser for a single block.
//!
//! Each block is a tree written with indentation. Two kinds of lines exist:
//!
//! - **Annotation lines** name a language context, e.g. `@ Classical Latin` or
//!   `<borrow> @ French`. They produce no node; their language becomes the
//!   prefix of every content line nested under them.
//! - **Content lines** produce one [`ContentNode`] labelled with the active
//!   prefix followed by the line text. Every following line indented deeper
//!   than the content line belongs to its subtree.
//!
//! ```text
//! @ Middle French                  <- annotation, prefix "Middle French"
//!     └── problème                 <- node "Middle French problème"
//!         └── <borrow> @ French    <- annotation, prefix "French"
//!             └── problème         <- node "French problème"
//! ```
//!
//! The grammar is permissive: inconsistent indentation is never an error.
//! Any line indented deeper than the current reference level is a child, and
//! lines that match neither the reference level nor a child range are skipped.

use log::trace;

use etymograph_core::content::ContentNode;

use crate::{
    glyph::Connector,
    line::{self, Line},
};

/// Columns by which an annotation line advances the reference level.
///
/// Annotated subtrees are expected to nest exactly this far below the
/// annotation. Other indentation widths under an annotation are not inferred.
pub const ANNOTATION_INDENT_STEP: usize = 4;

/// Parses one block into a forest of content trees.
///
/// The indentation of the first non-blank line is the initial reference
/// level and the initial prefix is empty. Blank input yields an empty forest.
///
/// # Examples
///
/// ```
/// use etymograph_parser::parse_block;
///
/// let forest = parse_block("@ Latin\n    problema\n        └── @ English\n            problem");
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest[0].content(), "Latin problema");
/// assert_eq!(forest[0].children()[0].content(), "English problem");
/// ```
pub fn parse_block(block: &str) -> Vec<ContentNode> {
    let parser = Parser::new(line::lines(block));
    parser.parse()
}

/// Extracts the language named by an annotation line.
///
/// `text` must already be stripped of connector glyphs. An annotation is `@`
/// optionally preceded by one or more `<tag>` markers; the language is the
/// trimmed remainder of the line after the first `@`.
pub(crate) fn annotation_language(text: &str) -> Option<&str> {
    let mut rest = text;
    while let Some(tagged) = rest.strip_prefix('<') {
        let close = tagged.find('>')?;
        rest = tagged[close + 1..].trim_start();
    }

    rest.strip_prefix('@').map(str::trim)
}

/// Joins the active language prefix and a content line.
fn resolve_content(prefix: &str, text: &str) -> String {
    format!("{prefix} {text}").trim().to_string()
}

/// Recursive-descent parser over an owned line table.
///
/// Recursive calls share the table and only pass index ranges.
struct Parser<'src> {
    lines: Vec<Line<'src>>,
}

impl<'src> Parser<'src> {
    fn new(lines: Vec<Line<'src>>) -> Self {
        Self { lines }
    }

    fn parse(&self) -> Vec<ContentNode> {
        match self.lines.first() {
            Some(first) => self.parse_range(0, self.lines.len(), first.indent(), ""),
            None => Vec::new(),
        }
    }

    /// Parses `lines[start..end]` at the given reference level.
    fn parse_range(
        &self,
        start: usize,
        end: usize,
        reference: usize,
        inherited: &'src str,
    ) -> Vec<ContentNode> {
        let mut nodes = Vec::new();
        let mut reference = reference;
        let mut prefix = inherited;
        let mut cursor = start;

        while cursor < end {
            let line = self.lines[cursor];
            if line.indent() != reference {
                cursor += 1;
                continue;
            }

            let text = Connector::strip(line.text());

            if let Some(language) = annotation_language(text) {
                trace!(language, line = cursor; "Language context");
                prefix = language;
                reference += ANNOTATION_INDENT_STEP;
                cursor += 1;
                continue;
            }

            let content = resolve_content(prefix, text);
            let children_end = self.subtree_end(cursor + 1, end, reference);
            let children = if children_end > cursor + 1 {
                let child_reference = self.lines[cursor + 1].indent();
                self.parse_range(cursor + 1, children_end, child_reference, prefix)
            } else {
                Vec::new()
            };

            trace!(content = content.as_str(), children = children.len(); "Content node");
            nodes.push(ContentNode::new(content, children));
            cursor = children_end;
        }

        nodes
    }

    /// Returns the end of the run of lines indented deeper than `reference`.
    fn subtree_end(&self, start: usize, end: usize, reference: usize) -> usize {
        self.lines[start..end]
            .iter()
            .position(|line| line.indent() <= reference)
            .map_or(end, |offset| start + offset)
    }
}
