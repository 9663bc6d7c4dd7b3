//! # Etymograph Parser
//!
//! Parser for the Etymograph derivation notation. This crate turns a complete
//! source document into one content tree per derivation block.
//!
//! ## Usage
//!
//! ```
//! use etymograph_parser::parse;
//!
//! let source = "\
//! %Partly from
//! @ Middle French
//!     └── problème
//!         └── <borrow-into> @ English
//!             └── problem";
//!
//! let document = parse(source);
//! assert_eq!(document.blocks().len(), 1);
//!
//! let root = document.blocks()[0].root().unwrap();
//! assert_eq!(root.content(), "Middle French problème");
//! assert_eq!(root.children()[0].content(), "English problem");
//! ```
//!
//! Parsing never fails: any text produces some (possibly empty) document.

pub mod glyph;
pub mod segment;

mod line;
mod parser;

pub use parser::{ANNOTATION_INDENT_STEP, parse_block};
pub use segment::BlockKind;

use log::{debug, info};

use etymograph_core::content::ContentNode;

/// One parsed derivation block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    index: usize,
    kind: BlockKind,
    text: String,
    roots: Vec<ContentNode>,
}

impl Block {
    /// Returns the position of this block in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the section marker that opened this block.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Returns the block's source text, without its leading newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns every top-level tree parsed from the block.
    pub fn roots(&self) -> &[ContentNode] {
        &self.roots
    }

    /// Returns the first top-level tree, the one that is drawn.
    pub fn root(&self) -> Option<&ContentNode> {
        self.roots.first()
    }
}

/// A parsed source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Returns the blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parse a source document into derivation blocks.
///
/// This is the main entry point of the crate:
///
/// 1. **Segment** - split the document on section markers
/// 2. **Parse** - build a content tree from each block's indentation
pub fn parse(source: &str) -> Document {
    info!("Parsing document");

    let blocks: Vec<Block> = segment::segment(source)
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            let roots = parse_block(segment.text());
            debug!(
                block = index,
                kind:? = segment.kind(),
                roots = roots.len();
                "Block parsed"
            );
            Block {
                index,
                kind: segment.kind(),
                text: segment.text().to_string(),
                roots,
            }
        })
        .collect();

    info!(blocks = blocks.len(); "Document parsed");
    Document { blocks }
}
