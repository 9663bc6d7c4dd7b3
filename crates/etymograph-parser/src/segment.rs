//! Splitting a document into independent derivation blocks.
//!
//! A document is a sequence of blocks, each opened by a section marker:
//!
//! ```text
//! %Partly from
//! @ Middle French
//!     └── problème
//! %External
//! ?
//!     └── @ Ancient Greek
//!         └── βάλλειν [to throw]
//! ```
//!
//! Everything before the first [`PARTLY_FROM_MARKER`] is a preamble and never
//! part of a derivation tree, so a document without that marker has no
//! blocks unless an [`EXTERNAL_MARKER`] follows the preamble text.

/// Marker opening a block that contributes part of the word's origin.
pub const PARTLY_FROM_MARKER: &str = "%Partly from";

/// Marker opening a block describing an external, related derivation.
pub const EXTERNAL_MARKER: &str = "%External";

/// Which section marker opened a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Opened by [`PARTLY_FROM_MARKER`].
    PartlyFrom,
    /// Opened by [`EXTERNAL_MARKER`].
    External,
}

/// The raw text of one block, borrowed from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'src> {
    kind: BlockKind,
    text: &'src str,
}

impl<'src> Segment<'src> {
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn text(&self) -> &'src str {
        self.text
    }
}

/// Splits `document` into block texts in document order.
///
/// The document is split on [`PARTLY_FROM_MARKER`], every piece again on
/// [`EXTERNAL_MARKER`], and the flattened sequence loses its first element
/// (the preamble). A single leading newline is removed from each block.
///
/// # Examples
///
/// ```
/// use etymograph_parser::segment::{BlockKind, segment};
///
/// let blocks = segment("%Partly from\nA\n%External\nB");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].text(), "A\n");
/// assert_eq!(blocks[0].kind(), BlockKind::PartlyFrom);
/// assert_eq!(blocks[1].text(), "B");
/// assert_eq!(blocks[1].kind(), BlockKind::External);
///
/// assert!(segment("no markers here").is_empty());
/// ```
pub fn segment(document: &str) -> Vec<Segment<'_>> {
    document
        .split(PARTLY_FROM_MARKER)
        .flat_map(|piece| {
            piece
                .split(EXTERNAL_MARKER)
                .enumerate()
                .map(|(idx, text)| {
                    let kind = if idx == 0 {
                        BlockKind::PartlyFrom
                    } else {
                        BlockKind::External
                    };
                    (kind, text)
                })
        })
        .skip(1)
        .map(|(kind, text)| Segment {
            kind,
            text: text.strip_prefix('\n').unwrap_or(text),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn texts(document: &str) -> Vec<&str> {
        segment(document).iter().map(Segment::text).collect()
    }

    #[test]
    fn test_two_partly_from_blocks() {
        let blocks = segment("%Partly from A\n%Partly from B");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text(), " A\n");
        assert_eq!(blocks[1].text(), " B");
        assert!(blocks.iter().all(|b| b.kind() == BlockKind::PartlyFrom));
    }

    #[test]
    fn test_no_markers() {
        assert!(segment("no markers here").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_preamble_dropped() {
        assert_eq!(
            texts("Summary of multiple origins.\n%Partly from\nA"),
            vec!["A"]
        );
    }

    #[test]
    fn test_only_one_leading_newline_removed() {
        assert_eq!(texts("%Partly from\n\nA"), vec!["\nA"]);
    }

    #[test]
    fn test_external_after_partly_from() {
        let blocks = segment("%Partly from\nA\n%Partly from\nB\n%External\nC");

        assert_eq!(
            blocks.iter().map(Segment::text).collect::<Vec<_>>(),
            vec!["A\n", "B\n", "C"]
        );
        assert_eq!(
            blocks.iter().map(Segment::kind).collect::<Vec<_>>(),
            vec![
                BlockKind::PartlyFrom,
                BlockKind::PartlyFrom,
                BlockKind::External
            ]
        );
    }

    #[test]
    fn test_external_inside_preamble_is_kept() {
        let blocks = segment("intro\n%External\nA");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "A");
        assert_eq!(blocks[0].kind(), BlockKind::External);
    }

    #[test]
    fn test_adjacent_markers_produce_empty_blocks() {
        assert_eq!(texts("%Partly from%Partly from\nA"), vec!["", "A"]);
    }

    proptest! {
        #[test]
        fn prop_block_count_matches_markers(parts in prop::collection::vec("[a-z \n]{0,12}", 1..6)) {
            let document = parts.join(PARTLY_FROM_MARKER);
            prop_assert_eq!(segment(&document).len(), parts.len() - 1);
        }
    }
}
