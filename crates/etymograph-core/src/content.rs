//! Parsed derivation trees.
//!
//! A [`ContentNode`] is one derivation step as read from the source notation:
//! its fully resolved label (language prefix plus the line's own text) and its
//! ordered children. Trees are built once by the parser and then walked by the
//! graph builder; they are never mutated in between.

/// One derivation step and the steps derived from it.
///
/// # Examples
///
/// ```
/// use etymograph_core::content::ContentNode;
///
/// let tree = ContentNode::new(
///     "Classical Latin problēma",
///     vec![ContentNode::leaf("English problem")],
/// );
///
/// assert_eq!(tree.content(), "Classical Latin problēma");
/// assert_eq!(tree.children()[0].content(), "English problem");
/// assert_eq!(tree.node_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentNode {
    content: String,
    children: Vec<ContentNode>,
}

impl ContentNode {
    /// Creates a node with the given label and children.
    pub fn new(content: impl Into<String>, children: Vec<ContentNode>) -> Self {
        Self {
            content: content.into(),
            children,
        }
    }

    /// Creates a node without children.
    pub fn leaf(content: impl Into<String>) -> Self {
        Self::new(content, Vec::new())
    }

    /// Returns the fully resolved label of this node.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the children in source order.
    pub fn children(&self) -> &[ContentNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in this subtree, including this node.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ContentNode::node_count)
            .sum::<usize>()
    }
}
