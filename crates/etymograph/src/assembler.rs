//! Whole-document assembly.
//!
//! [`GraphAssembler`] parses a document, builds each block's first tree on the
//! rayon pool with the block placed at `index * BLOCK_OFFSET`, and concatenates
//! the results in block order. Blocks are independent until the final join, so
//! a node shared by several blocks (the modern word every route ends in) is
//! simply emitted by each of them under the same id.

use log::{debug, info, warn};
use rayon::prelude::*;

use etymograph_core::{
    graph::DerivationGraph,
    identifier::{CachingHasher, ContentHasher, HashError, Sha256Hasher},
};
use etymograph_parser::{Block, Document};

use crate::{
    builder::{BLOCK_OFFSET, GraphBuilder},
    structure::GraphIndex,
};

/// Assembles the derivation graph of a whole document.
///
/// Label hashes are memoized for the duration of one [`assemble`] call, so a
/// word repeated across blocks is hashed once. The memo is dropped when the
/// call returns; a long-lived assembler does not accumulate labels.
///
/// [`assemble`]: GraphAssembler::assemble
///
/// # Examples
///
/// ```
/// use etymograph::assembler::GraphAssembler;
///
/// let source = "%Partly from\n@ Latin\n    problema\n%Partly from\nproblema";
/// let graph = GraphAssembler::new().assemble(source).unwrap();
///
/// let xs: Vec<f32> = graph.nodes().iter().map(|node| node.position().x()).collect();
/// assert_eq!(xs, vec![0.0, 500.0]);
/// ```
pub struct GraphAssembler<H = Sha256Hasher> {
    hasher: H,
}

impl GraphAssembler<Sha256Hasher> {
    pub fn new() -> Self {
        Self::with_hasher(Sha256Hasher)
    }
}

impl Default for GraphAssembler<Sha256Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ContentHasher> GraphAssembler<H> {
    /// Creates an assembler identifying labels with `hasher`.
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Parses and assembles a complete source document.
    ///
    /// # Errors
    ///
    /// Returns the first [`HashError`] raised while identifying labels. No
    /// partial graph is produced.
    pub fn assemble(&self, source: &str) -> Result<DerivationGraph, HashError> {
        let document = etymograph_parser::parse(source);
        self.assemble_document(&document)
    }

    /// Assembles an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns the [`HashError`] of the earliest failing block, whatever order
    /// the workers finished in.
    pub fn assemble_document(&self, document: &Document) -> Result<DerivationGraph, HashError> {
        info!(blocks = document.blocks().len(); "Assembling graph");

        let hasher = CachingHasher::new(&self.hasher);
        let built: Vec<Result<DerivationGraph, HashError>> = document
            .blocks()
            .par_iter()
            .map(|block| build_block(&hasher, block))
            .collect();
        let graphs = built.into_iter().collect::<Result<Vec<_>, _>>()?;

        let graph: DerivationGraph = graphs.into_iter().collect();

        if !GraphIndex::new(&graph).is_acyclic() {
            warn!("Derivation graph contains a cycle; equal labels may link unrelated forms");
        }
        info!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            cached_labels = hasher.len();
            "Graph assembled"
        );

        Ok(graph)
    }
}

fn build_block<H: ContentHasher>(hasher: &H, block: &Block) -> Result<DerivationGraph, HashError> {
    if block.roots().len() > 1 {
        warn!(
            block = block.index(),
            ignored = block.roots().len() - 1;
            "Block has several top-level trees; only the first is drawn"
        );
    }

    let Some(root) = block.root() else {
        debug!(block = block.index(); "Empty block");
        return Ok(DerivationGraph::new());
    };

    let x_base = block.index() as f32 * BLOCK_OFFSET;
    let graph = GraphBuilder::new(hasher, x_base).build(root)?;
    debug!(
        block = block.index(),
        kind:? = block.kind(),
        forms = root.node_count(),
        nodes = graph.nodes().len(),
        edges = graph.edges().len();
        "Block built"
    );
    Ok(graph)
}
