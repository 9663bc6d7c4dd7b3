//! Content-addressed identifiers for derivation graph nodes and edges.
//!
//! A [`NodeId`] is derived purely from a node's label: the SHA-256 digest of
//! the label's UTF-8 bytes, truncated to its first [`ID_HEX_LEN`] hexadecimal
//! characters. Equal labels anywhere in a document resolve to the same node,
//! which is how independently derived branches converge in the output graph.
//!
//! # Collisions
//!
//! Truncation leaves an id space of 2^32. Two distinct labels can map to the
//! same [`NodeId`] and will then be drawn as a single node. This is an accepted
//! trade-off of the notation, not a bug to be worked around here.
//!
//! # Examples
//!
//! ```
//! use etymograph_core::identifier::{ContentHasher, EdgeId, Sha256Hasher};
//!
//! let hasher = Sha256Hasher;
//! let latin = hasher.hash("Latin problēma").unwrap();
//! let english = hasher.hash("English problem").unwrap();
//!
//! assert_eq!(latin, hasher.hash("Latin problēma").unwrap());
//! assert_eq!(latin.to_string().len(), 8);
//!
//! let edge = EdgeId::new(latin, english);
//! assert_eq!(edge.to_string(), format!("edge-{latin}-{english}"));
//! ```

use std::{
    collections::HashMap,
    fmt,
    sync::{Mutex, PoisonError},
};

use log::trace;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Number of hexadecimal characters kept from the content digest.
pub const ID_HEX_LEN: usize = 8;

const ID_BYTES: usize = ID_HEX_LEN / 2;

/// Failure of the underlying digest operation.
///
/// The bundled [`Sha256Hasher`] never produces this error; it exists so that
/// alternative [`ContentHasher`] implementations can report failures, which
/// abort the whole document transform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to hash content `{content}`: {reason}")]
pub struct HashError {
    content: String,
    reason: String,
}

impl HashError {
    /// Creates a new hash error for the given content.
    pub fn new(content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Returns the content whose digest could not be computed.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the reason reported by the hasher.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Content-addressed node identifier.
///
/// Holds the leading bytes of the SHA-256 digest of a node label and renders
/// as [`ID_HEX_LEN`] lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId([u8; ID_BYTES]);

impl NodeId {
    /// Creates a `NodeId` from raw identifier bytes.
    pub fn from_bytes(bytes: [u8; ID_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Identifier of a directed edge, fully determined by its endpoints.
///
/// Two edges with the same `(source, target)` pair share an `EdgeId` and are
/// one logical edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    source: NodeId,
    target: NodeId,
}

impl EdgeId {
    /// Creates the identifier of the edge `source -> target`.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge-{}-{}", self.source, self.target)
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Maps label text to a [`NodeId`].
///
/// Implementations must be referentially transparent: the same content always
/// yields the same id, with no observable side effects. Callers rely on this
/// to memoize results and to hash from several threads at once.
pub trait ContentHasher: Send + Sync {
    /// Computes the identifier for `content`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the underlying digest operation fails.
    fn hash(&self, content: &str) -> Result<NodeId, HashError>;
}

impl<H: ContentHasher + ?Sized> ContentHasher for &H {
    fn hash(&self, content: &str) -> Result<NodeId, HashError> {
        (**self).hash(content)
    }
}

/// SHA-256 based [`ContentHasher`] truncated to [`ID_HEX_LEN`] characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    /// Computes the identifier for `content` directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use etymograph_core::identifier::Sha256Hasher;
    ///
    /// // sha256("") = e3b0c442...
    /// assert_eq!(Sha256Hasher::digest("").to_string(), "e3b0c442");
    /// ```
    pub fn digest(content: &str) -> NodeId {
        let digest = Sha256::digest(content.as_bytes());
        let mut bytes = [0u8; ID_BYTES];
        bytes.copy_from_slice(&digest[..ID_BYTES]);
        NodeId(bytes)
    }
}

impl ContentHasher for Sha256Hasher {
    fn hash(&self, content: &str) -> Result<NodeId, HashError> {
        Ok(Self::digest(content))
    }
}

/// Memoizing wrapper around another [`ContentHasher`].
///
/// Successful results are cached by content; failures are not cached and are
/// reported again on the next call.
#[derive(Debug, Default)]
pub struct CachingHasher<H> {
    inner: H,
    cache: Mutex<HashMap<String, NodeId>>,
}

impl<H: ContentHasher> CachingHasher<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of distinct contents hashed so far.
    pub fn len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: ContentHasher> ContentHasher for CachingHasher<H> {
    fn hash(&self, content: &str) -> Result<NodeId, HashError> {
        if let Some(id) = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(content)
        {
            trace!(id:% = id; "Content hash cache hit");
            return Ok(*id);
        }

        let id = self.inner.hash(content)?;
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(content.to_string(), id);
        Ok(id)
    }
}
