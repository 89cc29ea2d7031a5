//! Typed identifiers for DocuFlow domain entities.
//!
//! Document identifiers are human-readable `DOC-NNNN` strings (the format
//! the presentation layer displays and users search by), while comment
//! identifiers are random UUIDs unique within the whole system. Using
//! distinct types prevents accidentally passing one where the other is
//! expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Unique identifier for a document.
///
/// Assigned once at creation and immutable afterwards. Ordered
/// lexicographically, which matches numeric order for the zero-padded
/// `DOC-NNNN` form and gives derived views a deterministic tie-breaker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document identifier from a 1-based sequence index.
    pub fn from_index(index: u64) -> Self {
        Self(format!("DOC-{index:04}"))
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(AppError::validation("document id must not be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

/// Unique identifier for a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Create a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an identifier from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Return the inner UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CommentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_from_index() {
        assert_eq!(DocumentId::from_index(1).as_str(), "DOC-0001");
        assert_eq!(DocumentId::from_index(42).as_str(), "DOC-0042");
        assert_eq!(DocumentId::from_index(12345).as_str(), "DOC-12345");
    }

    #[test]
    fn test_document_id_ordering_matches_sequence() {
        assert!(DocumentId::from_index(2) < DocumentId::from_index(10));
        assert!(DocumentId::from_index(99) < DocumentId::from_index(100));
    }

    #[test]
    fn test_document_id_rejects_empty() {
        assert!("  ".parse::<DocumentId>().is_err());
        assert!("DOC-0001".parse::<DocumentId>().is_ok());
    }

    #[test]
    fn test_comment_id_new_is_unique() {
        assert_ne!(CommentId::new(), CommentId::new());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = DocumentId::from_index(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"DOC-0007\"");
        let parsed: DocumentId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
