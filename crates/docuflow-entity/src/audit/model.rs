//! Audit event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use docuflow_core::types::DocumentId;

/// The structured set of actions recorded in a document's history.
///
/// Serialized as the human-readable action text the presentation layer
/// displays, but matched structurally — derived views never scan free
/// text to classify an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    /// The document was created.
    Created,
    /// The document was submitted for review.
    #[serde(rename = "Submitted for review")]
    Submitted,
    /// The document's metadata was edited.
    Updated,
    /// The document was approved.
    Approved,
    /// The document was rejected.
    Rejected,
}

impl AuditAction {
    /// Return the display text for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Submitted => "Submitted for review",
            Self::Updated => "Updated",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable audit trail entry recording a state-changing operation.
///
/// Every document's history is append-only and never truncated or
/// reordered; creation always emits the first entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The action that was performed.
    pub action: AuditAction,
    /// The user who performed the action.
    pub user: String,
    /// When the action occurred.
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    /// Create a new audit event timestamped now.
    pub fn new(action: AuditAction, user: impl Into<String>) -> Self {
        Self {
            action,
            user: user.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A single row of the cross-document activity feed: one document's audit
/// event flattened together with the document it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// The document the event belongs to.
    pub document_id: DocumentId,
    /// The document's title at read time.
    pub document_title: String,
    /// The recorded action.
    pub action: AuditAction,
    /// The acting user.
    pub user: String,
    /// When the action occurred.
    pub timestamp: DateTime<Utc>,
}
