//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docuflow_core::types::DocumentId;

use crate::audit::{AuditAction, AuditEvent};
use crate::document::category::DocumentCategory;
use crate::document::comment::Comment;
use crate::document::file_type::FileType;
use crate::document::status::DocumentStatus;
use crate::document::version::Version;

/// A document moving through the approval workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier. Assigned at creation, immutable.
    pub id: DocumentId,
    /// Document title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Category from the fixed enumerated set.
    pub category: DocumentCategory,
    /// File kind of the uploaded payload.
    pub file_type: FileType,
    /// Opaque handle to the stored file, issued by the external file
    /// storage collaborator. Never dereferenced by the core.
    pub file_ref: String,
    /// Declared payload size in bytes.
    pub size_bytes: u64,
    /// The submitting author's display name.
    pub author: String,
    /// The submitting author's email address.
    pub author_email: String,
    /// Current workflow status.
    pub status: DocumentStatus,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// Updated on every mutating operation except comment appends.
    pub last_modified: DateTime<Utc>,
    /// Revision marker, bumped on content edits (not on status changes).
    pub version: Version,
    /// When the reviewer decision (approve/reject) was applied.
    pub transitioned_at: Option<DateTime<Utc>>,
    /// The reviewer who applied the decision.
    pub transitioned_by: Option<String>,
    /// Discussion thread, append-only, insertion ordered.
    pub comments: Vec<Comment>,
    /// Audit trail, append-only, never empty after creation.
    pub history: Vec<AuditEvent>,
}

impl Document {
    /// When the document was approved, if it was.
    ///
    /// The structured transition record is authoritative; scanning the
    /// history is kept as a fallback for records imported without one,
    /// and `last_modified` is a documented approximation of last resort.
    pub fn approval_date(&self) -> Option<DateTime<Utc>> {
        self.decision_date(DocumentStatus::Approved, AuditAction::Approved)
    }

    /// When the document was rejected, if it was.
    pub fn rejection_date(&self) -> Option<DateTime<Utc>> {
        self.decision_date(DocumentStatus::Rejected, AuditAction::Rejected)
    }

    fn decision_date(
        &self,
        status: DocumentStatus,
        action: AuditAction,
    ) -> Option<DateTime<Utc>> {
        if self.status != status {
            return None;
        }
        self.transitioned_at
            .or_else(|| {
                self.history
                    .iter()
                    .find(|event| event.action == action)
                    .map(|event| event.timestamp)
            })
            .or(Some(self.last_modified))
    }
}

/// Data required to create a new document.
///
/// Callers are expected to have validated the fields already; the service
/// layer performs the field checks and MIME/size enforcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Document title (non-empty).
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Category from the fixed set.
    pub category: DocumentCategory,
    /// Validated file kind.
    pub file_type: FileType,
    /// Opaque storage handle.
    pub file_ref: String,
    /// Declared payload size in bytes.
    pub size_bytes: u64,
    /// The submitting author's display name.
    pub author: String,
    /// The submitting author's email address.
    pub author_email: String,
    /// When true the document starts as a draft instead of going straight
    /// to review.
    pub as_draft: bool,
}

/// Fields the owning author may edit prior to a reviewer decision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<DocumentCategory>,
}

impl UpdateDocument {
    /// Names of the fields this update touches.
    pub fn changed_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title".to_string());
        }
        if self.description.is_some() {
            fields.push("description".to_string());
        }
        if self.category.is_some() {
            fields.push("category".to_string());
        }
        fields
    }

    /// Whether the update touches anything at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.category.is_none()
    }
}
