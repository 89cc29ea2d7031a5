//! Document-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::{CommentId, DocumentId};

/// Events related to document workflow operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DocumentEvent {
    /// A document was created.
    Created {
        /// The document ID.
        document_id: DocumentId,
        /// The document title.
        title: String,
        /// The submitting author.
        author: String,
        /// The initial status (`"draft"` or `"pending"`).
        status: String,
    },
    /// A draft document was submitted for review.
    Submitted {
        /// The document ID.
        document_id: DocumentId,
        /// The user who submitted it.
        user: String,
    },
    /// A pending document was approved.
    Approved {
        /// The document ID.
        document_id: DocumentId,
        /// The reviewer who approved it.
        user: String,
    },
    /// A pending document was rejected.
    Rejected {
        /// The document ID.
        document_id: DocumentId,
        /// The reviewer who rejected it.
        user: String,
    },
    /// A document's metadata was edited.
    Updated {
        /// The document ID.
        document_id: DocumentId,
        /// The editing author.
        user: String,
        /// Fields that changed.
        changed_fields: Vec<String>,
    },
    /// A comment was added to a document.
    CommentAdded {
        /// The document ID.
        document_id: DocumentId,
        /// The new comment's ID.
        comment_id: CommentId,
        /// The commenting user.
        user: String,
    },
}

impl DocumentEvent {
    /// The document this event refers to.
    pub fn document_id(&self) -> &DocumentId {
        match self {
            Self::Created { document_id, .. }
            | Self::Submitted { document_id, .. }
            | Self::Approved { document_id, .. }
            | Self::Rejected { document_id, .. }
            | Self::Updated { document_id, .. }
            | Self::CommentAdded { document_id, .. } => document_id,
        }
    }
}
