//! The document store trait.

use async_trait::async_trait;

use docuflow_core::result::AppResult;
use docuflow_core::types::DocumentId;
use docuflow_entity::audit::ActivityEntry;
use docuflow_entity::document::{
    Comment, CreateDocument, Document, DocumentFilter, DocumentStatus, UpdateDocument,
    WorkflowStats,
};

/// Canonical owner of the document collection.
///
/// Implementations must provide read-after-write consistency and
/// serialize mutations per document: concurrent calls targeting the same
/// id resolve in a well-defined order, the first writer wins the legality
/// check and the loser fails with `InvalidTransition` rather than
/// double-applying. Operations on different documents are independent.
/// A failed operation leaves the collection unchanged.
#[async_trait]
pub trait WorkflowStore: Send + Sync + 'static {
    /// Create a document from an already validated request.
    ///
    /// Assigns a fresh unique id, sets version `1.0`, and appends the
    /// `Created` audit event, followed by `Submitted for review` unless
    /// the request defers submission (the document then starts as a
    /// draft). The document is immediately visible in all list and
    /// aggregate views.
    async fn create(&self, request: &CreateDocument, actor: &str) -> AppResult<Document>;

    /// Look up a document by id. Fails with `NotFound` if absent; has no
    /// side effects.
    async fn get(&self, id: &DocumentId) -> AppResult<Document>;

    /// List documents satisfying the filter. Result ordering is
    /// unspecified; callers must not assume stability across calls while
    /// the collection mutates.
    async fn list(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>>;

    /// Apply a status transition.
    ///
    /// Fails with `NotFound` for an unknown id and `InvalidTransition`
    /// when the state machine forbids the change from the document's
    /// current status. On success sets `last_modified`, records the
    /// structured transition (for reviewer decisions), appends the
    /// matching audit event attributed to `actor`, and appends `comment`
    /// when supplied.
    async fn update_status(
        &self,
        id: &DocumentId,
        target: DocumentStatus,
        actor: &str,
        comment: Option<&str>,
    ) -> AppResult<Document>;

    /// Edit the mutable metadata of a document that has not yet reached a
    /// reviewer decision. Bumps the version, sets `last_modified`, and
    /// appends an `Updated` audit event.
    async fn update_metadata(
        &self,
        id: &DocumentId,
        changes: &UpdateDocument,
        actor: &str,
    ) -> AppResult<Document>;

    /// Append a comment to a document's thread.
    ///
    /// Fails with `ValidationError` when the message is empty or
    /// whitespace-only. Does not alter `status`, `version`, or
    /// `last_modified`.
    async fn add_comment(&self, id: &DocumentId, user: &str, message: &str)
    -> AppResult<Comment>;

    /// Per-status counts across the whole collection.
    async fn stats(&self) -> AppResult<WorkflowStats>;

    /// The `n` most recently modified documents, `last_modified`
    /// descending, ties broken by id ascending.
    async fn recent(&self, n: usize) -> AppResult<Vec<Document>>;

    /// The flattened audit trail across all documents, timestamp
    /// descending, ties broken by document id then event index, truncated
    /// to `n` entries.
    async fn activity_feed(&self, n: usize) -> AppResult<Vec<ActivityEntry>>;
}
