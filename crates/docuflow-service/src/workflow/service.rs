//! Core workflow operations with validation and review-policy enforcement.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use docuflow_core::config::workflow::WorkflowConfig;
use docuflow_core::error::AppError;
use docuflow_core::events::DocumentEvent;
use docuflow_core::result::AppResult;
use docuflow_core::types::DocumentId;
use docuflow_entity::document::{
    Comment, CreateDocument, Document, DocumentFilter, DocumentStatus, FileType, UpdateDocument,
};
use docuflow_store::WorkflowStore;

use crate::context::RequestContext;
use crate::policy::ReviewPolicy;
use crate::workflow::dashboard::DashboardSummary;

/// Capacity of the domain-event broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Orchestrates the document approval workflow.
///
/// Validates input, consults the review policy for reviewer decisions,
/// delegates state changes to the store, and broadcasts a domain event
/// after each applied mutation.
#[derive(Clone)]
pub struct WorkflowService {
    /// The document store.
    store: Arc<dyn WorkflowStore>,
    /// Decides who may approve or reject.
    policy: Arc<dyn ReviewPolicy>,
    /// Workflow limits and view sizes.
    config: WorkflowConfig,
    /// Domain event broadcast.
    events: broadcast::Sender<DocumentEvent>,
}

impl std::fmt::Debug for WorkflowService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowService").finish()
    }
}

/// Data for uploading a new document.
///
/// Field values arrive untyped from the presentation layer and are
/// validated here before anything reaches the store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UploadRequest {
    /// Document title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Category name; must be one of the fixed set.
    pub category: String,
    /// Opaque handle returned by the file storage collaborator.
    pub file_ref: String,
    /// Declared MIME type of the payload.
    pub mime_type: String,
    /// Declared payload size in bytes.
    pub size_bytes: u64,
    /// When true the document starts as a draft.
    #[serde(default)]
    pub as_draft: bool,
}

impl WorkflowService {
    /// Creates a new workflow service.
    pub fn new(
        store: Arc<dyn WorkflowStore>,
        policy: Arc<dyn ReviewPolicy>,
        config: WorkflowConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            policy,
            config,
            events,
        }
    }

    /// Subscribe to domain events emitted after each applied mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<DocumentEvent> {
        self.events.subscribe()
    }

    /// Validates and creates a new document.
    ///
    /// On success the document is immediately visible in all list and
    /// aggregate views; on any validation failure nothing is created.
    pub async fn upload(&self, ctx: &RequestContext, req: UploadRequest) -> AppResult<Document> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("title must not be empty"));
        }
        let category = req.category.parse()?;
        if req.file_ref.trim().is_empty() {
            return Err(AppError::validation("file_ref must not be empty"));
        }
        if req.size_bytes == 0 {
            return Err(AppError::validation("file must not be empty"));
        }
        if req.size_bytes > self.config.max_file_size_bytes {
            return Err(AppError::validation(format!(
                "file exceeds the maximum size of {} bytes",
                self.config.max_file_size_bytes
            )));
        }
        let file_type = FileType::from_mime(&req.mime_type).ok_or_else(|| {
            AppError::validation(format!(
                "unsupported file type '{}': expected PDF, DOCX, XLSX, or PPTX",
                req.mime_type
            ))
        })?;

        let create = CreateDocument {
            title: req.title.trim().to_string(),
            description: req.description,
            category,
            file_type,
            file_ref: req.file_ref,
            size_bytes: req.size_bytes,
            author: ctx.user.clone(),
            author_email: ctx.email.clone().unwrap_or_default(),
            as_draft: req.as_draft,
        };
        let document = self.store.create(&create, &ctx.user).await?;

        info!(
            document_id = %document.id,
            user = %ctx.user,
            status = %document.status,
            "Document uploaded"
        );
        self.emit(DocumentEvent::Created {
            document_id: document.id.clone(),
            title: document.title.clone(),
            author: document.author.clone(),
            status: document.status.to_string(),
        });

        Ok(document)
    }

    /// Gets a single document. Fails with `NotFound` if absent.
    pub async fn get_document(&self, id: &DocumentId) -> AppResult<Document> {
        self.store.get(id).await
    }

    /// Lists documents matching the filter.
    pub async fn list_documents(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        self.store.list(filter).await
    }

    /// Applies a status transition on behalf of the acting user.
    ///
    /// Reviewer decisions (approve/reject) must pass the review policy;
    /// submitting a draft is restricted to the owning author (or an
    /// admin). Illegal transitions fail with `InvalidTransition` and
    /// leave the document unchanged.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: &DocumentId,
        target: DocumentStatus,
        comment: Option<&str>,
    ) -> AppResult<Document> {
        match target {
            DocumentStatus::Approved | DocumentStatus::Rejected => {
                self.policy.authorize_review(ctx)?;
            }
            DocumentStatus::Pending => {
                self.require_owner(ctx, id, "submit").await?;
            }
            DocumentStatus::Draft => {
                // Let the state machine produce the canonical error.
            }
        }

        let document = self.store.update_status(id, target, &ctx.user, comment).await?;

        info!(
            document_id = %id,
            user = %ctx.user,
            status = %target,
            "Document status updated"
        );
        self.emit(match target {
            DocumentStatus::Approved => DocumentEvent::Approved {
                document_id: document.id.clone(),
                user: ctx.user.clone(),
            },
            DocumentStatus::Rejected => DocumentEvent::Rejected {
                document_id: document.id.clone(),
                user: ctx.user.clone(),
            },
            _ => DocumentEvent::Submitted {
                document_id: document.id.clone(),
                user: ctx.user.clone(),
            },
        });

        Ok(document)
    }

    /// Approves a pending document, with an optional review comment.
    pub async fn approve(
        &self,
        ctx: &RequestContext,
        id: &DocumentId,
        comment: Option<&str>,
    ) -> AppResult<Document> {
        self.update_status(ctx, id, DocumentStatus::Approved, comment).await
    }

    /// Rejects a pending document, with an optional review comment.
    pub async fn reject(
        &self,
        ctx: &RequestContext,
        id: &DocumentId,
        comment: Option<&str>,
    ) -> AppResult<Document> {
        self.update_status(ctx, id, DocumentStatus::Rejected, comment).await
    }

    /// Submits a draft document for review (owner only).
    pub async fn submit_for_review(
        &self,
        ctx: &RequestContext,
        id: &DocumentId,
    ) -> AppResult<Document> {
        self.update_status(ctx, id, DocumentStatus::Pending, None).await
    }

    /// Edits a document's metadata (owner only, before a reviewer
    /// decision). Bumps the version and audits the edit.
    pub async fn update_document(
        &self,
        ctx: &RequestContext,
        id: &DocumentId,
        changes: UpdateDocument,
    ) -> AppResult<Document> {
        self.require_owner(ctx, id, "edit").await?;

        let document = self.store.update_metadata(id, &changes, &ctx.user).await?;

        info!(
            document_id = %id,
            user = %ctx.user,
            version = %document.version,
            "Document updated"
        );
        self.emit(DocumentEvent::Updated {
            document_id: document.id.clone(),
            user: ctx.user.clone(),
            changed_fields: changes.changed_fields(),
        });

        Ok(document)
    }

    /// Adds a comment to a document's thread.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        id: &DocumentId,
        message: &str,
    ) -> AppResult<Comment> {
        if message.trim().is_empty() {
            return Err(AppError::validation("comment message must not be empty"));
        }

        let comment = self.store.add_comment(id, &ctx.user, message).await?;

        info!(document_id = %id, user = %ctx.user, "Comment added");
        self.emit(DocumentEvent::CommentAdded {
            document_id: id.clone(),
            comment_id: comment.id,
            user: ctx.user.clone(),
        });

        Ok(comment)
    }

    /// Computes the dashboard summary: stats, recent documents, and the
    /// cross-document activity feed.
    pub async fn dashboard(&self) -> AppResult<DashboardSummary> {
        Ok(DashboardSummary {
            stats: self.store.stats().await?,
            recent: self.store.recent(self.config.recent_limit).await?,
            activity: self.store.activity_feed(self.config.activity_limit).await?,
        })
    }

    /// Loads the document and checks that the acting user is its author
    /// (admins are exempt).
    async fn require_owner(
        &self,
        ctx: &RequestContext,
        id: &DocumentId,
        verb: &str,
    ) -> AppResult<()> {
        let document = self.store.get(id).await?;
        if document.author != ctx.user && !ctx.is_admin() {
            return Err(AppError::authorization(format!(
                "Only the author may {verb} document '{id}'"
            )));
        }
        Ok(())
    }

    fn emit(&self, event: DocumentEvent) {
        // A send error only means there are no subscribers right now.
        let _ = self.events.send(event);
    }
}
