//! In-memory document store backed by a concurrent map.
//!
//! `DashMap` gives exclusive access to a single entry while a mutation
//! holds its guard, which is exactly the per-document serialization the
//! workflow requires: two reviewers racing to decide the same document
//! are ordered by the entry lock, the first applies the transition, and
//! the second fails the state-machine check.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use docuflow_core::error::AppError;
use docuflow_core::result::AppResult;
use docuflow_core::types::DocumentId;
use docuflow_entity::audit::{ActivityEntry, AuditAction, AuditEvent};
use docuflow_entity::document::{
    Comment, CreateDocument, Document, DocumentFilter, DocumentStatus, UpdateDocument, Version,
    WorkflowStats,
};

use crate::store::WorkflowStore;

/// In-memory [`WorkflowStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryWorkflowStore {
    /// The canonical document collection.
    documents: DashMap<DocumentId, Document>,
    /// Sequence counter backing `DOC-NNNN` id assignment.
    next_index: AtomicU64,
}

impl MemoryWorkflowStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &DocumentId) -> AppError {
        AppError::not_found(format!("Document '{id}' not found"))
    }
}

#[async_trait]
impl WorkflowStore for MemoryWorkflowStore {
    async fn create(&self, request: &CreateDocument, actor: &str) -> AppResult<Document> {
        let id = DocumentId::from_index(self.next_index.fetch_add(1, Ordering::SeqCst) + 1);
        let now = Utc::now();

        let mut history = vec![AuditEvent {
            action: AuditAction::Created,
            user: actor.to_string(),
            timestamp: now,
        }];
        let status = if request.as_draft {
            DocumentStatus::Draft
        } else {
            history.push(AuditEvent {
                action: AuditAction::Submitted,
                user: actor.to_string(),
                timestamp: now,
            });
            DocumentStatus::Pending
        };

        let document = Document {
            id: id.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            category: request.category,
            file_type: request.file_type,
            file_ref: request.file_ref.clone(),
            size_bytes: request.size_bytes,
            author: request.author.clone(),
            author_email: request.author_email.clone(),
            status,
            created_at: now,
            last_modified: now,
            version: Version::initial(),
            transitioned_at: None,
            transitioned_by: None,
            comments: Vec::new(),
            history,
        };

        self.documents.insert(id.clone(), document.clone());
        debug!(document_id = %id, status = %status, "Document stored");

        Ok(document)
    }

    async fn get(&self, id: &DocumentId) -> AppResult<Document> {
        self.documents
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        Ok(self
            .documents
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update_status(
        &self,
        id: &DocumentId,
        target: DocumentStatus,
        actor: &str,
        comment: Option<&str>,
    ) -> AppResult<Document> {
        // The exclusive entry guard serializes concurrent callers on the
        // same document; the loser re-checks against the applied state.
        let mut entry = self.documents.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        let document = entry.value_mut();

        if !document.status.can_transition_to(target) {
            return Err(AppError::invalid_transition(document.status, target));
        }

        let action = match target {
            DocumentStatus::Pending => AuditAction::Submitted,
            DocumentStatus::Approved => AuditAction::Approved,
            DocumentStatus::Rejected => AuditAction::Rejected,
            // No transition leads back into draft; the check above already
            // rejected it, this arm only keeps the match total.
            DocumentStatus::Draft => {
                return Err(AppError::invalid_transition(document.status, target));
            }
        };

        let now = Utc::now();
        document.status = target;
        document.last_modified = now;
        if target.is_terminal() {
            document.transitioned_at = Some(now);
            document.transitioned_by = Some(actor.to_string());
        }
        document.history.push(AuditEvent {
            action,
            user: actor.to_string(),
            timestamp: now,
        });
        if let Some(message) = comment.map(str::trim).filter(|m| !m.is_empty()) {
            document.comments.push(Comment::new(actor, message));
        }

        debug!(document_id = %id, status = %target, user = actor, "Status updated");

        Ok(document.clone())
    }

    async fn update_metadata(
        &self,
        id: &DocumentId,
        changes: &UpdateDocument,
        actor: &str,
    ) -> AppResult<Document> {
        if changes.is_empty() {
            return Err(AppError::validation("update must change at least one field"));
        }
        if let Some(title) = &changes.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("title must not be empty"));
            }
        }

        let mut entry = self.documents.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        let document = entry.value_mut();

        if document.status.is_terminal() {
            return Err(AppError::conflict(format!(
                "Document '{id}' is {} and can no longer be edited",
                document.status
            )));
        }

        if let Some(title) = &changes.title {
            document.title = title.clone();
        }
        if let Some(description) = &changes.description {
            document.description = description.clone();
        }
        if let Some(category) = changes.category {
            document.category = category;
        }

        let now = Utc::now();
        document.version.bump();
        document.last_modified = now;
        document.history.push(AuditEvent {
            action: AuditAction::Updated,
            user: actor.to_string(),
            timestamp: now,
        });

        debug!(document_id = %id, version = %document.version, "Metadata updated");

        Ok(document.clone())
    }

    async fn add_comment(
        &self,
        id: &DocumentId,
        user: &str,
        message: &str,
    ) -> AppResult<Comment> {
        if message.trim().is_empty() {
            return Err(AppError::validation("comment message must not be empty"));
        }

        let mut entry = self.documents.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        let comment = Comment::new(user, message.trim());
        // Comments do not count as modifications: status, version, and
        // last_modified stay untouched.
        entry.value_mut().comments.push(comment.clone());

        Ok(comment)
    }

    async fn stats(&self) -> AppResult<WorkflowStats> {
        let mut stats = WorkflowStats::default();
        for entry in self.documents.iter() {
            stats.total += 1;
            match entry.value().status {
                DocumentStatus::Draft => stats.draft += 1,
                DocumentStatus::Pending => stats.pending += 1,
                DocumentStatus::Approved => stats.approved += 1,
                DocumentStatus::Rejected => stats.rejected += 1,
            }
        }
        Ok(stats)
    }

    async fn recent(&self, n: usize) -> AppResult<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by(|a, b| {
            b.last_modified
                .cmp(&a.last_modified)
                .then_with(|| a.id.cmp(&b.id))
        });
        documents.truncate(n);
        Ok(documents)
    }

    async fn activity_feed(&self, n: usize) -> AppResult<Vec<ActivityEntry>> {
        let mut feed: Vec<(usize, ActivityEntry)> = Vec::new();
        for entry in self.documents.iter() {
            let document = entry.value();
            for (index, event) in document.history.iter().enumerate() {
                feed.push((
                    index,
                    ActivityEntry {
                        document_id: document.id.clone(),
                        document_title: document.title.clone(),
                        action: event.action,
                        user: event.user.clone(),
                        timestamp: event.timestamp,
                    },
                ));
            }
        }
        feed.sort_by(|(index_a, a), (index_b, b)| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| a.document_id.cmp(&b.document_id))
                .then_with(|| index_a.cmp(index_b))
        });
        Ok(feed.into_iter().map(|(_, entry)| entry).take(n).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn create_request(title: &str) -> CreateDocument {
        CreateDocument {
            title: title.to_string(),
            description: "A test document".to_string(),
            category: "financial".parse().unwrap(),
            file_type: docuflow_entity::document::FileType::Pdf,
            file_ref: "files/test.pdf".to_string(),
            size_bytes: 1024 * 1024,
            author: "John Smith".to_string(),
            author_email: "jsmith@example.com".to_string(),
            as_draft: false,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_history() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();

        assert_eq!(doc.id.as_str(), "DOC-0001");
        assert_eq!(doc.status, DocumentStatus::Pending);
        assert_eq!(doc.version.to_string(), "1.0");
        let actions: Vec<AuditAction> = doc.history.iter().map(|e| e.action).collect();
        assert_eq!(actions, vec![AuditAction::Created, AuditAction::Submitted]);
    }

    #[tokio::test]
    async fn test_create_draft_defers_submission() {
        let store = MemoryWorkflowStore::new();
        let mut request = create_request("Draft Plan");
        request.as_draft = true;

        let doc = store.create(&request, "John Smith").await.unwrap();
        assert_eq!(doc.status, DocumentStatus::Draft);
        let actions: Vec<AuditAction> = doc.history.iter().map(|e| e.action).collect();
        assert_eq!(actions, vec![AuditAction::Created]);

        let doc = store
            .update_status(&doc.id, DocumentStatus::Pending, "John Smith", None)
            .await
            .unwrap();
        assert_eq!(doc.status, DocumentStatus::Pending);
        assert_eq!(doc.history.last().unwrap().action, AuditAction::Submitted);
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_sequential() {
        let store = MemoryWorkflowStore::new();
        let a = store.create(&create_request("A"), "John Smith").await.unwrap();
        let b = store.create(&create_request("B"), "John Smith").await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(b.id.as_str(), "DOC-0002");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = MemoryWorkflowStore::new();
        let err = store.get(&DocumentId::from_index(99)).await.unwrap_err();
        assert_eq!(err.kind, docuflow_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_approve_records_structured_transition() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();

        let doc = store
            .update_status(&doc.id, DocumentStatus::Approved, "Alice", None)
            .await
            .unwrap();

        assert_eq!(doc.status, DocumentStatus::Approved);
        assert_eq!(doc.transitioned_by.as_deref(), Some("Alice"));
        assert_eq!(doc.approval_date(), doc.transitioned_at);
        let last = doc.history.last().unwrap();
        assert_eq!(last.action, AuditAction::Approved);
        assert_eq!(last.user, "Alice");
    }

    #[tokio::test]
    async fn test_terminal_states_reject_every_transition() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();
        store
            .update_status(&doc.id, DocumentStatus::Approved, "Alice", None)
            .await
            .unwrap();
        let history_len = store.get(&doc.id).await.unwrap().history.len();

        for target in [
            DocumentStatus::Pending,
            DocumentStatus::Approved,
            DocumentStatus::Rejected,
        ] {
            let err = store
                .update_status(&doc.id, target, "Alice", None)
                .await
                .unwrap_err();
            assert_eq!(err.kind, docuflow_core::error::ErrorKind::InvalidTransition);
        }

        // A failed transition leaves status and history untouched.
        let unchanged = store.get(&doc.id).await.unwrap();
        assert_eq!(unchanged.status, DocumentStatus::Approved);
        assert_eq!(unchanged.history.len(), history_len);
    }

    #[tokio::test]
    async fn test_racing_reviewers_single_winner() {
        let store = Arc::new(MemoryWorkflowStore::new());
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();

        let approve = {
            let store = Arc::clone(&store);
            let id = doc.id.clone();
            tokio::spawn(async move {
                store
                    .update_status(&id, DocumentStatus::Approved, "Alice", None)
                    .await
            })
        };
        let reject = {
            let store = Arc::clone(&store);
            let id = doc.id.clone();
            tokio::spawn(async move {
                store
                    .update_status(&id, DocumentStatus::Rejected, "Bob", None)
                    .await
            })
        };

        let outcomes = [approve.await.unwrap(), reject.await.unwrap()];
        let wins = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1);

        let final_doc = store.get(&doc.id).await.unwrap();
        assert!(final_doc.status.is_terminal());
        // Created + Submitted + exactly one decision.
        assert_eq!(final_doc.history.len(), 3);
    }

    #[tokio::test]
    async fn test_reject_with_comment_appends_both() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("HR Policy"), "Sarah Williams").await.unwrap();

        let doc = store
            .update_status(
                &doc.id,
                DocumentStatus::Rejected,
                "David Lee",
                Some("Needs revision."),
            )
            .await
            .unwrap();

        assert_eq!(doc.history.last().unwrap().action, AuditAction::Rejected);
        assert_eq!(doc.comments.len(), 1);
        assert_eq!(doc.comments[0].user, "David Lee");
        assert_eq!(doc.comments[0].message, "Needs revision.");
        assert_eq!(doc.rejection_date(), doc.transitioned_at);
    }

    #[tokio::test]
    async fn test_add_comment_does_not_modify_document() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();

        let comment = store
            .add_comment(&doc.id, "Bob Jones", "Please add totals.")
            .await
            .unwrap();
        assert_eq!(comment.user_initials, "BJ");

        let after = store.get(&doc.id).await.unwrap();
        assert_eq!(after.comments.len(), 1);
        assert_eq!(after.last_modified, doc.last_modified);
        assert_eq!(after.version, doc.version);
        assert_eq!(after.status, doc.status);
        assert_eq!(after.history.len(), doc.history.len());
    }

    #[tokio::test]
    async fn test_add_empty_comment_fails_without_side_effects() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();

        let err = store.add_comment(&doc.id, "Bob", "   ").await.unwrap_err();
        assert_eq!(err.kind, docuflow_core::error::ErrorKind::Validation);
        assert!(store.get(&doc.id).await.unwrap().comments.is_empty());
    }

    #[tokio::test]
    async fn test_update_metadata_bumps_version_and_audits() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();

        let changes = UpdateDocument {
            title: Some("Q4 Plan (revised)".to_string()),
            ..Default::default()
        };
        let doc = store.update_metadata(&doc.id, &changes, "John Smith").await.unwrap();

        assert_eq!(doc.title, "Q4 Plan (revised)");
        assert_eq!(doc.version.to_string(), "1.1");
        assert_eq!(doc.history.last().unwrap().action, AuditAction::Updated);
        // Metadata edits never change the workflow status.
        assert_eq!(doc.status, DocumentStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_metadata_rejected_after_decision() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();
        store
            .update_status(&doc.id, DocumentStatus::Approved, "Alice", None)
            .await
            .unwrap();

        let changes = UpdateDocument {
            description: Some("tweak".to_string()),
            ..Default::default()
        };
        let err = store
            .update_metadata(&doc.id, &changes, "John Smith")
            .await
            .unwrap_err();
        assert_eq!(err.kind, docuflow_core::error::ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_stats_consistency() {
        let store = MemoryWorkflowStore::new();
        for title in ["A", "B", "C", "D"] {
            store.create(&create_request(title), "John Smith").await.unwrap();
        }
        let mut draft = create_request("E");
        draft.as_draft = true;
        store.create(&draft, "John Smith").await.unwrap();

        store
            .update_status(&DocumentId::from_index(1), DocumentStatus::Approved, "Alice", None)
            .await
            .unwrap();
        store
            .update_status(&DocumentId::from_index(2), DocumentStatus::Rejected, "Alice", None)
            .await
            .unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.draft, 1);
        assert_eq!(
            stats.total,
            stats.draft + stats.pending + stats.approved + stats.rejected
        );
    }

    #[tokio::test]
    async fn test_list_filters_exactly() {
        let store = MemoryWorkflowStore::new();
        for title in ["A", "B", "C"] {
            store.create(&create_request(title), "John Smith").await.unwrap();
        }
        store
            .update_status(&DocumentId::from_index(2), DocumentStatus::Approved, "Alice", None)
            .await
            .unwrap();

        let approved = store
            .list(&DocumentFilter::all().with_status(DocumentStatus::Approved))
            .await
            .unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id.as_str(), "DOC-0002");

        let everything = store.list(&DocumentFilter::all()).await.unwrap();
        assert!(everything.iter().all(|d| {
            d.status == DocumentStatus::Approved || d.status == DocumentStatus::Pending
        }));
        assert_eq!(everything.len(), 3);
    }

    #[tokio::test]
    async fn test_recent_orders_by_last_modified_then_id() {
        let store = MemoryWorkflowStore::new();
        for title in ["A", "B", "C"] {
            store.create(&create_request(title), "John Smith").await.unwrap();
        }
        // Touch DOC-0001 so it becomes the most recently modified.
        store
            .update_status(&DocumentId::from_index(1), DocumentStatus::Approved, "Alice", None)
            .await
            .unwrap();

        let recent = store.recent(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id.as_str(), "DOC-0001");
    }

    #[tokio::test]
    async fn test_activity_feed_newest_first_and_truncated() {
        let store = MemoryWorkflowStore::new();
        let doc = store.create(&create_request("Q4 Plan"), "John Smith").await.unwrap();
        store
            .update_status(&doc.id, DocumentStatus::Approved, "Alice", None)
            .await
            .unwrap();

        let feed = store.activity_feed(2).await.unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].action, AuditAction::Approved);
        assert_eq!(feed[0].user, "Alice");
        assert_eq!(feed[0].document_title, "Q4 Plan");
        assert!(feed[0].timestamp >= feed[1].timestamp);
    }
}
