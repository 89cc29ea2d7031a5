//! Shared test helpers for workflow integration tests.

use std::sync::Arc;

use docuflow_core::config::workflow::WorkflowConfig;
use docuflow_entity::user::UserRole;
use docuflow_service::workflow::UploadRequest;
use docuflow_service::{
    PermissiveReviewPolicy, RequestContext, RoleReviewPolicy, WorkflowService,
};
use docuflow_store::MemoryWorkflowStore;

/// Initialize test logging once; repeated calls are ignored.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("docuflow=debug")
        .with_test_writer()
        .try_init();
}

/// A service over an empty in-memory store with the role-based policy.
pub fn service() -> WorkflowService {
    init_tracing();
    WorkflowService::new(
        Arc::new(MemoryWorkflowStore::new()),
        Arc::new(RoleReviewPolicy),
        WorkflowConfig::default(),
    )
}

/// A service that lets anyone review, matching single-team deployments.
pub fn permissive_service() -> WorkflowService {
    init_tracing();
    WorkflowService::new(
        Arc::new(MemoryWorkflowStore::new()),
        Arc::new(PermissiveReviewPolicy),
        WorkflowConfig::default(),
    )
}

/// Context for a document author.
pub fn author(name: &str) -> RequestContext {
    RequestContext::new(name, UserRole::Member).with_email("author@example.com")
}

/// Context for a reviewer.
pub fn reviewer(name: &str) -> RequestContext {
    RequestContext::new(name, UserRole::Reviewer)
}

/// A valid upload request: 1 MiB PDF in the financial category.
pub fn upload_request(title: &str) -> UploadRequest {
    UploadRequest {
        title: title.to_string(),
        description: "Test document".to_string(),
        category: "financial".to_string(),
        file_ref: "files/test.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        size_bytes: 1024 * 1024,
        as_draft: false,
    }
}
