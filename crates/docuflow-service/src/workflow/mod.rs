//! Workflow service and its request/response types.

pub mod dashboard;
pub mod service;

pub use dashboard::DashboardSummary;
pub use service::{UploadRequest, WorkflowService};
