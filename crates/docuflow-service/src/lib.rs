//! # docuflow-service
//!
//! Business logic services for DocuFlow — orchestrates the document
//! store, input validation, the pluggable review policy, structured
//! logging, and domain-event broadcast.

pub mod context;
pub mod policy;
pub mod workflow;

pub use context::RequestContext;
pub use policy::{PermissiveReviewPolicy, ReviewPolicy, RoleReviewPolicy};
pub use workflow::WorkflowService;
