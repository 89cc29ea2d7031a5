//! # docuflow-store
//!
//! The [`WorkflowStore`] trait — the seam behind which a durable
//! persistence/transport implementation can sit — and
//! [`MemoryWorkflowStore`], the in-memory implementation used in-process
//! and by tests.

pub mod memory;
pub mod store;

pub use memory::MemoryWorkflowStore;
pub use store::WorkflowStore;
