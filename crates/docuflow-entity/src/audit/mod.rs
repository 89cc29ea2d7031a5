//! Audit trail entities.

pub mod model;

pub use model::{ActivityEntry, AuditAction, AuditEvent};
