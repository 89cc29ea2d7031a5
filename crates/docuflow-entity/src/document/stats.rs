//! Aggregate workflow statistics.

use serde::{Deserialize, Serialize};

/// Per-status document counts across the whole collection.
///
/// Always satisfies `total == draft + pending + approved + rejected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStats {
    /// Total number of documents.
    pub total: u64,
    /// Documents not yet submitted.
    pub draft: u64,
    /// Documents awaiting review.
    pub pending: u64,
    /// Approved documents.
    pub approved: u64,
    /// Rejected documents.
    pub rejected: u64,
}
