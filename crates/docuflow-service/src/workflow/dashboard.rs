//! Dashboard aggregation types.

use serde::{Deserialize, Serialize};

use docuflow_entity::audit::ActivityEntry;
use docuflow_entity::document::{Document, WorkflowStats};

/// Everything the dashboard view renders, computed on demand from the
/// current collection. No stateful duplicate is kept anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Per-status document counts.
    pub stats: WorkflowStats,
    /// The most recently modified documents.
    pub recent: Vec<Document>,
    /// The latest audit events across all documents.
    pub activity: Vec<ActivityEntry>,
}
