//! Workflow limits and derived-view configuration.

use serde::{Deserialize, Serialize};

/// Document workflow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
    /// Number of documents shown in the dashboard's recent list.
    #[serde(default = "default_view_limit")]
    pub recent_limit: usize,
    /// Number of entries shown in the dashboard's activity feed.
    #[serde(default = "default_view_limit")]
    pub activity_limit: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            recent_limit: default_view_limit(),
            activity_limit: default_view_limit(),
        }
    }
}

fn default_max_file_size() -> u64 {
    // 10 MiB
    10 * 1024 * 1024
}

fn default_view_limit() -> usize {
    5
}
