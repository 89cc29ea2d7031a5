//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docuflow_core::types::CommentId;

/// A comment attached to a document's discussion thread.
///
/// Comments are append-only and insertion-ordered; once created they are
/// never edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: CommentId,
    /// The commenting user's display name.
    pub user: String,
    /// Initials derived from the user name (display convenience, not
    /// authoritative).
    pub user_initials: String,
    /// The comment text (never empty).
    pub message: String,
    /// When the comment was created. Immutable.
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment timestamped now.
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        let user = user.into();
        Self {
            id: CommentId::new(),
            user_initials: initials(&user),
            user,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Derive display initials from a user name: the first letter of up to
/// two whitespace-separated name parts, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
