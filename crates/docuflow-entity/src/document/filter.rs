//! Document list filtering.

use serde::{Deserialize, Serialize};

use crate::document::category::DocumentCategory;
use crate::document::model::Document;
use crate::document::status::DocumentStatus;

/// Filter configuration for document list queries.
///
/// All predicates are ANDed. A `None` field means "all" for that
/// dimension. The search text is matched case-insensitively as a
/// substring against title, author, and id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Restrict to a single status.
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    /// Restrict to a single category.
    #[serde(default)]
    pub category: Option<DocumentCategory>,
    /// Case-insensitive substring search over title, author, and id.
    #[serde(default)]
    pub search: Option<String>,
}

impl DocumentFilter {
    /// A filter matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict the filter to a status.
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict the filter to a category.
    pub fn with_category(mut self, category: DocumentCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Add a search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Check whether a document satisfies every predicate of this filter.
    pub fn matches(&self, document: &Document) -> bool {
        if let Some(status) = self.status {
            if document.status != status {
                return false;
            }
        }
        if let Some(category) = self.category {
            if document.category != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !needle.is_empty() {
                let matched = document.title.to_lowercase().contains(&needle)
                    || document.author.to_lowercase().contains(&needle)
                    || document.id.as_str().to_lowercase().contains(&needle);
                if !matched {
                    return false;
                }
            }
        }
        true
    }
}
