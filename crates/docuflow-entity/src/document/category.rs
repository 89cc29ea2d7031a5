//! Document category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a document may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    /// Financial reports and statements.
    Financial,
    /// Marketing plans and campaign material.
    Marketing,
    /// Legal documents and contracts.
    Legal,
    /// Human resources policies.
    Hr,
    /// Technical specifications and roadmaps.
    Technical,
}

impl DocumentCategory {
    /// All recognized categories.
    pub const ALL: [DocumentCategory; 5] = [
        Self::Financial,
        Self::Marketing,
        Self::Legal,
        Self::Hr,
        Self::Technical,
    ];

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Marketing => "marketing",
            Self::Legal => "legal",
            Self::Hr => "hr",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = docuflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "financial" => Ok(Self::Financial),
            "marketing" => Ok(Self::Marketing),
            "legal" => Ok(Self::Legal),
            "hr" => Ok(Self::Hr),
            "technical" => Ok(Self::Technical),
            _ => Err(docuflow_core::AppError::validation(format!(
                "Invalid category: '{s}'. Expected one of: financial, marketing, legal, hr, technical"
            ))),
        }
    }
}
