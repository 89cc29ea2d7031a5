//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles recognized by the review policy.
///
/// The identity provider supplies the role alongside the acting user;
/// the core trusts it and only consults it at the review-policy seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrator; may review and edit anything.
    Admin,
    /// May approve or reject pending documents.
    Reviewer,
    /// May upload and manage their own documents.
    Member,
}

impl UserRole {
    /// Check if this role may approve or reject documents.
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Admin | Self::Reviewer)
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Reviewer => "reviewer",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = docuflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "reviewer" => Ok(Self::Reviewer),
            "member" => Ok(Self::Member),
            _ => Err(docuflow_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, reviewer, member"
            ))),
        }
    }
}
