//! Document status enumeration and the approval state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a document.
///
/// The approval state machine permits exactly three transitions:
/// `draft → pending` (owner submits), `pending → approved` and
/// `pending → rejected` (reviewer decides). `approved` and `rejected`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Created but not yet submitted for review.
    Draft,
    /// Submitted and awaiting a reviewer decision.
    Pending,
    /// Approved by a reviewer (terminal).
    Approved,
    /// Rejected by a reviewer (terminal).
    Rejected,
}

impl DocumentStatus {
    /// Check if the status is terminal (no further transitions allowed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Check whether the state machine permits a transition to `target`.
    pub fn can_transition_to(&self, target: DocumentStatus) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Pending)
                | (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = docuflow_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(docuflow_core::AppError::validation(format!(
                "Invalid status: '{s}'. Expected one of: draft, pending, approved, rejected"
            ))),
        }
    }
}
