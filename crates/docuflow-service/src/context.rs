//! Request context carrying the acting user's identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docuflow_entity::user::UserRole;

/// Context for the current request.
///
/// Supplied by the external identity/session collaborator and passed into
/// service methods so that every operation knows *who* is acting. The
/// core trusts these values; it performs no authentication itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's display name, used for audit attribution.
    pub user: String,
    /// The acting user's email address, if known.
    pub email: Option<String>,
    /// The role the identity provider resolved for this user.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user: impl Into<String>, role: UserRole) -> Self {
        Self {
            user: user.into(),
            email: None,
            role,
            request_time: Utc::now(),
        }
    }

    /// Attach the acting user's email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
