//! Pluggable review authorization policy.
//!
//! Whether the acting user may approve or reject documents is decided at
//! this seam, not inside the store: deployments choose a policy when they
//! construct the [`crate::WorkflowService`].

use docuflow_core::error::AppError;
use docuflow_core::result::AppResult;

use crate::context::RequestContext;

/// Decides whether the acting user may review (approve/reject) documents.
pub trait ReviewPolicy: Send + Sync + 'static {
    /// Return `Ok(())` if the user may review, or an authorization error.
    fn authorize_review(&self, ctx: &RequestContext) -> AppResult<()>;
}

/// Role-based policy: only reviewers and admins may decide documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleReviewPolicy;

impl ReviewPolicy for RoleReviewPolicy {
    fn authorize_review(&self, ctx: &RequestContext) -> AppResult<()> {
        if ctx.role.can_review() {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "User '{}' with role '{}' may not review documents",
                ctx.user, ctx.role
            )))
        }
    }
}

/// Policy that lets anyone review. Useful for single-team deployments
/// where every member is a reviewer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveReviewPolicy;

impl ReviewPolicy for PermissiveReviewPolicy {
    fn authorize_review(&self, _ctx: &RequestContext) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docuflow_entity::user::UserRole;

    #[test]
    fn test_role_policy() {
        let policy = RoleReviewPolicy;
        assert!(
            policy
                .authorize_review(&RequestContext::new("Alice", UserRole::Reviewer))
                .is_ok()
        );
        assert!(
            policy
                .authorize_review(&RequestContext::new("Root", UserRole::Admin))
                .is_ok()
        );
        let err = policy
            .authorize_review(&RequestContext::new("Bob", UserRole::Member))
            .unwrap_err();
        assert_eq!(err.kind, docuflow_core::error::ErrorKind::Authorization);
    }

    #[test]
    fn test_permissive_policy() {
        let policy = PermissiveReviewPolicy;
        assert!(
            policy
                .authorize_review(&RequestContext::new("Bob", UserRole::Member))
                .is_ok()
        );
    }
}
