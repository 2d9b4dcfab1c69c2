// Access guard
//
// Single policy point for role and ownership checks. Every entry point
// passes the resolved caller profile through here rather than consulting
// any ambient session state.

use uuid::Uuid;

use crate::auth::{error::AuthError, models::Profile, models::Role};

/// Authorization decision artifact confirming the caller may proceed
#[derive(Debug, Clone, Copy)]
pub struct Permit {
    pub profile_id: Uuid,
    pub role: Role,
}

/// Policy layer resolving a caller's role and ownership claims
pub struct AccessGuard;

impl AccessGuard {
    /// Authorize an operation demanding a specific role, optionally scoped
    /// to a resource owner.
    ///
    /// Both checks must pass: the caller's role must equal `required`, and
    /// when `resource_owner` is supplied the caller must be that owner.
    /// Failures never reveal whether the target resource exists.
    /// Resolve the caller's role, rejecting callers that have not
    /// completed onboarding.
    ///
    /// Depends only on the caller, so entry points can run it before any
    /// resource lookup; the response then carries no information about
    /// whether the target exists.
    pub fn require_role(caller: &Profile) -> Result<Role, AuthError> {
        caller.role.ok_or(AuthError::RoleNotAssigned)
    }

    pub fn authorize(
        caller: &Profile,
        required: Role,
        resource_owner: Option<Uuid>,
    ) -> Result<Permit, AuthError> {
        let role = Self::require_role(caller)?;

        if role != required {
            return Err(AuthError::InsufficientRole {
                required,
                actual: role,
            });
        }

        if let Some(owner) = resource_owner {
            if caller.id != owner {
                return Err(AuthError::NotResourceOwner);
            }
        }

        Ok(Permit {
            profile_id: caller.id,
            role,
        })
    }

    /// Authorize an operation open to any of the listed owners regardless
    /// of which role they hold (e.g. either party may cancel a booking).
    pub fn authorize_party(caller: &Profile, owners: &[Uuid]) -> Result<Permit, AuthError> {
        let role = Self::require_role(caller)?;

        if !owners.contains(&caller.id) {
            return Err(AuthError::NotResourceOwner);
        }

        Ok(Permit {
            profile_id: caller.id,
            role,
        })
    }
}
