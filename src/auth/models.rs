// Caller identity models
//
// Identity issuance (signup, passwords, sessions) lives in an external
// collaborator; this service only resolves a bearer token to a profile row
// and reads the role recorded there during onboarding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Marketplace role recorded on a profile during onboarding
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema,
)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Coach,
}

impl Role {
    /// Convert role to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Coach => "coach",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Profile database model
///
/// `role` is `None` until the identity completes onboarding; no operation
/// in this service changes a role once it is set.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: uuid::Uuid,
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
}
