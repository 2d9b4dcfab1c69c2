// Profile lookups backing caller resolution

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::{error::AuthError, models::Profile};

/// Repository for profile rows
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new ProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a profile by id
    pub async fn find_by_id(&self, profile_id: Uuid) -> Result<Option<Profile>, AuthError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, role, created_at FROM profiles WHERE id = $1",
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Resolve the caller's profile, failing as unauthenticated when the
    /// token subject has no profile row
    pub async fn require(&self, profile_id: Uuid) -> Result<Profile, AuthError> {
        self.find_by_id(profile_id)
            .await?
            .ok_or(AuthError::ProfileNotFound)
    }
}
