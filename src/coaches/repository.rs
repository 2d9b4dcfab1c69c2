use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use uuid::Uuid;

use crate::coaches::error::CoachError;
use crate::coaches::models::{CoachDetails, UpsertCoachRequest};

const COACH_COLUMNS: &str =
    "id, user_id, bio, categories, languages, credentials, hourly_rate, updated_at";

/// Repository for coach detail records
#[derive(Clone)]
pub struct CoachRepository {
    pool: PgPool,
}

impl CoachRepository {
    /// Create a new CoachRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert-or-replace the coach details owned by `user_id`
    ///
    /// Keyed on the owning profile, so repeated onboarding submissions
    /// converge on a single record.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        request: &UpsertCoachRequest,
    ) -> Result<CoachDetails, CoachError> {
        let details = sqlx::query_as::<_, CoachDetails>(&format!(
            r#"
            INSERT INTO coaches (user_id, bio, categories, languages, credentials, hourly_rate)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id)
            DO UPDATE SET
                bio = EXCLUDED.bio,
                categories = EXCLUDED.categories,
                languages = EXCLUDED.languages,
                credentials = EXCLUDED.credentials,
                hourly_rate = EXCLUDED.hourly_rate,
                updated_at = NOW()
            RETURNING {COACH_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(&request.bio)
        .bind(&request.categories)
        .bind(&request.languages)
        .bind(&request.credentials)
        .bind(request.hourly_rate)
        .fetch_one(&self.pool)
        .await?;

        Ok(details)
    }

    /// Find coach details by the owning profile id
    pub async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CoachDetails>, CoachError> {
        let details = sqlx::query_as::<_, CoachDetails>(&format!(
            "SELECT {COACH_COLUMNS} FROM coaches WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(details)
    }

    /// Find coach details by owning profile id on an arbitrary executor
    ///
    /// Booking creation calls this inside its transaction so the rate it
    /// snapshots belongs to the same consistent view as the conflict check.
    pub async fn find_by_user_id_on<'e>(
        executor: impl PgExecutor<'e>,
        user_id: Uuid,
    ) -> Result<Option<CoachDetails>, sqlx::Error> {
        sqlx::query_as::<_, CoachDetails>(&format!(
            "SELECT {COACH_COLUMNS} FROM coaches WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(executor)
        .await
    }
}
