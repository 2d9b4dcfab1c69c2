use chrono::NaiveTime;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use uuid::Uuid;

use crate::availability::error::AvailabilityError;
use crate::availability::models::AvailabilitySlot;

const SLOT_COLUMNS: &str = "id, coach_id, day_of_week, start_time, end_time, created_at";

/// Repository for availability slot rows
#[derive(Clone)]
pub struct AvailabilityRepository {
    pool: PgPool,
}

impl AvailabilityRepository {
    /// Create a new AvailabilityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new slot for a coach
    pub async fn insert(
        &self,
        coach_id: Uuid,
        day_of_week: i16,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<AvailabilitySlot, AvailabilityError> {
        let slot = sqlx::query_as::<_, AvailabilitySlot>(&format!(
            r#"
            INSERT INTO availability (coach_id, day_of_week, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING {SLOT_COLUMNS}
            "#
        ))
        .bind(coach_id)
        .bind(day_of_week)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(slot)
    }

    /// Delete a slot, scoped to its owning coach
    ///
    /// The owner scoping in the WHERE clause is the ownership check: a slot
    /// belonging to someone else looks exactly like a missing slot.
    pub async fn delete(&self, coach_id: Uuid, slot_id: Uuid) -> Result<u64, AvailabilityError> {
        let result = sqlx::query("DELETE FROM availability WHERE id = $1 AND coach_id = $2")
            .bind(slot_id)
            .bind(coach_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// List all slots for a coach, ordered by day then start time, with
    /// creation order as the deterministic tie-break
    pub async fn list(&self, coach_id: Uuid) -> Result<Vec<AvailabilitySlot>, AvailabilityError> {
        let slots = sqlx::query_as::<_, AvailabilitySlot>(&format!(
            r#"
            SELECT {SLOT_COLUMNS}
            FROM availability
            WHERE coach_id = $1
            ORDER BY day_of_week, start_time, created_at
            "#
        ))
        .bind(coach_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }

    /// Fetch a coach's slots for one weekday on an arbitrary executor
    ///
    /// Booking creation calls this inside its transaction so the
    /// containment check sees the latest committed slot state.
    pub async fn slots_for_weekday_on<'e>(
        executor: impl PgExecutor<'e>,
        coach_id: Uuid,
        day_of_week: i16,
    ) -> Result<Vec<AvailabilitySlot>, sqlx::Error> {
        sqlx::query_as::<_, AvailabilitySlot>(&format!(
            r#"
            SELECT {SLOT_COLUMNS}
            FROM availability
            WHERE coach_id = $1 AND day_of_week = $2
            ORDER BY start_time, created_at
            "#
        ))
        .bind(coach_id)
        .bind(day_of_week)
        .fetch_all(executor)
        .await
    }
}
