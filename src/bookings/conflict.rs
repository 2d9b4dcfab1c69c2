// Conflict detection for session bookings
//
// Bookings occupy half-open intervals [start, start + duration). Two
// bookings conflict when their intervals overlap and neither is cancelled.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgExecutor;
use uuid::Uuid;

/// Service answering "is this window free for this coach?"
pub struct ConflictResolver;

impl ConflictResolver {
    /// Half-open interval overlap test
    pub fn overlaps(
        a_start: DateTime<Utc>,
        a_end: DateTime<Utc>,
        b_start: DateTime<Utc>,
        b_end: DateTime<Utc>,
    ) -> bool {
        a_start < b_end && b_start < a_end
    }

    /// Check whether any active booking for the coach overlaps the window.
    ///
    /// Cancelled bookings release their window; pending, confirmed, and
    /// completed bookings all hold it. Runs on the caller's executor so the
    /// check shares the booking transaction and its advisory lock.
    pub async fn has_conflict<'e>(
        executor: impl PgExecutor<'e>,
        coach_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        excluding: Option<Uuid>,
    ) -> Result<bool, sqlx::Error> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE coach_id = $1
                  AND status <> 'cancelled'
                  AND session_date < $3
                  AND session_date + make_interval(mins => duration) > $2
                  AND ($4::uuid IS NULL OR id <> $4)
            )
            "#,
        )
        .bind(coach_id)
        .bind(start)
        .bind(end)
        .bind(excluding)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }
}
