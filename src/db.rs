use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};
use std::time::Duration;
use uuid::Uuid;

/// Type alias for the PostgreSQL connection pool
pub type DbPool = PgPool;

/// Creates and configures a PostgreSQL connection pool
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    tracing::debug!("Creating database connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Fold a coach's UUID into the 64-bit key space used by Postgres advisory
/// locks. A collision between distinct coaches only costs extra
/// serialization, never correctness.
pub fn coach_lock_key(coach_id: Uuid) -> i64 {
    let n = coach_id.as_u128();
    ((n >> 64) as u64 ^ n as u64) as i64
}

/// Take the per-coach advisory lock for the current transaction.
///
/// Held until commit or rollback, this serializes the read-check-write
/// sequence of booking creation for a single coach while leaving bookings
/// for other coaches fully concurrent.
pub async fn lock_coach(conn: &mut PgConnection, coach_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(coach_lock_key(coach_id))
        .execute(conn)
        .await?;
    Ok(())
}
