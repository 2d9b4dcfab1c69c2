use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use uuid::Uuid;

use crate::bookings::error::BookingError;
use crate::bookings::models::{Booking, BookingStatus};

const BOOKING_COLUMNS: &str =
    "id, client_id, coach_id, session_date, duration, status, price, payment_id, created_at, updated_at";

/// Repository for booking rows
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new BookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new pending booking on an arbitrary executor
    ///
    /// Runs inside the creation transaction, after the availability and
    /// conflict checks have passed under the per-coach advisory lock.
    pub async fn insert_on<'e>(
        executor: impl PgExecutor<'e>,
        client_id: Uuid,
        coach_id: Uuid,
        session_date: DateTime<Utc>,
        duration: i32,
        price: Option<Decimal>,
    ) -> Result<Booking, sqlx::Error> {
        sqlx::query_as::<_, Booking>(&format!(
            r#"
            INSERT INTO bookings (client_id, coach_id, session_date, duration, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(client_id)
        .bind(coach_id)
        .bind(session_date)
        .bind(duration)
        .bind(price)
        .fetch_one(executor)
        .await
    }

    /// Find a booking by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, BookingError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Find a booking by id and lock its row for the current transaction
    ///
    /// Status updates read through this so concurrent transitions on the
    /// same booking serialize instead of racing.
    pub async fn find_for_update_on<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
    ) -> Result<Option<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Persist a status change on an arbitrary executor
    pub async fn update_status_on<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, sqlx::Error> {
        sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_one(executor)
        .await
    }

    /// List a client's bookings, soonest session first
    pub async fn list_for_client(&self, client_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE client_id = $1
            ORDER BY session_date ASC
            "#
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// List a coach's bookings, soonest session first
    pub async fn list_for_coach(&self, coach_id: Uuid) -> Result<Vec<Booking>, BookingError> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE coach_id = $1
            ORDER BY session_date ASC
            "#
        ))
        .bind(coach_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }
}
