use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveTime;
use serde_json::json;

use crate::auth::AuthError;

/// Error types for availability operations
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Availability slot not found")]
    SlotNotFound,

    #[error("Day of week must be between 0 and 6, got {0}")]
    InvalidDayOfWeek(i16),

    #[error("Slot start {start} must be before end {end}")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    /// Sessions crossing midnight are rejected rather than truncated
    #[error("Session crosses midnight")]
    SessionCrossesMidnight,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<sqlx::Error> for AvailabilityError {
    fn from(err: sqlx::Error) -> Self {
        AvailabilityError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for AvailabilityError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AvailabilityError::DatabaseError(msg) => {
                tracing::error!("Database error in availability: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AvailabilityError::SlotNotFound => (
                StatusCode::NOT_FOUND,
                "Availability slot not found".to_string(),
            ),
            AvailabilityError::InvalidDayOfWeek(day) => (
                StatusCode::BAD_REQUEST,
                format!("Day of week must be between 0 and 6, got {}", day),
            ),
            AvailabilityError::InvalidTimeRange { start, end } => (
                StatusCode::BAD_REQUEST,
                format!("Slot start {} must be before end {}", start, end),
            ),
            AvailabilityError::SessionCrossesMidnight => (
                StatusCode::BAD_REQUEST,
                "Sessions crossing midnight are not supported".to_string(),
            ),
            AvailabilityError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AvailabilityError::Auth(err) => return err.into_response(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
