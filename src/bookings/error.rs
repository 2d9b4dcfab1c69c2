use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::AuthError;
use crate::availability::AvailabilityError;

/// Error types for booking operations
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Booking not found")]
    NotFound,

    #[error("Coach not found")]
    CoachNotFound,

    #[error("Unsupported session duration: {0} minutes")]
    UnsupportedDuration(i32),

    #[error("Session date must be in the future")]
    SessionInPast,

    /// Requested window is not contained in the coach's weekly open hours
    #[error("Requested time is outside the coach's availability")]
    OutsideAvailability,

    /// Requested window overlaps an active booking for the same coach
    #[error("Requested time conflicts with an existing booking")]
    TimeSlotConflict,

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// Completion is only allowed once the session has started
    #[error("Booking cannot be completed before the session starts")]
    SessionNotStarted,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<sqlx::Error> for BookingError {
    fn from(err: sqlx::Error) -> Self {
        BookingError::DatabaseError(err.to_string())
    }
}

impl From<AvailabilityError> for BookingError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::DatabaseError(msg) => BookingError::DatabaseError(msg),
            AvailabilityError::SessionCrossesMidnight => BookingError::ValidationError(
                "Sessions crossing midnight are not supported".to_string(),
            ),
            AvailabilityError::Auth(e) => BookingError::Auth(e),
            other => BookingError::ValidationError(other.to_string()),
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            BookingError::DatabaseError(msg) => {
                tracing::error!("Database error in bookings: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            BookingError::NotFound => (StatusCode::NOT_FOUND, "Booking not found".to_string()),
            BookingError::CoachNotFound => {
                (StatusCode::NOT_FOUND, "Coach not found".to_string())
            }
            BookingError::UnsupportedDuration(minutes) => (
                StatusCode::BAD_REQUEST,
                format!("Unsupported session duration: {} minutes", minutes),
            ),
            BookingError::SessionInPast => (
                StatusCode::BAD_REQUEST,
                "Session date must be in the future".to_string(),
            ),
            BookingError::OutsideAvailability => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Requested time is outside the coach's availability".to_string(),
            ),
            BookingError::TimeSlotConflict => (
                StatusCode::CONFLICT,
                "Requested time conflicts with an existing booking".to_string(),
            ),
            BookingError::InvalidTransition(msg) => (StatusCode::BAD_REQUEST, msg),
            BookingError::SessionNotStarted => (
                StatusCode::BAD_REQUEST,
                "Booking cannot be completed before the session starts".to_string(),
            ),
            BookingError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            BookingError::Auth(err) => return err.into_response(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
