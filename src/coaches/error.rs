use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::AuthError;

/// Error types for coach catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Coach not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<sqlx::Error> for CoachError {
    fn from(err: sqlx::Error) -> Self {
        CoachError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for CoachError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            CoachError::DatabaseError(msg) => {
                tracing::error!("Database error in coaches: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            CoachError::NotFound => (StatusCode::NOT_FOUND, "Coach not found".to_string()),
            CoachError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            CoachError::Auth(err) => return err.into_response(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
