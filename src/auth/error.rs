// Authentication and authorization error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::auth::models::Role;

/// Authentication and authorization error types
///
/// Authentication failures (no usable caller identity) map to 401;
/// authorization failures (identity known, operation not permitted) map to
/// 403 with a message that never reveals whether a resource exists.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authentication token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Token was valid but no profile row exists for the subject
    #[error("Unknown caller profile")]
    ProfileNotFound,

    /// Caller has not completed onboarding and carries no role yet
    #[error("No role assigned to caller")]
    RoleNotAssigned,

    /// Caller's role does not match the role the operation demands
    #[error("Insufficient permissions: required role '{required}', but caller has role '{actual}'")]
    InsufficientRole { required: Role, actual: Role },

    /// Caller is not the owner of the resource being mutated
    #[error("Caller does not own the target resource")]
    NotResourceOwner,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::DatabaseError(err.to_string())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::MissingToken => {
                warn!("Missing token in request");
                (StatusCode::UNAUTHORIZED, "Missing authentication token".to_string())
            }
            AuthError::InvalidToken => {
                warn!("Invalid token attempt");
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            AuthError::ExpiredToken => {
                warn!("Expired token attempt");
                (StatusCode::UNAUTHORIZED, "Token has expired".to_string())
            }
            AuthError::TokenGenerationError(msg) => {
                error!("Token generation error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AuthError::ConfigError(msg) => {
                error!("Auth configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AuthError::ProfileNotFound => {
                warn!("Valid token for unknown profile");
                (StatusCode::UNAUTHORIZED, "Unknown caller".to_string())
            }
            AuthError::RoleNotAssigned => {
                warn!("Caller without a role attempted a role-gated operation");
                (
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action".to_string(),
                )
            }
            AuthError::InsufficientRole { required, actual } => {
                warn!(
                    "Authorization failed: required role '{}', caller has role '{}'",
                    required, actual
                );
                (
                    StatusCode::FORBIDDEN,
                    format!("Insufficient permissions: required role '{}'", required),
                )
            }
            // Deliberately the same generic message whether or not the
            // resource exists.
            AuthError::NotResourceOwner => {
                warn!("Ownership check failed");
                (
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action".to_string(),
                )
            }
            AuthError::DatabaseError(msg) => {
                error!("Database error in auth: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::ExpiredToken
            | AuthError::ProfileNotFound => StatusCode::UNAUTHORIZED,
            AuthError::RoleNotAssigned
            | AuthError::InsufficientRole { .. }
            | AuthError::NotResourceOwner => StatusCode::FORBIDDEN,
            AuthError::TokenGenerationError(_)
            | AuthError::ConfigError(_)
            | AuthError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
