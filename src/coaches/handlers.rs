// HTTP handlers for the coach catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{AccessGuard, AuthenticatedUser, Role};
use crate::coaches::{CoachDetails, CoachError, UpsertCoachRequest};

/// Handler for PUT /api/coaches/me
/// Creates or replaces the caller's coach details (coach only)
pub async fn upsert_coach_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpsertCoachRequest>,
) -> Result<(StatusCode, Json<CoachDetails>), CoachError> {
    request
        .validate()
        .map_err(|e| CoachError::ValidationError(e.to_string()))?;

    if let Some(rate) = request.hourly_rate {
        if rate < Decimal::ZERO {
            return Err(CoachError::ValidationError(
                "Hourly rate must be non-negative".to_string(),
            ));
        }
    }

    let caller = state.profile_repo.require(user.profile_id).await?;
    AccessGuard::authorize(&caller, Role::Coach, None)?;

    let details = state.coach_repo.upsert(caller.id, &request).await?;

    tracing::info!("Coach {} updated their details", caller.id);
    Ok((StatusCode::OK, Json(details)))
}

/// Handler for GET /api/coaches/:profile_id
/// Retrieves a coach's public details, including the hourly rate clients
/// use to preview a session price
pub async fn get_coach_handler(
    State(state): State<crate::AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<CoachDetails>, CoachError> {
    let details = state
        .coach_repo
        .find_by_user_id(profile_id)
        .await?
        .ok_or(CoachError::NotFound)?;

    Ok(Json(details))
}
