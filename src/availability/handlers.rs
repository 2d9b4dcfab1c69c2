// HTTP handlers for availability endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{AccessGuard, AuthenticatedUser, Role};
use crate::availability::{AvailabilityError, AvailabilitySlot, CreateSlotRequest};

/// Handler for POST /api/availability
/// Adds a recurring weekly slot to the caller's availability (coach only)
#[utoipa::path(
    post,
    path = "/api/availability",
    request_body = CreateSlotRequest,
    responses(
        (status = 201, description = "Slot created successfully", body = AvailabilitySlot),
        (status = 400, description = "Invalid slot", body = String, example = json!({"error": "Day of week must be between 0 and 6, got 7"})),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not a coach"),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "A database error occurred"}))
    ),
    security(("bearer_auth" = [])),
    tag = "availability"
)]
pub async fn add_slot_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateSlotRequest>,
) -> Result<(StatusCode, Json<AvailabilitySlot>), AvailabilityError> {
    request
        .validate()
        .map_err(|e| AvailabilityError::ValidationError(e.to_string()))?;

    let caller = state.profile_repo.require(user.profile_id).await?;
    AccessGuard::authorize(&caller, Role::Coach, None)?;

    let slot = state
        .availability_service
        .add_slot(caller.id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(slot)))
}

/// Handler for DELETE /api/availability/:slot_id
/// Removes one of the caller's slots (coach only)
///
/// A slot owned by another coach is indistinguishable from a missing one;
/// both return 404.
#[utoipa::path(
    delete,
    path = "/api/availability/{slot_id}",
    params(
        ("slot_id" = Uuid, Path, description = "Availability slot ID")
    ),
    responses(
        (status = 204, description = "Slot removed"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not a coach"),
        (status = 404, description = "Slot not found", body = String, example = json!({"error": "Availability slot not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "A database error occurred"}))
    ),
    security(("bearer_auth" = [])),
    tag = "availability"
)]
pub async fn remove_slot_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(slot_id): Path<Uuid>,
) -> Result<StatusCode, AvailabilityError> {
    let caller = state.profile_repo.require(user.profile_id).await?;
    AccessGuard::authorize(&caller, Role::Coach, None)?;

    state
        .availability_service
        .remove_slot(caller.id, slot_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/coaches/:profile_id/availability
/// Lists a coach's weekly slots; public so clients can pick a time
#[utoipa::path(
    get,
    path = "/api/coaches/{profile_id}/availability",
    params(
        ("profile_id" = Uuid, Path, description = "Coach profile ID")
    ),
    responses(
        (status = 200, description = "The coach's weekly slots", body = Vec<AvailabilitySlot>),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "A database error occurred"}))
    ),
    tag = "availability"
)]
pub async fn list_slots_handler(
    State(state): State<crate::AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<Vec<AvailabilitySlot>>, AvailabilityError> {
    let slots = state.availability_service.list_slots(profile_id).await?;

    Ok(Json(slots))
}
