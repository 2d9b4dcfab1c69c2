// HTTP handlers for booking endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{AuthenticatedUser, Role};
use crate::bookings::{Booking, BookingError, CreateBookingRequest, UpdateStatusRequest};

/// Query parameters for the booking list
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct BookingListQuery {
    /// Which side of the marketplace to list for; must match the caller's role
    pub role: Role,
}

/// Handler for POST /api/bookings
/// Books a session with a coach (client only)
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid request", body = String, example = json!({"error": "Unsupported session duration: 45 minutes"})),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not a client"),
        (status = 404, description = "Coach not found", body = String, example = json!({"error": "Coach not found"})),
        (status = 409, description = "Time slot already booked", body = String, example = json!({"error": "Requested time conflicts with an existing booking"})),
        (status = 422, description = "Outside the coach's availability", body = String, example = json!({"error": "Requested time is outside the coach's availability"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "A database error occurred"}))
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn create_booking_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), BookingError> {
    request
        .validate()
        .map_err(|e| BookingError::ValidationError(e.to_string()))?;

    let caller = state.profile_repo.require(user.profile_id).await?;

    let booking = state.booking_service.create_booking(&caller, request).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Handler for GET /api/bookings?role=client|coach
/// Lists the caller's bookings for the requested side
#[utoipa::path(
    get,
    path = "/api/bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "The caller's bookings, soonest first", body = Vec<Booking>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Requested role does not match the caller's"),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "A database error occurred"}))
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn list_bookings_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<Booking>>, BookingError> {
    let caller = state.profile_repo.require(user.profile_id).await?;

    let bookings = state
        .booking_service
        .list_bookings(&caller, query.role)
        .await?;

    Ok(Json(bookings))
}

/// Handler for GET /api/bookings/:booking_id
/// Retrieves one booking, visible only to its client or coach
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    params(
        ("booking_id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "The booking", body = Booking),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not a party to the booking"),
        (status = 404, description = "Booking not found", body = String, example = json!({"error": "Booking not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "A database error occurred"}))
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn get_booking_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, BookingError> {
    let caller = state.profile_repo.require(user.profile_id).await?;

    let booking = state.booking_service.get_booking(&caller, booking_id).await?;

    Ok(Json(booking))
}

/// Handler for PATCH /api/bookings/:booking_id/status
/// Moves a booking through its lifecycle (confirm/complete: coach;
/// cancel: either party)
#[utoipa::path(
    patch,
    path = "/api/bookings/{booking_id}/status",
    params(
        ("booking_id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 400, description = "Invalid transition", body = String, example = json!({"error": "Invalid status transition from completed to cancelled"})),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller may not perform this transition"),
        (status = 404, description = "Booking not found", body = String, example = json!({"error": "Booking not found"})),
        (status = 500, description = "Internal server error", body = String, example = json!({"error": "A database error occurred"}))
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn update_booking_status_handler(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Booking>, BookingError> {
    request
        .validate()
        .map_err(|e| BookingError::ValidationError(e.to_string()))?;

    let caller = state.profile_repo.require(user.profile_id).await?;

    let booking = state
        .booking_service
        .update_status(&caller, booking_id, request.status)
        .await?;

    Ok(Json(booking))
}
