use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::SESSION_DURATIONS;

/// Booking status enum representing the lifecycle of a session booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Convert status to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A session length accepted by the marketplace
///
/// Only the fixed menu of durations is representable, so every code path
/// past request parsing can assume a supported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDuration(i32);

impl SessionDuration {
    pub fn minutes(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for SessionDuration {
    type Error = i32;

    fn try_from(minutes: i32) -> Result<Self, Self::Error> {
        if SESSION_DURATIONS.contains(&minutes) {
            Ok(SessionDuration(minutes))
        } else {
            Err(minutes)
        }
    }
}

/// Domain model representing a session booking in the database
///
/// `coach_id` and `client_id` are both profile ids. `price` is a snapshot
/// taken at creation time; later rate changes never touch it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub client_id: Uuid,
    pub coach_id: Uuid,
    pub session_date: DateTime<Utc>,
    /// Session length in minutes
    #[schema(example = 60)]
    pub duration: i32,
    pub status: BookingStatus,
    /// Price snapshot at creation; absent when the coach had no rate
    #[schema(value_type = Option<f64>, example = 150.00)]
    pub price: Option<Decimal>,
    /// External payment reference, set by the payment flow
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a booking
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    /// Profile id of the coach being booked
    pub coach_id: Uuid,
    /// Session start instant (UTC)
    pub session_date: DateTime<Utc>,
    /// Session length in minutes; one of 30, 60, 90, 120
    #[schema(example = 60)]
    pub duration: i32,
}

/// Request DTO for updating a booking's status
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
    }

    #[test]
    fn test_status_from_str_is_case_insensitive() {
        assert_eq!(
            BookingStatus::from_str("Pending").unwrap(),
            BookingStatus::Pending
        );
        assert!(BookingStatus::from_str("shipped").is_err());
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_supported_durations_are_accepted() {
        for minutes in [30, 60, 90, 120] {
            assert_eq!(
                SessionDuration::try_from(minutes).unwrap().minutes(),
                minutes
            );
        }
    }

    #[test]
    fn test_unsupported_durations_are_rejected() {
        for minutes in [0, 15, 45, 121, -60] {
            assert_eq!(SessionDuration::try_from(minutes), Err(minutes));
        }
    }

    #[test]
    fn test_create_booking_request_deserialization() {
        let json = r#"{
            "coach_id": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "session_date": "2025-06-02T09:00:00Z",
            "duration": 60
        }"#;

        let request: CreateBookingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.duration, 60);
    }
}
