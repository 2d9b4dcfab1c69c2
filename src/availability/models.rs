use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A recurring weekly open-hour window for a coach
///
/// Slots for the same coach and day may overlap; their union defines the
/// day's open hours. Slots are deleted and recreated, never edited.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub coach_id: Uuid,
    /// 0 = Sunday through 6 = Saturday
    #[schema(example = 1, minimum = 0, maximum = 6)]
    pub day_of_week: i16,
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "17:00:00")]
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for adding an availability slot
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSlotRequest {
    /// 0 = Sunday through 6 = Saturday
    #[validate(range(min = 0, max = 6, message = "Day of week must be between 0 and 6"))]
    #[schema(example = 1, minimum = 0, maximum = 6)]
    pub day_of_week: i16,
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "17:00:00")]
    pub end_time: NaiveTime,
}
