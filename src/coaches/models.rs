use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Coach detail record: one per coach profile, written only through the
/// upsert keyed on `user_id`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CoachDetails {
    pub id: Uuid,
    /// Owning profile id; bookings reference this, not `id`
    pub user_id: Uuid,
    pub bio: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub credentials: String,
    /// Hourly rate in dollars; absent until the coach sets one
    #[schema(value_type = Option<f64>, example = 100.0)]
    pub hourly_rate: Option<Decimal>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for the coach onboarding upsert
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertCoachRequest {
    pub bio: String,
    #[validate(custom = "crate::validation::validate_categories")]
    #[schema(example = json!(["life", "business"]))]
    pub categories: Vec<String>,
    #[validate(custom = "crate::validation::validate_languages")]
    #[schema(example = json!(["English", "ASL"]))]
    pub languages: Vec<String>,
    pub credentials: String,
    #[schema(value_type = Option<f64>, example = 100.0)]
    pub hourly_rate: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_upsert_request_deserialization() {
        let json = r#"{
            "bio": "Twenty years of leadership coaching.",
            "categories": ["business", "life"],
            "languages": ["English"],
            "credentials": "ICF PCC",
            "hourly_rate": "120.00"
        }"#;

        let request: UpsertCoachRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.categories, vec!["business", "life"]);
        assert_eq!(request.hourly_rate, Some(dec!(120.00)));
    }

    #[test]
    fn test_upsert_request_without_rate() {
        let json = r#"{
            "bio": "",
            "categories": [],
            "languages": [],
            "credentials": "",
            "hourly_rate": null
        }"#;

        let request: UpsertCoachRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.hourly_rate, None);
    }

    #[test]
    fn test_upsert_request_rejects_unknown_tags() {
        let request = UpsertCoachRequest {
            bio: String::new(),
            categories: vec!["finance".to_string()],
            languages: vec!["English".to_string()],
            credentials: String::new(),
            hourly_rate: None,
        };

        assert!(request.validate().is_err());
    }
}
