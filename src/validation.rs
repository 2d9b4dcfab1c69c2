// Validation utilities module
// Closed vocabularies for coach tags and session durations; everything the
// conflict and pricing logic relies on is validated here at the boundary.

use validator::ValidationError;

/// Fixed category vocabulary for coach profiles
pub const CATEGORIES: &[&str] = &["life", "business", "creative", "spiritual", "nature"];

/// Fixed language vocabulary for coach profiles
pub const LANGUAGES: &[&str] = &["ASL", "English", "Spanish"];

/// Supported session lengths in minutes
pub const SESSION_DURATIONS: &[i32] = &[30, 60, 90, 120];

/// Validates that every category tag comes from the fixed vocabulary
pub fn validate_categories(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| CATEGORIES.contains(&v.as_str())) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_category"))
    }
}

/// Validates that every language tag comes from the fixed vocabulary
pub fn validate_languages(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| LANGUAGES.contains(&v.as_str())) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_language"))
    }
}

/// Returns true if the duration is one of the supported session lengths
pub fn is_supported_duration(minutes: i32) -> bool {
    SESSION_DURATIONS.contains(&minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_pass() {
        let values = vec!["life".to_string(), "nature".to_string()];
        assert!(validate_categories(&values).is_ok());
    }

    #[test]
    fn test_unknown_category_fails() {
        let values = vec!["life".to_string(), "astrology".to_string()];
        assert!(validate_categories(&values).is_err());
    }

    #[test]
    fn test_empty_tag_sets_pass() {
        assert!(validate_categories(&[]).is_ok());
        assert!(validate_languages(&[]).is_ok());
    }

    #[test]
    fn test_language_vocabulary_is_case_sensitive() {
        assert!(validate_languages(&["ASL".to_string()]).is_ok());
        assert!(validate_languages(&["asl".to_string()]).is_err());
    }

    #[test]
    fn test_supported_durations() {
        for d in [30, 60, 90, 120] {
            assert!(is_supported_duration(d));
        }
        for d in [0, -30, 15, 45, 61, 240] {
            assert!(!is_supported_duration(d));
        }
    }
}
