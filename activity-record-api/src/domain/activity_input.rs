use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateLength};

use crate::error::{ActivityError, ActivityResult};

pub const OWNER_CODE_MAX_LEN: u64 = 50;
pub const ACTIVITY_CODE_MAX_LEN: u64 = 20;
pub const DESCRIPTION_MAX_LEN: u64 = 255;

/// # Documentation
/// Write-side shape of an activity, shared by create and update.
///
/// Every field is optional on the wire so that a missing value can be
/// reported as a precise `MissingField` instead of a deserialization failure.
/// The length bounds are expressed twice: as `validator` attributes for
/// boundary validation, and through [`ActivityInput::check_lengths`] which
/// reports the first offending field in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    /// Identifier of the person the activity belongs to
    #[validate(length(max = OWNER_CODE_MAX_LEN))]
    pub owner_code: Option<String>,

    /// When the activity happened (no range restriction)
    pub timestamp: Option<NaiveDateTime>,

    /// Short classification tag, e.g. "RUN"
    #[validate(length(max = ACTIVITY_CODE_MAX_LEN))]
    pub activity_code: Option<String>,

    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
}

impl ActivityInput {
    pub fn new(
        owner_code: impl Into<String>,
        activity_code: impl Into<String>,
        description: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            owner_code: Some(owner_code.into()),
            timestamp: Some(timestamp),
            activity_code: Some(activity_code.into()),
            description: Some(description.into()),
        }
    }

    /// Check the character bounds of every text field.
    ///
    /// Fields are checked in the order ownerCode, activityCode, description;
    /// absent fields pass, presence is not this check's concern.
    pub fn check_lengths(&self) -> ActivityResult<()> {
        check_length(&self.owner_code, "ownerCode", OWNER_CODE_MAX_LEN)?;
        check_length(&self.activity_code, "activityCode", ACTIVITY_CODE_MAX_LEN)?;
        check_length(&self.description, "description", DESCRIPTION_MAX_LEN)?;
        Ok(())
    }
}

fn check_length(value: &Option<String>, field: &'static str, max: u64) -> ActivityResult<()> {
    match value {
        Some(text) if !text.validate_length(None, Some(max), None) => {
            Err(ActivityError::FieldTooLong(field, max))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 25)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    fn valid_input() -> ActivityInput {
        ActivityInput::new("EMP001", "RUN", "Corrida matinal de 5km", sample_timestamp())
    }

    #[test]
    fn test_lengths_at_bound_pass() {
        let input = ActivityInput::new(
            "A".repeat(50),
            "B".repeat(20),
            "C".repeat(255),
            sample_timestamp(),
        );

        assert!(input.check_lengths().is_ok());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_owner_code_one_over_bound_fails() {
        let mut input = valid_input();
        input.owner_code = Some("A".repeat(51));

        let err = input.check_lengths().unwrap_err();
        assert!(matches!(err, ActivityError::FieldTooLong("ownerCode", 50)));
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_activity_code_one_over_bound_fails() {
        let mut input = valid_input();
        input.activity_code = Some("B".repeat(21));

        let err = input.check_lengths().unwrap_err();
        assert!(matches!(err, ActivityError::FieldTooLong("activityCode", 20)));
    }

    #[test]
    fn test_description_one_over_bound_fails() {
        let mut input = valid_input();
        input.description = Some("C".repeat(256));

        let err = input.check_lengths().unwrap_err();
        assert!(matches!(err, ActivityError::FieldTooLong("description", 255)));
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let mut input = valid_input();
        // 255 two-byte characters
        input.description = Some("ç".repeat(255));

        assert!(input.check_lengths().is_ok());
    }

    #[test]
    fn test_first_offending_field_wins() {
        let mut input = valid_input();
        input.owner_code = Some("A".repeat(60));
        input.description = Some("C".repeat(300));

        let err = input.check_lengths().unwrap_err();
        assert!(matches!(err, ActivityError::FieldTooLong("ownerCode", 50)));
    }

    #[test]
    fn test_absent_fields_pass_length_check() {
        assert!(ActivityInput::default().check_lengths().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "ownerCode": "EMP001",
            "timestamp": "2025-12-25T10:30:00",
            "activityCode": "RUN",
            "description": "Corrida matinal de 5km"
        }"#;

        let input: ActivityInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, valid_input());
    }

    #[test]
    fn test_deserialize_missing_fields_as_none() {
        let input: ActivityInput = serde_json::from_str(r#"{"ownerCode": "EMP001"}"#).unwrap();

        assert_eq!(input.owner_code.as_deref(), Some("EMP001"));
        assert!(input.timestamp.is_none());
        assert!(input.activity_code.is_none());
        assert!(input.description.is_none());
    }
}
