use activity_record_api::{ActivityError, ActivityInput, ActivityResult};
use chrono::NaiveDateTime;

/// Input that passed presence and length checks, borrowed from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedActivity<'a> {
    pub owner_code: &'a str,
    pub activity_code: &'a str,
    pub description: &'a str,
    pub timestamp: NaiveDateTime,
}

/// True for `None`, an empty string, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Presence checks, first failure wins:
/// payload, timestamp, ownerCode, activityCode, description.
pub fn validate_presence(input: Option<&ActivityInput>) -> ActivityResult<ValidatedActivity<'_>> {
    let input = input.ok_or(ActivityError::MissingPayload)?;

    let timestamp = input.timestamp.ok_or(ActivityError::MissingField("timestamp"))?;
    let owner_code = required(input.owner_code.as_deref(), "ownerCode")?;
    let activity_code = required(input.activity_code.as_deref(), "activityCode")?;
    let description = required(input.description.as_deref(), "description")?;

    Ok(ValidatedActivity {
        owner_code,
        activity_code,
        description,
        timestamp,
    })
}

/// Full write-side validation shared by create and update:
/// presence first, then the character bounds.
pub fn validate_input(input: Option<&ActivityInput>) -> ActivityResult<ValidatedActivity<'_>> {
    let validated = validate_presence(input)?;
    if let Some(input) = input {
        input.check_lengths()?;
    }
    Ok(validated)
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> ActivityResult<&'a str> {
    match value {
        Some(v) if !is_blank(Some(v)) => Ok(v),
        _ => Err(ActivityError::MissingField(field)),
    }
}
