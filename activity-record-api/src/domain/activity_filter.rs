use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// # Documentation
/// Optional match criteria for listing activities.
///
/// A field that is `None` (or an empty string) puts no constraint on the
/// result; the supplied fields are combined with AND.
/// - `owner_code`, `activity_code`: exact, case-sensitive match
/// - `description`: case-insensitive substring match
/// - `date_from`, `date_to`: inclusive calendar-day range on the timestamp
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFilter {
    pub owner_code: Option<String>,
    pub activity_code: Option<String>,
    pub description: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl ActivityFilter {
    pub fn by_owner_code(owner_code: impl Into<String>) -> Self {
        Self {
            owner_code: Some(owner_code.into()),
            ..Self::default()
        }
    }
}
