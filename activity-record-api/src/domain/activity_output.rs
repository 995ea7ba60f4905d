use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Read-side shape of a persisted activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOutput {
    pub id: i64,
    pub owner_code: String,
    pub timestamp: NaiveDateTime,
    pub activity_code: String,
    pub description: String,
}
