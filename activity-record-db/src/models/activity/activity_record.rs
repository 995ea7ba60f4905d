use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::models::identifiable::Identifiable;

/// # Documentation
/// ActivityRecord is one person's activity at a point in time.
/// The id is assigned by the store on insert and never changes afterwards;
/// every other field is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecordModel {
    pub id: i64,

    /// Identifier of the person the activity belongs to (max 50 chars)
    pub owner_code: String,

    /// Short classification tag (max 20 chars)
    pub activity_code: String,

    /// Free text (max 255 chars)
    pub description: String,

    /// When the activity happened, stored in column `occurred_at`
    pub timestamp: NaiveDateTime,
}

/// An activity that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivityRecordModel {
    pub owner_code: String,
    pub activity_code: String,
    pub description: String,
    pub timestamp: NaiveDateTime,
}

impl NewActivityRecordModel {
    /// Attach the identifier handed out by the store.
    pub fn into_record(self, id: i64) -> ActivityRecordModel {
        ActivityRecordModel {
            id,
            owner_code: self.owner_code,
            activity_code: self.activity_code,
            description: self.description,
            timestamp: self.timestamp,
        }
    }
}

impl Identifiable for ActivityRecordModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
