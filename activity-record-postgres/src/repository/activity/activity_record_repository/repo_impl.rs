use activity_record_db::models::activity::ActivityRecordModel;
use crate::utils::TryFromRow;
use postgres_unit_of_work::Executor;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub(super) const SELECT_ACTIVITY_RECORD: &str =
    "SELECT id, owner_code, activity_code, description, occurred_at FROM activity_record";

pub struct ActivityRecordRepositoryImpl {
    pub executor: Executor,
}

impl ActivityRecordRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ActivityRecordModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ActivityRecordModel {
            id: row.try_get("id")?,
            owner_code: row.try_get("owner_code")?,
            activity_code: row.try_get("activity_code")?,
            description: row.try_get("description")?,
            timestamp: row.try_get("occurred_at")?,
        })
    }
}

pub(super) fn rows_to_models(rows: Vec<PgRow>) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
    rows.iter().map(ActivityRecordModel::try_from_row).collect()
}
