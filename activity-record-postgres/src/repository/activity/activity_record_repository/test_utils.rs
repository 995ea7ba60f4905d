use activity_record_db::models::activity::NewActivityRecordModel;
use chrono::{NaiveDate, NaiveDateTime};

pub fn test_timestamp(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn create_test_activity_record(owner_code: &str) -> NewActivityRecordModel {
    NewActivityRecordModel {
        owner_code: owner_code.to_string(),
        activity_code: "RUN".to_string(),
        description: "Corrida matinal de 5km".to_string(),
        timestamp: test_timestamp(2025, 12, 25, 10),
    }
}

pub fn create_test_activity_record_with(
    owner_code: &str,
    activity_code: &str,
    description: &str,
    timestamp: NaiveDateTime,
) -> NewActivityRecordModel {
    NewActivityRecordModel {
        owner_code: owner_code.to_string(),
        activity_code: activity_code.to_string(),
        description: description.to_string(),
        timestamp,
    }
}
