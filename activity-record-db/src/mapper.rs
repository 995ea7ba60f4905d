use activity_record_api::ActivityOutput;

use crate::models::activity::{ActivityRecordModel, NewActivityRecordModel};
use crate::validation::ValidatedActivity;

/// New record from validated input. The id is left to the store.
pub fn to_new_record(input: &ValidatedActivity<'_>) -> NewActivityRecordModel {
    NewActivityRecordModel {
        owner_code: input.owner_code.to_owned(),
        activity_code: input.activity_code.to_owned(),
        description: input.description.to_owned(),
        timestamp: input.timestamp,
    }
}

/// Overwrite every business field of `record`; `record.id` is never touched.
pub fn apply_input(input: &ValidatedActivity<'_>, record: &mut ActivityRecordModel) {
    record.owner_code = input.owner_code.to_owned();
    record.activity_code = input.activity_code.to_owned();
    record.description = input.description.to_owned();
    record.timestamp = input.timestamp;
}

pub fn to_output(record: ActivityRecordModel) -> ActivityOutput {
    ActivityOutput {
        id: record.id,
        owner_code: record.owner_code,
        timestamp: record.timestamp,
        activity_code: record.activity_code,
        description: record.description,
    }
}

pub fn to_output_list(records: Vec<ActivityRecordModel>) -> Vec<ActivityOutput> {
    records.into_iter().map(to_output).collect()
}
