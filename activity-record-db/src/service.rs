use std::marker::PhantomData;
use std::sync::Arc;

use activity_record_api::{
    ActivityError, ActivityFilter, ActivityInput, ActivityOutput, ActivityRecordService,
    ActivityResult,
};
use async_trait::async_trait;
use sqlx::Database;
use tracing::{debug, info, warn};

use crate::mapper;
use crate::predicate::PredicateSet;
use crate::repository::ActivityRecordRepository;
use crate::validation::{is_blank, validate_input};

/// Activity record use cases on top of any [`ActivityRecordRepository`].
///
/// The service holds no mutable state; every call is sequenced against the
/// repository it was built with. When that repository is bound to a single
/// transaction (see the Postgres unit of work) the existence check, the
/// read and the write of `update` happen inside that transaction.
pub struct ActivityRecordServiceImpl<DB: Database, R: ActivityRecordRepository<DB>> {
    repository: Arc<R>,
    _db: PhantomData<fn() -> DB>,
}

impl<DB: Database, R: ActivityRecordRepository<DB>> ActivityRecordServiceImpl<DB, R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _db: PhantomData,
        }
    }
}

fn ensure_valid_id(id: i64) -> ActivityResult<()> {
    if id <= 0 {
        warn!(id, "Rejected non-positive activity id");
        return Err(ActivityError::InvalidId);
    }
    Ok(())
}

fn required_trimmed<'a>(value: &'a str, field: &'static str) -> ActivityResult<&'a str> {
    if is_blank(Some(value)) {
        warn!(field, "Required filter value is blank");
        return Err(ActivityError::MissingField(field));
    }
    Ok(value.trim())
}

#[async_trait]
impl<DB: Database, R: ActivityRecordRepository<DB>> ActivityRecordService for ActivityRecordServiceImpl<DB, R> {
    async fn create(&self, input: Option<ActivityInput>) -> ActivityResult<ActivityOutput> {
        info!(
            owner_code = input.as_ref().and_then(|i| i.owner_code.as_deref()),
            "Creating activity"
        );

        let validated = validate_input(input.as_ref()).inspect_err(|err| {
            warn!(error = %err, "Activity payload rejected");
        })?;
        let record = mapper::to_new_record(&validated);

        debug!("Inserting activity record");
        let saved = self.repository.create(record).await?;
        info!(id = saved.id, activity_code = %saved.activity_code, "Activity created");

        Ok(mapper::to_output(saved))
    }

    async fn list_all(&self) -> ActivityResult<Vec<ActivityOutput>> {
        info!("Listing all activities");

        let records = self.repository.find_all().await?;
        debug!(count = records.len(), "Scan returned activity records");

        Ok(mapper::to_output_list(records))
    }

    async fn list_by_owner(&self, owner_code: &str) -> ActivityResult<Vec<ActivityOutput>> {
        info!(owner_code, "Listing activities by owner");

        let owner_code = required_trimmed(owner_code, "ownerCode")?;

        let records = self.repository.find_by_owner_code(owner_code).await?;
        info!(owner_code, count = records.len(), "Activities found for owner");
        for record in &records {
            debug!(id = record.id, activity_code = %record.activity_code, "Activity found");
        }

        Ok(mapper::to_output_list(records))
    }

    async fn list_with_filters(&self, filter: &ActivityFilter) -> ActivityResult<Vec<ActivityOutput>> {
        info!(?filter, "Listing activities with filters");

        let predicates = PredicateSet::build(filter);
        debug!(predicates = predicates.len(), "Built filter predicates");

        let records = self.repository.find_by_predicates(&predicates).await?;
        debug!(count = records.len(), "Filtered scan returned activity records");

        Ok(mapper::to_output_list(records))
    }

    async fn get_by_id(&self, id: i64) -> ActivityResult<Option<ActivityOutput>> {
        info!(id, "Fetching activity");
        ensure_valid_id(id)?;

        match self.repository.find_by_id(id).await? {
            Some(record) => {
                debug!(id, activity_code = %record.activity_code, "Activity found");
                Ok(Some(mapper::to_output(record)))
            }
            None => {
                warn!(id, "Activity not found");
                Ok(None)
            }
        }
    }

    async fn update(&self, id: i64, input: Option<ActivityInput>) -> ActivityResult<ActivityOutput> {
        info!(id, "Updating activity");
        ensure_valid_id(id)?;

        let validated = validate_input(input.as_ref()).inspect_err(|err| {
            warn!(id, error = %err, "Activity payload rejected");
        })?;

        debug!(id, "Checking activity existence before update");
        if !self.repository.exist_by_id(id).await? {
            warn!(id, "Activity not found for update");
            return Err(ActivityError::NotFound(id));
        }

        // Re-read under lock: the row may have been deleted since the check.
        let Some(mut record) = self.repository.find_by_id_for_update(id).await? else {
            warn!(id, "Activity disappeared before update");
            return Err(ActivityError::NotFound(id));
        };
        mapper::apply_input(&validated, &mut record);

        debug!(id, "Writing updated activity record");
        let updated = self.repository.update(record).await?;
        info!(id, "Activity updated");

        Ok(mapper::to_output(updated))
    }

    async fn delete(&self, id: i64) -> ActivityResult<()> {
        info!(id, "Deleting activity");
        ensure_valid_id(id)?;

        debug!(id, "Checking activity existence before delete");
        if !self.repository.exist_by_id(id).await? {
            warn!(id, "Activity not found for delete");
            return Err(ActivityError::NotFound(id));
        }

        let deleted = self.repository.delete_by_id(id).await?;
        info!(id, deleted, "Activity deleted");

        Ok(())
    }

    async fn exists_for_owner(&self, owner_code: &str, activity_code: &str) -> ActivityResult<bool> {
        let owner_code = required_trimmed(owner_code, "ownerCode")?;
        let activity_code = required_trimmed(activity_code, "activityCode")?;

        let exists = self
            .repository
            .exist_by_activity_code_and_owner(activity_code, owner_code)
            .await?;
        debug!(owner_code, activity_code, exists, "Checked activity code for owner");

        Ok(exists)
    }
}
