use async_trait::async_trait;

use crate::domain::{ActivityFilter, ActivityInput, ActivityOutput};
use crate::error::ActivityResult;

/// Use cases offered to the transport layer.
///
/// Each call is one unit of work against the record store. Validation and
/// existence failures are reported before any write reaches the store.
#[async_trait]
pub trait ActivityRecordService: Send + Sync {
    /// Validate and persist a new activity
    ///
    /// # Returns
    /// * `Ok(ActivityOutput)` - The stored activity with its assigned id
    /// * `Err(MissingPayload | MissingField | FieldTooLong)` - Rejected input
    /// * `Err(StoreFailure)` - The store could not persist the activity
    async fn create(&self, input: Option<ActivityInput>) -> ActivityResult<ActivityOutput>;

    async fn list_all(&self) -> ActivityResult<Vec<ActivityOutput>>;

    /// List the activities of one owner (exact match after trimming)
    async fn list_by_owner(&self, owner_code: &str) -> ActivityResult<Vec<ActivityOutput>>;

    /// List the activities matching every supplied filter field
    async fn list_with_filters(&self, filter: &ActivityFilter) -> ActivityResult<Vec<ActivityOutput>>;

    /// Look up one activity
    ///
    /// # Returns
    /// * `Ok(Some(ActivityOutput))` - The activity exists
    /// * `Ok(None)` - No activity with this id
    /// * `Err(InvalidId)` - `id` is not positive
    async fn get_by_id(&self, id: i64) -> ActivityResult<Option<ActivityOutput>>;

    /// Replace the business fields of an existing activity, keeping its id
    async fn update(&self, id: i64, input: Option<ActivityInput>) -> ActivityResult<ActivityOutput>;

    async fn delete(&self, id: i64) -> ActivityResult<()>;

    /// Whether the owner already has an activity with this code
    async fn exists_for_owner(&self, owner_code: &str, activity_code: &str) -> ActivityResult<bool>;
}
