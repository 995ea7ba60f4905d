use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a new entity
///
/// The store assigns the identifier. Inserting is not idempotent: issuing
/// the same call twice yields two rows with different ids.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `N` - The not-yet-persisted shape of the entity (no identifier)
/// * `T` - The persisted entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<Postgres, NewActivityRecordModel, ActivityRecordModel> for ActivityRecordRepositoryImpl {
///     async fn create(&self, item: NewActivityRecordModel) -> Result<ActivityRecordModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<DB: Database, N: Send + 'static, T: Identifiable>: Send + Sync {
    /// Insert one item
    ///
    /// # Arguments
    /// * `item` - The entity to insert
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity with its assigned identifier
    /// * `Err` - An error if the insert could not be executed
    async fn create(&self, item: N) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
