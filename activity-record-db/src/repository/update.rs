use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating an entity
///
/// The entity's identifier selects the row; every other field is written.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Update<Postgres, ActivityRecordModel> for ActivityRecordRepositoryImpl {
///     async fn update(&self, item: ActivityRecordModel) -> Result<ActivityRecordModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Update<DB: Database, T: Identifiable>: Send + Sync {
    /// Update one item
    ///
    /// # Returns
    /// * `Ok(T)` - The entity as stored after the update
    /// * `Err` - An error if the update could not be executed or no row was
    ///   found for the entity's identifier
    async fn update(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
