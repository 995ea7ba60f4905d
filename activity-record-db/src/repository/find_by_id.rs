use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding an entity by its ID
///
/// Returns an Option to handle cases where the entity might not exist.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait FindById<DB: Database, T: Identifiable>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
