use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for deleting an entity by its ID
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait DeleteById<DB: Database>: Send + Sync {
    /// Delete the entity with the given identifier
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of rows deleted (0 or 1)
    /// * `Err` - An error if the delete could not be executed
    async fn delete_by_id(&self, id: i64) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
