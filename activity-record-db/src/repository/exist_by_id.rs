use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for checking existence of an entity by its ID
///
/// Lets callers tell "row does not exist" apart from "write touched zero
/// rows", which not every store reports reliably.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
///
/// # Example
/// ```ignore
/// impl ExistById<Postgres> for ActivityRecordRepositoryImpl {
///     async fn exist_by_id(&self, id: i64) -> Result<bool, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait ExistById<DB: Database>: Send + Sync {
    /// Check existence of an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(true)` - The entity exists
    /// * `Ok(false)` - The entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_id(&self, id: i64) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
