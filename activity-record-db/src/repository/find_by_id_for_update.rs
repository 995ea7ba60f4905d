use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for reading an entity that is about to be written
///
/// Implementations backed by a transactional store lock the row until the
/// surrounding transaction ends, so the read and the following write act on
/// the same row version.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait FindByIdForUpdate<DB: Database, T: Identifiable>: Send + Sync {
    /// Find and lock an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity, locked for the current transaction
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id_for_update(&self, id: i64) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
