use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Repository trait for listing the entities of one owner
///
/// The owner code is compared exactly (case-sensitive, no trimming); results
/// are ordered by identifier.
#[async_trait]
pub trait FindByOwnerCode<DB: Database, T: Identifiable>: Send + Sync {
    async fn find_by_owner_code(&self, owner_code: &str) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
