use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for listing every entity, ordered by identifier
#[async_trait]
pub trait FindAll<DB: Database, T: Identifiable>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
