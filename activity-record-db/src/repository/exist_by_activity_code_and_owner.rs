use async_trait::async_trait;
use sqlx::Database;

/// Repository trait for checking whether an owner already has an activity
/// with a given code. Both values are compared exactly.
#[async_trait]
pub trait ExistByActivityCodeAndOwner<DB: Database>: Send + Sync {
    async fn exist_by_activity_code_and_owner(
        &self,
        activity_code: &str,
        owner_code: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
