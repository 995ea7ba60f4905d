//! Test helper module for transaction-based test isolation
//!
//! Every test runs inside a database transaction that is never committed,
//! so nothing a test writes survives it and no explicit cleanup is needed.

use crate::config::DatabaseConfig;
use crate::postgres_repositories::{ActivityRepositories, PostgresRepositories};
use std::sync::Arc;

/// Test context that provides a transactional database session
///
/// The transaction behind the repositories is rolled back when the context
/// is dropped.
pub struct TestContext {
    pub activity_repos: ActivityRepositories,
}

impl TestContext {
    /// Get the activity repositories from the context
    pub fn activity_repos(&self) -> &ActivityRepositories {
        &self.activity_repos
    }
}

/// Setup a test context with a transactional database session
///
/// Connects with `DATABASE_URL` (or the default local URL), applies pending
/// migrations and begins the transaction the repositories share.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let activity_record_repo = &ctx.activity_repos().activity_record_repository;
///
///     // All changes are rolled back when ctx is dropped
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let repos = setup_shared_repos(1).await?;
    let activity_repos = repos.create_activity_repositories().await?;

    Ok(TestContext { activity_repos })
}

/// Setup a shared PostgresRepositories for tests that need more than one
/// transaction.
pub async fn setup_shared_repos(
    max_connections: u32,
) -> Result<PostgresRepositories, Box<dyn std::error::Error + Send + Sync>> {
    let config = DatabaseConfig::from_env()?.with_max_connections(max_connections);
    let pool = config.connect().await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(PostgresRepositories::new(Arc::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::activity::activity_record_repository::test_utils::{
        create_test_activity_record, test_timestamp,
    };
    use activity_record_api::{ActivityError, ActivityInput, ActivityRecordService};
    use activity_record_db::repository::create::Create;
    use activity_record_db::repository::exist_by_id::ExistById;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL database"]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let saved_id = {
            let ctx = setup_test_context().await?;
            let activity_record_repo = &ctx.activity_repos().activity_record_repository;

            let saved = activity_record_repo.create(create_test_activity_record("EMP-ROLLBACK")).await?;
            assert!(activity_record_repo.exist_by_id(saved.id).await?);
            saved.id
        }; // Transaction is rolled back here when ctx is dropped

        let ctx = setup_test_context().await?;
        let activity_record_repo = &ctx.activity_repos().activity_record_repository;
        assert!(!activity_record_repo.exist_by_id(saved_id).await?);

        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    #[ignore = "requires a running PostgreSQL database"]
    async fn test_commit_is_visible_to_next_unit_of_work() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_shared_repos(2).await?;

        let first = repos.create_activity_repositories().await?;
        let input = ActivityInput::new("EMP-COMMIT", "RUN", "Corrida matinal de 5km", test_timestamp(2025, 12, 25, 10));
        let saved = first.service().create(Some(input)).await?;
        first.commit().await?;
        assert!(first.executor.tx.lock().await.is_none());
        assert!(first.commit().await.is_err());

        let second = repos.create_activity_repositories().await?;
        let service = second.service();
        assert_eq!(service.get_by_id(saved.id).await?, Some(saved.clone()));
        service.delete(saved.id).await?;
        second.commit().await?;

        let third = repos.create_activity_repositories().await?;
        assert!(matches!(
            third.service().delete(saved.id).await,
            Err(ActivityError::NotFound(id)) if id == saved.id
        ));
        third.rollback().await?;

        Ok(())
    }
}
