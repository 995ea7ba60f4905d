use async_trait::async_trait;
use activity_record_db::models::activity::ActivityRecordModel;
use activity_record_db::repository::find_by_owner_code::FindByOwnerCode;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{rows_to_models, ActivityRecordRepositoryImpl, SELECT_ACTIVITY_RECORD};

impl ActivityRecordRepositoryImpl {
    pub(super) async fn find_by_owner_code_impl(
        repo: &ActivityRecordRepositoryImpl,
        owner_code: &str,
    ) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("{SELECT_ACTIVITY_RECORD} WHERE owner_code = $1 ORDER BY id");
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(owner_code)
                .fetch_all(&mut **transaction)
                .await?
        };
        rows_to_models(rows)
    }
}

#[async_trait]
impl FindByOwnerCode<Postgres, ActivityRecordModel> for ActivityRecordRepositoryImpl {
    async fn find_by_owner_code(
        &self,
        owner_code: &str,
    ) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_owner_code_impl(self, owner_code).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::activity::activity_record_repository::test_utils::create_test_activity_record;
    use crate::test_helper::setup_test_context;
    use activity_record_db::repository::create::Create;
    use activity_record_db::repository::find_by_owner_code::FindByOwnerCode;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL database"]
    async fn test_find_by_owner_code() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_record_repo = &ctx.activity_repos().activity_record_repository;

        let owner_code = "OWNER-FBOC";
        let first = activity_record_repo.create(create_test_activity_record(owner_code)).await?;
        let second = activity_record_repo.create(create_test_activity_record(owner_code)).await?;
        activity_record_repo.create(create_test_activity_record("OWNER-OTHER")).await?;

        let found = activity_record_repo.find_by_owner_code(owner_code).await?;
        assert_eq!(found, vec![first, second]);

        // Owner code comparison is case-sensitive
        assert!(activity_record_repo.find_by_owner_code("owner-fboc").await?.is_empty());

        Ok(())
    }
}
