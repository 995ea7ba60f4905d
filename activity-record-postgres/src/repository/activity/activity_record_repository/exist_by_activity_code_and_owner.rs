use async_trait::async_trait;
use activity_record_db::repository::exist_by_activity_code_and_owner::ExistByActivityCodeAndOwner;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityRecordRepositoryImpl;

impl ActivityRecordRepositoryImpl {
    pub(super) async fn exist_by_activity_code_and_owner_impl(
        repo: &ActivityRecordRepositoryImpl,
        activity_code: &str,
        owner_code: &str,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM activity_record WHERE activity_code = $1 AND owner_code = $2
            )
        "#;
        let exists: bool = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query_scalar(query)
                .bind(activity_code)
                .bind(owner_code)
                .fetch_one(&mut **transaction)
                .await?
        };
        Ok(exists)
    }
}

#[async_trait]
impl ExistByActivityCodeAndOwner<Postgres> for ActivityRecordRepositoryImpl {
    async fn exist_by_activity_code_and_owner(
        &self,
        activity_code: &str,
        owner_code: &str,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::exist_by_activity_code_and_owner_impl(self, activity_code, owner_code).await
    }
}
