use async_trait::async_trait;
use activity_record_db::repository::exist_by_id::ExistById;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityRecordRepositoryImpl;

impl ActivityRecordRepositoryImpl {
    pub(super) async fn exist_by_id_impl(
        repo: &ActivityRecordRepositoryImpl,
        id: i64,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let query = r#"SELECT EXISTS(SELECT 1 FROM activity_record WHERE id = $1)"#;
        let exists: bool = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query_scalar(query).bind(id).fetch_one(&mut **transaction).await?
        };
        Ok(exists)
    }
}

#[async_trait]
impl ExistById<Postgres> for ActivityRecordRepositoryImpl {
    async fn exist_by_id(&self, id: i64) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::exist_by_id_impl(self, id).await
    }
}
