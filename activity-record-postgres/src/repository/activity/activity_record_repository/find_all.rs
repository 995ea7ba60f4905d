use async_trait::async_trait;
use activity_record_db::models::activity::ActivityRecordModel;
use activity_record_db::repository::find_all::FindAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{rows_to_models, ActivityRecordRepositoryImpl, SELECT_ACTIVITY_RECORD};

impl ActivityRecordRepositoryImpl {
    pub(super) async fn find_all_impl(
        repo: &ActivityRecordRepositoryImpl,
    ) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("{SELECT_ACTIVITY_RECORD} ORDER BY id");
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query).fetch_all(&mut **transaction).await?
        };
        rows_to_models(rows)
    }
}

#[async_trait]
impl FindAll<Postgres, ActivityRecordModel> for ActivityRecordRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        Self::find_all_impl(self).await
    }
}
