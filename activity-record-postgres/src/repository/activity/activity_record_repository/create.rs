use async_trait::async_trait;
use activity_record_db::models::activity::{ActivityRecordModel, NewActivityRecordModel};
use activity_record_db::repository::create::Create;
use sqlx::{Postgres, Row};
use std::error::Error;

use super::repo_impl::ActivityRecordRepositoryImpl;

impl ActivityRecordRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ActivityRecordRepositoryImpl,
        item: NewActivityRecordModel,
    ) -> Result<ActivityRecordModel, Box<dyn Error + Send + Sync>> {
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(
                r#"
                INSERT INTO activity_record (owner_code, activity_code, description, occurred_at)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(item.owner_code.as_str())
            .bind(item.activity_code.as_str())
            .bind(item.description.as_str())
            .bind(item.timestamp)
            .fetch_one(&mut **transaction)
            .await?
        };

        let id: i64 = row.try_get("id")?;
        tracing::debug!(id, "Inserted activity_record row");
        Ok(item.into_record(id))
    }
}

#[async_trait]
impl Create<Postgres, NewActivityRecordModel, ActivityRecordModel> for ActivityRecordRepositoryImpl {
    async fn create(
        &self,
        item: NewActivityRecordModel,
    ) -> Result<ActivityRecordModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
