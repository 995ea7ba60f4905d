use async_trait::async_trait;
use activity_record_db::models::activity::ActivityRecordModel;
use activity_record_db::models::identifiable::Identifiable;
use activity_record_db::repository::update::Update;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityRecordRepositoryImpl;

impl ActivityRecordRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ActivityRecordRepositoryImpl,
        item: ActivityRecordModel,
    ) -> Result<ActivityRecordModel, Box<dyn Error + Send + Sync>> {
        let rows_affected = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

            sqlx::query(
                r#"
                UPDATE activity_record
                SET owner_code = $2, activity_code = $3, description = $4, occurred_at = $5
                WHERE id = $1
                "#,
            )
            .bind(item.get_id())
            .bind(item.owner_code.as_str())
            .bind(item.activity_code.as_str())
            .bind(item.description.as_str())
            .bind(item.timestamp)
            .execute(&mut **transaction)
            .await?
            .rows_affected()
        }; // Transaction lock released here

        if rows_affected == 0 {
            return Err(format!("No activity_record row updated for id {}", item.get_id()).into());
        }

        Ok(item)
    }
}

#[async_trait]
impl Update<Postgres, ActivityRecordModel> for ActivityRecordRepositoryImpl {
    async fn update(
        &self,
        item: ActivityRecordModel,
    ) -> Result<ActivityRecordModel, Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item).await
    }
}
