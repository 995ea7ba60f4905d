use async_trait::async_trait;
use activity_record_db::models::activity::ActivityRecordModel;
use activity_record_db::repository::find_by_id::FindById;
use activity_record_db::repository::find_by_id_for_update::FindByIdForUpdate;
use crate::utils::TryFromRow;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{ActivityRecordRepositoryImpl, SELECT_ACTIVITY_RECORD};

impl ActivityRecordRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ActivityRecordRepositoryImpl,
        id: i64,
        lock_row: bool,
    ) -> Result<Option<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        let query = if lock_row {
            format!("{SELECT_ACTIVITY_RECORD} WHERE id = $1 FOR UPDATE")
        } else {
            format!("{SELECT_ACTIVITY_RECORD} WHERE id = $1")
        };

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query).bind(id).fetch_optional(&mut **transaction).await?
        };

        row.map(|row| ActivityRecordModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl FindById<Postgres, ActivityRecordModel> for ActivityRecordRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id, false).await
    }
}

#[async_trait]
impl FindByIdForUpdate<Postgres, ActivityRecordModel> for ActivityRecordRepositoryImpl {
    async fn find_by_id_for_update(
        &self,
        id: i64,
    ) -> Result<Option<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_id_impl(self, id, true).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::activity::activity_record_repository::test_utils::create_test_activity_record;
    use crate::test_helper::setup_test_context;
    use activity_record_db::repository::create::Create;
    use activity_record_db::repository::find_by_id::FindById;
    use activity_record_db::repository::find_by_id_for_update::FindByIdForUpdate;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL database"]
    async fn test_find_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_record_repo = &ctx.activity_repos().activity_record_repository;

        let saved = activity_record_repo.create(create_test_activity_record("EMP001")).await?;

        let loaded = activity_record_repo.find_by_id(saved.id).await?;
        assert_eq!(loaded, Some(saved.clone()));

        let locked = activity_record_repo.find_by_id_for_update(saved.id).await?;
        assert_eq!(locked, Some(saved));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL database"]
    async fn test_find_by_id_non_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_record_repo = &ctx.activity_repos().activity_record_repository;

        assert!(activity_record_repo.find_by_id(i64::MAX).await?.is_none());
        assert!(activity_record_repo.find_by_id_for_update(i64::MAX).await?.is_none());

        Ok(())
    }
}
