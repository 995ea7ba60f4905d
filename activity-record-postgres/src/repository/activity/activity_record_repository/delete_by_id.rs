use async_trait::async_trait;
use activity_record_db::repository::delete_by_id::DeleteById;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityRecordRepositoryImpl;

impl ActivityRecordRepositoryImpl {
    pub(super) async fn delete_by_id_impl(
        repo: &ActivityRecordRepositoryImpl,
        id: i64,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let delete_query = r#"DELETE FROM activity_record WHERE id = $1"#;

        let rows_affected = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let result = sqlx::query(delete_query).bind(id).execute(&mut **transaction).await?;
            result.rows_affected() as usize
        };

        Ok(rows_affected)
    }
}

#[async_trait]
impl DeleteById<Postgres> for ActivityRecordRepositoryImpl {
    async fn delete_by_id(&self, id: i64) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::activity::activity_record_repository::test_utils::create_test_activity_record;
    use crate::test_helper::setup_test_context;
    use activity_record_db::repository::create::Create;
    use activity_record_db::repository::delete_by_id::DeleteById;
    use activity_record_db::repository::exist_by_id::ExistById;

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL database"]
    async fn test_delete_by_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_record_repo = &ctx.activity_repos().activity_record_repository;

        let saved = activity_record_repo.create(create_test_activity_record("EMP001")).await?;

        assert_eq!(activity_record_repo.delete_by_id(saved.id).await?, 1);
        assert!(!activity_record_repo.exist_by_id(saved.id).await?);
        assert_eq!(activity_record_repo.delete_by_id(saved.id).await?, 0);

        Ok(())
    }
}
