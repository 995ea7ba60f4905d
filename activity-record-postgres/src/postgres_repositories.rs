use postgres_unit_of_work::Executor;
use sqlx::{PgPool, Postgres};
use std::error::Error;
use std::sync::Arc;

use activity_record_db::ActivityRecordServiceImpl;

use crate::repository::activity::ActivityRecordRepositoryImpl;

pub type PostgresActivityRecordService = ActivityRecordServiceImpl<Postgres, ActivityRecordRepositoryImpl>;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create all activity repositories sharing a single transaction
    pub async fn create_activity_repositories(
        &self,
    ) -> Result<ActivityRepositories, Box<dyn Error + Send + Sync>> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);
        tracing::debug!("Started activity unit of work");

        let activity_record_repository = Arc::new(ActivityRecordRepositoryImpl::new(executor.clone()));

        Ok(ActivityRepositories {
            executor,
            activity_record_repository,
        })
    }
}

pub struct ActivityRepositories {
    pub executor: Executor,
    pub activity_record_repository: Arc<ActivityRecordRepositoryImpl>,
}

impl ActivityRepositories {
    /// Service bound to this unit of work's transaction.
    pub fn service(&self) -> PostgresActivityRecordService {
        ActivityRecordServiceImpl::new(self.activity_record_repository.clone())
    }

    /// Commit the shared transaction. The executor is unusable afterwards.
    pub async fn commit(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self.executor.tx.lock().await.take();
        let tx = tx.ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        tracing::debug!("Committed activity unit of work");
        Ok(())
    }

    /// Roll back the shared transaction. The executor is unusable afterwards.
    pub async fn rollback(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = self.executor.tx.lock().await.take();
        let tx = tx.ok_or("Transaction has been consumed")?;
        tx.rollback().await?;
        tracing::debug!("Rolled back activity unit of work");
        Ok(())
    }
}
