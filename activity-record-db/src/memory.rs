//! In-memory record store
//!
//! Implements every activity repository trait over a `BTreeMap`, for any
//! `sqlx::Database` marker type. Write calls are counted so callers can
//! assert that rejected operations never reached the store.

use std::collections::BTreeMap;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sqlx::Database;
use tokio::sync::RwLock;

use crate::models::activity::{ActivityRecordModel, NewActivityRecordModel};
use crate::models::identifiable::Identifiable;
use crate::predicate::PredicateSet;
use crate::repository::{
    Create, DeleteById, ExistByActivityCodeAndOwner, ExistById, FindAll, FindById,
    FindByIdForUpdate, FindByOwnerCode, FindByPredicates, Update,
};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, ActivityRecordModel>,
    last_id: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    table: RwLock<Table>,
    unavailable: bool,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, as if the backend were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Total number of mutating calls received.
    pub fn write_calls(&self) -> usize {
        self.create_calls() + self.update_calls() + self.delete_calls()
    }

    fn ensure_available(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.unavailable {
            return Err("activity store is unavailable".into());
        }
        Ok(())
    }

    async fn scan<F>(&self, keep: F) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>>
    where
        F: Fn(&ActivityRecordModel) -> bool + Send,
    {
        self.ensure_available()?;
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|r| keep(r)).cloned().collect())
    }
}

#[async_trait]
impl<DB: Database> Create<DB, NewActivityRecordModel, ActivityRecordModel> for InMemoryActivityRepository {
    async fn create(
        &self,
        item: NewActivityRecordModel,
    ) -> Result<ActivityRecordModel, Box<dyn Error + Send + Sync>> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        let record = item.into_record(table.last_id);
        table.rows.insert(record.get_id(), record.clone());
        Ok(record)
    }
}

#[async_trait]
impl<DB: Database> FindById<DB, ActivityRecordModel> for InMemoryActivityRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }
}

#[async_trait]
impl<DB: Database> FindByIdForUpdate<DB, ActivityRecordModel> for InMemoryActivityRepository {
    async fn find_by_id_for_update(
        &self,
        id: i64,
    ) -> Result<Option<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }
}

#[async_trait]
impl<DB: Database> ExistById<DB> for InMemoryActivityRepository {
    async fn exist_by_id(&self, id: i64) -> Result<bool, Box<dyn Error + Send + Sync>> {
        self.ensure_available()?;
        Ok(self.table.read().await.rows.contains_key(&id))
    }
}

#[async_trait]
impl<DB: Database> Update<DB, ActivityRecordModel> for InMemoryActivityRepository {
    async fn update(
        &self,
        item: ActivityRecordModel,
    ) -> Result<ActivityRecordModel, Box<dyn Error + Send + Sync>> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;

        let mut table = self.table.write().await;
        match table.rows.get_mut(&item.get_id()) {
            Some(row) => {
                *row = item.clone();
                Ok(item)
            }
            None => Err(format!("No activity row updated for id {}", item.get_id()).into()),
        }
    }
}

#[async_trait]
impl<DB: Database> DeleteById<DB> for InMemoryActivityRepository {
    async fn delete_by_id(&self, id: i64) -> Result<usize, Box<dyn Error + Send + Sync>> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_available()?;

        let removed = self.table.write().await.rows.remove(&id);
        Ok(usize::from(removed.is_some()))
    }
}

#[async_trait]
impl<DB: Database> FindAll<DB, ActivityRecordModel> for InMemoryActivityRepository {
    async fn find_all(&self) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        self.scan(|_| true).await
    }
}

#[async_trait]
impl<DB: Database> FindByOwnerCode<DB, ActivityRecordModel> for InMemoryActivityRepository {
    async fn find_by_owner_code(
        &self,
        owner_code: &str,
    ) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        self.scan(|r| r.owner_code == owner_code).await
    }
}

#[async_trait]
impl<DB: Database> FindByPredicates<DB, ActivityRecordModel> for InMemoryActivityRepository {
    async fn find_by_predicates(
        &self,
        predicates: &PredicateSet,
    ) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        self.scan(|r| predicates.matches(r)).await
    }
}

#[async_trait]
impl<DB: Database> ExistByActivityCodeAndOwner<DB> for InMemoryActivityRepository {
    async fn exist_by_activity_code_and_owner(
        &self,
        activity_code: &str,
        owner_code: &str,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let found = self
            .scan(|r| r.activity_code == activity_code && r.owner_code == owner_code)
            .await?;
        Ok(!found.is_empty())
    }
}
