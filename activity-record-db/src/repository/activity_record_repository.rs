use sqlx::Database;

use crate::models::activity::{ActivityRecordModel, NewActivityRecordModel};
use crate::repository::{
    Create, DeleteById, ExistByActivityCodeAndOwner, ExistById, FindAll, FindById,
    FindByIdForUpdate, FindByOwnerCode, FindByPredicates, Update,
};

/// Every store operation the activity record service relies on.
///
/// Implemented automatically for any type that implements the individual
/// repository traits for [`ActivityRecordModel`].
pub trait ActivityRecordRepository<DB: Database>:
    Create<DB, NewActivityRecordModel, ActivityRecordModel>
    + FindById<DB, ActivityRecordModel>
    + FindByIdForUpdate<DB, ActivityRecordModel>
    + ExistById<DB>
    + Update<DB, ActivityRecordModel>
    + DeleteById<DB>
    + FindAll<DB, ActivityRecordModel>
    + FindByOwnerCode<DB, ActivityRecordModel>
    + FindByPredicates<DB, ActivityRecordModel>
    + ExistByActivityCodeAndOwner<DB>
{
}

impl<DB, R> ActivityRecordRepository<DB> for R
where
    DB: Database,
    R: Create<DB, NewActivityRecordModel, ActivityRecordModel>
        + FindById<DB, ActivityRecordModel>
        + FindByIdForUpdate<DB, ActivityRecordModel>
        + ExistById<DB>
        + Update<DB, ActivityRecordModel>
        + DeleteById<DB>
        + FindAll<DB, ActivityRecordModel>
        + FindByOwnerCode<DB, ActivityRecordModel>
        + FindByPredicates<DB, ActivityRecordModel>
        + ExistByActivityCodeAndOwner<DB>,
{
}
