pub mod repo_impl;
pub mod create;
pub mod find_by_id;
pub mod exist_by_id;
pub mod update;
pub mod delete_by_id;
pub mod find_all;
pub mod find_by_owner_code;
pub mod find_by_predicates;
pub mod exist_by_activity_code_and_owner;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ActivityRecordRepositoryImpl;
