pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::DatabaseConfig;
pub use postgres_repositories::{ActivityRepositories, PostgresActivityRecordService, PostgresRepositories};
pub use repository::activity::ActivityRecordRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
