pub mod activity_record_repository;

pub use activity_record_repository::ActivityRecordRepositoryImpl;
