pub mod create;
pub mod find_by_id;
pub mod find_by_id_for_update;
pub mod exist_by_id;
pub mod update;
pub mod delete_by_id;
pub mod find_all;
pub mod find_by_owner_code;
pub mod find_by_predicates;
pub mod exist_by_activity_code_and_owner;
pub mod activity_record_repository;

// Re-exports
pub use create::*;
pub use find_by_id::*;
pub use find_by_id_for_update::*;
pub use exist_by_id::*;
pub use update::*;
pub use delete_by_id::*;
pub use find_all::*;
pub use find_by_owner_code::*;
pub use find_by_predicates::*;
pub use exist_by_activity_code_and_owner::*;
pub use activity_record_repository::*;
