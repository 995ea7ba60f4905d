pub mod mapper;
pub mod memory;
pub mod models;
pub mod predicate;
pub mod repository;
pub mod service;
pub mod validation;

pub use memory::InMemoryActivityRepository;
pub use predicate::{ActivityPredicate, PredicateSet};
pub use service::ActivityRecordServiceImpl;
