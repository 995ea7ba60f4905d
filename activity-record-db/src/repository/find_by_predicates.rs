use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;
use crate::predicate::PredicateSet;

/// Repository trait for scanning entities with a conjunction of predicates
///
/// An empty [`PredicateSet`] matches every row. Results are ordered by
/// identifier.
///
/// # Example
/// ```ignore
/// let predicates = PredicateSet::build(&ActivityFilter::by_owner_code("EMP001"));
/// let records = repo.find_by_predicates(&predicates).await?;
/// ```
#[async_trait]
pub trait FindByPredicates<DB: Database, T: Identifiable>: Send + Sync {
    async fn find_by_predicates(
        &self,
        predicates: &PredicateSet,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
