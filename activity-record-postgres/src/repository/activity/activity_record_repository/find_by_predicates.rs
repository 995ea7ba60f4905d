use async_trait::async_trait;
use activity_record_db::models::activity::ActivityRecordModel;
use activity_record_db::predicate::{ActivityPredicate, PredicateSet};
use activity_record_db::repository::find_by_predicates::FindByPredicates;
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::{rows_to_models, ActivityRecordRepositoryImpl, SELECT_ACTIVITY_RECORD};

/// Render a predicate set as a parameterized SELECT. Every value is bound,
/// never interpolated.
pub(super) fn build_select_query(predicates: &PredicateSet) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new(SELECT_ACTIVITY_RECORD);

    for (position, predicate) in predicates.iter().enumerate() {
        builder.push(if position == 0 { " WHERE " } else { " AND " });
        match predicate {
            ActivityPredicate::OwnerCodeEquals(owner_code) => {
                builder.push("owner_code = ").push_bind(owner_code.clone());
            }
            ActivityPredicate::ActivityCodeEquals(activity_code) => {
                builder.push("activity_code = ").push_bind(activity_code.clone());
            }
            ActivityPredicate::DescriptionContains(fragment) => {
                // POSITION keeps '%' and '_' in the fragment literal
                builder
                    .push("POSITION(LOWER(")
                    .push_bind(fragment.clone())
                    .push(") IN LOWER(description)) > 0");
            }
            ActivityPredicate::TimestampFrom(from) => {
                builder.push("occurred_at >= ").push_bind(*from);
            }
            ActivityPredicate::TimestampUntil(until) => {
                builder.push("occurred_at <= ").push_bind(*until);
            }
        }
    }

    builder.push(" ORDER BY id");
    builder
}

impl ActivityRecordRepositoryImpl {
    pub(super) async fn find_by_predicates_impl(
        repo: &ActivityRecordRepositoryImpl,
        predicates: &PredicateSet,
    ) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = build_select_query(predicates);
        tracing::debug!(sql = builder.sql(), "Running filtered activity query");

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_all(&mut **transaction).await?
        };
        rows_to_models(rows)
    }
}

#[async_trait]
impl FindByPredicates<Postgres, ActivityRecordModel> for ActivityRecordRepositoryImpl {
    async fn find_by_predicates(
        &self,
        predicates: &PredicateSet,
    ) -> Result<Vec<ActivityRecordModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_predicates_impl(self, predicates).await
    }
}

#[cfg(test)]
mod tests {
    use super::build_select_query;
    use crate::repository::activity::activity_record_repository::test_utils::{
        create_test_activity_record_with, test_timestamp,
    };
    use crate::test_helper::setup_test_context;
    use activity_record_api::ActivityFilter;
    use activity_record_db::predicate::PredicateSet;
    use activity_record_db::repository::create::Create;
    use activity_record_db::repository::find_by_predicates::FindByPredicates;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_set_selects_everything() {
        let builder = build_select_query(&PredicateSet::default());

        assert_eq!(
            builder.sql(),
            "SELECT id, owner_code, activity_code, description, occurred_at FROM activity_record ORDER BY id"
        );
    }

    #[test]
    fn test_all_predicates_are_bound_in_order() {
        let filter = ActivityFilter {
            owner_code: Some("EMP001".to_string()),
            activity_code: Some("RUN".to_string()),
            description: Some("50%_off".to_string()),
            date_from: NaiveDate::from_ymd_opt(2025, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2025, 1, 31),
        };

        let builder = build_select_query(&PredicateSet::build(&filter));

        assert_eq!(
            builder.sql(),
            "SELECT id, owner_code, activity_code, description, occurred_at FROM activity_record \
             WHERE owner_code = $1 AND activity_code = $2 \
             AND POSITION(LOWER($3) IN LOWER(description)) > 0 \
             AND occurred_at >= $4 AND occurred_at <= $5 ORDER BY id"
        );
        assert!(!builder.sql().contains("50%_off"));
    }

    #[test]
    fn test_single_predicate_uses_where() {
        let filter = ActivityFilter {
            date_to: NaiveDate::from_ymd_opt(2025, 1, 31),
            ..ActivityFilter::default()
        };

        let builder = build_select_query(&PredicateSet::build(&filter));

        assert!(builder.sql().ends_with(" WHERE occurred_at <= $1 ORDER BY id"));
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL database"]
    async fn test_find_by_predicates() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_record_repo = &ctx.activity_repos().activity_record_repository;

        let owner_code = "OWNER-FBP";
        let morning_run = activity_record_repo
            .create(create_test_activity_record_with(
                owner_code,
                "RUN",
                "Corrida MATINAL de 5km",
                test_timestamp(2025, 12, 25, 7),
            ))
            .await?;
        let late_run = activity_record_repo
            .create(create_test_activity_record_with(
                owner_code,
                "RUN",
                "Corrida noturna",
                test_timestamp(2025, 12, 31, 23),
            ))
            .await?;
        activity_record_repo
            .create(create_test_activity_record_with(
                owner_code,
                "SWIM",
                "Natação matinal",
                test_timestamp(2025, 12, 26, 8),
            ))
            .await?;

        let by_description = ActivityFilter {
            owner_code: Some(owner_code.to_string()),
            activity_code: Some("RUN".to_string()),
            description: Some("matinal".to_string()),
            ..ActivityFilter::default()
        };
        let found = activity_record_repo
            .find_by_predicates(&PredicateSet::build(&by_description))
            .await?;
        assert_eq!(found, vec![morning_run.clone()]);

        // date_to covers the whole last day
        let by_dates = ActivityFilter {
            owner_code: Some(owner_code.to_string()),
            activity_code: Some("RUN".to_string()),
            date_from: NaiveDate::from_ymd_opt(2025, 12, 25),
            date_to: NaiveDate::from_ymd_opt(2025, 12, 31),
            ..ActivityFilter::default()
        };
        let found = activity_record_repo
            .find_by_predicates(&PredicateSet::build(&by_dates))
            .await?;
        assert_eq!(found, vec![morning_run, late_run]);

        Ok(())
    }
}
