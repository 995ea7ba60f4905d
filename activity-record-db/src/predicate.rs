//! Filter predicate builder
//!
//! Translates a partially populated [`ActivityFilter`] into an ordered
//! conjunction of predicates. Store implementations either render the set
//! into their query language or evaluate it row by row with
//! [`PredicateSet::matches`].

use activity_record_api::ActivityFilter;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::activity::ActivityRecordModel;

/// Last second of a day, the inclusive upper bound of a `date_to` filter.
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// A single match condition on an activity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityPredicate {
    /// `owner_code = value` (case-sensitive)
    OwnerCodeEquals(String),
    /// `activity_code = value` (case-sensitive)
    ActivityCodeEquals(String),
    /// `description` contains `value`, ignoring case
    DescriptionContains(String),
    /// `timestamp >= value`
    TimestampFrom(NaiveDateTime),
    /// `timestamp <= value`
    TimestampUntil(NaiveDateTime),
}

impl ActivityPredicate {
    pub fn matches(&self, record: &ActivityRecordModel) -> bool {
        match self {
            ActivityPredicate::OwnerCodeEquals(owner_code) => record.owner_code == *owner_code,
            ActivityPredicate::ActivityCodeEquals(activity_code) => {
                record.activity_code == *activity_code
            }
            ActivityPredicate::DescriptionContains(fragment) => record
                .description
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
            ActivityPredicate::TimestampFrom(from) => record.timestamp >= *from,
            ActivityPredicate::TimestampUntil(until) => record.timestamp <= *until,
        }
    }
}

/// Conjunction of predicates. An empty set matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    predicates: Vec<ActivityPredicate>,
}

impl PredicateSet {
    /// Build the predicates for every populated filter field.
    ///
    /// Order is fixed: owner code, activity code, description, date from,
    /// date to. Empty strings count as absent.
    pub fn build(filter: &ActivityFilter) -> Self {
        let clauses = [
            non_empty(&filter.owner_code).map(|v| ActivityPredicate::OwnerCodeEquals(v.to_owned())),
            non_empty(&filter.activity_code)
                .map(|v| ActivityPredicate::ActivityCodeEquals(v.to_owned())),
            non_empty(&filter.description)
                .map(|v| ActivityPredicate::DescriptionContains(v.to_owned())),
            filter.date_from.map(|d| ActivityPredicate::TimestampFrom(start_of_day(d))),
            filter.date_to.map(|d| ActivityPredicate::TimestampUntil(end_of_day(d))),
        ];

        Self {
            predicates: clauses.into_iter().flatten().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActivityPredicate> {
        self.predicates.iter()
    }

    pub fn matches(&self, record: &ActivityRecordModel) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(record))
    }
}

impl<'a> IntoIterator for &'a PredicateSet {
    type Item = &'a ActivityPredicate;
    type IntoIter = std::slice::Iter<'a, ActivityPredicate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(END_OF_DAY)
}
