//! Thresholded group-by over standard job role titles
//!
//! Groups matching facts by role title and suppresses any group whose
//! record count falls below the caller-supplied minimum. The floor is a
//! privacy and statistical-significance guarantee: role groups too small
//! to aggregate meaningfully are never surfaced, regardless of who asks.
//!
//! Output ordering is by title, so results are stable across runs.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RepositoryError;
use crate::repository::DimensionCatalog;
use crate::types::{FactRecord, JobId, Money};

/// Aggregate for one standard job role title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGroup {
    /// Standard job role title
    pub role_title: String,

    /// Average salary across the group, rounded to 2 decimal places
    pub avg_salary: Money,

    /// Number of matching records in the group
    pub count: u64,
}

/// Group facts by role title and drop groups below `min_count`
///
/// Distinct jobs sharing a title merge into one group. Facts referencing a
/// job the catalog cannot label are skipped with a warning; a dangling
/// reference is a data-quality problem, not a reason to fail the query.
pub fn ranked_roles<C: DimensionCatalog + ?Sized>(
    catalog: &C,
    facts: &[FactRecord],
    min_count: u64,
) -> Result<Vec<RankedGroup>, RepositoryError> {
    let mut by_job: HashMap<JobId, (Money, u64)> = HashMap::new();
    for fact in facts {
        let entry = by_job.entry(fact.job_id).or_insert((Money::ZERO, 0));
        entry.0 += fact.amount;
        entry.1 += 1;
    }

    let mut by_title: BTreeMap<String, (Money, u64)> = BTreeMap::new();
    for (job_id, (sum, count)) in by_job {
        match catalog.role_title(job_id)? {
            Some(title) => {
                let entry = by_title.entry(title).or_insert((Money::ZERO, 0));
                entry.0 += sum;
                entry.1 += count;
            }
            None => {
                warn!(job_id, "fact references a job with no role title; skipping");
            }
        }
    }

    Ok(by_title
        .into_iter()
        .filter(|&(_, (_, count))| count >= min_count)
        .map(|(role_title, (sum, count))| RankedGroup {
            role_title,
            avg_salary: (sum / Money::from(count)).round_dp(2),
            count,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCatalog;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn fact(job_id: JobId, amount: i64) -> FactRecord {
        FactRecord::new(0, date(), 1, 1, job_id, 1, Money::from(amount))
    }

    fn catalog() -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_industry(10, "Software");
        catalog.add_job(100, "Backend Engineer", "Senior", 10);
        catalog.add_job(101, "Backend Engineer", "Junior", 10);
        catalog.add_job(102, "Designer", "Senior", 10);
        catalog
    }

    #[test]
    fn test_threshold_suppresses_small_groups() {
        // 12 engineer facts, 8 designer facts, floor 10
        let mut facts = Vec::new();
        for _ in 0..12 {
            facts.push(fact(100, 3000));
        }
        for _ in 0..8 {
            facts.push(fact(102, 2000));
        }

        let groups = ranked_roles(&catalog(), &facts, 10).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].role_title, "Backend Engineer");
        assert_eq!(groups[0].count, 12);
    }

    #[test]
    fn test_jobs_sharing_a_title_merge() {
        let facts = vec![fact(100, 4000), fact(101, 2000)];
        let groups = ranked_roles(&catalog(), &facts, 1).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].avg_salary, Money::from(3000));
    }

    #[test]
    fn test_groups_ordered_by_title() {
        let facts = vec![fact(102, 1000), fact(100, 2000)];
        let groups = ranked_roles(&catalog(), &facts, 1).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].role_title, "Backend Engineer");
        assert_eq!(groups[1].role_title, "Designer");
    }

    #[test]
    fn test_dangling_job_reference_is_skipped() {
        let facts = vec![fact(999, 1000), fact(100, 2000)];
        let groups = ranked_roles(&catalog(), &facts, 1).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].role_title, "Backend Engineer");
    }

    #[test]
    fn test_no_facts_no_groups() {
        let groups = ranked_roles(&catalog(), &[], 10).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_average_rounding() {
        // (1000 + 1001 + 1001) / 3 = 1000.666... -> 1000.67
        let facts = vec![fact(100, 1000), fact(100, 1001), fact(100, 1001)];
        let groups = ranked_roles(&catalog(), &facts, 1).unwrap();
        assert_eq!(groups[0].avg_salary.to_string(), "1000.67");
    }
}
