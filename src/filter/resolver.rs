//! Resolution of name-based filters to dimension-ID filters
//!
//! Resolution runs as an ordered sequence of independent, short-circuiting
//! steps:
//!
//! 1. **Location**: any of district/oblast/city present → look up matching
//!    location IDs; an empty set terminates resolution with
//!    [`Resolution::NoMatch`]
//! 2. **Industry**: industry name present → look up its ID; an absent row
//!    terminates with `NoMatch`. The resolved ID is consumed by the job
//!    step only and never appears in the final filter
//! 3. **Job**: any of role title / level name / resolved industry present
//!    → look up matching job IDs; an empty set terminates with `NoMatch`
//! 4. **Dates**: passed through unchanged (already typed, nothing to
//!    resolve)
//!
//! Resolving a nonexistent name to an empty ID set and letting it reach the
//! fact scan would be indistinguishable from "unconstrained" at the scan
//! boundary. The tagged [`Resolution`] type makes the zero-match case a
//! terminal state the caller must branch on.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::filter::request::SalaryFilterRequest;
use crate::repository::DimensionCatalog;
use crate::types::{DateRange, FactRecord, JobId, LocationId};

/// A filter expressed entirely in dimension IDs and date bounds
///
/// Ready for direct use against the fact table. A `None` ID set means the
/// dimension is unconstrained; the resolver never produces a `Some` set
/// that is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFilter {
    /// Location constraint, or `None` for unconstrained
    pub location_ids: Option<HashSet<LocationId>>,

    /// Job constraint, or `None` for unconstrained
    pub job_ids: Option<HashSet<JobId>>,

    /// Observation-date window
    pub dates: DateRange,
}

impl ResolvedFilter {
    /// A filter that matches every fact row
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Check whether a fact row satisfies this filter
    pub fn matches(&self, fact: &FactRecord) -> bool {
        if let Some(ref locations) = self.location_ids {
            if !locations.contains(&fact.location_id) {
                return false;
            }
        }
        if let Some(ref jobs) = self.job_ids {
            if !jobs.contains(&fact.job_id) {
                return false;
            }
        }
        self.dates.contains(fact.date)
    }
}

/// Outcome of filter resolution
///
/// "A specified name matched zero dimension rows" is a valid, expected
/// outcome, not an error, and is deliberately a distinct variant so it
/// cannot be confused with an unconstrained filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Every specified name resolved; the filter is usable against facts
    Resolved(ResolvedFilter),

    /// A specified name matched no dimension row; the analytical result is
    /// definitively empty and no fact scan should be issued
    NoMatch,
}

impl Resolution {
    /// True for the `NoMatch` variant
    pub fn is_no_match(&self) -> bool {
        matches!(self, Resolution::NoMatch)
    }
}

/// Deterministic mapper from name-based requests to ID-based filters
///
/// Holds only a shared handle to the dimension catalog; resolution is
/// read-only and stateless, so one resolver serves concurrent requests.
pub struct FilterResolver<C: DimensionCatalog> {
    catalog: Arc<C>,
}

impl<C: DimensionCatalog> FilterResolver<C> {
    /// Create a resolver over a dimension catalog
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Resolve a name-based request
    ///
    /// Returns [`Resolution::NoMatch`] when any specified name fails to
    /// match a dimension row. Collaborator failures propagate unchanged.
    pub fn resolve(&self, request: &SalaryFilterRequest) -> Result<Resolution> {
        // Step 1: location names -> location IDs
        let location_ids = if request.has_location_criteria() {
            let query = request.location_query();
            let ids = self.catalog.location_ids(&query)?;
            if ids.is_empty() {
                debug!(?query, "location criteria matched no dimension rows");
                return Ok(Resolution::NoMatch);
            }
            Some(ids)
        } else {
            None
        };

        // Step 2: industry name -> industry ID, consumed by step 3 only
        let industry_id = match request.industry_name.as_deref() {
            Some(name) => match self.catalog.industry_id_by_name(name)? {
                Some(id) => Some(id),
                None => {
                    debug!(industry = name, "industry name matched no dimension row");
                    return Ok(Resolution::NoMatch);
                }
            },
            None => None,
        };

        // Step 3: job criteria -> job IDs
        let job_query = request.job_query(industry_id);
        let job_ids = if job_query.is_empty() {
            None
        } else {
            let ids = self.catalog.job_ids(&job_query)?;
            if ids.is_empty() {
                debug!(?job_query, "job criteria matched no dimension rows");
                return Ok(Resolution::NoMatch);
            }
            Some(ids)
        };

        // Step 4: date bounds pass through unchanged
        Ok(Resolution::Resolved(ResolvedFilter {
            location_ids,
            job_ids,
            dates: request.dates,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCatalog;
    use crate::types::Money;
    use chrono::NaiveDate;

    fn catalog() -> Arc<InMemoryCatalog> {
        let mut catalog = InMemoryCatalog::new();
        catalog.add_location(1, "Pecherskyi", "Kyiv Oblast", "Kyiv");
        catalog.add_location(2, "Shevchenkivskyi", "Kyiv Oblast", "Kyiv");
        catalog.add_location(3, "Halytskyi", "Lviv Oblast", "Lviv");
        catalog.add_industry(10, "Software");
        catalog.add_job(100, "Backend Engineer", "Senior", 10);
        catalog.add_job(101, "Backend Engineer", "Junior", 10);
        catalog.add_job(102, "Designer", "Senior", 10);
        Arc::new(catalog)
    }

    #[test]
    fn test_unconstrained_request_resolves_to_unconstrained_filter() {
        let resolver = FilterResolver::new(catalog());
        let resolution = resolver.resolve(&SalaryFilterRequest::unfiltered()).unwrap();

        match resolution {
            Resolution::Resolved(filter) => {
                assert!(filter.location_ids.is_none());
                assert!(filter.job_ids.is_none());
                assert!(filter.dates.is_unbounded());
            }
            Resolution::NoMatch => panic!("unfiltered request must resolve"),
        }
    }

    #[test]
    fn test_city_resolves_to_location_set() {
        let resolver = FilterResolver::new(catalog());
        let request = SalaryFilterRequest::builder().city("Kyiv").build().unwrap();

        match resolver.resolve(&request).unwrap() {
            Resolution::Resolved(filter) => {
                assert_eq!(filter.location_ids, Some(HashSet::from([1, 2])));
                assert!(filter.job_ids.is_none());
            }
            Resolution::NoMatch => panic!("Kyiv exists"),
        }
    }

    #[test]
    fn test_unknown_city_short_circuits() {
        let resolver = FilterResolver::new(catalog());
        let request = SalaryFilterRequest::builder()
            .city("Atlantis")
            .role_title("Backend Engineer")
            .build()
            .unwrap();

        assert!(resolver.resolve(&request).unwrap().is_no_match());
    }

    #[test]
    fn test_unknown_industry_short_circuits() {
        let resolver = FilterResolver::new(catalog());
        let request = SalaryFilterRequest::builder()
            .industry("Alchemy")
            .build()
            .unwrap();

        assert!(resolver.resolve(&request).unwrap().is_no_match());
    }

    #[test]
    fn test_industry_feeds_job_resolution() {
        let resolver = FilterResolver::new(catalog());
        let request = SalaryFilterRequest::builder()
            .industry("Software")
            .build()
            .unwrap();

        match resolver.resolve(&request).unwrap() {
            Resolution::Resolved(filter) => {
                // Industry alone constrains jobs, not a dimension of its own
                assert_eq!(filter.job_ids, Some(HashSet::from([100, 101, 102])));
                assert!(filter.location_ids.is_none());
            }
            Resolution::NoMatch => panic!("Software industry has jobs"),
        }
    }

    #[test]
    fn test_title_level_combination() {
        let resolver = FilterResolver::new(catalog());
        let request = SalaryFilterRequest::builder()
            .role_title("Backend Engineer")
            .level("Junior")
            .build()
            .unwrap();

        match resolver.resolve(&request).unwrap() {
            Resolution::Resolved(filter) => {
                assert_eq!(filter.job_ids, Some(HashSet::from([101])));
            }
            Resolution::NoMatch => panic!("junior backend exists"),
        }
    }

    #[test]
    fn test_impossible_job_combination_short_circuits() {
        let resolver = FilterResolver::new(catalog());
        let request = SalaryFilterRequest::builder()
            .role_title("Designer")
            .level("Junior")
            .build()
            .unwrap();

        assert!(resolver.resolve(&request).unwrap().is_no_match());
    }

    #[test]
    fn test_dates_pass_through() {
        let resolver = FilterResolver::new(catalog());
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let request = SalaryFilterRequest::builder()
            .date_start(start)
            .build()
            .unwrap();

        match resolver.resolve(&request).unwrap() {
            Resolution::Resolved(filter) => {
                assert_eq!(filter.dates.start, Some(start));
                assert_eq!(filter.dates.end, None);
            }
            Resolution::NoMatch => panic!("date-only request must resolve"),
        }
    }

    #[test]
    fn test_resolved_filter_matches_facts() {
        let filter = ResolvedFilter {
            location_ids: Some(HashSet::from([1])),
            job_ids: None,
            dates: DateRange::unbounded(),
        };
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let inside = FactRecord::new(1, date, 1, 1, 100, 1, Money::from(1000));
        let outside = FactRecord::new(2, date, 3, 1, 100, 1, Money::from(1000));

        assert!(filter.matches(&inside));
        assert!(!filter.matches(&outside));
    }
}
