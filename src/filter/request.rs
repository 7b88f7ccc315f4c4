//! Name-based filter request and builder
//!
//! Every field is optional; an absent field means "no constraint on this
//! dimension". The builder is the validation boundary for request shape:
//! a request that passed [`SalaryFilterBuilder::build`] is well-formed, and
//! the resolver and aggregation engine do not re-validate it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FilterRequestError;
use crate::repository::{JobQuery, LocationQuery};
use crate::types::DateRange;

/// Human-facing filter criteria for analytical queries
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use zarplata::filter::SalaryFilterRequest;
///
/// let request = SalaryFilterRequest::builder()
///     .oblast("Kyiv Oblast")
///     .role_title("Backend Engineer")
///     .date_start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .build()
///     .unwrap();
///
/// assert!(request.has_location_criteria());
/// assert!(request.industry_name.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryFilterRequest {
    /// Standard job role title
    pub role_title: Option<String>,

    /// Hierarchy level name (e.g. "Junior", "Senior")
    pub level_name: Option<String>,

    /// Industry field name
    pub industry_name: Option<String>,

    /// District name
    pub district_name: Option<String>,

    /// Oblast name
    pub oblast_name: Option<String>,

    /// City name
    pub city_name: Option<String>,

    /// Observation-date window
    pub dates: DateRange,
}

impl SalaryFilterRequest {
    /// Start building a request
    pub fn builder() -> SalaryFilterBuilder {
        SalaryFilterBuilder::default()
    }

    /// A request with no criteria at all, matching every fact
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// True when any of district/oblast/city is specified
    pub fn has_location_criteria(&self) -> bool {
        self.district_name.is_some() || self.oblast_name.is_some() || self.city_name.is_some()
    }

    /// The location lookup this request implies
    pub fn location_query(&self) -> LocationQuery {
        LocationQuery {
            district: self.district_name.clone(),
            oblast: self.oblast_name.clone(),
            city: self.city_name.clone(),
        }
    }

    /// The job lookup this request implies, given the already-resolved
    /// industry constraint (if any)
    pub fn job_query(&self, industry_id: Option<crate::types::IndustryId>) -> JobQuery {
        JobQuery {
            role_title: self.role_title.clone(),
            level_name: self.level_name.clone(),
            industry_id,
        }
    }
}

/// Builder for [`SalaryFilterRequest`]
///
/// `build()` validates the date window; every other field is free-form by
/// design (unknown names are a valid query and resolve to "no match", not
/// an error).
#[derive(Debug, Default)]
pub struct SalaryFilterBuilder {
    role_title: Option<String>,
    level_name: Option<String>,
    industry_name: Option<String>,
    district_name: Option<String>,
    oblast_name: Option<String>,
    city_name: Option<String>,
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
}

impl SalaryFilterBuilder {
    /// Constrain to a standard job role title
    pub fn role_title(mut self, title: &str) -> Self {
        self.role_title = Some(title.to_string());
        self
    }

    /// Constrain to a hierarchy level name
    pub fn level(mut self, level: &str) -> Self {
        self.level_name = Some(level.to_string());
        self
    }

    /// Constrain to an industry field name
    pub fn industry(mut self, industry: &str) -> Self {
        self.industry_name = Some(industry.to_string());
        self
    }

    /// Constrain to a district name
    pub fn district(mut self, district: &str) -> Self {
        self.district_name = Some(district.to_string());
        self
    }

    /// Constrain to an oblast name
    pub fn oblast(mut self, oblast: &str) -> Self {
        self.oblast_name = Some(oblast.to_string());
        self
    }

    /// Constrain to a city name
    pub fn city(mut self, city: &str) -> Self {
        self.city_name = Some(city.to_string());
        self
    }

    /// Inclusive lower bound on observation date
    pub fn date_start(mut self, start: NaiveDate) -> Self {
        self.date_start = Some(start);
        self
    }

    /// Inclusive upper bound on observation date
    pub fn date_end(mut self, end: NaiveDate) -> Self {
        self.date_end = Some(end);
        self
    }

    /// Build the request, validating the date window
    pub fn build(self) -> Result<SalaryFilterRequest, FilterRequestError> {
        let dates = DateRange::new(self.date_start, self.date_end)?;

        Ok(SalaryFilterRequest {
            role_title: self.role_title,
            level_name: self.level_name,
            industry_name: self.industry_name,
            district_name: self.district_name,
            oblast_name: self.oblast_name,
            city_name: self.city_name,
            dates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_builder_full_request() {
        let request = SalaryFilterRequest::builder()
            .city("Kyiv")
            .oblast("Kyiv Oblast")
            .district("Pecherskyi")
            .industry("Software")
            .role_title("Backend Engineer")
            .level("Senior")
            .date_start(d(2024, 1, 1))
            .date_end(d(2024, 12, 31))
            .build()
            .unwrap();

        assert!(request.has_location_criteria());
        assert_eq!(request.role_title.as_deref(), Some("Backend Engineer"));
        assert_eq!(request.dates.start, Some(d(2024, 1, 1)));
    }

    #[test]
    fn test_builder_rejects_inverted_dates() {
        let result = SalaryFilterRequest::builder()
            .date_start(d(2024, 12, 31))
            .date_end(d(2024, 1, 1))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_unfiltered_request_has_no_criteria() {
        let request = SalaryFilterRequest::unfiltered();
        assert!(!request.has_location_criteria());
        assert!(request.job_query(None).is_empty());
        assert!(request.dates.is_unbounded());
    }

    #[test]
    fn test_location_query_carries_partial_combination() {
        let request = SalaryFilterRequest::builder()
            .oblast("Lviv Oblast")
            .build()
            .unwrap();
        let query = request.location_query();
        assert_eq!(query.oblast.as_deref(), Some("Lviv Oblast"));
        assert!(query.district.is_none());
        assert!(query.city.is_none());
    }

    #[test]
    fn test_job_query_includes_resolved_industry() {
        let request = SalaryFilterRequest::builder()
            .role_title("Accountant")
            .build()
            .unwrap();
        let query = request.job_query(Some(11));
        assert_eq!(query.role_title.as_deref(), Some("Accountant"));
        assert_eq!(query.industry_id, Some(11));
    }
}
