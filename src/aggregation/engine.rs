//! The analytics façade
//!
//! [`SalaryAnalytics`] owns the filter resolver and the fact-scan
//! collaborator and exposes the four analytical operations. Every operation
//! follows the same two-phase flow:
//!
//! 1. resolve the name-based request; a `NoMatch` outcome returns the
//!    operation's zero/empty shape immediately, without a fact scan
//! 2. scan the fact table once with the resolved filter and aggregate
//!
//! The engine holds no per-request state and no locks; one instance serves
//! concurrent callers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::aggregation::distribution::{equal_width_buckets, DistributionBucket};
use crate::aggregation::ranking::{ranked_roles, RankedGroup};
use crate::aggregation::stats::{summarize, SalaryStats};
use crate::aggregation::timeseries::{build_series, Granularity, TimeSeriesPoint};
use crate::config::AnalyticsConfig;
use crate::error::{Error, Result};
use crate::filter::{FilterResolver, Resolution, SalaryFilterRequest};
use crate::repository::{DimensionCatalog, FactScan};

/// Salary analytics engine over a dimension catalog and a fact scan
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use zarplata::aggregation::SalaryAnalytics;
/// use zarplata::filter::SalaryFilterRequest;
/// use zarplata::repository::{InMemoryCatalog, InMemoryFacts};
///
/// let catalog = Arc::new(InMemoryCatalog::new());
/// let facts = InMemoryFacts::new();
/// let analytics = SalaryAnalytics::new(catalog, facts);
///
/// let stats = analytics
///     .summary(&SalaryFilterRequest::unfiltered(), 90.0)
///     .unwrap();
/// assert_eq!(stats.count, 0);
/// ```
pub struct SalaryAnalytics<C: DimensionCatalog, F: FactScan> {
    resolver: FilterResolver<C>,
    catalog: Arc<C>,
    facts: F,
    config: AnalyticsConfig,
}

impl<C: DimensionCatalog, F: FactScan> SalaryAnalytics<C, F> {
    /// Create an engine with default configuration
    pub fn new(catalog: Arc<C>, facts: F) -> Self {
        Self {
            resolver: FilterResolver::new(catalog.clone()),
            catalog,
            facts,
            config: AnalyticsConfig::default(),
        }
    }

    /// Replace the policy configuration
    pub fn with_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    /// The active policy configuration (defaults for embedding callers)
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Summary statistics at the given percentile rank
    ///
    /// A request whose names match no dimension rows yields the zero-count
    /// neutral statistics, never an error.
    pub fn summary(&self, request: &SalaryFilterRequest, percentile: f64) -> Result<SalaryStats> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(Error::InvalidArgument(format!(
                "percentile {} is outside [0, 100]",
                percentile
            )));
        }

        let filter = match self.resolver.resolve(request)? {
            Resolution::Resolved(filter) => filter,
            Resolution::NoMatch => return Ok(SalaryStats::empty(percentile)),
        };

        let facts = self.facts.scan(&filter)?;
        debug!(matched = facts.len(), "computing summary statistics");

        let amounts = facts.into_iter().map(|fact| fact.amount).collect();
        Ok(summarize(amounts, percentile))
    }

    /// Salary distribution as equal-width histogram buckets
    ///
    /// Zero matching records (including a no-match resolution) yield an
    /// empty bucket sequence.
    pub fn distribution(
        &self,
        request: &SalaryFilterRequest,
        bucket_count: usize,
    ) -> Result<Vec<DistributionBucket>> {
        if bucket_count == 0 {
            return Err(Error::InvalidArgument(
                "bucket count must be at least 1".to_string(),
            ));
        }

        let filter = match self.resolver.resolve(request)? {
            Resolution::Resolved(filter) => filter,
            Resolution::NoMatch => return Ok(Vec::new()),
        };

        let facts = self.facts.scan(&filter)?;
        debug!(matched = facts.len(), "building salary distribution");

        let amounts: Vec<_> = facts.into_iter().map(|fact| fact.amount).collect();
        Ok(equal_width_buckets(&amounts, bucket_count))
    }

    /// Average-salary time series over the most recent complete periods
    ///
    /// Always returns exactly `periods` points, chronologically ascending;
    /// a no-match resolution yields the full-length series with every slot
    /// empty. The series anchors at the filter's date end when present,
    /// else the latest observed fact date, else the current UTC date.
    pub fn time_series(
        &self,
        request: &SalaryFilterRequest,
        granularity: Granularity,
        periods: usize,
    ) -> Result<Vec<TimeSeriesPoint>> {
        if periods == 0 || periods > self.config.max_periods {
            return Err(Error::InvalidArgument(format!(
                "period count {} is outside [1, {}]",
                periods, self.config.max_periods
            )));
        }

        let filter = match self.resolver.resolve(request)? {
            Resolution::Resolved(filter) => filter,
            Resolution::NoMatch => {
                let anchor = request.dates.end.unwrap_or_else(today);
                return Ok(build_series(&[], granularity, periods, anchor));
            }
        };

        let facts = self.facts.scan(&filter)?;
        debug!(matched = facts.len(), ?granularity, periods, "building time series");

        let anchor = filter
            .dates
            .end
            .or_else(|| facts.iter().map(|fact| fact.date).max())
            .unwrap_or_else(today);

        Ok(build_series(&facts, granularity, periods, anchor))
    }

    /// Average salary per standard role title, with a minimum-count floor
    ///
    /// Groups with fewer than `min_count` records are suppressed; a
    /// no-match resolution yields an empty list.
    pub fn ranked_roles(
        &self,
        request: &SalaryFilterRequest,
        min_count: u64,
    ) -> Result<Vec<RankedGroup>> {
        let filter = match self.resolver.resolve(request)? {
            Resolution::Resolved(filter) => filter,
            Resolution::NoMatch => return Ok(Vec::new()),
        };

        let facts = self.facts.scan(&filter)?;
        debug!(matched = facts.len(), min_count, "ranking role groups");

        Ok(ranked_roles(self.catalog.as_ref(), &facts, min_count)?)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
