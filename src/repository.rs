//! Read-only storage collaborators
//!
//! The core consumes the surrounding warehouse through two narrow traits:
//!
//! - [`DimensionCatalog`] answers "which dimension IDs match these names"
//! - [`FactScan`] answers "which fact rows match this resolved filter"
//!
//! Both are synchronous from the caller's perspective; implementations may
//! block on I/O. In-memory reference implementations live alongside the
//! traits and back the test suite, and are usable by embedders that want a
//! self-contained engine.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::error::RepositoryError;
use crate::filter::ResolvedFilter;
use crate::types::{FactRecord, IndustryId, JobId, LocationId};

// ============================================================================
// Lookup Parameter Objects
// ============================================================================

/// Name criteria for a location lookup
///
/// Any combination of fields may be present; absent fields do not constrain
/// the lookup. An all-`None` query is never issued by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationQuery {
    /// District name, exact match
    pub district: Option<String>,

    /// Oblast name, exact match
    pub oblast: Option<String>,

    /// City name, exact match
    pub city: Option<String>,
}

impl LocationQuery {
    /// True when no field constrains the lookup
    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.oblast.is_none() && self.city.is_none()
    }
}

/// Criteria for a job lookup
///
/// Role title and level name arrive as names from the filter request; the
/// industry constraint arrives already resolved to an ID by the industry
/// resolution step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    /// Standard job role title, exact match
    pub role_title: Option<String>,

    /// Hierarchy level name, exact match
    pub level_name: Option<String>,

    /// Industry constraint, pre-resolved
    pub industry_id: Option<IndustryId>,
}

impl JobQuery {
    /// True when no field constrains the lookup
    pub fn is_empty(&self) -> bool {
        self.role_title.is_none() && self.level_name.is_none() && self.industry_id.is_none()
    }
}

// ============================================================================
// Collaborator Traits
// ============================================================================

/// Name-to-ID lookups against the dimension tables
///
/// All lookups are exact-match and read-only. An empty result set is a
/// valid answer, not an error; errors are reserved for infrastructure
/// failures.
pub trait DimensionCatalog: Send + Sync {
    /// IDs of locations matching the given name combination
    fn location_ids(&self, query: &LocationQuery) -> Result<HashSet<LocationId>, RepositoryError>;

    /// ID of the industry field with exactly this name, if any
    fn industry_id_by_name(&self, name: &str) -> Result<Option<IndustryId>, RepositoryError>;

    /// IDs of jobs matching the given criteria combination
    fn job_ids(&self, query: &JobQuery) -> Result<HashSet<JobId>, RepositoryError>;

    /// Standard role title of a job, if the job exists
    ///
    /// Used to label ranked group-by results; facts carry only job IDs.
    fn role_title(&self, job_id: JobId) -> Result<Option<String>, RepositoryError>;
}

/// Filtered scan over the salary fact table
pub trait FactScan: Send + Sync {
    /// Fact rows matching the resolved filter
    ///
    /// A `None` ID set in the filter means "unconstrained", never
    /// "constrain to empty"; the resolver guarantees an empty match is
    /// short-circuited before a scan is ever issued.
    fn scan(&self, filter: &ResolvedFilter) -> Result<Vec<FactRecord>, RepositoryError>;
}

// ============================================================================
// In-Memory Reference Implementations
// ============================================================================

/// A location dimension row
#[derive(Debug, Clone)]
pub struct LocationRecord {
    /// Surrogate key
    pub id: LocationId,

    /// District name
    pub district: String,

    /// Oblast name
    pub oblast: String,

    /// City name
    pub city: String,
}

/// A job dimension row
#[derive(Debug, Clone)]
pub struct JobRecord {
    /// Surrogate key
    pub id: JobId,

    /// Standard role title
    pub role_title: String,

    /// Hierarchy level name
    pub level_name: String,

    /// Industry field reference
    pub industry_id: IndustryId,
}

/// In-memory dimension catalog
///
/// Holds the location, industry, and job dimensions as plain maps. Intended
/// for tests and embedded use; a production deployment implements
/// [`DimensionCatalog`] over the warehouse's dimension tables.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    locations: Vec<LocationRecord>,
    industries: HashMap<String, IndustryId>,
    jobs: Vec<JobRecord>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location row
    pub fn add_location(&mut self, id: LocationId, district: &str, oblast: &str, city: &str) {
        self.locations.push(LocationRecord {
            id,
            district: district.to_string(),
            oblast: oblast.to_string(),
            city: city.to_string(),
        });
    }

    /// Register an industry field
    pub fn add_industry(&mut self, id: IndustryId, name: &str) {
        self.industries.insert(name.to_string(), id);
    }

    /// Register a job row
    pub fn add_job(&mut self, id: JobId, role_title: &str, level_name: &str, industry: IndustryId) {
        self.jobs.push(JobRecord {
            id,
            role_title: role_title.to_string(),
            level_name: level_name.to_string(),
            industry_id: industry,
        });
    }
}

impl DimensionCatalog for InMemoryCatalog {
    fn location_ids(&self, query: &LocationQuery) -> Result<HashSet<LocationId>, RepositoryError> {
        let matches = self
            .locations
            .iter()
            .filter(|loc| {
                query.district.as_deref().is_none_or(|d| loc.district == d)
                    && query.oblast.as_deref().is_none_or(|o| loc.oblast == o)
                    && query.city.as_deref().is_none_or(|c| loc.city == c)
            })
            .map(|loc| loc.id)
            .collect();
        Ok(matches)
    }

    fn industry_id_by_name(&self, name: &str) -> Result<Option<IndustryId>, RepositoryError> {
        Ok(self.industries.get(name).copied())
    }

    fn job_ids(&self, query: &JobQuery) -> Result<HashSet<JobId>, RepositoryError> {
        let matches = self
            .jobs
            .iter()
            .filter(|job| {
                query.role_title.as_deref().is_none_or(|r| job.role_title == r)
                    && query.level_name.as_deref().is_none_or(|l| job.level_name == l)
                    && query.industry_id.is_none_or(|i| job.industry_id == i)
            })
            .map(|job| job.id)
            .collect();
        Ok(matches)
    }

    fn role_title(&self, job_id: JobId) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .jobs
            .iter()
            .find(|job| job.id == job_id)
            .map(|job| job.role_title.clone()))
    }
}

/// In-memory fact store
///
/// Append-only behind a lock so concurrent readers can scan while an
/// ingestion path appends.
#[derive(Debug, Default)]
pub struct InMemoryFacts {
    facts: RwLock<Vec<FactRecord>>,
}

impl InMemoryFacts {
    /// Create an empty fact store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact row
    pub fn add(&self, fact: FactRecord) {
        self.facts.write().push(fact);
    }

    /// Append many fact rows
    pub fn add_all(&self, facts: impl IntoIterator<Item = FactRecord>) {
        self.facts.write().extend(facts);
    }

    /// Number of stored fact rows
    pub fn len(&self) -> usize {
        self.facts.read().len()
    }

    /// True when no facts are stored
    pub fn is_empty(&self) -> bool {
        self.facts.read().is_empty()
    }
}

impl FactScan for InMemoryFacts {
    fn scan(&self, filter: &ResolvedFilter) -> Result<Vec<FactRecord>, RepositoryError> {
        let facts = self.facts.read();
        let matches = facts
            .iter()
            .filter(|fact| filter.matches(fact))
            .cloned()
            .collect();
        Ok(matches)
    }
}
