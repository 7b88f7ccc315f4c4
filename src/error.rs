//! Error types for the analytics core
//!
//! Two rules shape this taxonomy:
//!
//! - A filter name that matches no dimension row is **not** an error. That
//!   outcome travels through [`crate::filter::Resolution::NoMatch`] and every
//!   analytical operation turns it into its zero/empty result shape.
//! - Collaborator failures (connectivity, backend query errors) propagate
//!   unchanged. The core performs no retries and masks nothing.

use thiserror::Error;

/// Main error type for the analytics core
#[derive(Error, Debug)]
pub enum Error {
    /// Collaborator (dimension catalog / fact scan) failure
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Malformed filter request rejected at the boundary
    #[error("Filter error: {0}")]
    Filter(#[from] FilterRequestError),

    /// Out-of-range operation parameter (percentile, bucket count, periods)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failures raised by the read-only storage collaborators
///
/// These are infrastructure failures, never "nothing matched". An empty
/// lookup result is a valid answer and is returned as an empty set.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Connection to the backing store failed
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend rejected or failed the lookup/scan
    #[error("Query error: {0}")]
    Query(String),

    /// Reference data violates an expected invariant (e.g. a fact row
    /// pointing at a dimension row that does not exist)
    #[error("Inconsistent dimension data: {0}")]
    InconsistentData(String),
}

/// Validation failures for name-based filter requests
///
/// Raised by [`crate::filter::SalaryFilterBuilder::build`]; the resolver and
/// the aggregation engine assume requests that passed this gate.
#[derive(Error, Debug)]
pub enum FilterRequestError {
    /// Date range is inverted
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested range start
        start: chrono::NaiveDate,
        /// Requested range end
        end: chrono::NaiveDate,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
