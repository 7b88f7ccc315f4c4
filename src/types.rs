//! Core data types used throughout the analytics engine
//!
//! This module defines the shared vocabulary of the salary warehouse core:
//!
//! # Key Types
//!
//! - **`FactRecord`**: one observed salary measurement, referencing the
//!   dimension tables by surrogate ID
//! - **`Money`**: fixed-point monetary amount (2 decimal places)
//! - **`DateRange`**: optionally bounded observation-date window
//! - ID aliases for the five dimension tables (`LocationId`, `EmployerId`,
//!   `JobId`, `EmployeeId`, `IndustryId`)
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zarplata::types::{DateRange, FactRecord, Money};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let fact = FactRecord::new(1, date, 10, 20, 30, 40, Money::new(250_000, 2));
//! assert_eq!(fact.amount.to_string(), "2500.00");
//!
//! let range = DateRange::new(Some(date), None).unwrap();
//! assert!(range.contains(fact.date));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FilterRequestError;

/// Unique identifier for a location dimension row (district/oblast/city)
pub type LocationId = i64;

/// Unique identifier for an employer dimension row
pub type EmployerId = i64;

/// Unique identifier for a job dimension row (role + level + industry)
pub type JobId = i64;

/// Unique identifier for an employee dimension row
pub type EmployeeId = i64;

/// Unique identifier for an industry field
///
/// Industry is a sub-dimension of the job table: it never appears in a
/// resolved filter, only as an input to job resolution.
pub type IndustryId = i64;

/// Surrogate key of a salary fact row
pub type FactId = i64;

/// Monetary amount in the warehouse's fixed-point scale (2 decimal places)
///
/// Salary amounts are money, not measurements; binary floating point cannot
/// represent the warehouse's 2-decimal fixed-point values exactly, so all
/// statistics are computed in decimal arithmetic.
pub type Money = rust_decimal::Decimal;

/// A single salary fact row, projected read-only from storage
///
/// The fundamental unit of analytical data: one observed salary measurement
/// keyed by surrogate ID, with foreign keys into the date, location,
/// employer, job, and employee dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRecord {
    /// Surrogate key of this fact row
    pub id: FactId,

    /// Observation date (date-dimension key, resolved to a calendar date)
    pub date: NaiveDate,

    /// Location dimension reference
    pub location_id: LocationId,

    /// Employer dimension reference
    pub employer_id: EmployerId,

    /// Job dimension reference
    pub job_id: JobId,

    /// Employee dimension reference
    pub employee_id: EmployeeId,

    /// Salary amount, fixed-point with 2 decimal places
    pub amount: Money,
}

impl FactRecord {
    /// Create a new fact record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: FactId,
        date: NaiveDate,
        location_id: LocationId,
        employer_id: EmployerId,
        job_id: JobId,
        employee_id: EmployeeId,
        amount: Money,
    ) -> Self {
        Self {
            id,
            date,
            location_id,
            employer_id,
            job_id,
            employee_id,
            amount,
        }
    }
}

/// An optionally bounded, inclusive window of observation dates
///
/// Either bound may be absent, meaning "unbounded on that side". A fully
/// unbounded range matches every fact.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use zarplata::types::DateRange;
///
/// let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let jun = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
///
/// let range = DateRange::new(Some(jan), Some(jun)).unwrap();
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
///
/// // Inverted bounds are rejected
/// assert!(DateRange::new(Some(jun), Some(jan)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound, if any
    pub start: Option<NaiveDate>,

    /// Inclusive upper bound, if any
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a date range with validation
    ///
    /// Validates that `start <= end` when both bounds are present.
    pub fn new(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, FilterRequestError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(FilterRequestError::InvalidDateRange { start: s, end: e });
            }
        }
        Ok(Self { start, end })
    }

    /// A range with no bounds, matching every date
    pub fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Check whether a date falls inside the range (bounds inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}
