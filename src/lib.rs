//! Zarplata - Salary-market analytics core
//!
//! This library is the analytical heart of a salary-market data warehouse:
//! - Name-based filter resolution (city/oblast/district, industry, role,
//!   level, date window) to dimension-ID filters
//! - Explicit no-match short-circuiting: a name that matches nothing
//!   produces a zero/empty result, never an accidental full scan
//! - Summary statistics with R-7 interpolated percentiles
//! - Equal-width distribution histograms
//! - Fixed-length calendar time series with explicit empty periods
//! - Role-title rankings with a minimum-count privacy floor
//!
//! Storage, transport, and validation layers live outside this crate and
//! plug in through the read-only collaborator traits in [`repository`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregation;
pub mod error;
pub mod filter;
pub mod types;

/// Configuration with TOML support and environment overrides
pub mod config;

/// Read-only storage collaborator traits and in-memory implementations
pub mod repository;

// Re-export main types
pub use aggregation::{
    DistributionBucket, Granularity, RankedGroup, SalaryAnalytics, SalaryStats, TimeSeriesPoint,
};
pub use error::{Error, Result};
pub use filter::{FilterResolver, Resolution, ResolvedFilter, SalaryFilterRequest};
pub use types::{FactRecord, Money};
