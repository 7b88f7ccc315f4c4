//! Salary Aggregation Engine
//!
//! Computes the four analytical shapes the warehouse exposes, always from
//! one filtered read of the fact table:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        SalaryFilterRequest          │
//! │   names + date window (human)       │
//! └─────────────────────────────────────┘
//!                  ↓
//! ┌─────────────────────────────────────┐
//! │          FilterResolver             │
//! │  names → dimension-ID sets, or      │
//! │  a definitive NoMatch               │
//! └─────────────────────────────────────┘
//!                  ↓
//! ┌─────────────────────────────────────┐
//! │         SalaryAnalytics             │
//! │  one fact scan → stats / histogram  │
//! │  / time series / ranked roles       │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Key Components
//!
//! - **`stats`**: summary statistics with R-7 interpolated percentiles
//! - **`distribution`**: equal-width histogram buckets with an exact
//!   partition invariant
//! - **`timeseries`**: fixed-length calendar series with explicit empty
//!   periods
//! - **`ranking`**: role-title group-by with a minimum-count floor
//! - **`engine`**: [`SalaryAnalytics`], the façade wiring resolution and
//!   aggregation together
//!
//! A `NoMatch` resolution produces the zero/empty form of every shape
//! without touching the fact table, so downstream serialization paths are
//! uniform whether or not anything matched.

pub mod distribution;
pub mod engine;
pub mod ranking;
pub mod stats;
pub mod timeseries;

pub use distribution::{equal_width_buckets, DistributionBucket};
pub use engine::SalaryAnalytics;
pub use ranking::{ranked_roles, RankedGroup};
pub use stats::{percentile, summarize, SalaryStats};
pub use timeseries::{build_series, Granularity, TimeSeriesPoint};
