//! Name-based filter requests and their resolution to dimension IDs
//!
//! Analytical callers describe what they want in human terms: a city name,
//! an oblast, a job title, an industry field, a date window. The fact table
//! only understands dimension IDs. This module owns the translation:
//!
//! - [`request`]: the all-optional, name-based [`SalaryFilterRequest`] and
//!   its validating builder
//! - [`resolver`]: [`FilterResolver`], which turns a request into a
//!   [`ResolvedFilter`] of ID sets, or a definitive [`Resolution::NoMatch`]
//!
//! The distinction between "dimension unconstrained" (`None` ID set) and
//! "a specified name matched nothing" (`Resolution::NoMatch`) is
//! load-bearing: the second must short-circuit to an empty analytical
//! result without a fact-table scan, and must never be conflated with the
//! first.

pub mod request;
pub mod resolver;

pub use request::{SalaryFilterBuilder, SalaryFilterRequest};
pub use resolver::{FilterResolver, ResolvedFilter, Resolution};
