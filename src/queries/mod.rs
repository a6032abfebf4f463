//! Query modules for the crypto dashboard SDK.
//!
//! Each module provides a query struct that borrows a
//! [`DailySeries`](crate::models::DailySeries) and exposes pure functions over
//! it. Aggregations return plain collections; selectors that can come up empty
//! return `Result<T>`.

pub mod aggregates;
pub mod best_period;
pub mod comparison;

pub use aggregates::AggregateQuery;
pub use best_period::{select_best, BestPeriodQuery};
pub use comparison::ComparisonQuery;
