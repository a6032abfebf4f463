//! Full dashboard query: every view for one ticker, month and date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::{month_name, validate_month};
use crate::config;
use crate::error::{DashboardError, Result};
use crate::models::{AggregatePoint, BestWeek, DailySeries, MonthComparison, YearBestWeek};

// ---------------------------------------------------------------------------
// ReportRequest
// ---------------------------------------------------------------------------

/// Inputs of one dashboard query.
///
/// `symbol` may be a catalog display name or ticker. Both dates are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub month: u32,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            symbol: config::CRYPTO_CATALOG[0].1.to_string(),
            start: config::default_start_date(),
            end: config::default_end_date(),
            month: config::DEFAULT_MONTH,
        }
    }
}

impl ReportRequest {
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate, month: u32) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
            month,
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardReport
// ---------------------------------------------------------------------------

/// Every view the dashboard renders, fully materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub name: String,
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub month: u32,
    /// Mean average price per calendar month.
    pub monthly_prices: Vec<AggregatePoint>,
    /// Mean average price per (year, month).
    pub monthly_by_year: Vec<AggregatePoint>,
    /// Mean daily high-low range per (year, month).
    pub monthly_fluctuation: Vec<AggregatePoint>,
    /// Best ISO week within the selected month; `None` when the range holds
    /// no records for that month.
    pub best_week: Option<BestWeek>,
    pub day_by_day: Vec<MonthComparison>,
    pub best_weeks_by_year: Vec<YearBestWeek>,
}

impl DashboardReport {
    /// Run every aggregation over `series`.
    ///
    /// A month with no data leaves `best_week` empty; any other failure,
    /// including an invalid month, is returned.
    pub fn build(name: &str, symbol: &str, series: &DailySeries, request: &ReportRequest) -> Result<Self> {
        let month = validate_month(request.month)?;
        let aggregates = series.aggregates();

        let best_week = match series.best_periods().best_week_in_month(month) {
            Ok(best) => Some(best),
            Err(DashboardError::NoData(msg)) => {
                warn!("No best week for {}: {}", symbol, msg);
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            start: request.start,
            end: request.end,
            month,
            monthly_prices: aggregates.monthly_mean(),
            monthly_by_year: aggregates.monthly_mean_by_year(),
            monthly_fluctuation: aggregates.monthly_fluctuation_by_year(),
            best_week,
            day_by_day: series.comparisons().day_by_day(month)?,
            best_weeks_by_year: series.best_periods().best_week_per_year(),
        })
    }

    /// One-line summary of the selected month's best week.
    pub fn best_week_summary(&self) -> String {
        let month = month_name(self.month).unwrap_or("selected month");
        match &self.best_week {
            Some(best) => format!("Best Week for {}: {}", month, best),
            None => format!("Best Week for {}: no data in range", month),
        }
    }
}
