//! Price sources: where a [`DailySeries`] comes from.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::chart::parse_chart;
use crate::error::{DashboardError, Result};
use crate::models::DailySeries;

/// Something that can produce daily OHLC prices for a ticker over an
/// inclusive date range.
///
/// Implementations fail with [`DashboardError::Fetch`] when the upstream is
/// unavailable or returns no rows, and with
/// [`DashboardError::InvalidArgument`] when `start > end`.
pub trait PriceSource: Send + Sync {
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<DailySeries>;

    /// Short human-readable label for logs and `Display`.
    fn describe(&self) -> String;
}

/// Reject reversed date ranges before doing any I/O.
pub fn check_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(DashboardError::InvalidArgument(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    Ok(())
}

/// Turn an empty result into a fetch failure naming the query.
pub fn require_rows(
    series: DailySeries,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<DailySeries> {
    if series.is_empty() {
        return Err(DashboardError::Fetch(format!(
            "no price data for {} between {} and {}",
            symbol, start, end
        )));
    }
    Ok(series)
}

// ---------------------------------------------------------------------------
// JsonFileSource
// ---------------------------------------------------------------------------

/// Offline source reading saved chart responses from `{dir}/{SYMBOL}.json`.
///
/// Files have the same shape as the chart endpoint's body (see
/// [`YahooClient::download_chart`](crate::client::YahooClient::download_chart)).
/// Only records inside the requested range are returned.
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the saved response for a ticker.
    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.json", symbol.to_uppercase()))
    }
}

impl PriceSource for JsonFileSource {
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<DailySeries> {
        check_range(start, end)?;

        let path = self.path_for(symbol);
        if !path.exists() {
            return Err(DashboardError::Fetch(format!(
                "no saved chart for {} at {}",
                symbol,
                path.display()
            )));
        }
        debug!("Reading {}", path.display());

        let contents = fs::read_to_string(&path)?;
        let series = parse_chart(&contents)?.within(start, end);
        info!("Loaded {} daily records for {} from disk", series.len(), symbol);
        require_rows(series, symbol, start, end)
    }

    fn describe(&self) -> String {
        format!("files in {}", self.dir.display())
    }
}
