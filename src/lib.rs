//! Crypto dashboard SDK for Rust.
//!
//! Fetches daily OHLC prices for a fixed catalog of cryptocurrencies and turns
//! them into the views a price dashboard renders: monthly means, year-over-year
//! monthly means, ISO-week means, the best week of a month or year, and a
//! day-by-day comparison of one month across years. All aggregation is pure
//! and in-memory over a validated [`DailySeries`].
//!
//! # Quick start
//!
//! ```no_run
//! use crypto_dashboard::{CryptoDashboard, ReportRequest};
//!
//! let dashboard = CryptoDashboard::builder().build().unwrap();
//!
//! // One-shot report with every view
//! let report = dashboard.report(&ReportRequest::default()).unwrap();
//! println!("{}", report.best_week_summary());
//!
//! // Or query a series directly
//! let series = dashboard
//!     .fetch("Cosmos", report.start, report.end)
//!     .unwrap();
//! let weekly = series.aggregates().weekly_mean();
//! let best = series.best_periods().best_week_in_month(3).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod calendar;
pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod grouping;
pub mod models;
pub mod queries;
pub mod report;
pub mod source;

#[cfg(feature = "async")]
pub use async_client::AsyncCryptoDashboard;
pub use client::YahooClient;
pub use error::{DashboardError, Result};
pub use models::{
    AggregatePoint, AveragePricePoint, BestWeek, DailyRecord, DailySeries, FluctuationPoint,
    PeriodKey, YearBestWeek,
};
pub use report::{DashboardReport, ReportRequest};
pub use source::{JsonFileSource, PriceSource};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use tracing::info;

// ---------------------------------------------------------------------------
// CryptoDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CryptoDashboard`] instance.
///
/// Use [`CryptoDashboard::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CryptoDashboardBuilder::build) to create the client.
pub struct CryptoDashboardBuilder {
    base_url: String,
    timeout: Duration,
    offline_dir: Option<PathBuf>,
}

impl Default for CryptoDashboardBuilder {
    fn default() -> Self {
        Self {
            base_url: config::CHART_API_BASE.to_string(),
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
            offline_dir: None,
        }
    }
}

impl CryptoDashboardBuilder {
    /// Override the chart API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read saved chart responses from `dir` instead of the network.
    ///
    /// Files are looked up as `{dir}/{TICKER}.json`; see
    /// [`YahooClient::download_chart`] for producing them.
    pub fn offline_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.offline_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Build the dashboard client.
    ///
    /// No request is made until the first fetch.
    pub fn build(self) -> Result<CryptoDashboard> {
        let source: Box<dyn PriceSource> = match self.offline_dir {
            Some(dir) => Box::new(JsonFileSource::new(dir)),
            None => Box::new(YahooClient::new(self.base_url, self.timeout)?),
        };
        Ok(CryptoDashboard { source })
    }
}

// ---------------------------------------------------------------------------
// CryptoDashboard
// ---------------------------------------------------------------------------

/// The main entry point for the crypto dashboard SDK.
///
/// Owns a [`PriceSource`] and runs one fetch plus one pass of aggregation per
/// query. Nothing is cached between queries.
pub struct CryptoDashboard {
    source: Box<dyn PriceSource>,
}

impl CryptoDashboard {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CryptoDashboardBuilder {
        CryptoDashboardBuilder::default()
    }

    /// Wrap a custom price source.
    pub fn with_source<S: PriceSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// The supported cryptocurrencies as `(display name, ticker)` pairs.
    pub fn cryptos(&self) -> &'static [(&'static str, &'static str)] {
        config::CRYPTO_CATALOG
    }

    /// Resolve a display name or ticker to its catalog entry.
    pub fn resolve(&self, name_or_ticker: &str) -> Result<(&'static str, &'static str)> {
        config::lookup_crypto(name_or_ticker)
            .ok_or_else(|| DashboardError::UnknownSymbol(name_or_ticker.to_string()))
    }

    /// Fetch the daily series for a catalog cryptocurrency over `start..=end`.
    pub fn fetch(&self, name_or_ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<DailySeries> {
        let (_, ticker) = self.resolve(name_or_ticker)?;
        self.source.fetch(ticker, start, end)
    }

    /// Fetch once and build every dashboard view.
    pub fn report(&self, request: &ReportRequest) -> Result<DashboardReport> {
        let (name, ticker) = self.resolve(&request.symbol)?;
        let series = self.source.fetch(ticker, request.start, request.end)?;
        info!(
            "Building report for {} ({}) over {} records",
            name,
            ticker,
            series.len()
        );
        DashboardReport::build(name, ticker, &series, request)
    }

    /// Return a reference to the underlying [`PriceSource`] for advanced usage.
    pub fn source(&self) -> &dyn PriceSource {
        self.source.as_ref()
    }

    /// Consume the client and release its resources.
    pub fn close(self) {
        drop(self);
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CryptoDashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CryptoDashboard(source={}, cryptos={})",
            self.source.describe(),
            config::CRYPTO_CATALOG.len()
        )
    }
}
