//! Async wrapper around [`CryptoDashboard`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! network fetch blocks; the aggregation afterwards is CPU-bound but fast.
//!
//! # Example
//!
//! ```no_run
//! use crypto_dashboard::{AsyncCryptoDashboard, ReportRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dashboard = AsyncCryptoDashboard::builder().build().await.unwrap();
//!
//!     // Run any sync method via closure
//!     let weekly = dashboard.run(|d| {
//!         let series = d.fetch("Kaspa", crypto_dashboard::config::default_start_date(),
//!             crypto_dashboard::config::default_end_date())?;
//!         Ok(series.aggregates().weekly_mean())
//!     }).await.unwrap();
//!
//!     // Convenience method for the full report
//!     let report = dashboard.report(ReportRequest::default()).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::config;
use crate::error::{DashboardError, Result};
use crate::models::DailySeries;
use crate::report::{DashboardReport, ReportRequest};
use crate::CryptoDashboard;

// ---------------------------------------------------------------------------
// AsyncCryptoDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCryptoDashboard`] instance.
pub struct AsyncCryptoDashboardBuilder {
    base_url: String,
    timeout: Duration,
    offline_dir: Option<PathBuf>,
}

impl Default for AsyncCryptoDashboardBuilder {
    fn default() -> Self {
        Self {
            base_url: config::CHART_API_BASE.to_string(),
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
            offline_dir: None,
        }
    }
}

impl AsyncCryptoDashboardBuilder {
    /// Override the chart API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read saved chart responses from `dir` instead of the network.
    pub fn offline_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.offline_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is created on the blocking thread pool, since
    /// it may not be constructed from inside an async context.
    pub async fn build(self) -> Result<AsyncCryptoDashboard> {
        tokio::task::spawn_blocking(move || {
            let mut builder = CryptoDashboard::builder()
                .base_url(self.base_url)
                .timeout(self.timeout);
            if let Some(dir) = self.offline_dir {
                builder = builder.offline_dir(dir);
            }
            let dashboard = builder.build()?;
            Ok(AsyncCryptoDashboard {
                inner: Arc::new(dashboard),
            })
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCryptoDashboard
// ---------------------------------------------------------------------------

/// Async wrapper around [`CryptoDashboard`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The client holds no mutable state, so it
/// is shared behind an [`Arc`] without locking.
pub struct AsyncCryptoDashboard {
    inner: Arc<CryptoDashboard>,
}

impl AsyncCryptoDashboard {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncCryptoDashboardBuilder {
        AsyncCryptoDashboardBuilder::default()
    }

    /// Run a sync operation on the blocking thread pool.
    ///
    /// The closure receives a `&CryptoDashboard` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CryptoDashboard) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let dashboard = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&dashboard))
            .await
            .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch a daily series asynchronously.
    pub async fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<DailySeries> {
        let symbol = symbol.to_string();
        self.run(move |d| d.fetch(&symbol, start, end)).await
    }

    /// Build the full dashboard report asynchronously.
    pub async fn report(&self, request: ReportRequest) -> Result<DashboardReport> {
        self.run(move |d| d.report(&request)).await
    }

    /// The supported cryptocurrencies as `(display name, ticker)` pairs.
    pub fn cryptos(&self) -> &'static [(&'static str, &'static str)] {
        self.inner.cryptos()
    }

    /// Close the client, dropping the blocking HTTP client off the async
    /// event loop.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            drop(self.inner);
            Ok(())
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
