//! Blocking HTTP client for the Yahoo Finance chart endpoint.
//!
//! Requests one daily bar per day over an inclusive date range. The endpoint's
//! `period2` bound is exclusive, so the request runs to midnight UTC after
//! the end date.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::chart::{parse_chart, ChartEnvelope};
use crate::config;
use crate::error::{DashboardError, Result};
use crate::models::DailySeries;
use crate::source::{check_range, require_rows, PriceSource};

/// Fetches daily OHLC bars from the chart API.
pub struct YahooClient {
    /// Base URL, without the trailing `/{symbol}` segment.
    pub base_url: String,
    timeout: Duration,
    client: Client,
}

impl YahooClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config::USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Query parameters covering `start..=end` at daily resolution.
    pub fn query_params(start: NaiveDate, end: NaiveDate) -> Result<Vec<(&'static str, String)>> {
        check_range(start, end)?;
        let after_end = end.succ_opt().ok_or_else(|| {
            DashboardError::InvalidArgument(format!("end date {} is out of range", end))
        })?;
        Ok(vec![
            ("period1", midnight_utc(start).to_string()),
            ("period2", midnight_utc(after_end).to_string()),
            ("interval", "1d".to_string()),
            ("events", "history".to_string()),
        ])
    }

    /// Download the raw chart body for a ticker.
    ///
    /// A non-success status is reported with the upstream's own error
    /// description when the body carries one.
    pub fn fetch_body(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<String> {
        let params = Self::query_params(start, end)?;
        let url = format!("{}/{}", self.base_url, symbol);
        debug!("Requesting {} {:?}", url, params);

        let resp = self.client.get(&url).query(&params).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ChartEnvelope>(&body)
                .ok()
                .and_then(|env| env.chart.error)
                .map(|err| format!("{}: {}", err.code, err.description))
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(DashboardError::Fetch(format!("{} ({})", detail, symbol)));
        }
        Ok(body)
    }

    /// Save the chart body for a ticker into `dir` for later offline use.
    ///
    /// Writes to a temp file first and renames on success, so an interrupted
    /// download never leaves a partial file behind.
    pub fn download_chart<P: AsRef<Path>>(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
        dir: P,
    ) -> Result<PathBuf> {
        let body = self.fetch_body(symbol, start, end)?;
        // Refuse to save a body that would not load back.
        parse_chart(&body)?;

        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let dest = dir.join(format!("{}.json", symbol.to_uppercase()));
        let tmp_dest = dest.with_extension("json.tmp");

        let result = fs::write(&tmp_dest, body.as_bytes()).and_then(|_| fs::rename(&tmp_dest, &dest));
        if let Err(e) = result {
            let _ = fs::remove_file(&tmp_dest);
            return Err(e.into());
        }
        info!("Saved chart for {} to {}", symbol, dest.display());
        Ok(dest)
    }
}

impl PriceSource for YahooClient {
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<DailySeries> {
        let body = self.fetch_body(symbol, start, end)?;
        let series = parse_chart(&body)?.within(start, end);
        info!("Fetched {} daily records for {}", series.len(), symbol);
        require_rows(series, symbol, start, end)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
