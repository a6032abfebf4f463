//! Wire model for the Yahoo Finance v8 chart endpoint.
//!
//! A response carries parallel arrays: one `timestamp` per bar and, under
//! `indicators.quote[0]`, nullable `open`/`high`/`low`/`close` arrays of the
//! same length. Bars with a missing price are dropped.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{DashboardError, Result};
use crate::models::{DailyRecord, DailySeries};

#[derive(Debug, Clone, Deserialize)]
pub struct ChartEnvelope {
    pub chart: ChartBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartBody {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    /// Seconds east of UTC for the exchange; zero for crypto pairs.
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Convert the response into a daily series.
    ///
    /// An upstream `error` object becomes [`DashboardError::Fetch`]. When two
    /// bars map onto the same calendar day the later bar wins.
    pub fn into_series(self) -> Result<DailySeries> {
        if let Some(err) = self.chart.error {
            return Err(DashboardError::Fetch(format!("{}: {}", err.code, err.description)));
        }
        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| DashboardError::Fetch("chart response has no result".to_string()))?;

        let offset = result.meta.gmtoffset;
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

        let mut by_date: BTreeMap<NaiveDate, DailyRecord> = BTreeMap::new();
        let mut skipped = 0usize;
        for (i, ts) in result.timestamp.iter().enumerate() {
            let date = ts
                .checked_add(offset)
                .and_then(|t| DateTime::from_timestamp(t, 0))
                .map(|dt| dt.date_naive());
            let prices = (
                value_at(&quote.open, i),
                value_at(&quote.high, i),
                value_at(&quote.low, i),
                value_at(&quote.close, i),
            );
            match (date, prices) {
                (Some(date), (Some(open), Some(high), Some(low), Some(close))) => {
                    if by_date
                        .insert(date, DailyRecord::new(date, open, high, low, close))
                        .is_some()
                    {
                        debug!("Replacing earlier bar for {}", date);
                    }
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(
                "Skipped {} incomplete bars for {}",
                skipped,
                result.meta.symbol.as_deref().unwrap_or("unknown symbol")
            );
        }

        DailySeries::new(by_date.into_values().collect())
    }
}

fn value_at(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

/// Parse a raw chart response body into a daily series.
pub fn parse_chart(body: &str) -> Result<DailySeries> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;
    envelope.into_series()
}
