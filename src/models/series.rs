use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::queries::{AggregateQuery, BestPeriodQuery, ComparisonQuery};

// ---------------------------------------------------------------------------
// DailyRecord — one trading day of OHLC prices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    /// `open + close + high + low`.
    pub fn ohlc_sum(&self) -> f64 {
        self.open + self.close + self.high + self.low
    }

    /// Mean of the four OHLC prices.
    pub fn average_price(&self) -> f64 {
        self.ohlc_sum() / 4.0
    }

    /// Intraday range, `high - low`.
    pub fn fluctuation(&self) -> f64 {
        self.high - self.low
    }

    fn check_prices(&self) -> Result<()> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DashboardError::InvalidArgument(format!(
                    "{} price on {} must be a non-negative number, got {}",
                    field, self.date, value
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DailySeries — validated chronological sequence of DailyRecord
// ---------------------------------------------------------------------------

/// Daily OHLC records ordered strictly by date.
///
/// Gaps are allowed (missing days are simply absent). Construction validates
/// ordering and prices, so every query over a `DailySeries` can rely on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DailyRecord>", into = "Vec<DailyRecord>")]
pub struct DailySeries {
    records: Vec<DailyRecord>,
}

impl DailySeries {
    /// Build a series, rejecting out-of-order or duplicate dates and
    /// negative or non-finite prices.
    pub fn new(records: Vec<DailyRecord>) -> Result<Self> {
        for record in &records {
            record.check_prices()?;
        }
        if let Some(pair) = records.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(DashboardError::InvalidArgument(format!(
                "dates must be strictly increasing: {} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// Distinct calendar years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.date.year()).collect();
        years.dedup();
        years
    }

    /// Records dated within `start..=end`.
    pub fn within(&self, start: NaiveDate, end: NaiveDate) -> DailySeries {
        self.filtered(|r| r.date >= start && r.date <= end)
    }

    /// Records whose month-of-year equals `month`, across every year.
    pub fn in_month(&self, month: u32) -> DailySeries {
        self.filtered(|r| r.date.month() == month)
    }

    /// Records from one calendar year.
    pub fn in_year(&self, year: i32) -> DailySeries {
        self.filtered(|r| r.date.year() == year)
    }

    // A subset of a valid series is still ordered and valid.
    fn filtered<F: Fn(&DailyRecord) -> bool>(&self, keep: F) -> DailySeries {
        DailySeries {
            records: self.records.iter().filter(|r| keep(r)).copied().collect(),
        }
    }

    // -- Query accessors ---------------------------------------------------

    /// Monthly, yearly and ISO-week aggregations.
    pub fn aggregates(&self) -> AggregateQuery<'_> {
        AggregateQuery::new(self)
    }

    /// Best-week selection.
    pub fn best_periods(&self) -> BestPeriodQuery<'_> {
        BestPeriodQuery::new(self)
    }

    /// Year-over-year comparisons within a month.
    pub fn comparisons(&self) -> ComparisonQuery<'_> {
        ComparisonQuery::new(self)
    }
}

impl TryFrom<Vec<DailyRecord>> for DailySeries {
    type Error = DashboardError;

    fn try_from(records: Vec<DailyRecord>) -> Result<Self> {
        DailySeries::new(records)
    }
}

impl From<DailySeries> for Vec<DailyRecord> {
    fn from(series: DailySeries) -> Self {
        series.records
    }
}

impl<'a> IntoIterator for &'a DailySeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
