//! Time-bucketed means over a [`DailySeries`].

use chrono::Datelike;

use crate::calendar::{iso_week, month_end};
use crate::grouping::Grouping;
use crate::models::{AggregatePoint, AveragePricePoint, DailyRecord, DailySeries, FluctuationPoint, PeriodKey};

// ---------------------------------------------------------------------------
// AggregateQuery
// ---------------------------------------------------------------------------

/// Aggregation interface over a borrowed daily series.
///
/// Every method is a pure function of the series: empty input gives empty
/// output, and only periods with at least one record are emitted.
pub struct AggregateQuery<'a> {
    series: &'a DailySeries,
}

impl<'a> AggregateQuery<'a> {
    /// Create a new `AggregateQuery` bound to the given series.
    pub fn new(series: &'a DailySeries) -> Self {
        Self { series }
    }

    /// Per-day mean of open, close, high and low, in date order.
    pub fn average_prices(&self) -> Vec<AveragePricePoint> {
        self.series
            .iter()
            .map(|r| AveragePricePoint {
                date: r.date,
                average: r.average_price(),
            })
            .collect()
    }

    /// Per-day `high - low`, in date order.
    pub fn fluctuations(&self) -> Vec<FluctuationPoint> {
        self.series
            .iter()
            .map(|r| FluctuationPoint {
                date: r.date,
                fluctuation: r.fluctuation(),
            })
            .collect()
    }

    /// Mean average price per calendar month, keyed by the month's last day.
    pub fn monthly_mean(&self) -> Vec<AggregatePoint> {
        self.group(
            |r| PeriodKey::MonthEnd {
                date: month_end(r.date),
            },
            DailyRecord::average_price,
        )
    }

    /// Mean average price per (year, month), for year-over-year comparison.
    pub fn monthly_mean_by_year(&self) -> Vec<AggregatePoint> {
        self.group(year_month_key, DailyRecord::average_price)
    }

    /// Mean `high - low` per (year, month).
    pub fn monthly_fluctuation_by_year(&self) -> Vec<AggregatePoint> {
        self.group(year_month_key, DailyRecord::fluctuation)
    }

    /// Mean average price per ISO (year, week).
    pub fn weekly_mean(&self) -> Vec<AggregatePoint> {
        self.group(iso_week_key, DailyRecord::average_price)
    }

    fn group<K, V>(&self, key_fn: K, value_fn: V) -> Vec<AggregatePoint>
    where
        K: Fn(&DailyRecord) -> PeriodKey,
        V: Fn(&DailyRecord) -> f64,
    {
        Grouping::new()
            .extend(self.series.iter(), |r| key_fn(*r), |r| value_fn(*r))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Key helpers
// ---------------------------------------------------------------------------

fn year_month_key(record: &DailyRecord) -> PeriodKey {
    PeriodKey::Month {
        year: record.date.year(),
        month: record.date.month(),
    }
}

fn iso_week_key(record: &DailyRecord) -> PeriodKey {
    let (year, week) = iso_week(record.date);
    PeriodKey::Week { year, week }
}
