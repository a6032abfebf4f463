use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Per-day derived points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AveragePricePoint {
    pub date: NaiveDate,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluctuationPoint {
    pub date: NaiveDate,
    pub fluctuation: f64,
}

// ---------------------------------------------------------------------------
// PeriodKey — grouping key for an aggregation
// ---------------------------------------------------------------------------

/// Key of one aggregation bucket.
///
/// Keys of the same variant order chronologically; a single aggregation only
/// ever produces one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "period", rename_all = "snake_case")]
pub enum PeriodKey {
    /// Calendar month, labelled by its last day.
    MonthEnd { date: NaiveDate },
    /// Calendar month within a calendar year.
    Month { year: i32, month: u32 },
    /// ISO-8601 week within its ISO year.
    Week { year: i32, week: u32 },
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::MonthEnd { date } => write!(f, "{}", date.format("%Y-%m")),
            PeriodKey::Month { year, month } => write!(f, "{}-{:02}", year, month),
            PeriodKey::Week { year, week } => write!(f, "{}-W{:02}", year, week),
        }
    }
}

// ---------------------------------------------------------------------------
// AggregatePoint — mean of one bucket
// ---------------------------------------------------------------------------

/// Arithmetic mean of a daily metric over one period.
///
/// `count` is the number of daily records that contributed and is never zero:
/// periods without records are not emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatePoint {
    #[serde(flatten)]
    pub key: PeriodKey,
    pub mean: f64,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// BestWeek — highest-average ISO week in a selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestWeek {
    /// ISO year of the week.
    pub year: i32,
    /// ISO week number.
    pub week: u32,
    pub average_price: f64,
    /// Days in the selection that fell in this week.
    pub days: usize,
}

impl BestWeek {
    /// Convert a week-keyed aggregate; `None` for any other key.
    pub fn from_point(point: &AggregatePoint) -> Option<Self> {
        match point.key {
            PeriodKey::Week { year, week } => Some(Self {
                year,
                week,
                average_price: point.mean,
                days: point.count,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for BestWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Week {}, {}, Average Price: {:.2}",
            self.week, self.year, self.average_price
        )
    }
}

/// Best week found among one calendar year's records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearBestWeek {
    pub year: i32,
    pub best: BestWeek,
}
