//! Best-week selection over ISO-week aggregates.

use tracing::debug;

use crate::calendar::{month_name, validate_month};
use crate::error::{DashboardError, Result};
use crate::models::{AggregatePoint, BestWeek, DailySeries, YearBestWeek};

// ---------------------------------------------------------------------------
// BestPeriodQuery
// ---------------------------------------------------------------------------

/// Query interface that picks the highest-average week from a series.
///
/// Weeks are keyed by ISO (year, week) and only the days inside the selection
/// count towards a week's mean, so a week straddling a month boundary is
/// judged on its in-month days. When several weeks share the maximum mean
/// exactly, the earliest (year, week) wins.
pub struct BestPeriodQuery<'a> {
    series: &'a DailySeries,
}

impl<'a> BestPeriodQuery<'a> {
    /// Create a new `BestPeriodQuery` bound to the given series.
    pub fn new(series: &'a DailySeries) -> Self {
        Self { series }
    }

    /// Best week among records of `month` (1-12), across all years.
    ///
    /// Fails with [`DashboardError::NoData`] when no record falls in the month.
    pub fn best_week_in_month(&self, month: u32) -> Result<BestWeek> {
        let month = validate_month(month)?;
        let subset = self.series.in_month(month);
        let weekly = subset.aggregates().weekly_mean();

        select_best(&weekly).ok_or_else(|| {
            DashboardError::NoData(format!(
                "no records in {} for the selected range",
                month_name(month).unwrap_or("the selected month")
            ))
        })
    }

    /// Best week of each calendar year present, ascending by year.
    pub fn best_week_per_year(&self) -> Vec<YearBestWeek> {
        self.series
            .years()
            .into_iter()
            .filter_map(|year| {
                // Every listed year has at least one record, so this always yields.
                let weekly = self.series.in_year(year).aggregates().weekly_mean();
                select_best(&weekly).map(|best| YearBestWeek { year, best })
            })
            .collect()
    }
}

/// Maximum mean in ascending key order; the first maximum is kept on ties.
pub fn select_best(points: &[AggregatePoint]) -> Option<BestWeek> {
    let mut best: Option<&AggregatePoint> = None;
    for point in points {
        let replace = match best {
            Some(current) => point.mean > current.mean,
            None => true,
        };
        if replace {
            best = Some(point);
        }
    }
    if let Some(point) = best {
        debug!("Best week {} with mean {:.4} over {} days", point.key, point.mean, point.count);
    }
    best.and_then(BestWeek::from_point)
}
