//! Day-by-day comparison of one month across years.

use chrono::Datelike;

use crate::calendar::validate_month;
use crate::error::Result;
use crate::models::{DailySeries, DayPoint, MonthComparison};

pub struct ComparisonQuery<'a> {
    series: &'a DailySeries,
}

impl<'a> ComparisonQuery<'a> {
    /// Create a new `ComparisonQuery` bound to the given series.
    pub fn new(series: &'a DailySeries) -> Self {
        Self { series }
    }

    /// Average price per day of `month`, one line per year that has data.
    ///
    /// Years are ascending and each year's points follow date order. Years
    /// with no records in the month are omitted.
    pub fn day_by_day(&self, month: u32) -> Result<Vec<MonthComparison>> {
        let month = validate_month(month)?;
        let mut lines: Vec<MonthComparison> = Vec::new();

        for record in self.series.in_month(month).iter() {
            let year = record.date.year();
            let point = DayPoint {
                day: record.date.day(),
                average: record.average_price(),
            };
            match lines.last_mut() {
                Some(line) if line.year == year => line.points.push(point),
                _ => lines.push(MonthComparison {
                    year,
                    points: vec![point],
                }),
            }
        }

        Ok(lines)
    }
}
