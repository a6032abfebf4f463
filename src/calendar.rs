//! Calendar arithmetic used to key aggregations.
//!
//! ISO-8601 week numbering is computed here rather than borrowed from the
//! date library so that the grouping rules are explicit: a week belongs to the
//! ISO year that contains its Thursday, and week 1 is the week holding the
//! year's first Thursday.

use chrono::{Datelike, NaiveDate};

use crate::config::MONTH_NAMES;
use crate::error::{DashboardError, Result};

/// Return `(iso_year, iso_week)` for a calendar date.
///
/// Dates in late December may land in week 1 of the following ISO year, and
/// dates in early January may land in week 52 or 53 of the previous one.
pub fn iso_week(date: NaiveDate) -> (i32, u32) {
    let year = date.year();
    let weekday = date.weekday().number_from_monday() as i32;
    let ordinal = date.ordinal() as i32;

    // Shift to the Thursday of the same week, then count whole weeks.
    let week = (ordinal - weekday + 10) / 7;

    if week < 1 {
        let previous = year - 1;
        (previous, weeks_in_iso_year(previous))
    } else if week as u32 > weeks_in_iso_year(year) {
        (year + 1, 1)
    } else {
        (year, week as u32)
    }
}

/// Number of ISO weeks (52 or 53) in the given ISO year.
///
/// A year has 53 weeks when it starts on a Thursday, or when it is a leap
/// year starting on a Wednesday.
pub fn weeks_in_iso_year(year: i32) -> u32 {
    if dec31_weekday(year) == 4 || dec31_weekday(year - 1) == 3 {
        53
    } else {
        52
    }
}

/// Weekday of December 31st, 0 = Sunday .. 6 = Saturday.
fn dec31_weekday(year: i32) -> i32 {
    (year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)).rem_euclid(7)
}

/// Last day of the calendar month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// English name for a month number (1 = January).
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
}

/// Reject month numbers outside 1..=12.
pub fn validate_month(month: u32) -> Result<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(DashboardError::InvalidArgument(format!(
            "month must be between 1 and 12, got {}",
            month
        )))
    }
}
