use serde::{Deserialize, Serialize};

/// Average price on one day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayPoint {
    pub day: u32,
    pub average: f64,
}

/// One year's day-by-day average prices for a single month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthComparison {
    pub year: i32,
    pub points: Vec<DayPoint>,
}
