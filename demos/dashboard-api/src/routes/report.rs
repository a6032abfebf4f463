use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::NaiveDate;
use crypto_dashboard::{config, ReportRequest};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub month: Option<u32>,
}

#[derive(Deserialize)]
pub struct RangeParams {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// GET /api/report/:symbol?start=2021-01-01&end=2024-12-25&month=3
///
/// Every dashboard view for one cryptocurrency. `symbol` may be a ticker or a
/// display name; missing query parameters fall back to the defaults.
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Value>, AppError> {
    let request = ReportRequest::new(
        symbol,
        params.start.unwrap_or_else(config::default_start_date),
        params.end.unwrap_or_else(config::default_end_date),
        params.month.unwrap_or(config::DEFAULT_MONTH),
    );

    let report = state.dashboard.report(request).await?;
    let summary = report.best_week_summary();
    Ok(Json(json!({ "data": report, "summary": summary })))
}

/// GET /api/weekly/:symbol?start=2024-01-01&end=2024-06-30
///
/// ISO-week mean average prices for one cryptocurrency.
pub async fn get_weekly(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Value>, AppError> {
    let start = params.start.unwrap_or_else(config::default_start_date);
    let end = params.end.unwrap_or_else(config::default_end_date);
    if start > end {
        return Err(AppError::bad_request("start must not be after end"));
    }

    let weekly = state
        .dashboard
        .run(move |d| Ok(d.fetch(&symbol, start, end)?.aggregates().weekly_mean()))
        .await?;

    let count = weekly.len();
    Ok(Json(json!({ "data": weekly, "count": count })))
}
