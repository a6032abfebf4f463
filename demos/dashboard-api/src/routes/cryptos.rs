use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/cryptos
///
/// List the supported cryptocurrencies in menu order.
pub async fn list_cryptos(State(state): State<Arc<AppState>>) -> Json<Value> {
    let cryptos: Vec<Value> = state
        .dashboard
        .cryptos()
        .iter()
        .map(|(name, ticker)| json!({ "name": name, "ticker": ticker }))
        .collect();

    let count = cryptos.len();
    Json(json!({ "data": cryptos, "count": count }))
}
