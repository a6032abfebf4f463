mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut builder = crypto_dashboard::AsyncCryptoDashboard::builder();
    if let Ok(dir) = std::env::var("DASHBOARD_OFFLINE_DIR") {
        tracing::info!("Serving saved charts from {}", dir);
        builder = builder.offline_dir(dir);
    }
    let dashboard = builder
        .build()
        .await
        .expect("Failed to initialize crypto dashboard");

    let state = Arc::new(AppState { dashboard });

    let app = Router::new()
        .route("/api/cryptos", get(routes::cryptos::list_cryptos))
        .route("/api/report/{symbol}", get(routes::report::get_report))
        .route("/api/weekly/{symbol}", get(routes::report::get_weekly))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("DASHBOARD_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
