/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async dashboard client. Dispatches blocking fetches and
    /// aggregation to a thread pool internally.
    pub dashboard: crypto_dashboard::AsyncCryptoDashboard,
}
