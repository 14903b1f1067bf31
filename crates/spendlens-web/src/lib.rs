//! SpendLens Web Server
//!
//! Axum-based server for the receipt capture page and analysis API.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use spendlens_core::analysis::ReceiptAnalyzer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Uploads larger than this are rejected before reaching the handler.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::client::index))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/analyze-receipt", post(routes::analyze::analyze_receipt))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    analyzer: Arc<dyn ReceiptAnalyzer>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
