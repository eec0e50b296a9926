//! Axum router configuration with middleware.
//!
//! API routes live under `/api/`. Middleware: CORS (fully open, demo),
//! request tracing, and a body limit sized from the upload config.
//!
//! When the built browser front end exists on disk (configurable via
//! `[server] web_dir`), it is served as a SPA fallback: API routes and
//! /health take priority; unknown paths fall through to `index.html`
//! for client-side routing.

use axum::Router;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use claimlens_core::session::SessionStore;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_body = state.config.upload.max_upload_mb * 1024 * 1024;
    let web_dir = state.config.server.web_dir.clone();

    let api_routes = Router::new()
        .route("/upload", post(handlers::upload::upload))
        .route("/chat", post(handlers::chat::chat))
        .route("/analyze", post(handlers::analyze::analyze));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "SPA static file serving enabled");
    }

    router
}

/// GET /health -- liveness plus the connector and session snapshot.
async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.connector.active_model().await,
        "sessions": state.orchestrator.sessions().session_count().await,
    }))
}
