//! Common routes: health, readiness, version.

use crate::response::{status_degraded, status_ok, StatusBody};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

async fn health() -> (StatusCode, Json<StatusBody>) {
    status_ok(None)
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    if !state.store.is_available().await {
        tracing::warn!(path = %state.store.path().display(), "store directory unavailable");
        return status_degraded("unavailable");
    }
    status_ok(Some("ok"))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes (no state): GET /health, GET /version, GET /info.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/info", get(version))
}

/// Common routes including readiness, which checks the store directory. Requires AppState.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(version))
        .with_state(state)
}
