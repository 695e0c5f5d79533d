use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::timeout::TimeoutLayer;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the project store is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and project store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = state.projects().health_check().await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router(read_timeout: TimeoutLayer) -> Router<AppState> {
    Router::new().route("/health", get(health_check).layer(read_timeout))
}
