//! Liveness check for load balancers and the deploy pipeline.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the notes database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always 200 so the process is reported alive while Postgres is down;
/// callers read `db_healthy` for readiness.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = teachnotes_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, outside `/api/v1/teachernotes`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
