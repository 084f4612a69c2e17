//! Health check, mounted at root level (not under `/api`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"OK"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub message: &'static str,
    /// RFC 3339 UTC timestamp of this probe.
    pub timestamp: String,
}

/// GET /healthz -- service and database health.
async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = arbolado_db::health_check(&state.pool).await.is_ok();

    let (status_code, status) = if db_healthy {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            message: "Sistema de Árboles Urbanos funcionando correctamente",
            timestamp: chrono::Utc::now().to_rfc3339(),
        }),
    )
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}
