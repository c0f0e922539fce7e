//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use wall_service::SettingsService;

use crate::state::AppState;

/// Liveness check
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness check - verifies the store answers
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let service = SettingsService::new(state.service_context());
    match service.get().await {
        Ok(_) => Ok(Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::error!(error = %e, "Readiness check failed");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
