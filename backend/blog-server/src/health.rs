use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Service status with component summary
pub async fn health(State(state): State<AppState>) -> Response {
    let auth = if state.auth_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "storage": state.storage_backend,
            "auth": auth,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe
///
/// Storage is opened before the listener binds, so a running server is ready.
pub async fn readiness() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
