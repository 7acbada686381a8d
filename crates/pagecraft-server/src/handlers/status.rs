//! Service banner and health endpoints.

use axum::Json;
use serde_json::{Value, json};

/// GET / - service banner
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "상세페이지 자동화 API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health - liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
