use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Static liveness payload; no side effects.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "PMP Experience Generator API is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
