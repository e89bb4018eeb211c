use axum::{routing::get, Json, Router};
use serde_json::json;
use tracing::debug;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

// Root status endpoint, doubles as the basic health indicator
pub async fn root_status() -> Json<serde_json::Value> {
    Json(json!({
        "message": "TechDocs RAG API",
        "status": "active",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn health_check() -> Json<serde_json::Value> {
    debug!("Health check requested");

    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now()
    }))
}

// Kubernetes readiness probe. The knowledge base is embedded at build
// time, so the service is ready as soon as it accepts connections.
async fn readiness_check() -> Json<serde_json::Value> {
    debug!("Readiness check requested");

    Json(json!({
        "status": "ready",
        "timestamp": chrono::Utc::now()
    }))
}

// Kubernetes liveness probe
async fn liveness_check() -> Json<serde_json::Value> {
    debug!("Liveness check requested");

    Json(json!({
        "status": "alive",
        "timestamp": chrono::Utc::now()
    }))
}
