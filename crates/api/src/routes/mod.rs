pub mod health;
pub mod search;

use axum::{routing::get, Router};
use std::sync::Arc;
use techdocs_rag_knowledge::DocsMatcher;

pub fn create_routes(matcher: Arc<DocsMatcher>) -> Router {
    Router::new()
        // Root status endpoint
        .route("/", get(health::root_status))
        // Health check routes
        .nest("/health", health::routes())
        // Documentation search routes
        .merge(search::routes(matcher))
}

// Fallback handler for unmatched routes
pub async fn not_found_handler() -> axum::http::StatusCode {
    axum::http::StatusCode::NOT_FOUND
}
