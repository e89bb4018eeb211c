use crate::ApiConfig;
use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, info, warn};

// CORS middleware configuration
pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: AllowOrigin = if config.cors_origins.contains(&"*".to_string()) {
        Any.into()
    } else {
        AllowOrigin::list(
            config
                .cors_origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>().unwrap()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(Duration::from_secs(3600))
}

// Request logging middleware
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    info!("Incoming request: {} {}", method, uri);

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        "Request completed: {} {} - {} - {:?}",
        method, uri, status, duration
    );

    response
}

// Request ID middleware
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();

    // Add request ID to headers for downstream processing
    request.headers_mut().insert(
        HeaderName::from_static("x-request-id"),
        HeaderValue::from_str(&request_id).unwrap(),
    );

    let mut response = next.run(request).await;

    // Add request ID to response headers
    response.headers_mut().insert(
        HeaderName::from_static("x-request-id"),
        HeaderValue::from_str(&request_id).unwrap(),
    );

    response
}

// Error handling middleware
pub async fn error_handling_middleware(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    // Log errors if status code indicates an error
    if response.status().is_server_error() {
        warn!("Server error response: {}", response.status());
    } else if response.status().is_client_error() {
        debug!("Client error response: {}", response.status());
    }

    response
}

// Timeout middleware
pub fn timeout_layer() -> tower_http::timeout::TimeoutLayer {
    tower_http::timeout::TimeoutLayer::new(Duration::from_secs(30))
}
