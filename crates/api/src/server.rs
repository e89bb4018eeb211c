use crate::{
    middleware::{
        cors_layer, error_handling_middleware, request_id_middleware, request_logging_middleware,
        timeout_layer,
    },
    routes::{create_routes, not_found_handler},
    ApiConfig,
};
use axum::Router;
use std::sync::Arc;
use techdocs_rag_knowledge::DocsMatcher;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct ApiServer {
    config: ApiConfig,
    matcher: Arc<DocsMatcher>,
}

impl ApiServer {
    pub fn new(config: ApiConfig, matcher: Arc<DocsMatcher>) -> Self {
        Self { config, matcher }
    }

    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = self.create_app();
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!("Starting API server on {}", addr);
        info!("CORS origins: {:?}", self.config.cors_origins);

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("API server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("API server stopped");
        Ok(())
    }

    fn create_app(&self) -> Router {
        Router::new()
            // Main API routes
            .merge(create_routes(self.matcher.clone()))
            // Fallback for unmatched routes
            .fallback(not_found_handler)
            // Middleware stack, outermost first
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(timeout_layer())
                    .layer(cors_layer(&self.config))
                    .layer(axum::middleware::from_fn(request_id_middleware))
                    .layer(axum::middleware::from_fn(request_logging_middleware))
                    .layer(axum::middleware::from_fn(error_handling_middleware)),
            )
    }

    pub fn get_config(&self) -> &ApiConfig {
        &self.config
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        },
    }
}
