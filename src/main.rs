use std::sync::Arc;

use anyhow::Result;
use techdocs_rag_api::{ApiConfig, ApiServer};
use techdocs_rag_knowledge::DocsMatcher;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "techdocs_rag=debug,techdocs_rag_api=debug,techdocs_rag_knowledge=debug,tower_http=debug,axum=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TechDocs RAG API...");

    // Load environment variables
    dotenv::dotenv().ok();

    let config = ApiConfig::from_env()?;
    let matcher = Arc::new(DocsMatcher::new());

    let server = ApiServer::new(config, matcher);
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
