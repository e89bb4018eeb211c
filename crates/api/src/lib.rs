pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

use techdocs_rag_common::{Result, TechDocsError};

pub use server::ApiServer;

// Re-export the crates handlers build on
pub use techdocs_rag_common;
pub use techdocs_rag_knowledge;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ApiConfig {
    /// Reads HOST, PORT and CORS_ORIGINS from the environment, keeping
    /// the defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }

        if let Ok(port) = std::env::var("PORT") {
            config.port = port.parse().map_err(|_| {
                TechDocsError::Configuration(format!("invalid PORT value '{}'", port))
            })?;
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors_origins = origins.split(',').map(|o| o.trim().to_string()).collect();
        }

        Ok(config)
    }
}
