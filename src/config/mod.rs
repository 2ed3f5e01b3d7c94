use crate::core::{AppError, Result};
use std::env;
use std::path::PathBuf;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Directory holding stored `{customer, cart}` JSON files for GET lookups
    pub invoice_data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                invoice_data_dir: env::var("INVOICE_DATA_DIR")
                    .unwrap_or_else(|_| "data/invoices".to_string())
                    .into(),
            },
            server: ServerConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.app.invoice_data_dir.as_os_str().is_empty() {
            return Err(AppError::Configuration(
                "INVOICE_DATA_DIR cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
