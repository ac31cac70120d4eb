use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod catalog;
pub mod mail;
pub mod server;
pub mod store;

pub use catalog::CatalogConfig;
pub use mail::MailConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub mail: MailConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` selects JSON lines, anything else pretty output
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Placeholder store details are only acceptable outside production
    pub fn allows_placeholders(&self) -> bool {
        let explicit = env::var("STORE_ALLOW_PLACEHOLDERS")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        explicit || matches!(self.env.as_str(), "development" | "test")
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let app = AppConfig {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format: LogFormat::from_env(),
            cors_origin: env::var("CORS_ORIGIN").ok(),
        };
        let allow_placeholders = app.allows_placeholders();

        let config = Config {
            server: ServerConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            mail: MailConfig::from_env(allow_placeholders)?,
            store: StoreConfig::from_env(allow_placeholders)?,
            app,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        self.catalog.validate()?;
        self.mail.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

/// Reads a required variable, falling back to `placeholder` only when allowed
pub(crate) fn var_or_placeholder(
    key: &str,
    placeholder: &str,
    allow_placeholders: bool,
) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ if allow_placeholders => {
            tracing::warn!(variable = key, "Using placeholder configuration value");
            Ok(placeholder.to_string())
        }
        _ => Err(AppError::Configuration(format!("{} not set", key))),
    }
}
