use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// Connection settings for the headless CMS that owns products, variants and sales
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: String,
    pub management_token: String,
    pub branch: String,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self> {
        Ok(CatalogConfig {
            base_url: env::var("CONTENTSTACK_BASE_URL").unwrap_or_else(|_| {
                "https://api.contentstack.io/v3".to_string()
            }),
            api_key: env::var("STACK_API_KEY")
                .map_err(|_| AppError::Configuration("STACK_API_KEY not set".to_string()))?,
            management_token: env::var("MANAGEMENT_TOKEN")
                .map_err(|_| AppError::Configuration("MANAGEMENT_TOKEN not set".to_string()))?,
            branch: env::var("BRANCH").unwrap_or_else(|_| "main".to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http") {
            return Err(AppError::Configuration(format!(
                "CONTENTSTACK_BASE_URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.api_key.trim().is_empty() || self.management_token.trim().is_empty() {
            return Err(AppError::Configuration(
                "Catalog credentials cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// `{base}/content_types/{content_type}/entries`
    pub fn entries_url(&self, content_type: &str) -> String {
        format!(
            "{}/content_types/{}/entries",
            self.base_url.trim_end_matches('/'),
            content_type
        )
    }

    /// `{base}/content_types/{content_type}/entries/{uid}`
    pub fn entry_url(&self, content_type: &str, uid: &str) -> String {
        format!("{}/{}", self.entries_url(content_type), uid)
    }
}
