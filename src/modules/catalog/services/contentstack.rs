use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use super::catalog_trait::CatalogClient;
use crate::config::CatalogConfig;
use crate::core::{AppError, Result};
use crate::modules::catalog::models::{ContentType, EntryPage, PageRequest};

const DEFAULT_LOCALE: &str = "en-us";
const INCLUDE_PUBLISH_DETAILS: &str = "false";

/// Contentstack management API client
pub struct ContentstackClient {
    client: Client,
    config: CatalogConfig,
}

impl ContentstackClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Management API auth travels in headers, not query params
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("api_key", &self.config.api_key)
            .header("authorization", &self.config.management_token)
            .header("branch", &self.config.branch)
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response> {
        self.authorize(request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Catalog {} request failed: {}", action, e)))
    }

    /// Turns a non-success response into an upstream error carrying the body
    async fn ensure_success(response: Response, action: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_body = response.text().await.unwrap_or_default();
        error!(
            action = action,
            status = %status,
            body = %error_body,
            "Catalog API returned an error"
        );
        Err(AppError::Upstream(format!(
            "Catalog {} error {}: {}",
            action, status, error_body
        )))
    }
}

#[async_trait]
impl CatalogClient for ContentstackClient {
    async fn get_entry(&self, content_type: ContentType, uid: &str) -> Result<Option<Value>> {
        #[derive(Deserialize)]
        struct EntryResponse {
            entry: Option<Value>,
        }

        let url = self.config.entry_url(content_type.as_str(), uid);
        debug!(content_type = %content_type, uid = uid, "Fetching catalog entry");

        let request = self.client.get(&url).query(&[
            ("locale", DEFAULT_LOCALE),
            ("include_publish_details", INCLUDE_PUBLISH_DETAILS),
        ]);
        let response = self.send(request, "get").await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: EntryResponse = Self::ensure_success(response, "get")
            .await?
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse catalog entry: {}", e)))?;

        Ok(body.entry)
    }

    async fn create_entry(&self, content_type: ContentType, entry: Value) -> Result<Value> {
        let url = self.config.entries_url(content_type.as_str());
        debug!(content_type = %content_type, "Creating catalog entry");

        let request = self
            .client
            .post(&url)
            .query(&[("locale", DEFAULT_LOCALE)])
            .json(&json!({ "entry": entry }));
        let response = self.send(request, "create").await?;

        let mut body: Value = Self::ensure_success(response, "create")
            .await?
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse created entry: {}", e)))?;

        // Responses are `{ notice, entry }`; keep the whole body if that ever changes
        if let Some(created) = body.get_mut("entry").map(Value::take) {
            return Ok(created);
        }
        Ok(body)
    }

    async fn delete_entry(&self, content_type: ContentType, uid: &str) -> Result<()> {
        let url = self.config.entry_url(content_type.as_str(), uid);
        debug!(content_type = %content_type, uid = uid, "Deleting catalog entry");

        let request = self
            .client
            .delete(&url)
            .query(&[("locale", DEFAULT_LOCALE)]);
        let response = self.send(request, "delete").await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "{} entry {} not found",
                content_type, uid
            )));
        }

        Self::ensure_success(response, "delete").await?;
        Ok(())
    }

    async fn query_entries(
        &self,
        content_type: ContentType,
        query: Value,
        page: PageRequest,
    ) -> Result<EntryPage<Value>> {
        #[derive(Deserialize)]
        struct EntriesResponse {
            #[serde(default)]
            entries: Vec<Value>,
            count: Option<u64>,
        }

        let url = self.config.entries_url(content_type.as_str());
        let query = serde_json::to_string(&query)?;
        let skip = page.skip.to_string();
        let limit = page.limit.to_string();
        debug!(
            content_type = %content_type,
            query = %query,
            skip = page.skip,
            limit = page.limit,
            "Querying catalog entries"
        );

        let request = self.client.get(&url).query(&[
            ("locale", DEFAULT_LOCALE),
            ("include_publish_details", INCLUDE_PUBLISH_DETAILS),
            ("include_count", "true"),
            ("query", query.as_str()),
            ("skip", skip.as_str()),
            ("limit", limit.as_str()),
        ]);
        let response = self.send(request, "query").await?;

        let body: EntriesResponse = Self::ensure_success(response, "query")
            .await?
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse catalog entries: {}", e)))?;

        let count = body.count.unwrap_or(body.entries.len() as u64);
        Ok(EntryPage::new(body.entries, count))
    }

    fn name(&self) -> &str {
        "contentstack"
    }
}
