use async_trait::async_trait;
use serde_json::Value;

use crate::core::Result;
use crate::modules::catalog::models::{ContentType, EntryPage, PageRequest};

/// Headless-CMS operations the sales pipeline depends on.
///
/// Entries travel as raw JSON; typed decoding is the caller's concern since
/// the catalog may decorate entries with its own metadata.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one entry, `None` when the catalog has no entry with that uid
    async fn get_entry(&self, content_type: ContentType, uid: &str) -> Result<Option<Value>>;

    /// Create an entry and return it as stored by the catalog
    async fn create_entry(&self, content_type: ContentType, entry: Value) -> Result<Value>;

    /// Delete an entry; a missing entry is reported as `AppError::NotFound`
    async fn delete_entry(&self, content_type: ContentType, uid: &str) -> Result<()>;

    /// Run a catalog query (`{"field": {"$op": value}}` document) for one page.
    ///
    /// `count` on the result is the total number of matches, not the page size.
    async fn query_entries(
        &self,
        content_type: ContentType,
        query: Value,
        page: PageRequest,
    ) -> Result<EntryPage<Value>>;

    /// Get catalog backend name
    fn name(&self) -> &str;
}
