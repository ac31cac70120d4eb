use serde::{Deserialize, Serialize};
use std::fmt;

/// Content types this service reads from and writes to in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Products,
    Variants,
    Sales,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Products => "products",
            ContentType::Variants => "variants",
            ContentType::Sales => "sales",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Largest page the catalog serves per query
pub const MAX_PAGE_SIZE: u64 = 100;

/// Window of a catalog query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u64,
}

impl PageRequest {
    /// `limit` is clamped to `1..=MAX_PAGE_SIZE`
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn first() -> Self {
        Self::new(0, MAX_PAGE_SIZE)
    }

    pub fn next(&self) -> Self {
        Self::new(self.skip + self.limit, self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of entries returned by a catalog query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPage<T> {
    pub items: Vec<T>,
    pub count: u64,
}

impl<T> EntryPage<T> {
    pub fn new(items: Vec<T>, count: u64) -> Self {
        Self { items, count }
    }

    /// Converts every item, failing on the first one that does not convert
    pub fn try_map<U, E, F>(self, f: F) -> Result<EntryPage<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(EntryPage {
            items,
            count: self.count,
        })
    }
}
