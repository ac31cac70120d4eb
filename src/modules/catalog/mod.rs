pub mod models;
pub mod services;

pub use models::{ContentType, EntryPage, PageRequest, MAX_PAGE_SIZE};
pub use services::{CatalogClient, ContentstackClient};
