pub mod catalog_trait;
pub mod contentstack;

pub use catalog_trait::CatalogClient;
pub use contentstack::ContentstackClient;
