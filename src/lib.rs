//! RetailOps back-office library
//!
//! Records phone sales against a headless catalog and produces their tax
//! invoices, spreadsheet exports and delivery emails.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::customers;
pub use modules::pricing;
pub use modules::sales;
