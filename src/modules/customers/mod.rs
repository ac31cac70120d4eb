pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CustomerDetail, CustomerSummary, Listing};
pub use services::CustomerService;
