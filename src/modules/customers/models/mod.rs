pub mod customer;

pub use customer::{CustomerDetail, CustomerSummary, Listing};
