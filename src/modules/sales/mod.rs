//! Sale orchestration: recording sales against catalog variants and
//! producing their receipts and exports.

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    Branch, Brand, Category, CreateSaleRequest, CustomerInfo, Sale, SalesFilter, SalesStatistics,
    Variant,
};
pub use services::{ExportOutcome, RetirementObserver, SalesService};
