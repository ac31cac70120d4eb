pub mod retirement;
pub mod sales_service;

pub use retirement::{NoopRetirementObserver, RetirementObserver};
pub use sales_service::{ExportOutcome, SalesService};
