pub mod models;
pub mod services;

pub use models::GstBreakdown;
pub use services::{compute_profit_margin, GstCalculator, STANDARD_GST_RATE};
