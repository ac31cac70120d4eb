pub mod gst_calculator;
pub mod margin;

pub use gst_calculator::{GstCalculator, STANDARD_GST_RATE};
pub use margin::compute_profit_margin;
