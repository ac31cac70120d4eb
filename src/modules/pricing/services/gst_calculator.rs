use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::modules::pricing::models::GstBreakdown;

/// Standard GST slab for phones and accessories
pub const STANDARD_GST_RATE: f64 = 0.18;

/// GstCalculator splits GST-inclusive selling prices for tax invoices.
///
/// All arithmetic is IEEE-754 double precision.
pub struct GstCalculator {
    rate: f64,
}

impl GstCalculator {
    pub fn new() -> Self {
        Self {
            rate: STANDARD_GST_RATE,
        }
    }

    pub fn with_rate(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Rate of each half (SGST or CGST) as a percentage, e.g. `9.0`
    pub fn half_rate_percent(&self) -> f64 {
        self.rate * 100.0 / 2.0
    }

    /// Split an inclusive amount: subtotal = gross / (1 + rate),
    /// sgst = cgst = subtotal × rate / 2, each derived from the subtotal
    /// independently rather than halving the total.
    pub fn split_inclusive(&self, gross: Decimal) -> GstBreakdown {
        let gross = gross.to_f64().unwrap_or(0.0);
        let subtotal = gross / (1.0 + self.rate);
        let half_rate = self.rate / 2.0;
        let sgst = subtotal * half_rate;
        let cgst = subtotal * half_rate;

        GstBreakdown {
            subtotal,
            sgst,
            cgst,
            total_gst: sgst + cgst,
        }
    }
}

impl Default for GstCalculator {
    fn default() -> Self {
        Self::new()
    }
}
