use serde::Serialize;

/// Decomposition of a GST-inclusive amount into its taxable value and
/// the intra-state SGST/CGST halves
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GstBreakdown {
    /// Amount before GST
    pub subtotal: f64,
    /// State GST (half the rate, applied to the subtotal)
    pub sgst: f64,
    /// Central GST (half the rate, applied to the subtotal)
    pub cgst: f64,
    /// sgst + cgst
    pub total_gst: f64,
}

impl GstBreakdown {
    /// Taxable value plus both GST components
    pub fn gross(&self) -> f64 {
        self.subtotal + self.total_gst
    }
}
