use chrono::{DateTime, Utc};
use rand::Rng;

use crate::core::timezone::to_ist;

/// Produces invoice numbers for tax invoices
pub trait InvoiceNumberSource: Send + Sync {
    fn next_number(&self, issued_at: DateTime<Utc>) -> String;
}

/// `YYYYMMDD` (store-local date) followed by a random 3-digit suffix
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomInvoiceNumbers;

impl InvoiceNumberSource for RandomInvoiceNumbers {
    fn next_number(&self, issued_at: DateTime<Utc>) -> String {
        let suffix: u16 = rand::thread_rng().gen_range(0..1000);
        format!("{}{:03}", to_ist(issued_at).format("%Y%m%d"), suffix)
    }
}

/// Always hands out the same number
#[derive(Debug, Clone)]
pub struct FixedInvoiceNumber(pub String);

impl FixedInvoiceNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}

impl InvoiceNumberSource for FixedInvoiceNumber {
    fn next_number(&self, _issued_at: DateTime<Utc>) -> String {
        self.0.clone()
    }
}
