pub mod models;
pub mod services;

pub use models::ReceiptLayout;
pub use services::{
    FixedInvoiceNumber, InvoiceNumberSource, RandomInvoiceNumbers, ReceiptRenderer,
    RenderedReceipt,
};
