pub mod invoice_number;
pub mod pdf_writer;
pub mod receipt_renderer;

pub use invoice_number::{FixedInvoiceNumber, InvoiceNumberSource, RandomInvoiceNumbers};
pub use receipt_renderer::{ReceiptRenderer, RenderedReceipt};
