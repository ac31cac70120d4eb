pub mod email;

pub use email::{EmailAttachment, EmailMessage, ExportEmailDetails};
