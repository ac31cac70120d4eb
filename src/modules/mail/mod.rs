pub mod models;
pub mod services;

pub use models::{EmailAttachment, EmailMessage, ExportEmailDetails};
pub use services::{MailService, MailTransport, SmtpMailTransport};
