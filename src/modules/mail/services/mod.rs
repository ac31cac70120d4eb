pub mod mail_service;
pub mod transport;

pub use mail_service::MailService;
pub use transport::{build_message, MailTransport, SmtpMailTransport};
