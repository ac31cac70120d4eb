use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use crate::config::MailConfig;
use crate::core::{AppError, Result};
use crate::modules::mail::models::EmailMessage;

/// Outbound mail delivery
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one message; a single attempt, no retry
    async fn send(&self, message: &EmailMessage) -> Result<()>;

    /// Get transport name
    fn name(&self) -> &str;
}

/// SMTP relay transport (Gmail by default).
///
/// The underlying connection pool is built on first use and shared by all
/// concurrent sends.
pub struct SmtpMailTransport {
    config: MailConfig,
    transport: OnceCell<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailTransport {
    pub fn new(config: MailConfig) -> Self {
        if config.uses_placeholders() {
            warn!(
                smtp_host = %config.smtp_host,
                "SMTP credentials are placeholders; sends will be rejected by the relay"
            );
        }

        Self {
            config,
            transport: OnceCell::new(),
        }
    }

    fn sender(&self) -> Result<Mailbox> {
        let address: Address = self.config.username.parse().map_err(|e| {
            AppError::Configuration(format!("Invalid sender address: {}", e))
        })?;
        Ok(Mailbox::new(Some(self.config.from_name.clone()), address))
    }

    async fn transport(&self) -> Result<&AsyncSmtpTransport<Tokio1Executor>> {
        self.transport
            .get_or_try_init(|| async {
                debug!(smtp_host = %self.config.smtp_host, "Building SMTP transport");
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)?
                    .credentials(Credentials::new(
                        self.config.username.clone(),
                        self.config.password.clone(),
                    ))
                    .build();
                Ok::<_, AppError>(transport)
            })
            .await
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        let email = build_message(self.sender()?, message)?;
        let transport = self.transport().await?;

        match transport.send(email).await {
            Ok(response) => {
                info!(
                    to = %message.to,
                    subject = %message.subject,
                    code = %response.code(),
                    "Email sent"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    to = %message.to,
                    subject = %message.subject,
                    error = %e,
                    "Failed to send email"
                );
                Err(e.into())
            }
        }
    }

    fn name(&self) -> &str {
        "smtp"
    }
}

/// Compose the MIME message: alternative text/html body plus attachments
pub fn build_message(from: Mailbox, message: &EmailMessage) -> Result<Message> {
    let to: Mailbox = message.to.parse()?;

    let body = match (&message.text, &message.html) {
        (Some(text), Some(html)) => MultiPart::alternative_plain_html(text.clone(), html.clone()),
        (None, Some(html)) => MultiPart::alternative().singlepart(SinglePart::html(html.clone())),
        (Some(text), None) => MultiPart::alternative().singlepart(SinglePart::plain(text.clone())),
        (None, None) => {
            return Err(AppError::Validation(
                "Email needs a text or HTML body".to_string(),
            ))
        }
    };

    let mut content = MultiPart::mixed().multipart(body);
    for attachment in &message.attachments {
        let content_type = ContentType::parse(&attachment.content_type).map_err(|e| {
            AppError::Validation(format!(
                "Invalid attachment type '{}': {}",
                attachment.content_type, e
            ))
        })?;
        content = content.singlepart(
            Attachment::new(attachment.filename.clone())
                .body(attachment.content.clone(), content_type),
        );
    }

    Ok(Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.clone())
        .multipart(content)?)
}
