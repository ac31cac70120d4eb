// Mail transport that keeps every message instead of sending it

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use retailops::core::{AppError, Result};
use retailops::modules::mail::{EmailMessage, MailTransport};

#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<EmailMessage>>,
    fail: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Upstream("SMTP relay refused connection".to_string()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
