use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

use super::var_or_placeholder;

/// SMTP relay settings for the mail dispatcher
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub smtp_host: String,
    pub username: String,
    pub password: String,
    pub from_name: String,
}

impl MailConfig {
    pub fn from_env(allow_placeholders: bool) -> Result<Self> {
        Ok(MailConfig {
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            username: var_or_placeholder("GMAIL_USER", "your-email@gmail.com", allow_placeholders)?,
            password: var_or_placeholder(
                "GMAIL_APP_PASSWORD",
                "your-app-password",
                allow_placeholders,
            )?,
            from_name: env::var("MAIL_FROM_NAME")
                .unwrap_or_else(|_| "Revathi Enterprises".to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.username.contains('@') {
            return Err(AppError::Configuration(format!(
                "GMAIL_USER must be an email address, got '{}'",
                self.username
            )));
        }

        Ok(())
    }

    /// True when credentials are still the documented placeholders
    pub fn uses_placeholders(&self) -> bool {
        self.username == "your-email@gmail.com" || self.password == "your-app-password"
    }
}
