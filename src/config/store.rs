use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use super::var_or_placeholder;

/// Store identity printed on tax invoices and emails
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub name: String,
    pub gst_number: String,
    pub address: String,
    pub owner_mobile: String,
    pub owner_email: String,
    /// State for GST purposes, e.g. `29-Karnataka`
    pub state: String,
    pub logo_path: PathBuf,
}

impl StoreConfig {
    pub fn from_env(allow_placeholders: bool) -> Result<Self> {
        Ok(StoreConfig {
            name: env::var("STORE_NAME").unwrap_or_else(|_| "Revathi Enterprises".to_string()),
            gst_number: var_or_placeholder("GST_NUMBER", "29EVQPS7668K1Z5", allow_placeholders)?,
            address: var_or_placeholder(
                "STORE_ADDRESS",
                "No-22/4, Ground Floor, Near Icon Hotel Mahadevapura, bangalore -48,Anandpura TC Palya main road Bangalore-560016",
                allow_placeholders,
            )?,
            owner_mobile: var_or_placeholder("STORE_OWNER_MOBILE", "9743598240", allow_placeholders)?,
            owner_email: var_or_placeholder(
                "STORE_OWNER_EMAIL",
                "purushotham170@gmail.com",
                allow_placeholders,
            )?,
            state: var_or_placeholder("STORE_STATE_ADDRESS", "29-Karnataka", allow_placeholders)?,
            logo_path: env::var("STORE_LOGO_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets/logo.png")),
        })
    }

    pub fn validate(&self) -> Result<()> {
        // GSTIN is always 15 characters
        if self.gst_number.len() != 15 {
            return Err(AppError::Configuration(format!(
                "GST_NUMBER must be 15 characters, got '{}'",
                self.gst_number
            )));
        }

        Ok(())
    }
}
