use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Color, FinanceProvider, PaymentMethod};
use super::sale::CustomerInfo;
use crate::core::{AppError, Result};

const MAX_CUSTOMER_NAME: usize = 100;
const MAX_CUSTOMER_PHONE: usize = 15;
const MAX_CUSTOMER_EMAIL: usize = 100;
const MAX_CUSTOMER_ADDRESS: usize = 200;
const MAX_CUSTOMER_REGION: usize = 50;
const MAX_CUSTOMER_PINCODE: usize = 10;
const MAX_IMEI: usize = 100;
const MAX_NOTES: usize = 500;

/// Request payload for recording a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSaleRequest {
    /// Variant being sold
    pub variant_uid: String,

    /// Gross price charged, GST inclusive
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub selling_price: Decimal,

    pub imei: String,

    pub customer: CustomerInfo,

    pub payment_method: Option<PaymentMethod>,

    /// Required when paying through finance
    pub finance_provider: Option<FinanceProvider>,

    /// EMI tenure in months, required when paying through finance
    pub emi_duration: Option<u32>,

    pub color: Option<Color>,

    pub notes: Option<String>,
}

impl CreateSaleRequest {
    /// Validates the request before anything touches the catalog
    pub fn validate(&self) -> Result<()> {
        if self.variant_uid.trim().is_empty() {
            return Err(AppError::Validation(
                "variant_uid must not be empty".to_string(),
            ));
        }

        if self.selling_price <= Decimal::ZERO {
            return Err(AppError::Validation(
                "selling_price must be greater than zero".to_string(),
            ));
        }

        require_text("imei", &self.imei, MAX_IMEI)?;
        self.customer.validate()?;

        if let Some(notes) = &self.notes {
            limit_text("notes", notes, MAX_NOTES)?;
        }

        if self.payment_method == Some(PaymentMethod::Finance) {
            if self.finance_provider.is_none() {
                return Err(AppError::Validation(
                    "Finance provider is required when payment method is Finance".to_string(),
                ));
            }
            match self.emi_duration {
                None => {
                    return Err(AppError::Validation(
                        "EMI duration is required when payment method is Finance".to_string(),
                    ))
                }
                Some(0) => {
                    return Err(AppError::Validation(
                        "EMI duration must be at least 1 month".to_string(),
                    ))
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

impl CustomerInfo {
    pub fn validate(&self) -> Result<()> {
        require_text("customer.name", &self.name, MAX_CUSTOMER_NAME)?;
        require_text("customer.phone", &self.phone, MAX_CUSTOMER_PHONE)?;

        if let Some(email) = &self.email {
            limit_text("customer.email", email, MAX_CUSTOMER_EMAIL)?;
            if !looks_like_email(email) {
                return Err(AppError::Validation(format!(
                    "customer.email is not a valid email address: {}",
                    email
                )));
            }
        }
        if let Some(address) = &self.address {
            limit_text("customer.address", address, MAX_CUSTOMER_ADDRESS)?;
        }
        if let Some(city) = &self.city {
            limit_text("customer.city", city, MAX_CUSTOMER_REGION)?;
        }
        if let Some(state) = &self.state {
            limit_text("customer.state", state, MAX_CUSTOMER_REGION)?;
        }
        if let Some(pincode) = &self.pincode {
            limit_text("customer.pincode", pincode, MAX_CUSTOMER_PINCODE)?;
        }

        Ok(())
    }
}

fn require_text(field: &str, value: &str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    limit_text(field, value, max)
}

fn limit_text(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    value.parse::<lettre::Address>().is_ok()
}
