use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::create_sale::CreateSaleRequest;
use super::enums::{Branch, Brand, Category, Color, FinanceProvider, PaymentMethod};
use super::variant::Variant;

/// Buyer details captured at the counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
}

/// A recorded sale.
///
/// Product fields are copied from the variant when the sale is made, so the
/// sale stays readable after the variant is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Catalog entry uid, assigned when the sale is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Variant title, or product name when the variant had none
    pub title: String,

    pub product_name: String,

    /// Variant that was sold (no longer in the catalog)
    pub variant_uid: String,

    pub sku: Option<String>,

    pub imei: Option<String>,

    pub category: Category,

    pub brand: Brand,

    pub branch: Branch,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub cost_price: Decimal,

    /// Gross price paid, GST inclusive
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub selling_price: Decimal,

    /// `selling_price - cost_price`, negative for a loss
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub profit_margin: Decimal,

    /// RAM in GB
    pub ram: Option<u32>,

    /// Storage in GB
    pub storage: Option<u32>,

    pub color: Option<Color>,

    pub customer: CustomerInfo,

    pub payment_method: Option<PaymentMethod>,

    /// Present only for finance purchases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finance_provider: Option<FinanceProvider>,

    /// EMI tenure in months, present only for finance purchases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emi_duration: Option<u32>,

    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl Sale {
    /// Build the entry to store for `request`, denormalising `variant`
    pub fn from_variant(
        variant: &Variant,
        request: &CreateSaleRequest,
        profit_margin: Decimal,
    ) -> Self {
        let (finance_provider, emi_duration) = match request.payment_method {
            Some(PaymentMethod::Finance) => (request.finance_provider, request.emi_duration),
            _ => (None, None),
        };

        Self {
            uid: None,
            title: variant.display_title().to_string(),
            product_name: variant.product_name.clone(),
            variant_uid: request.variant_uid.clone(),
            sku: variant.sku.clone(),
            imei: Some(request.imei.clone()),
            category: variant.category,
            brand: variant.brand,
            branch: variant.branch,
            cost_price: variant.cost_price,
            selling_price: request.selling_price,
            profit_margin,
            ram: variant.ram(),
            storage: variant.storage(),
            color: request.color,
            customer: request.customer.clone(),
            payment_method: request.payment_method,
            finance_provider,
            emi_duration,
            notes: request.notes.clone(),
            receipt_number: None,
            created_at: None,
            created_by: None,
        }
    }

    pub fn uid(&self) -> &str {
        self.uid.as_deref().unwrap_or_default()
    }

    /// Short customer-facing reference: last 8 characters of the uid, upper-cased
    pub fn short_reference(&self) -> String {
        let uid = self.uid();
        let start = uid
            .char_indices()
            .rev()
            .nth(7)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        uid[start..].to_uppercase()
    }
}
