use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Branch, Brand, Category, Color};

/// Physical dimensions of a variant, in centimetres
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantDimensions {
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
}

/// Free-form specifications attached to a variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantAttributes {
    pub color: Option<Color>,
    pub weight: Option<f64>,
    pub size: Option<String>,
    /// RAM in GB
    pub ram: Option<u32>,
    /// Storage in GB
    pub storage: Option<u32>,
    pub os: Option<String>,
    pub processor: Option<String>,
    pub dimensions: Option<VariantDimensions>,
    pub screen_size: Option<String>,
    pub battery_life: Option<f64>,
    pub material: Option<String>,
}

/// A sellable unit held in the catalog.
///
/// A variant exists only while unsold; recording a sale deletes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Catalog entry uid
    pub uid: String,

    /// Owning product entry
    pub product_uid: Option<String>,

    pub product_name: String,

    /// Display title, falls back to `product_name` when absent
    pub title: Option<String>,

    pub description: Option<String>,

    pub imei: Option<String>,

    pub sku: Option<String>,

    pub category: Category,

    pub brand: Brand,

    pub branch: Branch,

    /// What the store paid for this unit
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub cost_price: Decimal,

    pub quantity: Option<u32>,

    pub supplier: Option<String>,

    pub notes: Option<String>,

    pub attributes: Option<VariantAttributes>,
}

impl Variant {
    /// Title shown on receipts and exports
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.product_name,
        }
    }

    pub fn ram(&self) -> Option<u32> {
        self.attributes.as_ref().and_then(|a| a.ram)
    }

    pub fn storage(&self) -> Option<u32> {
        self.attributes.as_ref().and_then(|a| a.storage)
    }
}
