// Test Data Factory
//
// Builds catalog entries and requests in the shapes the catalog and the HTTP
// API exchange. Timestamps are ISO strings with milliseconds so range
// queries compare them the way the catalog does.

use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::path::PathBuf;

use retailops::config::StoreConfig;
use retailops::modules::sales::models::{CreateSaleRequest, CustomerInfo, PaymentMethod};

pub const STORE_NAME: &str = "Revathi Enterprises";
pub const INVOICE_NUMBER: &str = "20250105042";

pub fn store_config() -> StoreConfig {
    StoreConfig {
        name: STORE_NAME.to_string(),
        gst_number: "29EVQPS7668K1Z5".to_string(),
        address: "No-22/4, Ground Floor, Mahadevapura, Bangalore-560016".to_string(),
        owner_mobile: "9743598240".to_string(),
        owner_email: "owner@example.com".to_string(),
        state: "29-Karnataka".to_string(),
        logo_path: PathBuf::from("tests/fixtures/missing-logo.png"),
    }
}

/// Unsold variant as stored in the catalog
pub fn variant_entry(uid: &str, cost_price: i64) -> Value {
    json!({
        "uid": uid,
        "product_uid": "bltproduct01",
        "product_name": "Galaxy S24",
        "title": "Galaxy S24 8/128 Onyx Black",
        "imei": "356789104563217",
        "sku": "SGS24-128-BLK",
        "category": "mobile",
        "brand": "Samsung",
        "branch": "Mahadevapura",
        "cost_price": cost_price,
        "quantity": 1,
        "supplier": "Samsung India",
        "attributes": { "color": "Black", "ram": 8, "storage": 128 }
    })
}

pub fn customer(name: &str, phone: &str) -> CustomerInfo {
    CustomerInfo {
        name: name.to_string(),
        phone: phone.to_string(),
        email: Some("asha@example.com".to_string()),
        address: None,
        city: Some("Bangalore".to_string()),
        state: Some("Karnataka".to_string()),
        pincode: None,
    }
}

pub fn sale_request(variant_uid: &str, selling_price: Decimal) -> CreateSaleRequest {
    CreateSaleRequest {
        variant_uid: variant_uid.to_string(),
        selling_price,
        imei: "356789104563217".to_string(),
        customer: customer("Asha Rao", "9876543210"),
        payment_method: Some(PaymentMethod::Upi),
        finance_provider: None,
        emi_duration: None,
        color: None,
        notes: None,
    }
}

/// Recorded sale as stored in the catalog
pub struct SaleEntry {
    pub uid: String,
    pub title: String,
    pub brand: String,
    pub branch: String,
    pub cost_price: i64,
    pub selling_price: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub created_at: String,
}

impl SaleEntry {
    pub fn new(uid: &str, selling_price: i64, cost_price: i64) -> Self {
        Self {
            uid: uid.to_string(),
            title: "Galaxy S24 8/128 Onyx Black".to_string(),
            brand: "Samsung".to_string(),
            branch: "Mahadevapura".to_string(),
            cost_price,
            selling_price,
            customer_name: "Asha Rao".to_string(),
            customer_phone: "9876543210".to_string(),
            created_at: "2025-01-05T03:35:09.000Z".to_string(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = brand.to_string();
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    pub fn customer(mut self, name: &str, phone: &str) -> Self {
        self.customer_name = name.to_string();
        self.customer_phone = phone.to_string();
        self
    }

    pub fn created_at(mut self, created_at: &str) -> Self {
        self.created_at = created_at.to_string();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "uid": self.uid,
            "title": self.title,
            "product_name": "Galaxy S24",
            "variant_uid": format!("var-{}", self.uid),
            "sku": "SGS24-128-BLK",
            "imei": "356789104563217",
            "category": "mobile",
            "brand": self.brand,
            "branch": self.branch,
            "cost_price": self.cost_price,
            "selling_price": self.selling_price,
            "profit_margin": self.selling_price - self.cost_price,
            "ram": 8,
            "storage": 128,
            "color": "Black",
            "customer": {
                "name": self.customer_name,
                "phone": self.customer_phone,
                "email": "asha@example.com",
                "city": "Bangalore"
            },
            "payment_method": "UPI",
            "created_at": self.created_at
        })
    }
}
