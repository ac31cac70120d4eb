use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

use super::enums::{Branch, Brand};
use super::sale::Sale;
use crate::core::timezone::format_date_en_in;
use crate::modules::catalog::{PageRequest, MAX_PAGE_SIZE};

/// Inclusive creation-time window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(
        rename = "$gte",
        default,
        deserialize_with = "deserialize_flexible_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub gte: Option<DateTime<Utc>>,

    #[serde(
        rename = "$lte",
        default,
        deserialize_with = "deserialize_flexible_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub lte: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.gte.is_none() && self.lte.is_none()
    }
}

/// Criteria for searching, summarising and exporting sales
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesFilter {
    /// Pattern matched against the sale title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateRange>,

    /// Exact customer phone; set internally for customer lookups
    #[serde(skip)]
    pub customer_phone: Option<String>,
}

impl SalesFilter {
    pub fn for_customer(phone: impl Into<String>) -> Self {
        Self {
            customer_phone: Some(phone.into()),
            ..Default::default()
        }
    }

    /// Catalog query document for this filter
    pub fn to_catalog_query(&self) -> Value {
        let mut query = Map::new();

        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.insert("title".to_string(), json!({ "$regex": search }));
        }
        if let Some(branch) = self.branch {
            query.insert("branch".to_string(), json!({ "$eq": branch.as_str() }));
        }
        if let Some(brand) = self.brand {
            query.insert("brand".to_string(), json!({ "$eq": brand.as_str() }));
        }
        if let Some(range) = self.created_at.as_ref().filter(|r| !r.is_empty()) {
            let mut window = Map::new();
            if let Some(gte) = range.gte {
                window.insert("$gte".to_string(), Value::String(to_iso_string(gte)));
            }
            if let Some(lte) = range.lte {
                window.insert("$lte".to_string(), Value::String(to_iso_string(lte)));
            }
            query.insert("created_at".to_string(), Value::Object(window));
        }
        if let Some(phone) = self.customer_phone.as_deref() {
            query.insert("customer.phone".to_string(), json!({ "$eq": phone }));
        }

        Value::Object(query)
    }

    /// Human-readable summary of the active branch, brand and date criteria.
    ///
    /// Empty when none of them is set; the search text is not included.
    pub fn describe(&self) -> String {
        let mut text = String::new();

        if let Some(branch) = self.branch {
            text.push_str(&format!("Branch: {} ", branch));
        }
        if let Some(brand) = self.brand {
            text.push_str(&format!("Brand: {} ", brand));
        }
        if let Some(range) = &self.created_at {
            if let Some(gte) = range.gte {
                text.push_str(&format!("From: {} ", format_date_en_in(gte)));
            }
            if let Some(lte) = range.lte {
                text.push_str(&format!("To: {}", format_date_en_in(lte)));
            }
        }

        text
    }
}

/// Body of `POST /sales/search` and `POST /sales/stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSalesRequest {
    pub search: Option<String>,
    pub branch: Option<Branch>,
    pub brand: Option<Brand>,
    pub created_at: Option<DateRange>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl SearchSalesRequest {
    pub fn filter(&self) -> SalesFilter {
        SalesFilter {
            search: self.search.clone(),
            branch: self.branch,
            brand: self.brand,
            created_at: self.created_at.clone(),
            customer_phone: None,
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.skip.unwrap_or(0), self.limit.unwrap_or(MAX_PAGE_SIZE))
    }
}

/// Body of `POST /sales/export`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSalesRequest {
    #[serde(rename = "recipientEmail")]
    pub recipient_email: String,
    pub search: Option<String>,
    pub branch: Option<Branch>,
    pub brand: Option<Brand>,
    pub created_at: Option<DateRange>,
}

impl ExportSalesRequest {
    pub fn filter(&self) -> SalesFilter {
        SalesFilter {
            search: self.search.clone(),
            branch: self.branch,
            brand: self.brand,
            created_at: self.created_at.clone(),
            customer_phone: None,
        }
    }
}

/// Body of requests that only name a mail recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientRequest {
    #[serde(rename = "recipientEmail")]
    pub recipient_email: String,
}

/// Aggregate figures over a set of sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatistics {
    pub total_sales: u64,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_revenue: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_profit: Decimal,
}

impl SalesStatistics {
    /// `total_sales` is taken as given; revenue and profit are summed over `sales`
    pub fn from_sales(total_sales: u64, sales: &[Sale]) -> Self {
        Self {
            total_sales,
            total_revenue: sales.iter().map(|s| s.selling_price).sum(),
            total_profit: sales.iter().map(|s| s.profit_margin).sum(),
        }
    }
}

fn to_iso_string(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC)
fn deserialize_flexible_datetime<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let raw = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}
