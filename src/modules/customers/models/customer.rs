use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::sales::models::Sale;

/// Purchase history of one buyer, keyed by phone number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub name: String,
    pub phone: String,
    pub total_purchases: u64,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_spent: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub average_order_value: Decimal,

    pub first_purchase_date: Option<DateTime<Utc>>,
    pub last_purchase_date: Option<DateTime<Utc>>,
}

/// Single-customer view, adds profit earned from the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    pub name: String,
    pub phone: String,
    pub total_purchases: u64,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_spent: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_profit: Decimal,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub average_order_value: Decimal,

    pub first_purchase_date: Option<DateTime<Utc>>,
    pub last_purchase_date: Option<DateTime<Utc>>,
}

/// Running totals while grouping sales
#[derive(Debug, Clone)]
pub(crate) struct CustomerTally {
    name: String,
    phone: String,
    purchases: u64,
    spent: Decimal,
    profit: Decimal,
    first: Option<DateTime<Utc>>,
    last: Option<DateTime<Utc>>,
}

impl CustomerTally {
    pub(crate) fn open(sale: &Sale) -> Self {
        Self {
            name: sale.customer.name.clone(),
            phone: sale.customer.phone.clone(),
            purchases: 0,
            spent: Decimal::ZERO,
            profit: Decimal::ZERO,
            first: None,
            last: None,
        }
    }

    pub(crate) fn add(&mut self, sale: &Sale) {
        self.purchases += 1;
        self.spent += sale.selling_price;
        self.profit += sale.profit_margin;
        if let Some(at) = sale.created_at {
            self.first = Some(self.first.map_or(at, |f| f.min(at)));
            self.last = Some(self.last.map_or(at, |l| l.max(at)));
        }
    }

    pub(crate) fn summary(&self) -> CustomerSummary {
        let average_order_value = if self.purchases == 0 {
            Decimal::ZERO
        } else {
            (self.spent / Decimal::from(self.purchases)).round_dp(2)
        };

        CustomerSummary {
            name: self.name.clone(),
            phone: self.phone.clone(),
            total_purchases: self.purchases,
            total_spent: self.spent,
            average_order_value,
            first_purchase_date: self.first,
            last_purchase_date: self.last,
        }
    }

    pub(crate) fn detail(&self) -> CustomerDetail {
        let summary = self.summary();
        CustomerDetail {
            name: summary.name,
            phone: summary.phone,
            total_purchases: summary.total_purchases,
            total_spent: summary.total_spent,
            total_profit: self.profit,
            average_order_value: summary.average_order_value,
            first_purchase_date: summary.first_purchase_date,
            last_purchase_date: summary.last_purchase_date,
        }
    }
}

/// A list response with its length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(data: Vec<T>) -> Self {
        let total = data.len();
        Self { data, total }
    }
}
